//! Player identity shown in the header and on the profile panel

use gamevault_domain::CurrentUser;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerInfoView {
    pub name: String,
    /// Header label, e.g. `ID: #42`
    pub id_label: String,
    /// Profile panel label, e.g. `Player ID: #42`
    pub profile_id_label: String,
}

impl PlayerInfoView {
    pub fn from_user(user: &CurrentUser) -> Self {
        Self {
            name: user.username.clone(),
            id_label: format!("ID: #{}", user.id),
            profile_id_label: format!("Player ID: #{}", user.id),
        }
    }
}
