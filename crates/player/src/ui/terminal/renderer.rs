//! Terminal renderer
//!
//! Writes each `UiUpdate` as plain text. The profile and settings panels are
//! drawn when their tab is activated, from the player info and settings the
//! renderer has seen so far.

use std::fmt::Write as _;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

use gamevault_domain::{ClientSettings, InventoryStats, Tab};

use crate::application::messages;
use crate::ports::outbound::{UiPort, UiUpdate};
use crate::ui::presentation::{InventoryBody, InventoryView, ItemDetailsView, PlayerInfoView};

/// What the panels need to be redrawn on a tab switch
#[derive(Debug, Default)]
struct Panels {
    player: Option<PlayerInfoView>,
    settings: Option<ClientSettings>,
}

impl Panels {
    fn remember(&mut self, update: &UiUpdate) {
        match update {
            UiUpdate::ShowGameScreen(player) => self.player = Some(player.clone()),
            UiUpdate::ShowLoginScreen => self.player = None,
            UiUpdate::SettingsLoaded(settings) => self.settings = Some(settings.clone()),
            _ => {}
        }
    }
}

struct Inner<W> {
    out: W,
    panels: Panels,
}

/// `UiPort` that prints to any writer (stdout in the binary, a buffer in tests)
pub struct TerminalUi<W: Write + Send> {
    inner: Mutex<Inner<W>>,
}

impl<W: Write + Send> TerminalUi<W> {
    pub fn new(out: W) -> Self {
        Self {
            inner: Mutex::new(Inner {
                out,
                panels: Panels::default(),
            }),
        }
    }

    /// Print a line that is not a rendering instruction (usage, prompts)
    pub fn print(&self, text: &str) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        write_out(&mut inner.out, text);
    }
}

impl<W: Write + Send> UiPort for TerminalUi<W> {
    fn apply(&self, update: UiUpdate) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.panels.remember(&update);

        let text = format_update(&update, &inner.panels);
        if !text.is_empty() {
            write_out(&mut inner.out, &text);
        }
    }
}

fn write_out<W: Write>(out: &mut W, text: &str) {
    if let Err(e) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
        tracing::warn!("Failed to write to terminal: {}", e);
    }
}

fn format_update(update: &UiUpdate, panels: &Panels) -> String {
    match update {
        UiUpdate::ShowLoginScreen => {
            "== Game Vault ==\nLog in with `login <username> <password>` or `demo <1|2>`.\n"
                .to_string()
        }
        UiUpdate::ShowGameScreen(player) => {
            format!("== Welcome, {} ({}) ==\n", player.name, player.id_label)
        }
        UiUpdate::ShowLoginError(message) => format!("! {}\n", message),
        UiUpdate::FillLoginForm { username, password } => format!(
            "Username: {}\nPassword: {}\n",
            username,
            "*".repeat(password.chars().count())
        ),
        UiUpdate::InventoryLoading => format!("{}\n", messages::INVENTORY_LOADING),
        UiUpdate::InventoryMessage(message) => format!("{}\n", message),
        UiUpdate::RenderInventory(view) => format_inventory(view),
        UiUpdate::UpdateStats(stats) => format_stats(stats),
        UiUpdate::ShowItemDetails(details) => format_details(details),
        UiUpdate::ActivateTab(tab) => format_panel(*tab, panels),
        UiUpdate::Acknowledge(message) => format!("* {}\n", message),
        UiUpdate::HideLoginError
        | UiUpdate::ClearLoginForm
        | UiUpdate::CloseItemDetails
        | UiUpdate::SettingsLoaded(_) => String::new(),
    }
}

fn format_inventory(view: &InventoryView) -> String {
    let mut out = format!("Inventory ({})\n", view.count_label);
    match &view.body {
        InventoryBody::Empty(message) => {
            let _ = writeln!(out, "  {}", message);
        }
        InventoryBody::Items(cards) => {
            for (number, card) in (1..).zip(cards) {
                let _ = writeln!(
                    out,
                    "  [{}] {} {} ({}) {}",
                    number, card.icon, card.name, card.type_badge, card.quantity_label
                );
                for property in &card.properties {
                    let _ = writeln!(out, "      {}", property);
                }
            }
        }
    }
    out
}

fn format_stats(stats: &InventoryStats) -> String {
    format!(
        "Total: {} | Weapons: {} | Armor: {} | Consumables: {}\n",
        stats.total, stats.weapons, stats.armor, stats.consumables
    )
}

fn format_details(details: &ItemDetailsView) -> String {
    let mut out = format!(
        "+-- {} {}\n|   {}\n|   {}\n",
        details.icon, details.name, details.type_badge, details.quantity_label
    );
    if !details.properties.is_empty() {
        out.push_str("|   Properties\n");
        for property in &details.properties {
            let _ = writeln!(out, "|     {}", property);
        }
    }
    out.push_str("+-- (`close` to dismiss)\n");
    out
}

fn format_panel(tab: Tab, panels: &Panels) -> String {
    let mut out = format!("-- {} --\n", tab);
    match tab {
        Tab::Inventory => {}
        Tab::Profile => {
            if let Some(player) = &panels.player {
                let _ = writeln!(out, "{}\n{}", player.name, player.profile_id_label);
            }
        }
        Tab::Settings => {
            if let Some(settings) = &panels.settings {
                let _ = writeln!(
                    out,
                    "API URL: {}\nAuto-refresh: {}",
                    settings.api_base_url,
                    if settings.auto_refresh_enabled { "on" } else { "off" }
                );
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::presentation::{render_inventory, render_item_details};
    use gamevault_domain::{CurrentUser, InventoryItem, ItemType};

    fn render(updates: Vec<UiUpdate>) -> String {
        let ui = TerminalUi::new(Vec::new());
        for update in updates {
            ui.apply(update);
        }
        let out = ui.inner.into_inner().unwrap().out;
        String::from_utf8(out).unwrap()
    }

    fn sword() -> InventoryItem {
        InventoryItem::new("Sword", ItemType::Weapon, 1).with_property("max_damage", "10")
    }

    #[test]
    fn test_inventory_cards_are_numbered() {
        let text = render(vec![UiUpdate::RenderInventory(render_inventory(&[
            sword(),
            InventoryItem::new("Potion", ItemType::Consumable, 5),
        ]))]);

        assert!(text.starts_with("Inventory (2 items)\n"));
        assert!(text.contains("  [1] ⚔️ Sword (weapon) ×1\n      Max Damage: 10\n"));
        assert!(text.contains("  [2] 🧪 Potion (consumable) ×5\n"));
    }

    #[test]
    fn test_empty_inventory() {
        let text = render(vec![UiUpdate::RenderInventory(render_inventory(&[]))]);
        assert_eq!(text, "Inventory (0 items)\n  Your inventory is empty\n");
    }

    #[test]
    fn test_item_details() {
        let text = render(vec![UiUpdate::ShowItemDetails(render_item_details(&sword()))]);

        assert!(text.contains("Sword"));
        assert!(text.contains("Quantity: ×1"));
        assert!(text.contains("|   Properties\n|     Max Damage: 10\n"));
    }

    #[test]
    fn test_details_without_properties_omit_section() {
        let item = InventoryItem::new("Shield", ItemType::Armor, 1);
        let text = render(vec![UiUpdate::ShowItemDetails(render_item_details(&item))]);

        assert!(text.contains("🛡️ Shield"));
        assert!(!text.contains("Properties"));
    }

    #[test]
    fn test_profile_and_settings_panels_use_remembered_state() {
        let player = PlayerInfoView::from_user(&CurrentUser::new("42", "demo"));
        let text = render(vec![
            UiUpdate::SettingsLoaded(ClientSettings::new("http://game.test/api", true)),
            UiUpdate::ShowGameScreen(player),
            UiUpdate::ActivateTab(Tab::Profile),
            UiUpdate::ActivateTab(Tab::Settings),
        ]);

        assert!(text.contains("== Welcome, demo (ID: #42) ==\n"));
        assert!(text.contains("-- profile --\ndemo\nPlayer ID: #42\n"));
        assert!(text.contains("API URL: http://game.test/api\nAuto-refresh: on\n"));
    }

    #[test]
    fn test_password_is_masked() {
        let text = render(vec![UiUpdate::FillLoginForm {
            username: "player1".to_string(),
            password: "password123".to_string(),
        }]);

        assert_eq!(text, "Username: player1\nPassword: ***********\n");
    }

    #[test]
    fn test_silent_updates_print_nothing() {
        let text = render(vec![
            UiUpdate::HideLoginError,
            UiUpdate::ClearLoginForm,
            UiUpdate::CloseItemDetails,
            UiUpdate::SettingsLoaded(ClientSettings::default()),
        ]);
        assert!(text.is_empty());
    }

    #[test]
    fn test_messages() {
        let text = render(vec![
            UiUpdate::InventoryLoading,
            UiUpdate::ShowLoginError("Invalid credentials".to_string()),
            UiUpdate::Acknowledge("Settings saved!".to_string()),
            UiUpdate::UpdateStats(InventoryStats {
                total: 1,
                weapons: 1,
                armor: 0,
                consumables: 0,
            }),
        ]);

        assert_eq!(
            text,
            "Loading inventory...\n! Invalid credentials\n* Settings saved!\n\
             Total: 1 | Weapons: 1 | Armor: 0 | Consumables: 0\n"
        );
    }
}
