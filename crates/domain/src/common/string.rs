//! String conversion utilities.

/// Turns a snake_case property key into a display label.
///
/// Underscores become spaces and the first letter of every word is
/// upper-cased. The remaining letters are left untouched.
///
/// # Examples
///
/// ```
/// use gamevault_domain::common::humanize_key;
///
/// assert_eq!(humanize_key("max_health"), "Max Health");
/// assert_eq!(humanize_key("dps"), "Dps");
/// ```
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut at_word_start = true;

    for ch in key.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if is_word_char(ch) {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.push(ch);
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }

    out
}

// Word characters are ASCII letters, digits and underscore; underscores are
// already replaced by spaces before this check.
fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_snake_case() {
        assert_eq!(humanize_key("max_health"), "Max Health");
        assert_eq!(humanize_key("attack_speed_bonus"), "Attack Speed Bonus");
    }

    #[test]
    fn test_humanize_single_word() {
        assert_eq!(humanize_key("dps"), "Dps");
        assert_eq!(humanize_key("damage"), "Damage");
    }

    #[test]
    fn test_humanize_keeps_existing_case() {
        assert_eq!(humanize_key("hp_MAX"), "Hp MAX");
    }

    #[test]
    fn test_humanize_edge_cases() {
        assert_eq!(humanize_key(""), "");
        assert_eq!(humanize_key("_bonus"), " Bonus");
        assert_eq!(humanize_key("fire-resist"), "Fire-Resist");
        assert_eq!(humanize_key("level_2"), "Level 2");
    }
}
