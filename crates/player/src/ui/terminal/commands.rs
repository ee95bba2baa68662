//! Shell command parsing

use std::str::FromStr;

use thiserror::Error;

use gamevault_domain::Tab;

use crate::application::{DemoAccount, UiAction};

pub const USAGE: &str = "\
Commands:
  login <username> <password>   log in
  demo <1|2>                    log in with a demo account
  logout                        log out
  refresh                       reload the inventory
  tab <inventory|profile|settings>
  show <n>                      open item number n
  close                         close the item details
  outside                       click outside the item details
  auto <on|off>                 toggle auto-refresh (not saved)
  settings <api-url> <on|off>   save settings
  help                          show this help
  quit                          exit
";

/// A parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Action(UiAction),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, CommandError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = words.split_first() else {
        return Ok(None);
    };

    let action = match (name, args) {
        ("help" | "?", _) => return Ok(Some(ShellCommand::Help)),
        ("quit" | "exit", _) => return Ok(Some(ShellCommand::Quit)),
        ("login", [username, password]) => UiAction::SubmitLogin {
            username: username.to_string(),
            password: password.to_string(),
        },
        ("login", _) => return Err(CommandError::Usage("login <username> <password>")),
        ("demo", ["1"]) => UiAction::DemoLogin(DemoAccount::Player1),
        ("demo", ["2"]) => UiAction::DemoLogin(DemoAccount::Player2),
        ("demo", _) => return Err(CommandError::Usage("demo <1|2>")),
        ("logout", []) => UiAction::Logout,
        ("refresh", []) => UiAction::Refresh,
        ("tab", [tab]) => UiAction::SwitchTab(
            Tab::from_str(tab).map_err(|e| CommandError::InvalidArgument(e.to_string()))?,
        ),
        ("tab", _) => return Err(CommandError::Usage("tab <inventory|profile|settings>")),
        ("show", [number]) => UiAction::SelectItem(parse_item_number(number)?),
        ("show", _) => return Err(CommandError::Usage("show <n>")),
        ("close", []) => UiAction::CloseItemDetails,
        ("outside", []) => UiAction::ClickOutsideDetails,
        ("auto", [flag]) => UiAction::ToggleAutoRefresh(parse_switch(flag)?),
        ("auto", _) => return Err(CommandError::Usage("auto <on|off>")),
        ("settings", [url, flag]) => UiAction::SaveSettings {
            api_base_url: url.to_string(),
            auto_refresh_enabled: parse_switch(flag)?,
        },
        ("settings", _) => return Err(CommandError::Usage("settings <api-url> <on|off>")),
        _ => return Err(CommandError::Unknown(line.trim().to_string())),
    };

    Ok(Some(ShellCommand::Action(action)))
}

/// Items are numbered from 1 on screen
fn parse_item_number(raw: &str) -> Result<usize, CommandError> {
    match raw.parse::<usize>() {
        Ok(number) if number >= 1 => Ok(number - 1),
        _ => Err(CommandError::InvalidArgument(format!(
            "item number must be 1 or more, got {}",
            raw
        ))),
    }
}

fn parse_switch(raw: &str) -> Result<bool, CommandError> {
    match raw {
        "on" | "true" => Ok(true),
        "off" | "false" => Ok(false),
        other => Err(CommandError::InvalidArgument(format!(
            "expected on or off, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(line: &str) -> UiAction {
        match parse_command(line) {
            Ok(Some(ShellCommand::Action(action))) => action,
            other => panic!("expected an action for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn test_login_and_demo() {
        assert_eq!(
            action("login demo demo123"),
            UiAction::SubmitLogin {
                username: "demo".to_string(),
                password: "demo123".to_string(),
            }
        );
        assert_eq!(action("demo 2"), UiAction::DemoLogin(DemoAccount::Player2));
        assert_eq!(
            parse_command("login demo"),
            Err(CommandError::Usage("login <username> <password>"))
        );
        assert!(parse_command("demo 3").is_err());
    }

    #[test]
    fn test_tabs() {
        assert_eq!(action("tab profile"), UiAction::SwitchTab(Tab::Profile));
        assert!(matches!(
            parse_command("tab shop"),
            Err(CommandError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_show_is_one_based() {
        assert_eq!(action("show 1"), UiAction::SelectItem(0));
        assert!(parse_command("show 0").is_err());
        assert!(parse_command("show x").is_err());
    }

    #[test]
    fn test_settings_and_auto() {
        assert_eq!(action("auto on"), UiAction::ToggleAutoRefresh(true));
        assert_eq!(
            action("settings http://game.test/api off"),
            UiAction::SaveSettings {
                api_base_url: "http://game.test/api".to_string(),
                auto_refresh_enabled: false,
            }
        );
        assert!(parse_command("auto maybe").is_err());
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(action("logout"), UiAction::Logout);
        assert_eq!(action("refresh"), UiAction::Refresh);
        assert_eq!(action("close"), UiAction::CloseItemDetails);
        assert_eq!(action("outside"), UiAction::ClickOutsideDetails);
        assert_eq!(parse_command("help"), Ok(Some(ShellCommand::Help)));
        assert_eq!(parse_command("quit"), Ok(Some(ShellCommand::Quit)));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_command("dance now"),
            Err(CommandError::Unknown("dance now".to_string()))
        );
    }
}
