use crate::commands::{CmdMessage, CmdResult};
use crate::config::PhonebookConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = PhonebookConfig::load(dir)?;
    let mut result = CmdResult::default();
    match action {
        ConfigAction::ShowAll => Ok(result.with_config(config)),
        ConfigAction::ShowKey(key) => {
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            if let Err(e) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, display_val)));
            Ok(result.with_config(config))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn show_all_returns_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(PhonebookConfig::default()));
    }

    #[test]
    fn set_persists_value() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("page-size".into(), "25".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "page-size set to 25");

        let shown = run(dir.path(), ConfigAction::ShowKey("page-size".into())).unwrap();
        assert_eq!(shown.messages[0].content, "25");
    }

    #[test]
    fn invalid_value_is_reported_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::Set("page-size".into(), "2".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn unknown_key_is_an_error_message() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowKey("colour".into())).unwrap();
        assert!(result.has_errors());
    }
}
