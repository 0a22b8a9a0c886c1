use crate::commands::{CmdMessage, CmdResult, StockroomPaths};
use crate::config::{unknown_key, StockroomConfig};
use crate::error::Result;
use crate::model::Scope;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Show or change the config of `scope`.
///
/// An unknown key or a rejected value is an error and nothing is written.
pub fn run(paths: &StockroomPaths, scope: Scope, action: ConfigAction) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    let mut config = StockroomConfig::load(&dir)?;

    let message = match action {
        ConfigAction::ShowAll => return Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key).ok_or_else(|| unknown_key(&key))?;
            CmdMessage::info(value)
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(&dir)?;
            let shown = config.get(&key).unwrap_or(value);
            tracing::debug!(dir = %dir.display(), key = %key, value = %shown, "config updated");
            CmdMessage::success(format!("{} set to {}", key, shown))
        }
    };

    let mut result = CmdResult::default();
    result.add_message(message);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::StockError;
    use crate::store::StorageFormat;
    use tempfile::TempDir;

    fn paths(temp: &TempDir) -> StockroomPaths {
        StockroomPaths {
            project: Some(temp.path().join("project")),
            global: temp.path().join("global"),
        }
    }

    #[test]
    fn set_persists_and_show_reads_back() {
        let temp = TempDir::new().unwrap();
        let paths = paths(&temp);

        let result = run(
            &paths,
            Scope::Project,
            ConfigAction::Set("format".into(), "lines".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "format set to lines");

        let shown = run(&paths, Scope::Project, ConfigAction::ShowAll).unwrap();
        assert_eq!(shown.config.unwrap().format, StorageFormat::Lines);

        let key = run(
            &paths,
            Scope::Project,
            ConfigAction::ShowKey("data-file".into()),
        )
        .unwrap();
        assert_eq!(key.messages[0].content, "inventory.txt");

        // global scope is untouched
        let global = run(&paths, Scope::Global, ConfigAction::ShowAll).unwrap();
        assert_eq!(global.config.unwrap().format, StorageFormat::Json);
    }

    #[test]
    fn unknown_keys_and_bad_values_are_errors() {
        let temp = TempDir::new().unwrap();
        let paths = paths(&temp);

        let shown = run(&paths, Scope::Project, ConfigAction::ShowKey("colour".into()));
        assert!(matches!(shown, Err(StockError::Api(_))));

        let set = run(
            &paths,
            Scope::Project,
            ConfigAction::Set("autosave".into(), "perhaps".into()),
        );
        assert!(matches!(set, Err(StockError::Api(_))));
        assert!(!temp.path().join("project").join("config.json").exists());
    }
}
