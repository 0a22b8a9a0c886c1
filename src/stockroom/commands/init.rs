use crate::commands::{CmdMessage, CmdResult, StockroomPaths};
use crate::error::Result;
use crate::model::Scope;
use std::fs;

pub fn run(paths: &StockroomPaths, scope: Scope) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    fs::create_dir_all(&dir)?;
    tracing::info!(dir = %dir.display(), "initialized inventory directory");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized stockroom at {}",
        dir.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_scope_directory() {
        let temp = TempDir::new().unwrap();
        let paths = StockroomPaths {
            project: Some(temp.path().join("a").join(".stockroom")),
            global: temp.path().join("global"),
        };

        run(&paths, Scope::Project).unwrap();
        assert!(temp.path().join("a").join(".stockroom").is_dir());
    }

    #[test]
    fn missing_project_scope_is_an_error() {
        let temp = TempDir::new().unwrap();
        let paths = StockroomPaths {
            project: None,
            global: temp.path().to_path_buf(),
        };
        assert!(run(&paths, Scope::Project).is_err());
    }
}
