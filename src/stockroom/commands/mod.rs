use crate::config::StockroomConfig;
use crate::error::{Result, StockError};
use crate::model::{Product, Scope};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod get;
pub mod init;
pub mod list;
pub mod remove;
pub mod search;
pub mod update;
pub mod value;

#[derive(Debug, Clone)]
pub struct StockroomPaths {
    pub project: Option<PathBuf>,
    pub global: PathBuf,
}

impl StockroomPaths {
    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Project => self
                .project
                .clone()
                .ok_or_else(|| StockError::Api("Project scope is not available".to_string())),
            Scope::Global => Ok(self.global.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_products: Vec<Product>,
    pub listed_products: Vec<Product>,
    pub total_value: Option<f64>,
    pub config: Option<StockroomConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_listed_products(mut self, products: Vec<Product>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_total_value(mut self, value: f64) -> Self {
        self.total_value = Some(value);
        self
    }

    pub fn with_config(mut self, config: StockroomConfig) -> Self {
        self.config = Some(config);
        self
    }
}
