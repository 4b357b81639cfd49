//! Declarative strategy chains.
//!
//! ```toml
//! [[order]]
//! kind = "path_match"
//! targets = ["billing", "shipping.address"]
//! exact = false
//!
//! [[order]]
//! kind = "message_existence"
//! trim = true
//!
//! [[order]]
//! kind = "document_position"
//! ```

use crate::order::{
    DocumentPosition, ExtractOrder, MessageExistence, MessageExistenceOptions, PathMatch,
    PathMatchOptions,
};
use dom::Node;
use serde::Deserialize;
use std::fmt;

pub type BoxedOrder = Box<dyn ExtractOrder + Send + Sync>;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainConfig {
    #[serde(default, rename = "order")]
    pub orders: Vec<OrderConfig>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum OrderConfig {
    MessageExistence {
        #[serde(default)]
        trim: bool,
    },
    DocumentPosition,
    PathMatch {
        targets: Vec<String>,
        #[serde(default)]
        exact: bool,
    },
}

#[derive(Debug)]
pub enum ConfigError {
    Toml(toml::de::Error),
    /// A `document_position` entry was configured but no document was given.
    MissingDocument,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Toml(err) => write!(f, "invalid chain config: {err}"),
            ConfigError::MissingDocument => {
                write!(f, "document_position order requires a document")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Toml(err) => Some(err),
            ConfigError::MissingDocument => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Toml(err)
    }
}

impl ChainConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Instantiate the configured chain in order.
    pub fn build(&self, document: Option<&Node>) -> Result<Vec<BoxedOrder>, ConfigError> {
        self.orders
            .iter()
            .map(|order| -> Result<BoxedOrder, ConfigError> {
                let built: BoxedOrder = match order {
                    OrderConfig::MessageExistence { trim } => Box::new(MessageExistence::new(
                        MessageExistenceOptions { trim: *trim },
                    )),
                    OrderConfig::DocumentPosition => {
                        let document = document.ok_or(ConfigError::MissingDocument)?;
                        Box::new(DocumentPosition::new(document))
                    }
                    OrderConfig::PathMatch { targets, exact } => Box::new(PathMatch::new(
                        targets.iter().cloned(),
                        PathMatchOptions { exact: *exact },
                    )),
                };
                Ok(built)
            })
            .collect()
    }
}
