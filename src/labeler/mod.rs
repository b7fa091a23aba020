//! Entity labeling over normalized sig text.

pub mod rule;
pub mod vocabulary;

pub use rule::*;

use serde::{Deserialize, Serialize};

use crate::models::EntityLabel;

/// A labeled span of sig text, e.g. `("every 12 hours", Frequency)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// Labeling capability consulted once per parse, after normalization.
///
/// Implementations must emit entities in reading order and may only use the
/// labels of [`EntityLabel`]. Implementations that load external resources
/// must do so in their constructor and fail there, never per call.
pub trait EntityLabeler: Send + Sync {
    /// Labels `text`, returning every recognized span in reading order.
    fn label(&self, text: &str) -> Vec<Entity>;
}
