//! Select menus placed in actions blocks.

use serde::Deserialize;

use crate::config::{ConfirmDialog, OneOrMany};
use crate::options::{InitialSelection, Options};

fn default_select_placeholder() -> String {
    "Select an user".to_string()
}

/// Users select element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserSelectConfig {
    #[serde(default = "default_select_placeholder")]
    pub placeholder: String,
    #[serde(default)]
    pub action_id: Option<String>,
    #[serde(default)]
    pub initial_users: Option<OneOrMany<String>>,
    #[serde(default)]
    pub focus_on_load: bool,
    #[serde(default)]
    pub confirm: Option<ConfirmDialog>,
    #[serde(default)]
    pub multi: bool,
    #[serde(default)]
    pub max_selected_items: Option<u32>,
}

impl Default for UserSelectConfig {
    fn default() -> Self {
        Self {
            placeholder: default_select_placeholder(),
            action_id: None,
            initial_users: None,
            focus_on_load: false,
            confirm: None,
            multi: false,
            max_selected_items: None,
        }
    }
}

impl UserSelectConfig {
    pub fn new(action_id: impl Into<String>) -> Self {
        Self {
            action_id: Some(action_id.into()),
            ..Default::default()
        }
    }
}

/// Static select element (single select).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StaticSelectConfig {
    #[serde(default = "default_select_placeholder")]
    pub placeholder: String,
    #[serde(default)]
    pub action_id: Option<String>,
    pub options: Options,
    #[serde(default)]
    pub initial_option: InitialSelection,
    #[serde(default)]
    pub focus_on_load: bool,
    #[serde(default)]
    pub confirm: Option<ConfirmDialog>,
}

impl StaticSelectConfig {
    pub fn new(action_id: impl Into<String>, options: impl Into<Options>) -> Self {
        Self {
            placeholder: default_select_placeholder(),
            action_id: Some(action_id.into()),
            options: options.into(),
            initial_option: InitialSelection::None,
            focus_on_load: false,
            confirm: None,
        }
    }

    pub fn initial_option(mut self, initial: impl Into<InitialSelection>) -> Self {
        self.initial_option = initial.into();
        self
    }
}
