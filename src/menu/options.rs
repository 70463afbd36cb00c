use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};

pub const DEFAULT_ACTIVE_CLASS: &str = "active";
pub const DEFAULT_ACTIVE_CHILD_CLASS: &str = "active-child";
/// Deepest nesting level rendered; deeper requests are clamped to it
pub const MAX_RENDER_DEPTH: usize = 64;

/// Fully resolved render options for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Class added to an item whose link matches the current request
    pub active_class: String,
    /// Class added to an item with an active descendant
    pub active_child_class: String,
    /// Nesting level, used only for indentation
    pub render_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
            active_child_class: DEFAULT_ACTIVE_CHILD_CLASS.to_string(),
            render_depth: 0,
        }
    }
}

impl RenderOptions {
    /// Returns these options with every key set in `overrides` replaced.
    pub fn merged(&self, overrides: &OptionOverrides) -> Self {
        Self {
            active_class: overrides
                .active_class
                .clone()
                .unwrap_or_else(|| self.active_class.clone()),
            active_child_class: overrides
                .active_child_class
                .clone()
                .unwrap_or_else(|| self.active_child_class.clone()),
            render_depth: overrides
                .render_depth
                .unwrap_or(self.render_depth)
                .min(MAX_RENDER_DEPTH),
        }
    }
}

/// A partial set of options. Unset keys leave the underlying value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OptionOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_child_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_depth: Option<usize>,
}

impl OptionOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = Some(class.into());
        self
    }

    pub fn active_child_class(mut self, class: impl Into<String>) -> Self {
        self.active_child_class = Some(class.into());
        self
    }

    pub fn render_depth(mut self, depth: usize) -> Self {
        self.render_depth = Some(depth);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.active_class.is_none()
            && self.active_child_class.is_none()
            && self.render_depth.is_none()
    }

    /// Layers `later` on top of `self`; keys set in `later` win.
    pub fn merge(&self, later: &OptionOverrides) -> Self {
        Self {
            active_class: later
                .active_class
                .clone()
                .or_else(|| self.active_class.clone()),
            active_child_class: later
                .active_child_class
                .clone()
                .or_else(|| self.active_child_class.clone()),
            render_depth: later.render_depth.or(self.render_depth),
        }
    }

    /// Validates a raw JSON options block. `context` names where it came from
    /// and ends up in the error message.
    pub fn from_value(value: &serde_json::Value, context: &str) -> Result<Self> {
        if !value.is_object() {
            return Err(MenuError::invalid_options(
                context,
                format!("expected an object, found {}", json_kind(value)),
            ));
        }

        let overrides: Self = serde_json::from_value(value.clone())
            .map_err(|e| MenuError::invalid_options(context, e.to_string()))?;
        validate_depth(overrides.render_depth, context)?;

        Ok(overrides)
    }
}

/// Rejects a `renderDepth` beyond [`MAX_RENDER_DEPTH`].
pub fn validate_depth(depth: Option<usize>, context: &str) -> Result<()> {
    match depth {
        Some(depth) if depth > MAX_RENDER_DEPTH => Err(MenuError::invalid_options(
            context,
            format!("renderDepth {} exceeds {}", depth, MAX_RENDER_DEPTH),
        )),
        _ => Ok(()),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
