use std::collections::BTreeMap;

use crate::renderer::traits::*;

/// HTML attributes, kept sorted so output is stable.
pub type Attributes = BTreeMap<String, String>;

/// Helper for consistent indentation
pub struct IndentationHelper;

impl IndentationHelper {
    pub fn indent_for_depth(depth: usize) -> String {
        "\t".repeat(depth)
    }

    pub fn indent_from_context(context: &RenderContext) -> String {
        context.indent()
    }

    /// Prefixes every non-empty line of `text` with `depth` tabs.
    pub fn tabbed(text: &str, depth: usize) -> String {
        let indent = Self::indent_for_depth(depth);
        text.lines()
            .map(|line| {
                if line.is_empty() {
                    String::new()
                } else {
                    format!("{}{}", indent, line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Helper for manipulating the `class` attribute
pub struct AttributeHelper;

impl AttributeHelper {
    /// Appends `class` to the attribute set unless it is already present.
    pub fn add_class(mut attributes: Attributes, class: &str) -> Attributes {
        let class = class.trim();
        if class.is_empty() {
            return attributes;
        }

        let existing = attributes.entry("class".to_string()).or_default();
        if !existing.split_whitespace().any(|c| c == class) {
            if !existing.is_empty() {
                existing.push(' ');
            }
            existing.push_str(class);
        }
        attributes
    }
}

/// Helper for emitting HTML elements
pub struct ElementRenderer;

impl ElementRenderer {
    pub fn wrap_element(&self, tag: &str, inner: &str, attributes: &Attributes) -> String {
        format!("<{}{}>{}</{}>", tag, self.render_attributes(attributes), inner, tag)
    }

    pub fn render_attributes(&self, attributes: &Attributes) -> String {
        attributes
            .iter()
            .map(|(name, value)| format!(" {}=\"{}\"", name, escape_html(value)))
            .collect()
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
