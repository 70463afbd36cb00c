use std::collections::BTreeMap;

use serde::Deserialize;

// Raw JSON layout of a menu definition

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuDefinition {
    #[serde(default)]
    pub lists: Vec<ListDefinition>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListDefinition {
    #[serde(default)]
    pub name: Option<String>,
    /// Wrapping element; absent means `ul`, `null` means none
    #[serde(default = "default_list_element")]
    pub element: Option<String>,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub items: Vec<ItemDefinition>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemDefinition {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub children: Option<ListDefinition>,
    /// Kept untyped so shape errors can name the offending item
    #[serde(default)]
    pub options: Option<serde_json::Value>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub link_attributes: BTreeMap<String, String>,
    #[serde(default = "default_item_element")]
    pub element: Option<String>,
}

fn default_list_element() -> Option<String> {
    Some("ul".to_string())
}

fn default_item_element() -> Option<String> {
    Some(crate::menu::DEFAULT_ITEM_ELEMENT.to_string())
}
