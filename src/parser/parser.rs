use std::fs;
use std::path::Path;

use crate::error::{MenuError, Result};
use crate::menu::*;
use crate::parser::types::*;

/// Builds a [`Menu`] from its JSON definition.
pub struct MenuParser;

impl MenuParser {
    pub fn parse_file(&self, path: &Path) -> Result<Menu> {
        self.parse_file_with_defaults(path, &OptionOverrides::default())
    }

    /// Like [`MenuParser::parse_file`], with `defaults` merged under every
    /// item's own options.
    pub fn parse_file_with_defaults(
        &self,
        path: &Path,
        defaults: &OptionOverrides,
    ) -> Result<Menu> {
        let json = fs::read_to_string(path).map_err(|source| MenuError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "parsing menu definition");
        self.parse_str_with_defaults(&json, defaults)
    }

    pub fn parse_str(&self, json: &str) -> Result<Menu> {
        self.parse_str_with_defaults(json, &OptionOverrides::default())
    }

    pub fn parse_str_with_defaults(&self, json: &str, defaults: &OptionOverrides) -> Result<Menu> {
        let definition: MenuDefinition = serde_json::from_str(json)?;

        let mut menu = Menu::new();
        for (index, list) in definition.lists.into_iter().enumerate() {
            let path = match &list.name {
                Some(name) => name.clone(),
                None => format!("lists[{}]", index),
            };
            menu.add_list(self.parse_list(list, &path, defaults)?);
        }

        tracing::trace!(lists = menu.lists().len(), "parsed menu");
        Ok(menu)
    }

    fn parse_list(
        &self,
        definition: ListDefinition,
        path: &str,
        defaults: &OptionOverrides,
    ) -> Result<ItemList> {
        let mut list = ItemList::new()
            .with_element(definition.element.as_deref())
            .with_attributes(definition.attributes);
        if let Some(name) = definition.name {
            list = list.with_name(name);
        }
        if let Some(prefix) = definition.prefix {
            list = list.with_prefix(prefix);
        }

        for (index, item) in definition.items.into_iter().enumerate() {
            let item_path = format!("{}.items[{}]", path, index);
            let item = self.parse_item(&list, item, &item_path, defaults)?;
            list.attach(item);
        }

        Ok(list)
    }

    fn parse_item(
        &self,
        list: &ItemList,
        definition: ItemDefinition,
        path: &str,
        defaults: &OptionOverrides,
    ) -> Result<Item> {
        let content = match (definition.url, definition.raw) {
            (Some(url), None) => {
                let label = definition.label.unwrap_or_else(|| url.clone());
                Content::Link(Link::new(url, label).with_attributes(definition.link_attributes))
            }
            (None, Some(raw)) => Content::Raw(raw),
            (Some(_), Some(_)) => {
                return Err(invalid_item(path, "has both `url` and `raw`"));
            }
            (None, None) => {
                return Err(invalid_item(path, "needs either `url` or `raw`"));
            }
        };

        let overrides = match &definition.options {
            Some(value) => defaults.merge(&OptionOverrides::from_value(value, path)?),
            None => defaults.clone(),
        };

        let children = definition
            .children
            .map(|children| self.parse_list(children, &format!("{}.children", path), defaults))
            .transpose()?;

        Ok(Item::new(list, content, children, &overrides)
            .with_element(definition.element.as_deref())
            .with_attributes(definition.attributes))
    }
}

fn invalid_item(path: &str, reason: &str) -> MenuError {
    MenuError::InvalidItem {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}
