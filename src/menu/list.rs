use std::sync::atomic::{AtomicU64, Ordering};

use crate::menu::content::{Content, ItemBinding, Link};
use crate::menu::item::Item;
use crate::menu::options::OptionOverrides;
use crate::renderer::Attributes;

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

/// Non-owning reference to an [`ItemList`].
///
/// Items hold one of these instead of a pointer to their list, so a list
/// owns its items and nothing owns the list back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListHandle(u64);

impl ListHandle {
    pub(crate) fn next() -> Self {
        ListHandle(NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// An ordered list of menu items, rendered as a `<ul>` by default.
#[derive(Debug, Clone)]
pub struct ItemList {
    handle: ListHandle,
    pub(crate) name: Option<String>,
    pub(crate) element: Option<String>,
    pub(crate) attributes: Attributes,
    pub(crate) prefix: Option<String>,
    pub(crate) items: Vec<Item>,
}

impl Default for ItemList {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemList {
    pub fn new() -> Self {
        Self {
            handle: ListHandle::next(),
            name: None,
            element: Some("ul".to_string()),
            attributes: Attributes::new(),
            prefix: None,
            items: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the wrapping element; `None` renders the items bare.
    pub fn with_element(mut self, element: Option<&str>) -> Self {
        self.element = element.map(str::to_string);
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Prefix applied to relative link targets of items added afterwards.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn handle(&self) -> ListHandle {
        self.handle
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn element(&self) -> Option<&str> {
        self.element.as_deref()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn binding(&self) -> ItemBinding {
        ItemBinding {
            list: self.handle,
            prefix: self.prefix.clone(),
        }
    }

    /// Adds a link item.
    pub fn add(self, target: &str, label: &str) -> Self {
        self.add_with_children(target, label, None)
    }

    /// Adds a link item with an optional nested list.
    pub fn add_with_children(
        mut self,
        target: &str,
        label: &str,
        children: Option<ItemList>,
    ) -> Self {
        let item = Item::new(
            &self,
            Content::Link(Link::new(target, label)),
            children,
            &OptionOverrides::default(),
        );
        self.items.push(item);
        self
    }

    /// Adds an item showing raw markup.
    pub fn raw(mut self, html: &str) -> Self {
        let item = Item::new(&self, Content::raw(html), None, &OptionOverrides::default());
        self.items.push(item);
        self
    }

    /// Appends an item built against this list.
    ///
    /// Items carry a handle to the list they were built for; attaching one
    /// built for a different list is logged and accepted as is.
    pub fn attach(&mut self, item: Item) {
        if item.get_list() != self.handle {
            tracing::warn!(
                list = self.handle.id(),
                item_list = item.get_list().id(),
                "attaching item built for another list"
            );
        }
        self.items.push(item);
    }

    /// Finds the list with `handle` among this list and its descendants.
    pub fn find(&self, handle: ListHandle) -> Option<&ItemList> {
        if self.handle == handle {
            return Some(self);
        }
        self.items
            .iter()
            .filter_map(|item| item.children())
            .find_map(|children| children.find(handle))
    }
}
