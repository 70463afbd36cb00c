use crate::menu::list::{ItemList, ListHandle};

/// A set of top-level lists, typically one per navigation area.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    lists: Vec<ItemList>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_list(&mut self, list: ItemList) -> ListHandle {
        let handle = list.handle();
        self.lists.push(list);
        handle
    }

    pub fn lists(&self) -> &[ItemList] {
        &self.lists
    }

    pub fn list_named(&self, name: &str) -> Option<&ItemList> {
        self.lists.iter().find(|list| list.name() == Some(name))
    }

    /// Resolves a handle, such as an item's back-reference, to its list.
    pub fn find(&self, handle: ListHandle) -> Option<&ItemList> {
        self.lists.iter().find_map(|list| list.find(handle))
    }
}
