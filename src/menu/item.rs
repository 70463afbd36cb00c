//! A single entry in a menu list.

use crate::menu::content::Content;
use crate::menu::list::{ItemList, ListHandle};
use crate::menu::options::{OptionOverrides, RenderOptions};
use crate::renderer::{AttributeHelper, Attributes, Render, RenderContext};
use crate::request::RequestContext;

pub const DEFAULT_ITEM_ELEMENT: &str = "li";

/// One node of a menu tree.
///
/// An item owns its content and its nested list. It refers to the list it
/// lives in through a [`ListHandle`] only.
#[derive(Debug, Clone)]
pub struct Item {
    list: ListHandle,
    content: Content,
    children: Option<ItemList>,
    options: RenderOptions,
    pub(crate) element: Option<String>,
    pub(crate) attributes: Attributes,
}

impl Item {
    /// Creates an item belonging to `list`.
    ///
    /// `overrides` are merged over the default options, and `content` is
    /// bound to the new item so links can pick up the list's URL prefix.
    pub fn new(
        list: &ItemList,
        content: Content,
        children: Option<ItemList>,
        overrides: &OptionOverrides,
    ) -> Self {
        Self {
            list: list.handle(),
            content: content.in_item(&list.binding()),
            children,
            options: RenderOptions::default().merged(overrides),
            element: Some(DEFAULT_ITEM_ELEMENT.to_string()),
            attributes: Attributes::new(),
        }
    }

    /// Sets the wrapping element; `None` renders the content without one.
    pub fn with_element(mut self, element: Option<&str>) -> Self {
        self.element = element.map(str::to_string);
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Handle of the list this item belongs to
    pub fn get_list(&self) -> ListHandle {
        self.list
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn children(&self) -> Option<&ItemList> {
        self.children.as_ref()
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn element(&self) -> Option<&str> {
        self.element.as_deref()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Resolved URL of the content, `None` unless it is a link.
    pub fn url(&self, request: &dyn RequestContext) -> Option<String> {
        self.content.evaluated_url(request)
    }

    /// Whether this item links to the current request, with or without its
    /// query string.
    pub fn is_active(&self, request: &dyn RequestContext) -> bool {
        let Some(url) = self.url(request) else {
            return false;
        };
        url == request.full_url() || url == request.url()
    }

    pub fn has_children(&self) -> bool {
        self.children.as_ref().is_some_and(|children| !children.is_empty())
    }

    /// Whether some descendant is active.
    ///
    /// The scan stops at the first inactive child that has children of its
    /// own and returns that child's answer, so later siblings are not looked
    /// at.
    pub fn has_active_child(&self, request: &dyn RequestContext) -> bool {
        let Some(children) = self.children.as_ref().filter(|c| !c.is_empty()) else {
            return false;
        };

        for child in children.items() {
            if child.is_active(request) {
                return true;
            }

            if child.has_children() {
                return child.has_active_child(request);
            }
        }

        false
    }

    /// Attributes for rendering, with the active classes applied.
    pub fn active_attributes(
        &self,
        options: &RenderOptions,
        request: &dyn RequestContext,
    ) -> Attributes {
        let mut attributes = self.attributes.clone();

        if self.is_active(request) {
            attributes = AttributeHelper::add_class(attributes, &options.active_class);
        }

        if self.has_active_child(request) {
            attributes = AttributeHelper::add_class(attributes, &options.active_child_class);
        }

        attributes
    }

    /// Renders this item and its subtree for `request`.
    pub fn render_for(&self, request: &dyn RequestContext, overrides: &OptionOverrides) -> String {
        self.render(&RenderContext::new(request, overrides))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{MockRequestContext, StaticRequest};

    fn request(url: &str) -> StaticRequest {
        StaticRequest::parse(url).unwrap()
    }

    fn link(list: &ItemList, target: &str, children: Option<ItemList>) -> Item {
        Item::new(list, Content::link(target, target), children, &OptionOverrides::default())
    }

    fn list_of(items: Vec<Item>) -> ItemList {
        let mut list = ItemList::new();
        for item in items {
            list.attach(item);
        }
        list
    }

    #[test]
    fn test_construction_merges_options() {
        let list = ItemList::new();
        let item = Item::new(
            &list,
            Content::raw("x"),
            None,
            &OptionOverrides::new().active_class("current"),
        );

        assert_eq!(item.options().active_class, "current");
        assert_eq!(item.options().active_child_class, "active-child");
        assert_eq!(item.get_list(), list.handle());
        assert_eq!(item.element(), Some("li"));
    }

    #[test]
    fn test_no_children() {
        let item = link(&ItemList::new(), "/", None);
        assert!(!item.has_children());
        assert!(!item.has_active_child(&request("http://example.com/")));
    }

    #[test]
    fn test_empty_children_behave_like_none() {
        let item = link(&ItemList::new(), "/", Some(ItemList::new()));
        assert!(!item.has_children());
        assert!(!item.has_active_child(&request("http://example.com/")));
    }

    #[test]
    fn test_active_with_and_without_query() {
        let item = link(&ItemList::new(), "/news", None);

        assert!(item.is_active(&request("http://example.com/news")));
        assert!(item.is_active(&request("http://example.com/news?page=3")));
        assert!(!item.is_active(&request("http://example.com/news/1")));

        let with_query = link(&ItemList::new(), "/news?page=3", None);
        assert!(with_query.is_active(&request("http://example.com/news?page=3")));
        assert!(!with_query.is_active(&request("http://example.com/news?page=4")));
    }

    #[test]
    fn test_empty_link_only_active_on_root() {
        let item = link(&ItemList::new(), "", None);

        assert!(item.is_active(&request("http://example.com/")));
        assert!(!item.is_active(&request("http://example.com/news")));
        assert!(!item.is_active(&request("http://example.com/x/y?z=1")));
    }

    #[test]
    fn test_raw_content_never_active() {
        let item = Item::new(
            &ItemList::new(),
            Content::raw("/"),
            None,
            &OptionOverrides::default(),
        );

        let mut request = MockRequestContext::new();
        request.expect_full_url().never();
        request.expect_url().never();

        assert!(!item.is_active(&request));
        assert_eq!(item.url(&request), None);
    }

    #[test]
    fn test_active_child_found_after_leaf_sibling() {
        let children = ItemList::new();
        let a = link(&children, "/a", None);
        let b = link(&children, "/b", None);
        let parent = link(&ItemList::new(), "/", Some(list_of(vec![a, b])));

        assert!(parent.has_active_child(&request("http://example.com/b")));
    }

    #[test]
    fn test_active_child_scan_stops_at_first_subtree() {
        let grandchildren = ItemList::new();
        let a_child = link(&grandchildren, "/a/1", None);

        let children = ItemList::new();
        let a = link(&children, "/a", Some(list_of(vec![a_child])));
        let b = link(&children, "/b", None);
        let parent = link(&ItemList::new(), "/", Some(list_of(vec![a, b])));

        // "/b" is active but sits after a sibling with its own inactive subtree
        assert!(!parent.has_active_child(&request("http://example.com/b")));
        assert!(parent.has_active_child(&request("http://example.com/a/1")));
    }

    #[test]
    fn test_active_attributes() {
        let children = ItemList::new();
        let child = link(&children, "/a", None);
        let parent = Item::new(
            &ItemList::new(),
            Content::link("/a", "A"),
            Some(list_of(vec![child])),
            &OptionOverrides::default(),
        );

        let attributes =
            parent.active_attributes(parent.options(), &request("http://example.com/a"));
        assert_eq!(attributes["class"], "active active-child");

        let attributes =
            parent.active_attributes(parent.options(), &request("http://example.com/z"));
        assert!(!attributes.contains_key("class"));
    }
}
