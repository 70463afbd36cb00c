#[cfg(test)]
mod rendering_tests {
    use crate::{
        Content, Item, ItemList, Menu, MenuError, MenuRenderer, OptionOverrides, Render,
        RenderContext, StaticRequest, MAX_RENDER_DEPTH,
    };

    fn request(url: &str) -> StaticRequest {
        StaticRequest::parse(url).unwrap()
    }

    fn item(content: Content) -> Item {
        Item::new(&ItemList::new(), content, None, &OptionOverrides::default())
    }

    fn strip_tabs(s: &str) -> Vec<&str> {
        s.lines().map(|l| l.trim_start_matches('\t')).collect()
    }

    fn docs_menu() -> ItemList {
        let docs = ItemList::new()
            .add("/docs/intro", "Intro")
            .add("/docs/api", "API");

        ItemList::new()
            .with_name("main")
            .add("/", "Home")
            .add_with_children("/docs", "Docs", Some(docs))
    }

    #[test]
    fn test_single_item_at_depth_zero() {
        let item = item(Content::raw("Home"));
        let output = item.render_for(&request("http://example.com/"), &OptionOverrides::default());

        assert_eq!(output, "<li>\n\tHome\n</li>");
    }

    #[test]
    fn test_depth_only_changes_indentation() {
        let item = item(Content::link("/", "Home"));
        let request = request("http://example.com/");

        let shallow = item.render_for(&request, &OptionOverrides::new().render_depth(0));
        let deep = item.render_for(&request, &OptionOverrides::new().render_depth(2));

        assert_ne!(shallow, deep);
        assert!(deep.starts_with("\t\t<li class=\"active\">"));

        assert_eq!(strip_tabs(&shallow), strip_tabs(&deep));
    }

    #[test]
    fn test_nested_menu_output() {
        let list = docs_menu();
        let request = request("http://example.com/docs/intro");
        let overrides = OptionOverrides::default();

        let expected = [
            "<ul>",
            "\t<li>",
            "\t\t<a href=\"http://example.com/\">Home</a>",
            "\t</li>",
            "\t<li class=\"active-child\">",
            "\t\t<a href=\"http://example.com/docs\">Docs</a>",
            "\t\t<ul>",
            "\t\t\t<li class=\"active\">",
            "\t\t\t\t<a href=\"http://example.com/docs/intro\">Intro</a>",
            "\t\t\t</li>",
            "\t\t\t<li>",
            "\t\t\t\t<a href=\"http://example.com/docs/api\">API</a>",
            "\t\t\t</li>",
            "\t\t</ul>",
            "\t</li>",
            "</ul>",
        ]
        .join("\n");

        assert_eq!(list.render(&RenderContext::new(&request, &overrides)), expected);
    }

    #[test]
    fn test_render_does_not_touch_item_options() {
        let list = docs_menu();
        let request = request("http://example.com/docs/api?tab=2");
        let overrides = OptionOverrides::new().active_class("current").render_depth(1);
        let context = RenderContext::new(&request, &overrides);

        let first = list.render(&context);
        let second = list.render(&context);

        assert_eq!(first, second);
        assert!(first.contains("<li class=\"current\">"));
        assert_eq!(list.items()[1].options().render_depth, 0);
        assert_eq!(list.items()[1].options().active_class, "active");
    }

    #[test]
    fn test_huge_depth_is_clamped() {
        let children = ItemList::new().add("/a", "A");
        let list = ItemList::new().add_with_children("/", "Home", Some(children));
        let request = request("http://example.com/");
        let overrides = OptionOverrides::new().render_depth(usize::MAX);

        let output = list.render(&RenderContext::new(&request, &overrides));
        let indent = "\t".repeat(MAX_RENDER_DEPTH);
        assert!(output.starts_with(&format!("{}<ul>", indent)));
        assert!(output.contains("<a href=\"http://example.com/a\">A</a>"));
    }

    #[test]
    fn test_with_overrides_keeps_depth() {
        let list = docs_menu();
        let request = request("http://example.com/");
        let plain = OptionOverrides::default();
        let current = OptionOverrides::new().active_class("current");

        let context = RenderContext::new(&request, &plain).with_depth(2);
        let swapped = context.with_overrides(&current);

        assert_eq!(swapped.depth(), 2);
        let output = list.render(&swapped);
        assert!(output.starts_with("\t\t<ul>"));
        assert!(output.contains("\t\t\t<li class=\"current\">"));
    }

    #[test]
    fn test_call_time_options_override_construction_options() {
        let list = ItemList::new();
        let item = Item::new(
            &list,
            Content::link("/", "Home"),
            None,
            &OptionOverrides::new().active_class("mine").active_child_class("mine-child"),
        );
        let request = request("http://example.com/");

        let own = item.render_for(&request, &OptionOverrides::default());
        assert!(own.starts_with("<li class=\"mine\">"));

        let inherited = item.render_for(&request, &OptionOverrides::new().active_class("theirs"));
        assert!(inherited.starts_with("<li class=\"theirs\">"));
    }

    #[test]
    fn test_item_without_element_and_multiline_raw() {
        let item = item(Content::raw("<span>\n\tx\n</span>")).with_element(None);

        let output = item.render_for(
            &request("http://example.com/"),
            &OptionOverrides::new().render_depth(1),
        );
        assert_eq!(output, "\t\t<span>\n\t\t\tx\n\t\t</span>");
    }

    #[test]
    fn test_existing_classes_are_kept() {
        let mut attributes = crate::Attributes::new();
        attributes.insert("class".to_string(), "nav-item".to_string());

        let item = item(Content::link("/", "Home")).with_attributes(attributes);
        let output = item.render_for(&request("http://example.com/"), &OptionOverrides::default());

        assert!(output.starts_with("<li class=\"nav-item active\">"));
    }

    #[test]
    fn test_link_label_is_escaped() {
        let list = ItemList::new().add("/q?a=1&b=2", "Q & A");
        let output = list.render(&RenderContext::new(
            &request("http://example.com/"),
            &OptionOverrides::default(),
        ));

        assert!(output.contains(
            "<a href=\"http://example.com/q?a=1&amp;b=2\">Q &amp; A</a>"
        ));
    }

    #[test]
    fn test_menu_renderer_named_and_unknown_lists() {
        let mut menu = Menu::new();
        menu.add_list(docs_menu());
        menu.add_list(ItemList::new().with_name("footer").add("/legal", "Legal"));
        menu.add_list(ItemList::new().with_name("empty"));

        let request = request("http://example.com/legal");
        let overrides = OptionOverrides::default();
        let context = RenderContext::new(&request, &overrides);

        let footer = MenuRenderer.render(&menu, Some("footer"), &context).unwrap();
        let expected = [
            "<ul>",
            "\t<li class=\"active\">",
            "\t\t<a href=\"http://example.com/legal\">Legal</a>",
            "\t</li>",
            "</ul>",
        ]
        .join("\n");
        assert_eq!(footer, expected);

        let everything = MenuRenderer.render(&menu, None, &context).unwrap();
        assert!(everything.ends_with(&footer));
        assert_eq!(everything.matches("<ul>").count(), 3);

        assert!(matches!(
            MenuRenderer.render(&menu, Some("sidebar"), &context),
            Err(MenuError::UnknownList(name)) if name == "sidebar"
        ));
    }
}
