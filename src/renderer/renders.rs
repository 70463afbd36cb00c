use crate::menu::*;
use crate::renderer::components::*;
use crate::renderer::traits::*;

impl Render for Content {
    fn render(&self, context: &RenderContext) -> String {
        match self {
            Content::Link(link) => {
                let mut attributes = link.attributes.clone();
                let href = self
                    .evaluated_url(context.request())
                    .unwrap_or_else(|| link.target.clone());
                attributes.insert("href".to_string(), href);

                ElementRenderer.wrap_element("a", &escape_html(&link.label), &attributes)
            }
            Content::Raw(html) => html.clone(),
        }
    }
}

impl Render for Item {
    fn render(&self, context: &RenderContext) -> String {
        let options = self.options().merged(&context.overrides());
        let depth = options.render_depth;
        let indent = IndentationHelper::indent_for_depth(depth);
        let attributes = self.active_attributes(&options, context.request());

        // Content sits one level inside the item's own tags
        let content = self.content().render(context);
        let mut body = IndentationHelper::tabbed(&content, depth.saturating_add(1));

        if let Some(children) = self.children().filter(|children| !children.is_empty()) {
            let child_context = context.with_depth(depth.saturating_add(1));
            body.push('\n');
            body.push_str(&children.render(&child_context));
        }

        let rendered = match self.element() {
            Some(tag) => {
                let inner = format!("\n{}\n{}", body, indent);
                format!("{}{}", indent, ElementRenderer.wrap_element(tag, &inner, &attributes))
            }
            None => body,
        };

        tracing::trace!(depth, active = attributes.contains_key("class"), "rendered item");
        rendered
    }
}

impl Render for ItemList {
    fn render(&self, context: &RenderContext) -> String {
        if self.is_empty() {
            return String::new();
        }

        let Some(tag) = self.element() else {
            return self.render_items(context);
        };

        let indent = IndentationHelper::indent_from_context(context);
        let item_context = context.with_depth(context.depth().saturating_add(1));
        let inner = format!("\n{}\n{}", self.render_items(&item_context), indent);

        format!("{}{}", indent, ElementRenderer.wrap_element(tag, &inner, &self.attributes))
    }
}

impl ItemList {
    fn render_items(&self, context: &RenderContext) -> String {
        self.items()
            .iter()
            .map(|item| item.render(context))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
