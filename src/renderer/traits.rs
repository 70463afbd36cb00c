use crate::menu::{OptionOverrides, MAX_RENDER_DEPTH};
use crate::renderer::components::IndentationHelper;
use crate::request::RequestContext;

/// Everything a render call needs besides the node itself.
///
/// Each level hands its children a fresh context instead of mutating the
/// node, so rendering never changes the menu.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    request: &'a dyn RequestContext,
    overrides: &'a OptionOverrides,
    depth: Option<usize>,
}

impl<'a> RenderContext<'a> {
    pub fn new(request: &'a dyn RequestContext, overrides: &'a OptionOverrides) -> Self {
        Self {
            request,
            overrides,
            depth: None,
        }
    }

    pub fn with_depth(&self, depth: usize) -> Self {
        Self {
            request: self.request,
            overrides: self.overrides,
            depth: Some(depth),
        }
    }

    /// Same request and depth, different caller overrides.
    pub fn with_overrides(&self, overrides: &'a OptionOverrides) -> Self {
        Self {
            request: self.request,
            overrides,
            depth: self.depth,
        }
    }

    pub fn request(&self) -> &'a dyn RequestContext {
        self.request
    }

    /// Caller-supplied overrides, with the depth for this level folded in.
    pub fn overrides(&self) -> OptionOverrides {
        match self.depth {
            Some(depth) => self.overrides.clone().render_depth(depth),
            None => self.overrides.clone(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
            .or(self.overrides.render_depth)
            .unwrap_or_default()
            .min(MAX_RENDER_DEPTH)
    }

    pub fn indent(&self) -> String {
        IndentationHelper::indent_for_depth(self.depth())
    }
}

/// Core rendering trait for all menu nodes
pub trait Render {
    fn render(&self, context: &RenderContext) -> String;
}
