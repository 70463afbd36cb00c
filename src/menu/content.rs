//! What an item displays: a link or a chunk of raw markup.

use crate::menu::list::ListHandle;
use crate::renderer::Attributes;
use crate::request::{self, RequestContext};

/// Ties content to the item that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemBinding {
    /// List the owning item sits in
    pub list: ListHandle,
    /// URL prefix of that list, applied to relative link targets
    pub prefix: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub target: String,
    pub label: String,
    pub attributes: Attributes,
    pub(crate) binding: Option<ItemBinding>,
}

impl Link {
    pub fn new(target: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            label: label.into(),
            attributes: Attributes::new(),
            binding: None,
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn binding(&self) -> Option<&ItemBinding> {
        self.binding.as_ref()
    }

    /// The target after applying the owning list's prefix.
    fn prefixed_target(&self) -> String {
        let prefix = self
            .binding
            .as_ref()
            .and_then(|binding| binding.prefix.as_deref())
            .map(|prefix| prefix.trim_matches('/'))
            .filter(|prefix| !prefix.is_empty());

        match prefix {
            Some(prefix) if !is_absolute(&self.target) => {
                format!("/{}/{}", prefix, self.target.trim_start_matches('/'))
            }
            _ => self.target.clone(),
        }
    }
}

fn is_absolute(target: &str) -> bool {
    url::Url::parse(target).is_ok() || target.starts_with('#')
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Link(Link),
    Raw(String),
}

impl Content {
    pub fn link(target: impl Into<String>, label: impl Into<String>) -> Self {
        Content::Link(Link::new(target, label))
    }

    pub fn raw(html: impl Into<String>) -> Self {
        Content::Raw(html.into())
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Content::Link(_))
    }

    /// The URL this content points at, if it is a link.
    pub fn evaluated_url(&self, request: &dyn RequestContext) -> Option<String> {
        match self {
            Content::Link(link) => Some(request::resolve(request, &link.prefixed_target())),
            Content::Raw(_) => None,
        }
    }

    /// Returns this content bound to the item described by `binding`.
    pub fn in_item(self, binding: &ItemBinding) -> Content {
        match self {
            Content::Link(mut link) => {
                link.binding = Some(binding.clone());
                Content::Link(link)
            }
            raw @ Content::Raw(_) => raw,
        }
    }
}
