//! # menu-render
//!
//! Declarative HTML navigation menus. A [`Menu`] holds [`ItemList`]s of
//! [`Item`]s; each item wraps a link or raw markup, may own a nested list,
//! and renders itself as tab-indented HTML with `active` / `active-child`
//! classes worked out from the current request URL.
//!
//! ```
//! use menu_render::{ItemList, OptionOverrides, RenderContext, Render, StaticRequest};
//!
//! let list = ItemList::new().add("/", "Home").add("/about", "About");
//! let request = StaticRequest::parse("http://example.com/about").unwrap();
//! let overrides = OptionOverrides::default();
//!
//! let html = list.render(&RenderContext::new(&request, &overrides));
//! assert!(html.contains("<li class=\"active\">"));
//! ```

pub mod config;
pub mod error;
pub mod menu;
pub mod parser;
pub mod renderer;
pub mod request;

pub use config::Config;
pub use error::{MenuError, Result};
pub use menu::*;
pub use parser::MenuParser;
pub use renderer::*;
pub use request::{RequestContext, StaticRequest};

#[cfg(test)]
mod tests;
