use crate::error::{MenuError, Result};
use crate::menu::*;
use crate::renderer::traits::*;

pub struct MenuRenderer;

impl MenuRenderer {
    /// Renders every list of the menu, or only the one called `list`.
    pub fn render(
        &self,
        menu: &Menu,
        list: Option<&str>,
        context: &RenderContext,
    ) -> Result<String> {
        let output = match list {
            Some(name) => {
                let list = menu
                    .list_named(name)
                    .ok_or_else(|| MenuError::UnknownList(name.to_string()))?;
                list.render(context)
            }
            None => menu
                .lists()
                .iter()
                .map(|list| list.render(context))
                .filter(|rendered| !rendered.is_empty())
                .collect::<Vec<_>>()
                .join("\n"),
        };

        tracing::debug!(lists = menu.lists().len(), bytes = output.len(), "rendered menu");
        Ok(output)
    }
}
