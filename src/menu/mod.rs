pub mod content;
pub mod item;
pub mod list;
pub mod menu;
pub mod options;

pub use content::*;
pub use item::*;
pub use list::*;
pub use menu::*;
pub use options::*;
