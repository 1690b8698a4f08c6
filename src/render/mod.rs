//! Render module - UI rendering

pub mod editor;
pub mod layout;
pub mod menu;
pub mod status;
pub mod tree;

pub use editor::{cursor_x, display_width, render_editor};
pub use layout::AppLayout;
pub use menu::{render_menu_bar, render_menu_dropdown};
pub use status::{centered_rect, render_popup, render_status_bar};
pub use tree::{render_tree, visible_height};
