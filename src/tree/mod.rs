//! Tree module - Directory scanning and navigation

pub mod navigator;
pub mod node;

pub use navigator::TreeNavigator;
pub use node::TreeEntry;
