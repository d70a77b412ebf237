//! Layer directory structure.

pub mod layout;

pub use layout::LayerLayout;
