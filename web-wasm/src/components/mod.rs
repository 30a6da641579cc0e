//! UIコンポーネント

pub mod category_tabs;
pub mod code_viewer;
pub mod navbar;
pub mod theme_card;
pub mod toast;
