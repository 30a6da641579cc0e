//! ページ

pub mod home;
pub mod listings;
pub mod not_found;
pub mod projects;
pub mod request_access;
pub mod theme_code;
pub mod theme_details;
