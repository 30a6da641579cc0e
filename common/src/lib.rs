//! Theme Gallery Common Library
//!
//! CLIとWeb(WASM)で共有されるカタログ・検索・表示状態・保存済みリスト

pub mod types;
pub mod error;
pub mod catalog;
pub mod query;
pub mod view_state;
pub mod saved;
pub mod notification;
pub mod form;
pub mod route;
pub mod code_samples;

pub use types::{Category, CategoryFilter, Theme, ThemeCategory, ALL_CATEGORY_ID, CATEGORIES, COMPACT_TAG_COUNT};
pub use error::{Error, Result};
pub use catalog::{get_theme_by_id, Catalog};
pub use query::{get_featured_themes, get_new_themes, get_themes_by_category};
pub use view_state::CategoryView;
pub use saved::{MemoryRepository, SaveOutcome, SavedProjects, SavedProjectsRepository, SAVED_PROJECTS_KEY};
#[cfg(not(target_arch = "wasm32"))]
pub use saved::JsonFileRepository;
pub use notification::{Notification, Notifier};
pub use form::{AccessRequestForm, FieldErrors};
pub use route::{Listing, Route, NAV_LISTINGS};
pub use code_samples::{code_files_for, CodeFile};
