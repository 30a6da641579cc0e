pub mod access;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod notifier;
pub mod render;

use config::Config;
use error::Result;
use theme_gallery_common::{JsonFileRepository, SavedProjects};

/// 設定に従って保存済みリストを開く
pub fn open_saved_projects(config: &Config) -> Result<SavedProjects<JsonFileRepository>> {
    let path = config.saved_projects_path()?;
    tracing::debug!(path = %path.display(), "保存済みリストを読み込み");
    Ok(SavedProjects::open(JsonFileRepository::new(path)))
}
