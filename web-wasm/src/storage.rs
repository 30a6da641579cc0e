//! ブラウザのlocalStorageに保存済みリストを置く

use gloo::storage::{LocalStorage, Storage};
use theme_gallery_common::saved::parse_saved;
use theme_gallery_common::{Error, Result, SavedProjectsRepository, Theme, SAVED_PROJECTS_KEY};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageRepository;

impl SavedProjectsRepository for LocalStorageRepository {
    fn load(&self) -> Vec<Theme> {
        match LocalStorage::raw().get_item(SAVED_PROJECTS_KEY) {
            Ok(Some(raw)) => parse_saved(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                gloo::console::warn!(format!("保存済みリストの読込失敗: {:?}", e));
                Vec::new()
            }
        }
    }

    fn save(&mut self, themes: &[Theme]) -> Result<()> {
        LocalStorage::set(SAVED_PROJECTS_KEY, themes).map_err(|e| {
            gloo::console::error!(format!("保存済みリストの書込失敗: {}", e));
            Error::Storage(e.to_string())
        })
    }
}
