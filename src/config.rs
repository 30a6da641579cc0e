use crate::error::{Result, ThemeGalleryError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use theme_gallery_common::{CategoryFilter, COMPACT_TAG_COUNT};

/// 保存済みリストのパスを上書きする環境変数
pub const SAVED_PATH_ENV: &str = "THEME_GALLERY_SAVED_PATH";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub saved_projects_path: Option<PathBuf>,
    pub default_category: String,
    pub compact_tag_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            saved_projects_path: None,
            default_category: "all".into(),
            compact_tag_count: COMPACT_TAG_COUNT,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ThemeGalleryError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("theme-gallery"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// 保存済みリストのパス
    ///
    /// 環境変数 > 設定ファイル > デフォルト（設定ディレクトリ/projects.json）
    pub fn saved_projects_path(&self) -> Result<PathBuf> {
        if let Ok(path) = std::env::var(SAVED_PATH_ENV) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        match &self.saved_projects_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("projects.json")),
        }
    }

    pub fn set_default_category(&mut self, category: &str) -> Result<()> {
        if let CategoryFilter::Unknown(id) = CategoryFilter::from_id(category) {
            return Err(ThemeGalleryError::Config(format!(
                "不明なカテゴリ '{}' (all/landing/dashboard/portfolio/ecommerce/blog)",
                id
            )));
        }
        self.default_category = category.to_string();
        Ok(())
    }
}
