//! 保存済みプロジェクト
//!
//! ユーザーが選んだテーマのコピーを保持する。永続化先はリポジトリで差し替える
//! （ブラウザのlocalStorage / JSONファイル / テスト用メモリ）。
//! 保存データが壊れている場合は空リストとして扱う。

use crate::error::Result;
use crate::types::Theme;

/// localStorage / ファイルに保存する際のキー
pub const SAVED_PROJECTS_KEY: &str = "userProjects";

/// 保存済みリストの永続化先
pub trait SavedProjectsRepository {
    /// 読み込み（欠損・破損時は空）
    fn load(&self) -> Vec<Theme>;

    /// リスト全体を書き込み
    fn save(&mut self, themes: &[Theme]) -> Result<()>;
}

/// トグル結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Added,
    Removed,
}

/// 保存済みプロジェクトストア
#[derive(Debug, Clone)]
pub struct SavedProjects<R> {
    repository: R,
    items: Vec<Theme>,
}

impl<R: SavedProjectsRepository> SavedProjects<R> {
    /// リポジトリから読み込んで作成
    pub fn open(repository: R) -> Self {
        let items = load_unique(&repository);
        Self { repository, items }
    }

    pub fn items(&self) -> &[Theme] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn is_saved(&self, theme_id: &str) -> bool {
        self.items.iter().any(|t| t.id == theme_id)
    }

    /// 保存済みなら削除、未保存なら末尾に追加し、即座に全体を書き込む
    ///
    /// 他のタブ・プロセスの変更を失わないよう、毎回リポジトリから読み直す。
    /// 書き込みに失敗した場合、手元のリストは変更しない。
    pub fn toggle_saved(&mut self, theme: &Theme) -> Result<SaveOutcome> {
        let mut next = load_unique(&self.repository);
        let outcome = if next.iter().any(|t| t.id == theme.id) {
            next.retain(|t| t.id != theme.id);
            SaveOutcome::Removed
        } else {
            next.push(theme.clone());
            SaveOutcome::Added
        };

        self.repository.save(&next)?;
        self.items = next;
        tracing::info!(theme_id = %theme.id, ?outcome, count = self.items.len(), "保存済みリスト更新");
        Ok(outcome)
    }

    /// IDで削除（存在しなければ書き込まない）
    pub fn remove(&mut self, theme_id: &str) -> Result<bool> {
        let mut next = load_unique(&self.repository);
        let before = next.len();
        next.retain(|t| t.id != theme_id);
        if next.len() == before {
            self.items = next;
            return Ok(false);
        }

        self.repository.save(&next)?;
        self.items = next;
        tracing::info!(theme_id, count = self.items.len(), "保存済みリストから削除");
        Ok(true)
    }
}

/// 読み込んで重複IDを除く（先勝ち）
fn load_unique<R: SavedProjectsRepository>(repository: &R) -> Vec<Theme> {
    let mut items = repository.load();
    let mut seen = std::collections::HashSet::new();
    items.retain(|t| seen.insert(t.id.clone()));
    items
}

/// メモリ上のリポジトリ（テスト・永続化不要時）
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    stored: Option<String>,
    writes: usize,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 任意の保存データで初期化
    pub fn with_raw(raw: &str) -> Self {
        Self {
            stored: Some(raw.to_string()),
            writes: 0,
        }
    }

    /// 保存されている生データ
    pub fn raw(&self) -> Option<&str> {
        self.stored.as_deref()
    }

    /// 書き込み回数
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SavedProjectsRepository for MemoryRepository {
    fn load(&self) -> Vec<Theme> {
        self.stored.as_deref().map(parse_saved).unwrap_or_default()
    }

    fn save(&mut self, themes: &[Theme]) -> Result<()> {
        self.stored = Some(serde_json::to_string(themes)?);
        self.writes += 1;
        Ok(())
    }
}

/// JSONファイルのリポジトリ（wasm32以外）
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl JsonFileRepository {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SavedProjectsRepository for JsonFileRepository {
    fn load(&self) -> Vec<Theme> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => parse_saved(&content),
            Err(_) => Vec::new(),
        }
    }

    fn save(&mut self, themes: &[Theme]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(themes)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

/// 保存データを解析（破損時は空）
pub fn parse_saved(raw: &str) -> Vec<Theme> {
    match serde_json::from_str(raw) {
        Ok(themes) => themes,
        Err(e) => {
            tracing::warn!(error = %e, "保存済みリストが不正なため空として扱います");
            Vec::new()
        }
    }
}
