//! 一覧ページの表示状態
//!
//! 選択中カテゴリと絞り込み結果を常に一致させる。ページごとに1インスタンスを所有する。

use crate::catalog::Catalog;
use crate::types::{Theme, ALL_CATEGORY_ID};

/// カテゴリタブの状態
#[derive(Debug, Clone)]
pub struct CategoryView<'a> {
    catalog: &'a Catalog,
    active_category: String,
    /// 最後に外部（ルート）から渡された初期カテゴリ
    preset: Option<String>,
    filtered_themes: Vec<&'a Theme>,
}

impl<'a> CategoryView<'a> {
    /// 初期カテゴリ（未指定なら "all"）で作成
    pub fn new(catalog: &'a Catalog, initial_category: Option<&str>) -> Self {
        let active_category = initial_category.unwrap_or(ALL_CATEGORY_ID).to_string();
        let filtered_themes = catalog.themes_by_category(&active_category);
        Self {
            catalog,
            active_category,
            preset: initial_category.map(str::to_string),
            filtered_themes,
        }
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn filtered_themes(&self) -> &[&'a Theme] {
        &self.filtered_themes
    }

    pub fn is_active(&self, category_id: &str) -> bool {
        self.active_category == category_id
    }

    /// カテゴリを切り替えて再絞り込み（差分更新はしない）
    pub fn set_active_category(&mut self, category_id: &str) {
        tracing::debug!(from = %self.active_category, to = category_id, "カテゴリ切替");
        self.active_category = category_id.to_string();
        self.filtered_themes = self.catalog.themes_by_category(&self.active_category);
    }

    /// ルートから渡される初期カテゴリの変化に追従
    ///
    /// 同じ値が再度渡された場合はユーザーのタブ選択を維持する。
    pub fn sync_initial_category(&mut self, initial_category: Option<&str>) {
        if self.preset.as_deref() == initial_category {
            return;
        }
        self.preset = initial_category.map(str::to_string);
        self.set_active_category(initial_category.unwrap_or(ALL_CATEGORY_ID));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(themes: &[&Theme]) -> Vec<String> {
        themes.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn test_default_is_all() {
        let catalog = Catalog::builtin();
        let view = CategoryView::new(catalog, None);
        assert_eq!(view.active_category(), "all");
        assert_eq!(view.filtered_themes().len(), catalog.len());
        assert!(view.is_active("all"));
    }

    #[test]
    fn test_initial_category() {
        let catalog = Catalog::builtin();
        let view = CategoryView::new(catalog, Some("dashboard"));
        assert_eq!(view.active_category(), "dashboard");
        assert_eq!(ids(view.filtered_themes()), ids(&catalog.themes_by_category("dashboard")));
    }

    #[test]
    fn test_set_active_category() {
        let catalog = Catalog::builtin();
        let mut view = CategoryView::new(catalog, Some("dashboard"));

        view.set_active_category("blog");
        assert_eq!(view.active_category(), "blog");
        assert_eq!(ids(view.filtered_themes()), ids(&catalog.themes_by_category("blog")));
        assert!(!view.is_active("dashboard"));
    }

    #[test]
    fn test_unknown_category_yields_empty() {
        let mut view = CategoryView::new(Catalog::builtin(), None);
        view.set_active_category("games");
        assert_eq!(view.active_category(), "games");
        assert!(view.filtered_themes().is_empty());

        // 戻せること
        view.set_active_category("all");
        assert_eq!(view.filtered_themes().len(), Catalog::builtin().len());
    }

    #[test]
    fn test_sync_initial_category_changes_preset() {
        let catalog = Catalog::builtin();
        let mut view = CategoryView::new(catalog, Some("landing"));

        view.sync_initial_category(Some("portfolio"));
        assert_eq!(view.active_category(), "portfolio");
        assert_eq!(ids(view.filtered_themes()), ids(&catalog.themes_by_category("portfolio")));

        // プリセットなしのルートへ
        view.sync_initial_category(None);
        assert_eq!(view.active_category(), "all");
        assert_eq!(view.filtered_themes().len(), catalog.len());
    }

    #[test]
    fn test_sync_same_preset_keeps_user_choice() {
        let mut view = CategoryView::new(Catalog::builtin(), Some("landing"));
        view.set_active_category("blog");

        view.sync_initial_category(Some("landing"));
        assert_eq!(view.active_category(), "blog");
    }

    #[test]
    fn test_filtered_themes_stay_consistent() {
        let catalog = Catalog::builtin();
        let mut view = CategoryView::new(catalog, None);
        for category in catalog.categories() {
            view.set_active_category(category.id);
            assert_eq!(
                ids(view.filtered_themes()),
                ids(&catalog.themes_by_category(view.active_category()))
            );
        }
    }
}
