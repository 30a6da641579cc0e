//! カタログ検索
//!
//! すべて副作用なし・キャッシュなし。結果は常にカタログ順。

use crate::catalog::Catalog;
use crate::types::{CategoryFilter, Theme};

impl Catalog {
    /// カテゴリで絞り込み
    ///
    /// "all" はカタログ全体。該当なし・未知のIDは空を返す。
    pub fn themes_by_category(&self, category_id: &str) -> Vec<&Theme> {
        self.themes_matching(&CategoryFilter::from_id(category_id))
    }

    pub fn themes_matching(&self, filter: &CategoryFilter) -> Vec<&Theme> {
        let themes: Vec<&Theme> = self.themes().iter().filter(|t| filter.matches(t)).collect();
        tracing::debug!(?filter, count = themes.len(), "カテゴリ絞り込み");
        themes
    }

    /// おすすめテーマ
    pub fn featured_themes(&self) -> Vec<&Theme> {
        self.themes().iter().filter(|t| t.is_featured).collect()
    }

    /// 新着テーマ
    pub fn new_themes(&self) -> Vec<&Theme> {
        self.themes().iter().filter(|t| t.is_new).collect()
    }
}

/// 組み込みカタログをカテゴリで絞り込み
pub fn get_themes_by_category(category_id: &str) -> Vec<&'static Theme> {
    Catalog::builtin().themes_by_category(category_id)
}

pub fn get_featured_themes() -> Vec<&'static Theme> {
    Catalog::builtin().featured_themes()
}

pub fn get_new_themes() -> Vec<&'static Theme> {
    Catalog::builtin().new_themes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ThemeCategory, CATEGORIES};

    fn blog_theme(id: &str, is_featured: bool) -> Theme {
        Theme {
            id: id.to_string(),
            title: format!("Theme {}", id),
            description: String::new(),
            category: ThemeCategory::Blog,
            image: String::new(),
            tags: Vec::new(),
            is_featured,
            is_new: false,
        }
    }

    fn ids(themes: &[&Theme]) -> Vec<String> {
        themes.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn test_all_returns_entire_catalog_in_order() {
        let catalog = Catalog::builtin();
        let all = catalog.themes_by_category("all");
        assert_eq!(all.len(), catalog.len());
        for (found, original) in all.iter().zip(catalog.themes()) {
            assert_eq!(found.id, original.id);
        }
    }

    #[test]
    fn test_category_is_exact_subsequence() {
        let catalog = Catalog::builtin();
        for category in ThemeCategory::ALL {
            let expected: Vec<String> = catalog
                .themes()
                .iter()
                .filter(|t| t.category == category)
                .map(|t| t.id.clone())
                .collect();
            assert_eq!(ids(&catalog.themes_by_category(category.id())), expected);
        }
    }

    #[test]
    fn test_every_category_tab_has_results() {
        for category in CATEGORIES {
            assert!(!get_themes_by_category(category.id).is_empty(), "{}", category.id);
        }
    }

    #[test]
    fn test_builtin_counts() {
        assert_eq!(get_themes_by_category("landing").len(), 8);
        assert_eq!(get_themes_by_category("dashboard").len(), 6);
        assert_eq!(get_themes_by_category("portfolio").len(), 2);
        assert_eq!(get_themes_by_category("ecommerce").len(), 1);
        assert_eq!(get_themes_by_category("blog").len(), 1);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        assert!(get_themes_by_category("games").is_empty());
        assert!(get_themes_by_category("").is_empty());
        assert!(get_themes_by_category("ALL").is_empty());
    }

    #[test]
    fn test_featured_themes() {
        let featured = get_featured_themes();
        assert_eq!(ids(&featured), vec!["saas-startup", "admin-dashboard"]);
        assert!(featured.iter().all(|t| t.is_featured));
        // 副作用なし
        assert_eq!(ids(&get_featured_themes()), ids(&featured));
    }

    #[test]
    fn test_new_themes() {
        let new = get_new_themes();
        assert_eq!(ids(&new), vec!["modern-business"]);
    }

    #[test]
    fn test_scenario_blog_catalog() {
        let catalog = Catalog::new(vec![blog_theme("x1", false), blog_theme("x2", true)])
            .expect("カタログ構築失敗");

        assert_eq!(ids(&catalog.themes_by_category("blog")), vec!["x1", "x2"]);
        assert_eq!(ids(&catalog.featured_themes()), vec!["x2"]);
        assert!(catalog.get_theme_by_id("x3").is_none());
        assert!(catalog.themes_by_category("landing").is_empty());
        assert!(catalog.new_themes().is_empty());
    }
}
