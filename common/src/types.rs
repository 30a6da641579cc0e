//! カタログの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Theme: テンプレート1件
//! - ThemeCategory: テンプレートの分類（固定）
//! - Category: カテゴリタブの定義（ワイルドカード "all" を含む）
//! - CategoryFilter: カテゴリIDの解釈結果

use serde::{Deserialize, Serialize};
use std::fmt;

/// ワイルドカードのカテゴリID
pub const ALL_CATEGORY_ID: &str = "all";

/// コンパクト表示（カード等）で表示するタグ数
pub const COMPACT_TAG_COUNT: usize = 3;

/// テンプレートの分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeCategory {
    Landing,
    Dashboard,
    Portfolio,
    Ecommerce,
    Blog,
}

impl ThemeCategory {
    /// カタログ表示順の全カテゴリ
    pub const ALL: [ThemeCategory; 5] = [
        ThemeCategory::Landing,
        ThemeCategory::Dashboard,
        ThemeCategory::Portfolio,
        ThemeCategory::Ecommerce,
        ThemeCategory::Blog,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ThemeCategory::Landing => "landing",
            ThemeCategory::Dashboard => "dashboard",
            ThemeCategory::Portfolio => "portfolio",
            ThemeCategory::Ecommerce => "ecommerce",
            ThemeCategory::Blog => "blog",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeCategory::Landing => "Landing Pages",
            ThemeCategory::Dashboard => "Dashboards",
            ThemeCategory::Portfolio => "Portfolio",
            ThemeCategory::Ecommerce => "E-Commerce",
            ThemeCategory::Blog => "Blog",
        }
    }

    /// IDから変換（大文字小文字は区別する）
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

impl fmt::Display for ThemeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// カテゴリタブの定義
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
}

/// カテゴリタブ一覧（先頭は "all"）
pub const CATEGORIES: [Category; 6] = [
    Category { id: ALL_CATEGORY_ID, label: "All Themes" },
    Category { id: "landing", label: "Landing Pages" },
    Category { id: "dashboard", label: "Dashboards" },
    Category { id: "portfolio", label: "Portfolio" },
    Category { id: "ecommerce", label: "E-Commerce" },
    Category { id: "blog", label: "Blog" },
];

/// カテゴリIDの解釈結果
///
/// 文字列比較はここに集約し、未知のIDはエラーにせず `Unknown` として保持する
/// （絞り込み結果は空になる）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(ThemeCategory),
    Unknown(String),
}

impl CategoryFilter {
    pub fn from_id(id: &str) -> Self {
        if id == ALL_CATEGORY_ID {
            return CategoryFilter::All;
        }
        match ThemeCategory::from_id(id) {
            Some(category) => CategoryFilter::Category(category),
            None => CategoryFilter::Unknown(id.to_string()),
        }
    }

    /// テーマがこの条件に一致するか
    pub fn matches(&self, theme: &Theme) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => theme.category == *category,
            CategoryFilter::Unknown(_) => false,
        }
    }
}

/// テンプレート1件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ThemeCategory,
    pub image: String,

    /// 表示順に意味がある（コンパクト表示では先頭のみ）
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default)]
    pub is_new: bool,
}

impl Theme {
    /// 先頭 `limit` 件のタグ
    pub fn compact_tags(&self, limit: usize) -> &[String] {
        &self.tags[..self.tags.len().min(limit)]
    }

    /// タイトルの先頭単語（サンプルコードのブランド名に使う）
    pub fn brand(&self) -> &str {
        self.title.split_whitespace().next().unwrap_or(&self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_theme() -> Theme {
        Theme {
            id: "saas-startup".to_string(),
            title: "SaaS Startup Landing Page".to_string(),
            description: "Modern landing page".to_string(),
            category: ThemeCategory::Landing,
            image: "/uploads/saas.png".to_string(),
            tags: vec!["Landing Page".into(), "SaaS".into(), "Startup".into(), "Extra".into()],
            is_featured: true,
            is_new: false,
        }
    }

    #[test]
    fn test_theme_category_from_id() {
        assert_eq!(ThemeCategory::from_id("blog"), Some(ThemeCategory::Blog));
        assert_eq!(ThemeCategory::from_id("ecommerce"), Some(ThemeCategory::Ecommerce));
        assert_eq!(ThemeCategory::from_id("Blog"), None);
        assert_eq!(ThemeCategory::from_id("all"), None);
    }

    #[test]
    fn test_categories_match_theme_category_ids() {
        assert_eq!(CATEGORIES[0].id, ALL_CATEGORY_ID);
        for (category, theme_category) in CATEGORIES[1..].iter().zip(ThemeCategory::ALL) {
            assert_eq!(category.id, theme_category.id());
            assert_eq!(category.label, theme_category.label());
        }
    }

    #[test]
    fn test_category_filter_from_id() {
        assert_eq!(CategoryFilter::from_id("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_id("dashboard"),
            CategoryFilter::Category(ThemeCategory::Dashboard)
        );
        assert_eq!(
            CategoryFilter::from_id("games"),
            CategoryFilter::Unknown("games".to_string())
        );
    }

    #[test]
    fn test_category_filter_matches() {
        let theme = sample_theme();
        assert!(CategoryFilter::All.matches(&theme));
        assert!(CategoryFilter::Category(ThemeCategory::Landing).matches(&theme));
        assert!(!CategoryFilter::Category(ThemeCategory::Blog).matches(&theme));
        assert!(!CategoryFilter::Unknown("landing ".into()).matches(&theme));
    }

    #[test]
    fn test_compact_tags() {
        let theme = sample_theme();
        assert_eq!(theme.compact_tags(COMPACT_TAG_COUNT), &theme.tags[..3]);
        assert_eq!(theme.compact_tags(10).len(), 4);
        assert!(theme.compact_tags(0).is_empty());
    }

    #[test]
    fn test_brand() {
        assert_eq!(sample_theme().brand(), "SaaS");
    }

    #[test]
    fn test_theme_serialize() {
        let json = serde_json::to_string(&sample_theme()).expect("シリアライズ失敗");
        assert!(json.contains("\"category\":\"landing\""));
        assert!(json.contains("\"isFeatured\":true"));
        assert!(json.contains("\"isNew\":false"));
    }

    #[test]
    fn test_theme_deserialize_missing_flags() {
        // フラグ省略時は false
        let json = r#"{
            "id": "professional-blog",
            "title": "Professional Blog Website",
            "description": "Elegant blog",
            "category": "blog",
            "image": "/uploads/blog.png",
            "tags": ["Blog", "Content"]
        }"#;

        let theme: Theme = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(theme.category, ThemeCategory::Blog);
        assert!(!theme.is_featured);
        assert!(!theme.is_new);
        assert_eq!(theme.tags, vec!["Blog".to_string(), "Content".to_string()]);
    }

    #[test]
    fn test_theme_deserialize_unknown_category() {
        let json = r#"{"id":"x","title":"X","description":"","category":"games","image":""}"#;
        assert!(serde_json::from_str::<Theme>(json).is_err());
    }
}
