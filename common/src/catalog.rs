//! テンプレートカタログ
//!
//! 実行中は読み取り専用。組み込みカタログは初回アクセス時に一度だけ構築される。

use crate::error::{Error, Result};
use crate::types::{Category, Theme, ThemeCategory, CATEGORIES};
use std::collections::HashSet;

const IMAGE_A: &str = "/lovable-uploads/5099c16b-b29a-4ade-9ead-d9483bb3476a.png";
const IMAGE_B: &str = "/lovable-uploads/f996413c-0dad-4b31-95c6-d378fe3dce49.png";

lazy_static::lazy_static! {
    static ref BUILTIN: Catalog = Catalog {
        themes: builtin_themes(),
    };
}

/// テンプレートカタログ
#[derive(Debug, Clone)]
pub struct Catalog {
    themes: Vec<Theme>,
}

impl Catalog {
    /// テーマ一覧からカタログを構築（IDの重複はエラー）
    pub fn new(themes: Vec<Theme>) -> Result<Self> {
        let mut seen = HashSet::new();
        for theme in &themes {
            if !seen.insert(theme.id.as_str()) {
                return Err(Error::DuplicateThemeId(theme.id.clone()));
            }
        }
        Ok(Self { themes })
    }

    /// 組み込みカタログ
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// JSON配列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let themes: Vec<Theme> = serde_json::from_str(json)?;
        Self::new(themes)
    }

    /// JSONファイルから読み込み（wasm32以外）
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn categories(&self) -> &'static [Category] {
        &CATEGORIES
    }

    /// IDでテーマを検索（見つからない場合は None）
    pub fn get_theme_by_id(&self, id: &str) -> Option<&Theme> {
        self.themes.iter().find(|theme| theme.id == id)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

/// 組み込みカタログからIDで検索
pub fn get_theme_by_id(id: &str) -> Option<&'static Theme> {
    Catalog::builtin().get_theme_by_id(id)
}

fn theme(
    id: &str,
    title: &str,
    description: &str,
    category: ThemeCategory,
    image: &str,
    tags: &[&str],
) -> Theme {
    Theme {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category,
        image: image.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        is_featured: false,
        is_new: false,
    }
}

fn featured(mut theme: Theme) -> Theme {
    theme.is_featured = true;
    theme
}

fn new_arrival(mut theme: Theme) -> Theme {
    theme.is_new = true;
    theme
}

fn builtin_themes() -> Vec<Theme> {
    use ThemeCategory::*;

    vec![
        featured(theme(
            "saas-startup",
            "SaaS Startup Landing Page",
            "Modern, clean landing page design perfect for SaaS startups looking to showcase their products.",
            Landing,
            IMAGE_A,
            &["Landing Page", "SaaS", "Startup"],
        )),
        new_arrival(theme(
            "modern-business",
            "Modern Business Landing Page",
            "Elegant business landing page with a modern design for corporate and business websites.",
            Landing,
            IMAGE_B,
            &["Landing Page", "Business", "Corporate"],
        )),
        theme(
            "corporate-website",
            "Corporate Website Landing Page",
            "Professional corporate website design with sections for services, team, and contact information.",
            Landing,
            IMAGE_A,
            &["Corporate", "Business", "Professional"],
        ),
        theme(
            "high-converting-saas",
            "High-Converting SaaS Product Page",
            "Conversion-focused product page design for SaaS applications with clear call-to-actions.",
            Landing,
            IMAGE_B,
            &["SaaS", "Product Page", "Conversion"],
        ),
        theme(
            "technology-company",
            "Technology Company Landing Page",
            "Bold and innovative landing page design for technology companies and startups.",
            Landing,
            IMAGE_A,
            &["Technology", "Landing Page", "Innovation"],
        ),
        theme(
            "real-estate-agent",
            "Real Estate Agent Landing Page",
            "Elegant landing page design for real estate agents featuring property showcases.",
            Landing,
            IMAGE_B,
            &["Real Estate", "Landing Page", "Property"],
        ),
        theme(
            "developer-portfolio",
            "Developer Portfolio Landing Page",
            "Clean and minimalist portfolio design for developers to showcase their work and skills.",
            Portfolio,
            IMAGE_A,
            &["Portfolio", "Developer", "Personal"],
        ),
        theme(
            "software-product",
            "Software Product Landing Page",
            "Feature-rich landing page design for software products with detailed feature breakdowns.",
            Landing,
            IMAGE_B,
            &["Software", "Product", "Landing Page"],
        ),
        featured(theme(
            "admin-dashboard",
            "Professional Admin Dashboard",
            "Clean and intuitive admin dashboard design with data visualization components.",
            Dashboard,
            IMAGE_A,
            &["Admin", "Dashboard", "Analytics"],
        )),
        theme(
            "crypto-dashboard",
            "Cryptocurrency Trading Dashboard",
            "Real-time cryptocurrency trading dashboard with charts and market data.",
            Dashboard,
            IMAGE_B,
            &["Cryptocurrency", "Trading", "Dashboard"],
        ),
        theme(
            "creative-portfolio",
            "Creative Portfolio Website",
            "Expressive portfolio website design for creative professionals and artists.",
            Portfolio,
            IMAGE_A,
            &["Portfolio", "Creative", "Artist"],
        ),
        theme(
            "crm-dashboard",
            "Customer Relationship Management Dashboard",
            "Comprehensive CRM dashboard for managing customer interactions and relationships.",
            Dashboard,
            IMAGE_B,
            &["CRM", "Dashboard", "Customer"],
        ),
        theme(
            "analytics-dashboard",
            "Analytics Dashboard",
            "Data-focused analytics dashboard with multiple visualization options.",
            Dashboard,
            IMAGE_A,
            &["Analytics", "Dashboard", "Data"],
        ),
        theme(
            "chat-app",
            "Modern Chat Application UI",
            "Clean and intuitive user interface for messaging and chat applications.",
            Dashboard,
            IMAGE_B,
            &["Chat", "Messaging", "UI"],
        ),
        theme(
            "online-marketplace",
            "Online Marketplace Website",
            "Feature-rich marketplace website design with product listings and user profiles.",
            Ecommerce,
            IMAGE_A,
            &["Marketplace", "E-commerce", "Shopping"],
        ),
        theme(
            "professional-blog",
            "Professional Blog Website",
            "Elegant blog website design with article layouts and category navigation.",
            Blog,
            IMAGE_B,
            &["Blog", "Content", "Articles"],
        ),
        theme(
            "business-directory",
            "Business Directory Website",
            "Comprehensive business directory website with listing and search functionality.",
            Landing,
            IMAGE_A,
            &["Directory", "Business", "Listings"],
        ),
        theme(
            "ai-chat-interface",
            "AI Chat Interface",
            "Modern chat interface design for AI and chatbot applications.",
            Dashboard,
            IMAGE_B,
            &["AI", "Chat", "Chatbot"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_size() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 18);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let catalog = Catalog::builtin();
        // 検証付きコンストラクタで再構築できること
        let rebuilt = Catalog::new(catalog.themes().to_vec()).expect("重複IDがある");
        assert_eq!(rebuilt.len(), catalog.len());
    }

    #[test]
    fn test_get_theme_by_id_found() {
        for theme in Catalog::builtin().themes() {
            let found = get_theme_by_id(&theme.id).expect("テーマが見つからない");
            assert_eq!(found.id, theme.id);
        }
    }

    #[test]
    fn test_get_theme_by_id_not_found() {
        assert!(get_theme_by_id("x3").is_none());
        assert!(get_theme_by_id("").is_none());
        assert!(get_theme_by_id("SAAS-STARTUP").is_none());
    }

    #[test]
    fn test_builtin_flags() {
        let catalog = Catalog::builtin();
        let saas = catalog.get_theme_by_id("saas-startup").expect("saas-startup");
        assert!(saas.is_featured);
        assert!(!saas.is_new);

        let business = catalog.get_theme_by_id("modern-business").expect("modern-business");
        assert!(business.is_new);
        assert!(!business.is_featured);
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let theme = Catalog::builtin().themes()[0].clone();
        let result = Catalog::new(vec![theme.clone(), theme]);
        assert!(matches!(result, Err(Error::DuplicateThemeId(id)) if id == "saas-startup"));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": "x1", "title": "One", "description": "", "category": "blog", "image": ""},
            {"id": "x2", "title": "Two", "description": "", "category": "blog", "image": "", "isFeatured": true}
        ]"#;

        let catalog = Catalog::from_json(json).expect("読み込み失敗");
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get_theme_by_id("x2").expect("x2").is_featured);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(Catalog::from_json("{ invalid"), Err(Error::Json(_))));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("catalog.json");
        let json = serde_json::to_string(Catalog::builtin().themes()).expect("シリアライズ失敗");
        std::fs::write(&path, json).expect("書き込み失敗");

        let catalog = Catalog::from_file(&path).expect("読み込み失敗");
        assert_eq!(catalog.themes(), Catalog::builtin().themes());
    }

    #[test]
    fn test_categories_start_with_all() {
        let categories = Catalog::builtin().categories();
        assert_eq!(categories.len(), 6);
        assert_eq!(categories[0].id, "all");
        assert_eq!(categories[0].label, "All Themes");
    }
}
