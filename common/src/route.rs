//! URLパスの解釈

use crate::types::ThemeCategory;

/// 一覧ページ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Templates,
    Projects,
    Latest,
    Featured,
}

impl Listing {
    pub fn path(&self) -> &'static str {
        match self {
            Listing::Templates => "/templates",
            Listing::Projects => "/projects",
            Listing::Latest => "/latest",
            Listing::Featured => "/featured",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Listing::Templates => "Templates",
            Listing::Projects => "My Projects",
            Listing::Latest => "Latest",
            Listing::Featured => "Featured",
        }
    }
}

/// ナビゲーションに並べる順
pub const NAV_LISTINGS: [Listing; 4] = [
    Listing::Projects,
    Listing::Latest,
    Listing::Featured,
    Listing::Templates,
];

/// ルート
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    ThemeDetails(String),
    ThemeCode(String),
    /// カテゴリを初期選択したトップページ
    CategoryPreset(ThemeCategory),
    Listing(Listing),
    RequestAccess,
    NotFound,
}

impl Route {
    /// パスを解釈（末尾スラッシュは無視、クエリ・フラグメントは除去）
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["theme", id] => Route::ThemeDetails(id.to_string()),
            ["theme", id, "code"] => Route::ThemeCode(id.to_string()),
            ["templates"] => Route::Listing(Listing::Templates),
            ["projects"] => Route::Listing(Listing::Projects),
            ["latest"] => Route::Listing(Listing::Latest),
            ["featured"] => Route::Listing(Listing::Featured),
            ["request-access"] => Route::RequestAccess,
            [single] => match ThemeCategory::from_id(single) {
                Some(category) => Route::CategoryPreset(category),
                None => Route::NotFound,
            },
            _ => Route::NotFound,
        }
    }

    /// 一覧の初期カテゴリ（カテゴリ別ルートのみ）
    pub fn initial_category(&self) -> Option<&'static str> {
        match self {
            Route::CategoryPreset(category) => Some(category.id()),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::ThemeDetails(id) => format!("/theme/{}", id),
            Route::ThemeCode(id) => format!("/theme/{}/code", id),
            Route::CategoryPreset(category) => format!("/{}", category.id()),
            Route::Listing(listing) => listing.path().to_string(),
            Route::RequestAccess => "/request-access".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_home() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/?ref=nav"), Route::Home);
    }

    #[test]
    fn test_parse_theme_routes() {
        assert_eq!(Route::parse("/theme/chat-app"), Route::ThemeDetails("chat-app".into()));
        assert_eq!(Route::parse("/theme/chat-app/"), Route::ThemeDetails("chat-app".into()));
        assert_eq!(Route::parse("/theme/chat-app/code"), Route::ThemeCode("chat-app".into()));
        assert_eq!(Route::parse("/theme"), Route::NotFound);
        assert_eq!(Route::parse("/theme/a/b"), Route::NotFound);
    }

    #[test]
    fn test_parse_category_presets() {
        for category in ThemeCategory::ALL {
            let route = Route::parse(&format!("/{}", category.id()));
            assert_eq!(route, Route::CategoryPreset(category));
            assert_eq!(route.initial_category(), Some(category.id()));
        }
    }

    #[test]
    fn test_parse_listings() {
        for listing in NAV_LISTINGS {
            assert_eq!(Route::parse(listing.path()), Route::Listing(listing));
        }
        assert_eq!(Route::parse("/templates").initial_category(), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Route::parse("/games"), Route::NotFound);
        assert_eq!(Route::parse("/all"), Route::NotFound);
        assert_eq!(Route::parse("/Landing"), Route::NotFound);
    }

    #[test]
    fn test_path_roundtrip() {
        let routes = [
            Route::Home,
            Route::ThemeDetails("saas-startup".into()),
            Route::ThemeCode("saas-startup".into()),
            Route::CategoryPreset(ThemeCategory::Blog),
            Route::Listing(Listing::Latest),
            Route::RequestAccess,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }
}
