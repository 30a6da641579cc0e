//! 一覧ページ（テンプレート・新着・おすすめ）

use leptos::prelude::*;
use theme_gallery_common::{Catalog, CategoryView, Theme};

use crate::components::{category_tabs::CategoryTabs, theme_card::ThemeGrid};

#[component]
fn PageHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="page-header">
            <h1>{title}</h1>
            <p class="text-muted">{subtitle}</p>
        </div>
    }
}

#[component]
pub fn TemplatesPage() -> impl IntoView {
    let catalog = Catalog::builtin();
    let view_state = RwSignal::new(CategoryView::new(catalog, None));

    let active = Signal::derive(move || view_state.with(|v| v.active_category().to_string()));
    let filtered = Signal::derive(move || {
        view_state.with(|v| v.filtered_themes().iter().map(|t| (*t).clone()).collect::<Vec<Theme>>())
    });

    view! {
        <section class="section">
            <PageHeader
                title="Our Templates Collection"
                subtitle="Browse our comprehensive library of beautiful, responsive website templates"
            />
            <CategoryTabs
                categories=catalog.categories()
                active=active
                on_select=move |id: &'static str| view_state.update(|v| v.set_active_category(id))
            />
            <ThemeGrid themes=filtered />
        </section>
    }
}

#[component]
pub fn LatestPage() -> impl IntoView {
    let themes: Vec<Theme> = Catalog::builtin().new_themes().into_iter().cloned().collect();

    view! {
        <section class="section">
            <PageHeader
                title="Latest Templates"
                subtitle="Our newest additions to the template collection"
            />
            <ThemeGrid themes=themes empty_message="Check back soon for our newest designs" />
        </section>
    }
}

#[component]
pub fn FeaturedPage() -> impl IntoView {
    let themes: Vec<Theme> = Catalog::builtin().featured_themes().into_iter().cloned().collect();

    view! {
        <section class="section">
            <PageHeader
                title="Featured Templates"
                subtitle="Our most popular and highly-rated website templates"
            />
            <ThemeGrid themes=themes empty_message="No featured templates yet" />
        </section>
    }
}
