//! トップページ（ヒーロー、おすすめ、カテゴリ別一覧）

use leptos::prelude::*;
use theme_gallery_common::{Catalog, CategoryView, Theme};

use crate::components::{
    category_tabs::CategoryTabs,
    theme_card::{FeaturedThemeCard, ThemeGrid},
};

#[component]
pub fn HomePage(initial_category: Signal<Option<&'static str>>) -> impl IntoView {
    let catalog = Catalog::builtin();
    let view_state = RwSignal::new(CategoryView::new(catalog, initial_category.get_untracked()));

    // /landing → /blog のようにURLのカテゴリが変わったときだけ選択をリセット
    Effect::new(move |_| {
        let initial = initial_category.get();
        view_state.update(|v| v.sync_initial_category(initial));
    });

    let active = Signal::derive(move || view_state.with(|v| v.active_category().to_string()));
    let filtered = Signal::derive(move || {
        view_state.with(|v| v.filtered_themes().iter().map(|t| (*t).clone()).collect::<Vec<Theme>>())
    });
    let on_select = move |id: &'static str| view_state.update(|v| v.set_active_category(id));

    let featured: Vec<Theme> = catalog.featured_themes().into_iter().cloned().collect();
    let has_featured = !featured.is_empty();

    view! {
        <section class="hero">
            <span class="hero-eyebrow">"The ultimate theme collection"</span>
            <h1>"Beautiful website templates for your next project"</h1>
            <p class="text-muted">
                "Discover premium, responsive website templates designed with attention to detail. From landing pages to dashboards, find the perfect starting point."
            </p>
            <div class="hero-actions">
                <a href="#themes" class="btn btn-primary">"Explore Themes"</a>
                <a href="#featured" class="btn btn-secondary">"View Featured"</a>
            </div>
        </section>

        <Show when=move || has_featured>
            <section id="featured" class="section">
                <div class="section-header">
                    <h2>"Featured Templates"</h2>
                    <p class="text-muted">"Our most popular and highly-rated website templates for your next project"</p>
                </div>
                <div class="featured-list">
                    {featured
                        .iter()
                        .map(|theme| view! { <FeaturedThemeCard theme=theme.clone() /> })
                        .collect_view()}
                </div>
            </section>
        </Show>

        <section id="themes" class="section section-muted">
            <div class="section-header">
                <h2>"Browse All Templates"</h2>
                <p class="text-muted">"Find the perfect template for your project from our collection"</p>
            </div>
            <CategoryTabs categories=catalog.categories() active=active on_select=on_select />
            <ThemeGrid themes=filtered />
        </section>

        <section class="section cta">
            <h2>"Ready to build your next website?"</h2>
            <p class="text-muted">"Get started with our premium templates and create a stunning website in minutes."</p>
            <a href="#themes" class="btn btn-primary">"Explore All Templates"</a>
        </section>
    }
}
