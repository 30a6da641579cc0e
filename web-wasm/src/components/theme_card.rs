//! テーマカード・グリッド

use crate::navigation::Link;
use leptos::prelude::*;
use theme_gallery_common::{Route, Theme, COMPACT_TAG_COUNT};

#[component]
pub fn ThemeGrid(
    #[prop(into)] themes: Signal<Vec<Theme>>,
    #[prop(optional, into)] empty_message: Option<String>,
) -> impl IntoView {
    let empty_message = empty_message.unwrap_or_else(|| "No templates found".to_string());

    view! {
        <Show
            when=move || !themes.with(|t| t.is_empty())
            fallback=move || view! { <p class="text-muted">{empty_message.clone()}</p> }
        >
            <div class="theme-grid">
                <For
                    each=move || themes.get()
                    key=|theme| theme.id.clone()
                    children=|theme| view! { <ThemeCard theme=theme /> }
                />
            </div>
        </Show>
    }
}

#[component]
pub fn ThemeCard(theme: Theme) -> impl IntoView {
    // 画像の読み込み完了まではプレースホルダを表示
    let (image_loaded, set_image_loaded) = signal(false);
    let details_path = Route::ThemeDetails(theme.id.clone()).path();
    let is_featured = theme.is_featured;
    let is_new = theme.is_new;

    let tags = theme
        .compact_tags(COMPACT_TAG_COUNT)
        .iter()
        .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
        .collect_view();

    view! {
        <article class="theme-card">
            <div class="theme-card-image" class:loaded=move || image_loaded.get()>
                <Show when=move || !image_loaded.get()>
                    <div class="image-placeholder"></div>
                </Show>
                <img
                    src=theme.image.clone()
                    alt=theme.title.clone()
                    loading="lazy"
                    on:load=move |_| set_image_loaded.set(true)
                />
                <div class="badges">
                    <Show when=move || is_featured>
                        <span class="badge badge-featured">"Featured"</span>
                    </Show>
                    <Show when=move || is_new>
                        <span class="badge badge-new">"New"</span>
                    </Show>
                </div>
            </div>

            <div class="theme-card-body">
                <h3 class="theme-card-title">{theme.title.clone()}</h3>
                <p class="theme-card-description">{theme.description.clone()}</p>
                <div class="tags">{tags}</div>
                <Link href=details_path class="btn btn-secondary btn-small">
                    "View Details"
                </Link>
            </div>
        </article>
    }
}

/// おすすめ用の大きいカード（タグは全件表示）
#[component]
pub fn FeaturedThemeCard(theme: Theme) -> impl IntoView {
    let (image_loaded, set_image_loaded) = signal(false);
    let details_path = Route::ThemeDetails(theme.id.clone()).path();

    view! {
        <article class="featured-card">
            <div class="featured-card-body">
                <h2>{theme.title.clone()}</h2>
                <p class="text-muted">{theme.description.clone()}</p>
                <div class="tags">
                    {theme.tags.iter().map(|tag| view! { <span class="tag">{tag.clone()}</span> }).collect_view()}
                </div>
                <Link href=details_path class="link-arrow">
                    "View Theme →"
                </Link>
            </div>
            <div class="featured-card-image" class:loaded=move || image_loaded.get()>
                <img
                    src=theme.image.clone()
                    alt=theme.title.clone()
                    on:load=move |_| set_image_loaded.set(true)
                />
            </div>
        </article>
    }
}
