//! テーマ詳細（保存/削除の切り替え）

use leptos::prelude::*;
use theme_gallery_common::{Catalog, Listing, Notification, Notifier, Route, SaveOutcome, Theme};

use crate::app::SavedStore;
use crate::components::toast::ToastNotifier;
use crate::navigation::Link;

const FEATURES: [&str; 5] = [
    "Fully responsive design",
    "Modern UI components",
    "Easy customization",
    "Optimized for performance",
    "Cross-browser compatibility",
];

#[component]
pub fn ThemeDetailsPage(id: String, saved: SavedStore, notifier: ToastNotifier) -> impl IntoView {
    match Catalog::builtin().get_theme_by_id(&id) {
        Some(theme) => view! { <ThemeDetails theme=theme.clone() saved=saved notifier=notifier /> }.into_any(),
        None => view! { <TemplateNotFound /> }.into_any(),
    }
}

#[component]
fn ThemeDetails(theme: Theme, saved: SavedStore, notifier: ToastNotifier) -> impl IntoView {
    let theme_id = theme.id.clone();
    let is_saved = Memo::new(move |_| saved.with(|s| s.is_saved(&theme_id)));
    let code_path = Route::ThemeCode(theme.id.clone()).path();
    let category = theme.category;

    let toggle_theme = theme.clone();
    let on_toggle = move |_: leptos::ev::MouseEvent| {
        let mut result = None;
        saved.update(|s| result = Some(s.toggle_saved(&toggle_theme)));

        let mut notifier = notifier;
        match result {
            Some(Ok(SaveOutcome::Added)) => notifier.notify(Notification::ProjectSaved {
                title: toggle_theme.title.clone(),
            }),
            Some(Ok(SaveOutcome::Removed)) => notifier.notify(Notification::ProjectRemoved {
                title: toggle_theme.title.clone(),
            }),
            Some(Err(e)) => gloo::console::error!(format!("保存失敗: {}", e)),
            None => {}
        }
    };

    view! {
        <section class="section theme-details">
            <div class="page-header">
                <h1>{theme.title.clone()}</h1>
                <p class="text-muted">{theme.description.clone()}</p>
                <div class="tags">
                    {theme.tags.iter().map(|tag| view! { <span class="tag">{tag.clone()}</span> }).collect_view()}
                </div>
                <div class="actions">
                    <button
                        class="btn"
                        class:btn-outline=move || is_saved.get()
                        class:btn-primary=move || !is_saved.get()
                        on:click=on_toggle
                    >
                        {move || if is_saved.get() { "Remove from Projects" } else { "Save to My Projects" }}
                    </button>
                    <Link href=code_path class="btn btn-secondary">"View Code"</Link>
                </div>
            </div>

            <div class="preview">
                <img src=theme.image.clone() alt=theme.title.clone() />
            </div>

            <div class="card">
                <h2>"About this template"</h2>
                <p class="text-muted">
                    {format!(
                        "This {} template is perfect for creating professional websites quickly. It comes with a responsive design that works on all devices and is easy to customize.",
                        category
                    )}
                </p>
            </div>

            <div class="card">
                <h2>"Features"</h2>
                <ul class="feature-list">
                    {FEATURES.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                </ul>
            </div>
        </section>
    }
}

#[component]
fn TemplateNotFound() -> impl IntoView {
    view! {
        <section class="section not-found">
            <h1>"Template Not Found"</h1>
            <p class="text-muted">"The template you're looking for doesn't exist."</p>
            <Link href=Listing::Templates.path() class="btn btn-primary">"Browse Templates"</Link>
        </section>
    }
}
