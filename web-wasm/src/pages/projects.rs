//! マイプロジェクト

use leptos::prelude::*;
use theme_gallery_common::{Listing, Theme};

use crate::app::SavedStore;
use crate::components::theme_card::ThemeGrid;
use crate::navigation::Link;

#[component]
pub fn ProjectsPage(saved: SavedStore) -> impl IntoView {
    let themes = Signal::derive(move || saved.with(|s| s.items().to_vec()));

    view! {
        <section class="section">
            <div class="page-header">
                <h1>"My Projects"</h1>
                <p class="text-muted">"Your saved templates and current projects"</p>
            </div>

            <Show
                when=move || themes.with(|t: &Vec<Theme>| !t.is_empty())
                fallback=|| view! {
                    <div class="empty-state">
                        <h3>"No projects yet"</h3>
                        <p class="text-muted">"Browse our templates and select ones you'd like to use"</p>
                        <Link href=Listing::Templates.path() class="btn btn-primary">"Browse Templates"</Link>
                    </div>
                }
            >
                <ThemeGrid themes=themes />
            </Show>
        </section>
    }
}
