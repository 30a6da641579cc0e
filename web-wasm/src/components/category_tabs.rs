//! カテゴリタブ

use leptos::prelude::*;
use theme_gallery_common::Category;

#[component]
pub fn CategoryTabs<F>(
    categories: &'static [Category],
    active: Signal<String>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(&'static str) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="category-tabs" role="tablist">
            {categories
                .iter()
                .map(|category| {
                    let id = category.id;
                    let on_select = on_select.clone();
                    view! {
                        <button
                            class="category-tab"
                            role="tab"
                            class:active=move || active.get() == id
                            on:click=move |_| on_select(id)
                        >
                            {category.label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
