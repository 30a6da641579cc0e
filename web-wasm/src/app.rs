//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use theme_gallery_common::{Listing, Route, SavedProjects};

use crate::components::{
    navbar::Navbar,
    toast::{ToastContainer, ToastMessage, ToastNotifier},
};
use crate::navigation::{current_route, Navigator};
use crate::pages::{
    home::HomePage,
    listings::{FeaturedPage, LatestPage, TemplatesPage},
    not_found::NotFoundPage,
    projects::ProjectsPage,
    request_access::RequestAccessPage,
    theme_code::ThemeCodePage,
    theme_details::ThemeDetailsPage,
};
use crate::storage::LocalStorageRepository;

/// 保存済みリスト（アプリ全体で1つ）
pub type SavedStore = RwSignal<SavedProjects<LocalStorageRepository>>;

#[component]
pub fn App() -> impl IntoView {
    let route = RwSignal::new(current_route());
    let navigator = Navigator::new(route);
    navigator.listen_popstate();
    provide_context(navigator);

    let toasts = RwSignal::new(Vec::<ToastMessage>::new());
    let notifier = ToastNotifier::new(toasts);
    let saved: SavedStore = RwSignal::new(SavedProjects::open(LocalStorageRepository));

    // トップとカテゴリ別URLは同じページを使い回し、選択中カテゴリだけ同期する
    let is_home = Memo::new(move |_| matches!(route.get(), Route::Home | Route::CategoryPreset(_)));
    let initial_category = Signal::derive(move || route.get().initial_category());

    view! {
        <div class="app">
            <Navbar route=route />

            <main class="main">
                <Show when=move || is_home.get()>
                    <HomePage initial_category=initial_category />
                </Show>

                {move || match route.get() {
                    Route::Home | Route::CategoryPreset(_) => ().into_any(),
                    Route::ThemeDetails(id) => {
                        view! { <ThemeDetailsPage id=id saved=saved notifier=notifier /> }.into_any()
                    }
                    Route::ThemeCode(id) => {
                        view! { <ThemeCodePage id=id notifier=notifier /> }.into_any()
                    }
                    Route::Listing(Listing::Templates) => view! { <TemplatesPage /> }.into_any(),
                    Route::Listing(Listing::Latest) => view! { <LatestPage /> }.into_any(),
                    Route::Listing(Listing::Featured) => view! { <FeaturedPage /> }.into_any(),
                    Route::Listing(Listing::Projects) => view! { <ProjectsPage saved=saved /> }.into_any(),
                    Route::RequestAccess => view! { <RequestAccessPage notifier=notifier /> }.into_any(),
                    Route::NotFound => view! { <NotFoundPage /> }.into_any(),
                }}
            </main>

            <footer class="footer">
                <p class="text-muted">"© Theme Gallery"</p>
            </footer>

            <ToastContainer notifier=notifier />
        </div>
    }
}
