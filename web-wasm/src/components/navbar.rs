//! ナビゲーションバー

use crate::navigation::Link;
use leptos::prelude::*;
use theme_gallery_common::{Route, NAV_LISTINGS};

#[component]
pub fn Navbar(route: RwSignal<Route>) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="navbar">
            <Link href=Route::Home.path() class="navbar-brand">
                "Theme Gallery"
            </Link>

            <button
                class="navbar-toggle"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>

            <nav class="navbar-links" class:open=move || menu_open.get()>
                {NAV_LISTINGS
                    .iter()
                    .map(|listing| {
                        let listing = *listing;
                        let is_current = move || route.get() == Route::Listing(listing);
                        view! {
                            <span class="nav-item" class:active=is_current on:click=move |_| set_menu_open.set(false)>
                                <Link href=listing.path()>{listing.label()}</Link>
                            </span>
                        }
                    })
                    .collect_view()}
                <span class="nav-item" on:click=move |_| set_menu_open.set(false)>
                    <Link href=Route::RequestAccess.path() class="btn btn-primary btn-small">
                        "Get Access"
                    </Link>
                </span>
            </nav>
        </header>
    }
}
