use leptos::prelude::*;
use theme_gallery_common::Route;

use crate::navigation::Link;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="section not-found">
            <h1>"404"</h1>
            <p class="text-muted">"Oops! Page not found"</p>
            <Link href=Route::Home.path() class="btn btn-primary">"Return to Home"</Link>
        </section>
    }
}
