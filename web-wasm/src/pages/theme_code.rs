//! テーマのサンプルコード

use leptos::prelude::*;
use theme_gallery_common::{code_files_for, Catalog, Notification, Notifier, Route};

use crate::components::{code_viewer::CodeViewer, toast::ToastNotifier};
use crate::navigation::Link;

#[component]
pub fn ThemeCodePage(id: String, notifier: ToastNotifier) -> impl IntoView {
    let Some(theme) = Catalog::builtin().get_theme_by_id(&id) else {
        return view! {
            <section class="section not-found">
                <h1>"Theme not found"</h1>
                <Link href=Route::Home.path() class="link-arrow">"← Back to all themes"</Link>
            </section>
        }
        .into_any();
    };

    let files = code_files_for(theme);
    let details_path = Route::ThemeDetails(theme.id.clone()).path();

    // ダウンロードは通知のみ
    let on_download = move |_: leptos::ev::MouseEvent| {
        let mut notifier = notifier;
        notifier.notify(Notification::DownloadStarted);
    };

    view! {
        <section class="section theme-code">
            <Link href=details_path class="link-arrow">"← Back to template"</Link>
            <div class="page-header">
                <h1>{format!("{} - Complete Code", theme.title)}</h1>
                <p class="text-muted">{theme.description.clone()}</p>
                <button class="btn btn-primary" on:click=on_download>
                    "Download Source Code"
                </button>
            </div>
            <CodeViewer files=files notifier=notifier />
        </section>
    }
    .into_any()
}
