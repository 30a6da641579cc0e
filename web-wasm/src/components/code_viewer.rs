//! サンプルコード表示（ファイルタブ＋コピー）

use leptos::prelude::*;
use leptos::task::spawn_local;
use theme_gallery_common::{CodeFile, Notification, Notifier};
use wasm_bindgen_futures::JsFuture;

use crate::components::toast::ToastNotifier;

/// クリップボードへ書き込み
async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "windowが取得できません".to_string())?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("コピー失敗: {:?}", e))
}

#[component]
pub fn CodeViewer(files: Vec<CodeFile>, notifier: ToastNotifier) -> impl IntoView {
    let (active_index, set_active_index) = signal(0usize);
    let files = StoredValue::new(files);

    let active_file = move || {
        files.with_value(|f| f.get(active_index.get()).cloned())
    };

    let on_copy = move |_: leptos::ev::MouseEvent| {
        let Some(file) = active_file() else {
            return;
        };
        let mut notifier = notifier;
        spawn_local(async move {
            match copy_to_clipboard(&file.code).await {
                Ok(()) => notifier.notify(Notification::CodeCopied),
                Err(e) => gloo::console::error!(e),
            }
        });
    };

    view! {
        <div class="code-viewer">
            <div class="code-tabs">
                {files
                    .with_value(|f| f.iter().map(|file| file.name.clone()).collect::<Vec<_>>())
                    .into_iter()
                    .enumerate()
                    .map(|(index, name)| {
                        view! {
                            <button
                                class="code-tab"
                                class:active=move || active_index.get() == index
                                on:click=move |_| set_active_index.set(index)
                            >
                                {name}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                active_file()
                    .map(|file| {
                        view! {
                            <div class="code-panel">
                                <div class="code-panel-header">
                                    <div>
                                        <strong>{file.name}</strong>
                                        <p class="text-muted">{file.description}</p>
                                    </div>
                                    <button class="btn btn-secondary btn-small" on:click=on_copy>
                                        "Copy"
                                    </button>
                                </div>
                                <pre class="code-block"><code>{file.code}</code></pre>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
