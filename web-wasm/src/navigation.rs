//! 画面遷移
//!
//! 現在のルートをシグナルで持ち、History API でURLを書き換える。

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use theme_gallery_common::Route;
use wasm_bindgen::JsValue;

/// 現在のURLからルートを解釈
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::parse(&path))
        .unwrap_or(Route::Home)
}

#[derive(Clone, Copy)]
pub struct Navigator {
    route: RwSignal<Route>,
}

impl Navigator {
    pub fn new(route: RwSignal<Route>) -> Self {
        Self { route }
    }

    /// URLを書き換えてルートを切り替え
    pub fn navigate(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            let pushed = window
                .history()
                .and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(path)));
            if let Err(e) = pushed {
                gloo::console::error!(format!("遷移失敗: {:?}", e));
                return;
            }
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        self.route.set(Route::parse(path));
    }

    /// ブラウザの戻る/進むに追従
    pub fn listen_popstate(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let route = self.route;
        gloo::events::EventListener::new(&window, "popstate", move |_| {
            route.set(current_route());
        })
        .forget();
    }
}

/// アプリ内リンク
///
/// Navigator が無いときは通常のリンクとして動く。
#[component]
pub fn Link(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let navigator = use_context::<Navigator>();
    let target = href.clone();

    let on_click = move |ev: MouseEvent| {
        // 修飾キー付きは新しいタブなどブラウザに任せる
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
            return;
        }
        if let Some(navigator) = navigator {
            ev.prevent_default();
            navigator.navigate(&target);
        }
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
