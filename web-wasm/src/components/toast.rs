//! トースト通知

use leptos::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use theme_gallery_common::{Notification, Notifier};

/// 表示時間（ミリ秒）
const TOAST_DURATION_MS: u32 = 4000;

#[derive(Debug, Clone)]
pub struct ToastMessage {
    pub id: usize,
    pub title: String,
    pub description: String,
}

static TOAST_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn next_toast_id() -> usize {
    TOAST_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// トーストとして通知を表示する Notifier
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<Vec<ToastMessage>>,
}

impl ToastNotifier {
    pub fn new(toasts: RwSignal<Vec<ToastMessage>>) -> Self {
        Self { toasts }
    }

    pub fn dismiss(&self, id: usize) {
        self.toasts.update(|t| t.retain(|m| m.id != id));
    }
}

impl Notifier for ToastNotifier {
    fn notify(&mut self, notification: Notification) {
        let id = next_toast_id();
        self.toasts.update(|t| {
            t.push(ToastMessage {
                id,
                title: notification.title().to_string(),
                description: notification.description(),
            });
        });

        // 一定時間後に自動で閉じる
        let toasts = self.toasts;
        gloo::timers::callback::Timeout::new(TOAST_DURATION_MS, move || {
            toasts.update(|t| t.retain(|m| m.id != id));
        })
        .forget();
    }
}

#[component]
pub fn ToastContainer(notifier: ToastNotifier) -> impl IntoView {
    view! {
        <div class="toast-container">
            <For
                each=move || notifier.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class="toast">
                            <div class="toast-body">
                                <strong class="toast-title">{toast.title}</strong>
                                <p class="toast-description">{toast.description}</p>
                            </div>
                            <button class="toast-dismiss" on:click=move |_| notifier.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
