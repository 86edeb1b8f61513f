//! Avisos (toasts) de sucesso/erro

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use schedula_common::session::{NoticeLevel, Notifier};

const TOAST_MILLIS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: NoticeLevel,
    pub text: String,
}

/// Notificador da página: empilha toasts num sinal
#[derive(Debug, Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastNotifier {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn toasts(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts.read_only()
    }

    fn push(&self, level: NoticeLevel, text: &str) {
        let Some(id) = self.next_id.try_update(|n| {
            *n += 1;
            *n
        }) else {
            return;
        };
        self.toasts.try_update(|t| {
            t.push(Toast {
                id,
                level,
                text: text.to_string(),
            })
        });

        let toasts = self.toasts;
        Timeout::new(TOAST_MILLIS, move || {
            toasts.try_update(|t| t.retain(|toast| toast.id != id));
        })
        .forget();
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.try_update(|t| t.retain(|toast| toast.id != id));
    }
}

impl Default for ToastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastNotifier {
    fn success(&self, text: &str) {
        self.push(NoticeLevel::Success, text);
    }

    fn error(&self, text: &str) {
        self.push(NoticeLevel::Error, text);
    }
}

#[component]
pub fn Toasts(notifier: ToastNotifier) -> impl IntoView {
    let toasts = notifier.toasts();
    view! {
        <div class="toasts">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.level {
                        NoticeLevel::Success => "toast toast-success",
                        NoticeLevel::Error => "toast toast-error",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class role="status" on:click=move |_| notifier.dismiss(id)>
                            {toast.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
