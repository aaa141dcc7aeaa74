use std::sync::atomic::{AtomicU64, Ordering};

use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::config::TOAST_DURATION_MS;

#[derive(Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

static NEXT_SERIAL: AtomicU64 = AtomicU64::new(0);

/// Each constructed toast carries its own serial. Two toasts with the same
/// text are not equal, and each one gets a fresh dismiss timer.
#[derive(Clone, PartialEq)]
pub struct ToastMessage {
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
    serial: u64,
}

impl ToastMessage {
    fn new(title: &str, description: &str, kind: ToastKind) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            kind,
            serial: NEXT_SERIAL.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn success(title: &str, description: &str) -> Self {
        Self::new(title, description, ToastKind::Success)
    }

    pub fn error(title: &str, description: &str) -> Self {
        Self::new(title, description, ToastKind::Error)
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: Option<ToastMessage>,
    pub on_dismiss: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |message: &Option<ToastMessage>| {
                // Dropping the timeout on cleanup cancels it, so a newer toast
                // gets its full time on screen.
                let timeout = message.as_ref().map(|_| {
                    Timeout::new(TOAST_DURATION_MS, move || on_dismiss.emit(()))
                });
                move || drop(timeout)
            },
            props.message.clone(),
        );
    }

    let Some(message) = props.message.as_ref() else {
        return html! {};
    };

    let kind_class = match message.kind {
        ToastKind::Success => "toast-success",
        ToastKind::Error => "toast-error",
    };

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class={classes!("toast", kind_class)} role="status">
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        max-width: 360px;
                        padding: 1rem 1.25rem;
                        border-radius: 12px;
                        background: #fff;
                        box-shadow: 0 12px 32px rgba(0, 0, 0, 0.15);
                        animation: toastIn 0.3s ease-out;
                        z-index: 1000;
                    }
                    .toast-success { border-left: 4px solid #22c55e; }
                    .toast-error { border-left: 4px solid #ef4444; }
                    .toast-title { font-weight: 600; margin-bottom: 0.25rem; }
                    .toast-description { color: #4b5563; font-size: 0.9rem; }
                    .toast-close {
                        position: absolute;
                        top: 0.5rem;
                        right: 0.75rem;
                        background: none;
                        border: none;
                        cursor: pointer;
                        color: #9ca3af;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
            <button class="toast-close" onclick={close}>{"×"}</button>
            <div class="toast-title">{&message.title}</div>
            <div class="toast-description">{&message.description}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_toasts_are_distinct() {
        let first = ToastMessage::success("Recommendations Updated!", "Ready.");
        let second = ToastMessage::success("Recommendations Updated!", "Ready.");
        assert!(first != second);
        assert!(Some(first.clone()) == Some(first));
    }

    #[test]
    fn constructors_set_the_kind() {
        assert!(ToastMessage::success("a", "b").kind == ToastKind::Success);
        assert!(ToastMessage::error("a", "b").kind == ToastKind::Error);
    }
}
