//! Transient success/error notifications.
//!
//! DESIGN
//! ======
//! `ToastState` is a bounded queue with monotonically increasing ids so the
//! rendered list can key on them. Submission code only sees the `Notifier`
//! trait; `Toaster` is the reactive implementation used by the pages.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// Maximum toasts kept on screen; older ones are dropped first.
pub const MAX_VISIBLE_TOASTS: usize = 5;
/// Auto-dismiss delay in the browser.
pub const TOAST_TIMEOUT_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, kind, message: message.into() });
        if self.toasts.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.toasts.len() - MAX_VISIBLE_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Sink for user-facing notifications.
pub trait Notifier {
    fn notify(&self, kind: ToastKind, message: &str);

    fn success(&self, message: &str) {
        self.notify(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(ToastKind::Error, message);
    }
}

/// Reactive toast surface shared by all pages.
#[derive(Clone, Copy)]
pub struct Toaster {
    pub state: RwSignal<ToastState>,
}

impl Toaster {
    pub fn new() -> Self {
        Self { state: RwSignal::new(ToastState::default()) }
    }

    pub fn dismiss(&self, id: u64) {
        self.state.update(|s| s.dismiss(id));
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toaster {
    fn notify(&self, kind: ToastKind, message: &str) {
        let mut id = 0;
        self.state.update(|s| id = s.push(kind, message));

        #[cfg(feature = "hydrate")]
        {
            let toaster = *self;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
                toaster.dismiss(id);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    }
}
