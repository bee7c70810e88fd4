//! Fire-and-forget toast notifications.

use leptos::logging::log;
use leptos::*;
use uuid::Uuid;

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 4_000;

/// Older toasts are dropped once this many are showing.
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// Handle to the toast list. Cheap to copy into event handlers.
#[derive(Debug, Clone, Copy)]
pub struct Toasts(RwSignal<Vec<Toast>>);

impl Toasts {
    pub fn new() -> Self {
        Self(create_rw_signal(Vec::new()))
    }

    pub fn notify(&self, title: impl Into<String>, description: impl Into<String>) -> Uuid {
        self.push(ToastVariant::Default, title.into(), description.into())
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) -> Uuid {
        self.push(ToastVariant::Destructive, title.into(), description.into())
    }

    pub fn dismiss(&self, id: Uuid) {
        // the owning view may already be gone when a timer fires
        let _ = self.0.try_update(|toasts| toasts.retain(|toast| toast.id != id));
    }

    /// Visible toasts, oldest first. Tracks the signal.
    pub fn list(&self) -> Vec<Toast> {
        self.0.get()
    }

    pub fn list_untracked(&self) -> Vec<Toast> {
        self.0.get_untracked()
    }

    fn push(&self, variant: ToastVariant, title: String, description: String) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            title,
            description,
            variant,
        };
        let id = toast.id;
        log!("[TOAST] {:?}: {} - {}", toast.variant, toast.title, toast.description);

        self.0.update(|toasts| {
            toasts.push(toast);
            let overflow = toasts.len().saturating_sub(MAX_VISIBLE_TOASTS);
            toasts.drain(..overflow);
        });
        self.schedule_dismiss(id);
        id
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: Uuid) {
        let toasts = *self;
        gloo_timers::callback::Timeout::new(TOAST_DURATION_MS, move || toasts.dismiss(id)).forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: Uuid) {}
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts::new();
    provide_context(toasts);
    toasts
}

/// The toast handle, created on the spot if no ancestor provided one.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().unwrap_or_else(provide_toasts)
}
