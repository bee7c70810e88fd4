use leptos::*;

use crate::notify::{use_toasts, ToastVariant};

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.list()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast toast-destructive",
                    };
                    view! {
                        <div class=class>
                            <div class="toast-title">{toast.title}</div>
                            <div class="toast-description">{toast.description}</div>
                            <button
                                class="toast-close"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
