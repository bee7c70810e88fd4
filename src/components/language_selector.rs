use leptos::*;
use wasm_bindgen::JsCast;

use crate::i18n::{use_language, Language};

#[component]
pub fn LanguageSelector() -> impl IntoView {
    let language = use_language();
    let (open, set_open) = create_signal(false);
    let container = create_node_ref::<html::Div>();

    // A click anywhere outside the selector closes the menu.
    let handle = window_event_listener(ev::click, move |ev| {
        if !open.get_untracked() {
            return;
        }
        let Some(root) = container.get_untracked() else {
            return;
        };
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        if !root.contains(target.as_ref()) {
            set_open.set(false);
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="language-selector" node_ref=container>
            <button
                class="btn btn-ghost language-toggle"
                title=move || language.get().abbreviation()
                on:click=move |_| set_open.update(|open| *open = !*open)
            >
                {move || language.get().native_name()}
            </button>
            <Show when=move || open.get()>
                <ul class="language-menu">
                    {Language::ALL
                        .into_iter()
                        .map(|lang| {
                            view! {
                                <li
                                    class="language-option"
                                    class:selected=move || language.get() == lang
                                    on:click=move |_| {
                                        language.set(lang);
                                        set_open.set(false);
                                    }
                                >
                                    <span class="language-flag">{lang.flag()}</span>
                                    <span class="language-name">{lang.native_name()}</span>
                                    <Show when=move || language.get() == lang>
                                        <span class="language-check">"✓"</span>
                                    </Show>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}
