use std::panic;

use leptos::logging::{error, log};

/// Installs the console panic hook, then adds a hint when the panic comes
/// from a signal or callback that outlived its component.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        original_hook(panic_info);

        let message = panic_message(panic_info.payload());
        if is_owner_disposal(&message) {
            error!("[PANIC] Reactive owner was already disposed. A handler ran after its component unmounted.");
            error!("[PANIC] Look for timers or window listeners without an on_cleanup.");
        }
    }));
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else {
        "Unknown panic".to_owned()
    }
}

fn is_owner_disposal(message: &str) -> bool {
    message.contains("OwnerDisposed") || message.contains("disposed")
}

pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
    log!("[PANIC_HOOK] Custom panic hook set up successfully");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_string_payloads() {
        let owned: Box<dyn std::any::Any + Send> = Box::new(String::from("boom"));
        assert_eq!(panic_message(owned.as_ref()), "boom");

        let borrowed: Box<dyn std::any::Any + Send> = Box::new("bang");
        assert_eq!(panic_message(borrowed.as_ref()), "bang");

        let other: Box<dyn std::any::Any + Send> = Box::new(42_u8);
        assert_eq!(panic_message(other.as_ref()), "Unknown panic");
    }

    #[test]
    fn recognises_owner_disposal() {
        assert!(is_owner_disposal("tried to access a signal that was OwnerDisposed"));
        assert!(!is_owner_disposal("index out of bounds"));
    }
}
