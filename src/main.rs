#[cfg(not(feature = "csr"))]
pub fn main() {
    // client-only app: build with `trunk serve --open --features csr`
}

#[cfg(feature = "csr")]
pub fn main() {
    use kohtao_guide::app::App;
    use kohtao_guide::utils::panic_hook;

    panic_hook::init();

    leptos::mount_to_body(App);
}
