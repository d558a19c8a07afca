//! Leptos frontend (client-side rendered).

pub mod app;
pub mod notifier;

/// Mount the storefront into `<body>`. Called from the wasm `main`.
pub fn mount() {
    console_error_panic_hook::set_once();

    leptos::mount_to_body(app::App);
}
