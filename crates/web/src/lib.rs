//! `shopfront-web`
//!
//! **Responsibility:** the product list surface.
//!
//! - `frontend`: Leptos component mounted in the browser (wasm32 only)
//! - `preview`: the same view model rendered as text for the native binary

#[cfg(target_arch = "wasm32")]
pub mod frontend;
pub mod preview;
