//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, the two forms, `toast`) so pages can
//! depend on small focused models. Form models are plain structs with no
//! reactive fields; pages wrap them in `RwSignal`.

pub mod auth;
pub mod login_form;
pub mod post_form;
pub mod toast;
