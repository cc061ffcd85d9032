//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Submission flows live in the `*_submit` modules so they can
//! be exercised without a browser.

pub mod add_volunteer_post;
pub(crate) mod add_volunteer_post_submit;
pub mod home;
pub mod login;
pub(crate) mod login_submit;

#[cfg(test)]
mod test_fakes;
