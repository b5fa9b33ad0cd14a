//! Domain logic for the Quick Verdicts frontend.
//! Everything here is framework-free and runs under native `cargo test`.

pub mod calendar;
pub mod listing;
pub mod notifications;
pub mod roles;
pub mod signup;
pub mod validate;
