//! Quick Verdicts — browser frontend.
//!
//! A client-side rendered Leptos application compiled to WebAssembly. It
//! talks to the Quick Verdicts REST backend over HTTP; nothing here owns
//! backend data beyond the signals that render it.

mod app;
mod bridge;
mod config;
mod dom;
mod dto;
mod error;
mod session;
mod storage;

pub mod components {
    pub mod bell;
    pub mod field;
    pub mod modal;
    pub mod pager;
    pub mod stepper;
}

pub mod pages {
    pub mod admin;
    pub mod admin_calendar;
    pub mod attorney;
    pub mod juror;
    pub mod login;
    pub mod notifications;
    pub mod signup;
}

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <app::App /> });
}
