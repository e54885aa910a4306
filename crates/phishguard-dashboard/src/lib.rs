//! PhishGuard browser dashboard
//!
//! Client-side UI for the PhishGuard URL threat scanner: submit a URL for
//! classification, review scan history, and view aggregate analytics.
//! Classification itself is delegated to the prediction backend; when that
//! backend is unreachable the views degrade to clearly-labelled demo data
//! from `phishguard-core`.

pub mod api;
pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod pages;
