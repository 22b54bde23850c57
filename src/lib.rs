#![warn(clippy::unwrap_used)]

#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en");

pub mod app;
pub mod errors;
pub mod infrastructure;
pub mod telegram;
pub mod utils;
pub mod workers;
