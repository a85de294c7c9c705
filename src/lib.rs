pub mod core;
pub mod tools;
pub mod render;
pub mod app;
pub mod cli;
pub mod logger;

rust_i18n::i18n!("locales", fallback = "en");
