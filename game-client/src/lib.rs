pub mod app;
pub mod config;
pub mod ticker;
pub mod ui;
pub mod word_source;
