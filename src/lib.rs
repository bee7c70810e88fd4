pub mod app;
pub mod catalog;
pub mod components;
pub mod error;
pub mod i18n;
pub mod map;
pub mod models;
pub mod notify;
pub mod pages;
pub mod reviews;
pub mod utils;
