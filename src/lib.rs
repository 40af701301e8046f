pub mod app;
pub mod auth;
pub mod calendar;
pub mod components;
pub mod event;
pub mod server;
pub mod theme;
pub mod tui;
pub mod user;
