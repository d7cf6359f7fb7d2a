//! Backend for the YouMusic converter: extracts YouTube video ids and
//! proxies conversion requests to the RapidAPI youtube-mp36 service. The
//! `ui` module carries the view model a frontend drives against it.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod handlers;
pub mod state;
pub mod ui;
