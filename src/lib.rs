#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::module_name_repetitions, // gridsnake::models::GameState reads fine
)]
pub mod api;
pub mod config;
pub mod gridsnake;
pub mod playtest;
pub mod rules;
