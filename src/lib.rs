pub mod app;
pub mod cell;
pub mod config;
pub mod coord;
pub mod events;
pub mod game;
pub mod grid;
pub mod io;
pub mod logging;
pub mod patterns;
pub mod render;
pub mod terminal;
pub mod viewport;
