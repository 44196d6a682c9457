// Module exports for models

pub mod color;
pub mod config;
pub mod counter;
