// Service module exports

pub mod config;
pub mod countdown;
