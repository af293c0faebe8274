//! HTTP request handlers

pub mod analysis;
pub mod health;
pub mod predict;
