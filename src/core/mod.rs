//! Core translation gateway module

pub mod cache;
pub mod config;
pub mod errors;
pub mod gateway;
pub mod models;
pub mod provider;
pub mod validate;
