//! Tipos compartilhados do Anycache.

pub mod config;
pub mod errors;
