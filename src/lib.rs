//! Boli - English, Hindi and Gadhwali sentence translation
//!
//! Chains an online translation service, a curated phrase dictionary and a
//! deterministic grammar-reordering pass, falling back tier by tier so that
//! every request yields a (possibly partial) translation.

pub mod cli;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod grammar;
pub mod language;
pub mod server;
pub mod translate;
