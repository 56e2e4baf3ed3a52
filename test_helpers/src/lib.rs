//! Test helpers shared across crates.
//!
//! [`text`] inspects generated feature documents; [`figment`] wraps
//! `figment::Jail` for tests that load generator settings from files and the
//! environment.

pub mod figment;
pub mod text;
