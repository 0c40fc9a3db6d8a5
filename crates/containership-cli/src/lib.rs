//! Containership CLI library.
//!
//! This crate provides the interactive harbor console: command parsing,
//! dispatch against the harbor registry, and plain-text replies.

pub mod session;
