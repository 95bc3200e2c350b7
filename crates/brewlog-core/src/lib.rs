//! Core types and trait definitions for the brewlog caffeine tracker.
//!
//! This crate has no database or terminal dependencies. Storage backends
//! implement [`store::DrinkStore`]; hosts build a [`log::DrinkLog`] on top of
//! one and feed it a [`catalog::Catalog`] and a [`calendar::DayPolicy`].

// Native `async fn` in traits; backends are expected to return `Send` futures.
#![allow(async_fn_in_trait)]

pub mod calendar;
pub mod catalog;
pub mod drink;
pub mod error;
pub mod log;
pub mod memory;
pub mod store;

pub use error::{Error, Result};

#[cfg(test)]
mod tests;
