//! Core components of the `premarket-pages` crate.
//!
//! This module contains the foundational building blocks, including:
//! - The HTTP [`QuoteClient`] and its builder, retry policy and request pacer.
//! - The primary [`BriefError`] type.
//! - Shared data models like [`ChartSnapshot`] and [`QuoteState`].
//! - The [`QuoteService`] seam the page generators fetch through.

/// The HTTP client (`QuoteClient`), builder, and configuration.
pub mod client;
/// The primary error type (`BriefError`) for the crate.
pub mod error;
/// Shared data models used across the quote layer and the page generators.
pub mod models;
/// Service traits for abstracting the market-data source.
pub mod services;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::QuoteClient`
pub use client::{Backoff, QuoteClient, QuoteClientBuilder, RetryConfig};
pub use error::BriefError;
pub use models::{ChartSnapshot, CompanyProfile, QuoteSnapshot, QuoteState, Range};
pub use services::{OfflineQuotes, QuoteService, ServiceFuture};
