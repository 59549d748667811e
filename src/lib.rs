//! TokenLens
//!
//! A self-hosted JWT inspection tool. A local Axum server renders a
//! single-page inspector; pasted or typed tokens are decoded on the server
//! and the page updates through htmx fragment swaps. Tokens are never
//! verified, sent anywhere or stored.
//!
//! # Architecture
//!
//! - **Server**: Axum routes for the page plus decode/clear fragments
//! - **Decoder**: compact-serialization parsing behind a trait seam
//! - **UI**: format-string SSR + HTMX + Web Components, local assets only
//!
//! # Modules
//!
//! - [`claims`]: time-claim chips and local-time formatting
//! - [`config`]: layered CLI/env/file configuration
//! - [`decoder`]: token decoding trait and compact-form implementation
//! - [`server`]: router construction and startup
//! - [`status`]: the single live status message
//! - [`telemetry`]: tracing initialization
//! - [`ui`]: page shell, fragments and token highlighting

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::unused_async)]

pub mod claims;
pub mod config;
pub mod decoder;
pub mod server;
pub mod status;
pub mod telemetry;
pub mod ui;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::decoder::TokenDecoder;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Token decoder behind its capability seam.
    pub decoder: Arc<dyn TokenDecoder>,
    /// Global configuration.
    pub config: Arc<AppConfig>,
}
