//! Server-rendered markup for the inspector.
//!
//! # Structure
//!
//! - [`page`]: HTML shell and the full inspector page
//! - [`fragments`]: partial responses swapped in by htmx
//! - [`highlight`]: cosmetic token segment coloring

pub mod fragments;
pub mod highlight;
pub mod page;
