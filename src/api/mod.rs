//! # Upstream API Layer
//!
//! The reqwest client and wire types for the two read-only upstreams:
//!
//! - REST Countries v3.1 — exact-name lookup, prefix search, region and
//!   subregion listings ([`client::CountriesClient`], [`types`]).
//! - The boundary-geometry service — one GeoJSON document per cca3 code,
//!   best-effort ([`geometry`]).

pub mod client;
pub mod geometry;
pub mod types;

pub use client::{ApiError, CountriesClient};
