//! campdeck - campaign lifecycle dashboard for cross-border influencer
//! marketing.
//!
//! The library exposes the campaign domain types, the pure workflow
//! derivation functions, the file-backed store and the REST surface; the
//! binary wires them to a clap CLI and a ratatui dashboard.

pub mod app;
pub mod config;
pub mod logging;
pub mod rest;
pub mod seed;
pub mod store;
pub mod types;
pub mod ui;
pub mod workflow;
