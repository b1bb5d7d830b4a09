//! Dinta - Decision Framework Analysis Service
//!
//! This crate turns a free-text business problem into a structured analysis
//! using one of six decision frameworks (SWOT, RICE, Five Whys, Cost-Benefit,
//! First Principles, Porter's Five Forces), chosen explicitly or by keyword.
//! An external workflow service can optionally back the summary endpoints.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
