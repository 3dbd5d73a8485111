//! Quote Estimator - Website pricing estimator with lead capture
//!
//! Users pick a website category, page bracket, SEO option and add-on
//! features; the estimator prices the selection as a live range and can
//! hand a completed quote form to an external intake collaborator.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
