//! Review Courier - Chat-driven Google Play review exports
//!
//! This crate implements a Telegram bot that collects recent reviews for a
//! Play Store app and delivers them to the chat as a paginated PDF.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
