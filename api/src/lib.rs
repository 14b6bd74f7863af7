//! # LawVriksh API
//!
//! HTTP surface for email one-time passcode login.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod routes;
pub mod telemetry;
