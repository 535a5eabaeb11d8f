//! Core domain logic for the house brokerage demo.
//!
//! Everything here is plain in-memory state driven by synchronous calls: a
//! seeded credential store with register/login/reset-password flows, a
//! capacity-bounded listing catalog with filtering, a favorites tally, a
//! mortgage payment calculator, and the admin reporting surface. The crate has
//! no opinion about how any of it is rendered; `services/api` puts an HTTP
//! surface in front of [`app::BrokerageApp`].

pub mod app;
pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod mortgage;
pub mod reporting;
pub mod tabs;
pub mod telemetry;
