//! Leptos 0.7 CSR landing page for Nexa Advisory
//!
//! A single-page marketing site: hero, social proof, services, case
//! studies and an assessment request form with a simulated submission.
//! There is no backend; navigation is by anchor fragments.
//!
//! ## Architecture
//! - Pure CSR (Client-Side Rendering) with Leptos 0.7
//! - WASM compilation target (wasm32-unknown-unknown), built with Trunk
//! - Section state lives in plain structs (`models`) wrapped in signals
//!
//! ## Module Structure
//! - `app`: Root component, section order
//! - `sections`: Page sections (header, hero, ..., footer)
//! - `components`: Presentational atoms (button, logo, icons, heading)
//! - `models`: Static content, header state, lead form state machine
//! - `scroll`: Smooth anchor scrolling
//! - `config`: Site configuration provided through context
//! - `logging`: Browser console logging
//! - `error`: Error types

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod scroll;
pub mod sections;

pub use app::App;

#[cfg(test)]
mod tests;
