//! Shared code for the law practice site.
//!
//! Everything in this crate is free of browser and server dependencies so it can
//! be unit tested on the host and reused by both the `frontend` (Yew, wasm32)
//! and the `backend` (Actix) crates.
//!
//! - `model`: domain shapes (testimonials, contact inquiries) and their mappings.
//! - `config`: explicit configuration structs with documented fallbacks.
//! - `repository`: the testimonial store access seam and its implementations.
//! - `carousel`: the rotating testimonial display state.
//! - `submission`: the testimonial form state and duplicate-checked submit flow.

pub mod carousel;
pub mod config;
pub mod model;
pub mod repository;
pub mod submission;
