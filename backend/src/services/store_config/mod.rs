//! # Store Configuration Service
//!
//! The browser bundle is compiled ahead of time and cannot read the server's
//! environment. This module exposes the testimonial store settings the server was
//! started with so the frontend can build its repository at load time.
//!
//! ## Sub-modules:
//! - `get`: Returns the current `StoreConfig` as JSON.

mod get;

use actix_web::web::{get, scope};
use actix_web::Scope;

/// The base path for the configuration endpoint.
const API_PATH: &str = "/api/config";

/// Configures and returns the Actix `Scope` for the configuration route.
///
/// # Registered Routes:
///
/// *   **`GET /api/config`**:
///     - **Handler**: `get::process`
///     - **Description**: Returns the `StoreConfig` (store URL, public access key,
///       table name and request timeout) the server resolved from its environment,
///       including the documented placeholders when variables are unset.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(get::process))
}
