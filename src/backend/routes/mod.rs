//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs            - Module exports and documentation
//! ├── router.rs         - Main router creation and layers
//! ├── api_routes.rs     - Account and comment endpoints
//! └── static_routes.rs  - Health probe, resume download
//! ```
//!
//! # Routes
//!
//! | Method & Path          | Auth   |
//! |------------------------|--------|
//! | `POST /user`           | -      |
//! | `POST /login`          | -      |
//! | `POST /comment`        | Bearer |
//! | `DELETE /comment`      | Bearer |
//! | `GET /comments`        | -      |
//! | `GET /health`          | -      |
//! | `GET /resume`          | -      |
//! | `GET /swagger-ui`      | -      |
//! | `GET /api-docs/openapi.json` | - |
//! | anything else (GET)    | static files |

/// Main router creation
pub mod router;

/// API endpoints
pub mod api_routes;

/// Health, resume and static files
pub mod static_routes;

pub use router::create_router;
