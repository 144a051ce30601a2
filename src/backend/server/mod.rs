//! Server Module
//!
//! Configuration, shared state and application assembly for the Axum HTTP
//! server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration loading from the environment
//! └── init.rs         - Store bootstrap and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Store**: PostgreSQL pool plus migrations, or the in-memory store
//! 3. **State Creation**: token service, password hasher, asset paths
//! 4. **Router Creation**: routes, gate, tracing and CORS layers

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig, StoreBackend};
pub use init::{build_state, create_app, load_store, InitError};
pub use state::AppState;
