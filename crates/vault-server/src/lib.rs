//! # vault-server
//!
//! REST API for PassVault. Serves CRUD over password records, encrypting
//! secrets on write and decrypting them for display on read.

mod context;
mod env;
mod error;
mod routes;
mod server;

pub use context::AppContext;
pub use env::{load_dotenv, load_dotenv_from};
pub use error::ApiError;
pub use routes::router;
pub use server::VaultServer;
