//! A tiny HTTP/1.1 server built on [`lite_http`]: a root probe, an echo endpoint
//! with optional gzip, a user agent endpoint and a flat file store.
//!
//! ```no_run
//! use lite_web::{Router, Server, Storage};
//!
//! #[tokio::main]
//! async fn main() {
//!     let server = Server::builder()
//!         .address("127.0.0.1:4221".parse().unwrap())
//!         .router(Router::with_storage(Storage::new("/tmp/files")))
//!         .build()
//!         .unwrap();
//!
//!     server.start().await.unwrap();
//! }
//! ```

mod config;
mod error;
mod server;
mod storage;

pub mod encoding;
pub mod router;

pub use config::Config;
pub use error::HandleError;
pub use router::Router;
pub use server::{Server, ServerBuildError, ServerBuilder, ServerError};
pub use storage::{Storage, StorageError};
