//! Pagepicker: a paginated number picker.
//!
//! The numbers `1..=80` are shown eight per page across ten pages. A visitor
//! picks one number from the current page, and the current page survives
//! reloads through client-side persistent storage.
//!
//! # Example
//!
//! ```no_run
//! use pagepicker::{Config, PageServer};
//!
//! #[tokio::main]
//! async fn main() {
//!     let server = PageServer::new(Config::default());
//!     server.run().await.unwrap();
//! }
//! ```

pub mod browse;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod handlers;
pub mod models;
pub mod paging;
pub mod router;
pub mod server;
pub mod session;
pub mod storage;
pub mod store;
pub mod views;

// Re-exports for convenience
pub use client::{ClientError, HttpPageBackend, PageBackend};
pub use config::{Args, ClientConfig, Command, Config, DEFAULT_PORT};
pub use error::{AppError, AppResult, ErrorCode};
pub use paging::{page_range, PageIndex, MAX_PAGE, PAGE_SIZE};
pub use server::{PageServer, PageServerBuilder};
pub use session::PageSession;
pub use storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, CURRENT_PAGE_KEY};
pub use store::{Lifecycle, PageIndexStore, PageRequest};
