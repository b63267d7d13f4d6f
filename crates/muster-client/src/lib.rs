//! HTTP client SDK for the Muster coordination service.
//!
//! # Example
//!
//! ```no_run
//! use muster_client::{MusterClient, Result};
//!
//! # async fn example() -> Result<()> {
//! let client = MusterClient::builder()
//!     .base_url("http://localhost:7420")
//!     .auth_token("secret")
//!     .build()?;
//!
//! let pending = client.chat().pending("my-project", "ws-1").await?;
//! println!("{} unread", pending.count);
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Workspaces**: list a project's workspace directory
//! - **Chat**: check pending messages for a workspace
//! - **Escalations**: raise an escalation
//! - **Notifications**: notify a workspace
//! - **Health**: server health checks

pub mod api;
pub mod client;
pub mod error;
pub mod types;

pub use client::{ClientBuilder, DEFAULT_TIMEOUT, MusterClient};
pub use error::{Error, Result};
pub use types::*;
