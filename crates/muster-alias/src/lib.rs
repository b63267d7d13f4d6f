//! Workspace alias resolution.
//!
//! Turns a user-typed target into exactly one workspace identifier:
//!
//! - Literal workspace IDs (hyphenated UUIDs) resolve as-is, without
//!   looking at the directory.
//! - Aliases are matched case-insensitively in tiers: exact, then prefix,
//!   then substring. The first tier with any hits decides the outcome.
//! - When nothing matches, up to three "did you mean" suggestions are ranked
//!   by edit distance.
//!
//! # Example
//!
//! ```
//! use muster_alias::{resolve, MatchType, Workspace};
//!
//! let workspaces = vec![
//!     Workspace::new("ws-1", "coordinator", "Coordinator"),
//!     Workspace::new("ws-2", "bob-agent", "Bob"),
//! ];
//!
//! let resolution = resolve("coord", &workspaces).unwrap();
//! assert_eq!(resolution.workspace_id, "ws-1");
//! assert_eq!(resolution.match_type, MatchType::Prefix);
//! ```

pub mod error;
pub mod format;
pub mod resolver;
pub mod suggest;
pub mod types;

pub use error::{ResolveError, Result};
pub use resolver::{is_workspace_id, resolve};
pub use suggest::{MAX_SUGGESTIONS, edit_distance, suggest};
pub use types::{AliasMatch, AliasResolution, MatchType, Workspace};
