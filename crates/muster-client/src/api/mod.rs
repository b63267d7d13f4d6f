//! API endpoint implementations.

mod chat;
mod escalations;
mod health;
mod notifications;
mod workspaces;

pub use chat::ChatApi;
pub use escalations::EscalationsApi;
pub use health::HealthApi;
pub use notifications::NotificationsApi;
pub use workspaces::WorkspacesApi;
