pub mod assignees;
pub mod auth;
pub mod entities;
pub mod metrics;
pub mod notifications;
pub mod users;
