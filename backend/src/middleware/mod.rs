pub mod auth;
pub mod role;

pub use auth::*;
pub use role::*;
