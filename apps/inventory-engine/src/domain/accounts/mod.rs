//! Accounts Bounded Context
//!
//! User accounts, roles and the request-scoped caller identity.

pub mod caller;
pub mod errors;
pub mod repository;
pub mod role;
pub mod user;

pub use caller::Caller;
pub use errors::AccountError;
pub use repository::UserRepository;
pub use role::Role;
pub use user::{PasswordHash, User, UserProfile};
