//! Users module: domain types, the `UserStore` capability with its two
//! realizations, and the `UserService` that the HTTP layer drives.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{NewUser, User, UserId};
pub use repository::UserStore;
pub use service::UserService;
