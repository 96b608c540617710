//! Service layer: the user CRUD contract on top of a pluggable store.
//! - `users::UserStore` is the persistence seam (memory or SeaORM).
//! - `users::UserService` owns decoding, update policy and lookup rules.

pub mod errors;
pub mod users;
#[cfg(test)]
pub mod test_support;
