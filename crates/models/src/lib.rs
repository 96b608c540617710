//! SeaORM entities and connection helpers for the users table.

pub mod errors;
pub mod db;
pub mod user;

#[cfg(test)]
mod tests;
