//! Pieces shared by every crate in the workspace: wire types and logging setup.

pub mod types;
pub mod utils;
