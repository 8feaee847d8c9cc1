//! Command implementations
//!
//! Every command is a method on [`Toolkit`](crate::areas::toolkit::Toolkit)
//! and lives in its own file under `plumbing`.

pub mod plumbing;
