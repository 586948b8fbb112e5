//! Background Tasks Module
//!
//! Tasks that run periodically during server operation.
//!
//! # Tasks
//! - Expiry sweeper: removes cache entries past their group TTL

mod sweeper;

pub use sweeper::spawn_sweeper_task;
