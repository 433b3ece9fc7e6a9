//! Foundation module - Core utilities and types
//!
//! Small building blocks shared by the pool and projectile modules:
//! - Math types
//! - Logging utilities

pub mod math;
pub mod logging;
