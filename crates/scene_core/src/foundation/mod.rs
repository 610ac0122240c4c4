//! Foundation utilities
//!
//! Math types shared by every other module.

pub mod math;
