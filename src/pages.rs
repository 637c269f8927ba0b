//! Page generation modules
//!
//! HTML page generators built from shared components. The profile page is
//! the only view this service produces.

pub mod profile;
