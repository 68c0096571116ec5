//! Command implementations
//!
//! Only the user-facing `porcelain` layer exists so far.

pub mod porcelain;
