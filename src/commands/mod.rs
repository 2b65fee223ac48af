//! Command implementations for chainup.

pub mod update;
