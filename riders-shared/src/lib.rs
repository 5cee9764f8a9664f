//! # Riders Shared
//! This crate defines shared data structures and types used across the rider
//! visibility ecosystem.
//! It includes common definitions for rider identity, live positions, riding
//! roster entries, profiles, and event structures.
pub mod types;
