//! # SlotSync Core
//!
//! Domain model for practitioner availability: named weekly schedules of
//! recurring time slots, the overlap/validity rules that keep them
//! consistent, and the reschedule-cutoff rule booking flows share.
//!
//! Everything in this crate is synchronous and pure. Operations take a
//! schedule value and return a new one; persistence and transport live in
//! the `slotsync-db` and `slotsync-api` crates.

pub mod errors;
pub mod models;
pub mod reschedule;
pub mod time;
