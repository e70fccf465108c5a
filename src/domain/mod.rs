//! Domain records, the cost rules, and the storage ports the engine depends on.

pub mod booking;
pub mod catalog;
pub mod cost;
pub mod money;
pub mod ports;
