//! Application layer containing the engine facade.
//!
//! This module defines the `CateringEngine` which acts as the primary entry point
//! for catalog management, booking storage and booking costing. It composes the
//! catalog and booking stores and mediates the few places where they meet.

pub mod engine;
