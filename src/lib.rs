//! bookd: a reservation booking-invariant engine behind a small REST
//! surface.
//!
//! The engine decides, under concurrent access, whether a proposed hotel
//! reservation may be created or modified without double-booking a window,
//! and enforces the reservation lifecycle (pending → confirmed →
//! cancelled). Everything else — routing, JSON binding, seed loading — is
//! a thin shell around it.

pub mod api;
pub mod directory;
pub mod engine;
pub mod model;
pub mod notify;
pub mod observability;
pub mod seed;
