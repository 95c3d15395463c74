//! # Domain Layer
//!
//! Pure protocol and cryptographic logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod address;
pub mod der;
pub mod entities;
pub mod envelope;
pub mod errors;
pub mod message;
pub mod verify;
