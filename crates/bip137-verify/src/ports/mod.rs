//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that external callers use
//!
//! There is no outbound port: the only external collaborator is the curve
//! backend, which the domain layer consumes directly as a library.

pub mod inbound;
