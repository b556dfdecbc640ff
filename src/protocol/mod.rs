//! Sync protocol primitives, packet schemas, and the code registry.
//!
//! This module houses the bit-level buffer, the closed wire value-type
//! set, packet body definitions, and the registry used by the
//! dispatcher for both inbound and outbound traffic.

pub mod bits;
pub mod constants;
pub mod packet;
pub mod value;
