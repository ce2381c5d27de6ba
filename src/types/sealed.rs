//! Sealed trait to prevent external implementations of compatibility markers

/// Marker trait implemented only by types in this crate
pub trait Sealed {}
