//! Marker types.

/// Marker type describing an entity creation.
#[derive(Clone, Copy, Debug)]
pub struct Creation;

/// Marker type describing a start of a period (e.g. a tour departure).
#[derive(Clone, Copy, Debug)]
pub struct Start;

/// Marker type describing an end of a period (e.g. a tour return).
#[derive(Clone, Copy, Debug)]
pub struct End;
