//! Errors surfaced by polygon construction and clipping.

use std::fmt;

use thiserror::Error;

/// Which side of a binary polygon operation a diagnostic refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    /// The polygon the method was called on.
    Receiver,
    /// The polygon passed as argument.
    Argument,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Receiver => write!(f, "receiver"),
            Operand::Argument => write!(f, "argument"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeomError {
    /// A polygon needs at least one vertex.
    #[error("polygon has no vertices")]
    EmptyPolygon,
    /// Clipping is only defined for convex, counter-clockwise polygons.
    #[error("unsupported operation: {operand} polygon is not convex (counter-clockwise winding expected)")]
    NonConvex { operand: Operand },
}

pub type Result<T> = std::result::Result<T, GeomError>;
