//! Error type for object-type and collision-code conversions.

use thiserror::Error;

/// Errors raised when converting raw values into model types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The string does not spell one of the object type names.
    #[error("unknown object type: {0:?}")]
    UnknownObjectType(String),
    /// The index is outside the object type table.
    #[error("object type index out of range: {0}")]
    InvalidTypeIndex(u8),
    /// One of the code's bytes does not name an object type.
    #[error("invalid collision code: 0x{0:X}")]
    InvalidCollisionCode(u16),
}
