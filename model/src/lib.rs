//! PPhy object types and packed collision codes as typed Rust data.
//!
//! The physics engine dispatches collision handling on a 16-bit code built
//! from the types of the two colliding objects. This crate owns the ordered
//! type table and the packing rule, so the generator and any consumer agree
//! on both.
//!
//! # Entry Point
//!
//! ```
//! use pphy_model::{CollisionCode, CollisionPair, ObjectType};
//!
//! let code = CollisionCode::of(ObjectType::Static, ObjectType::Clip);
//! assert_eq!(code.raw(), 0x1);
//! assert_eq!(CollisionPair::all().count(), 25);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod model;

pub use error::ModelError;
pub use model::{CollisionCode, CollisionPair, ObjectType};
