//! `stocklist-core` — shared domain primitives.
//!
//! Identifiers, marker traits and the identifier error type. No IO, no
//! infrastructure concerns.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ItemId, SessionId};
pub use value_object::ValueObject;
