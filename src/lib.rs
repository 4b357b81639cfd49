//! Pick the one validation error a form should surface.
//!
//! The work happens in [`field_errors`]; [`dom`] supplies the element handles
//! and document order that position-based ranking relies on.

pub use dom;
pub use field_errors::*;
