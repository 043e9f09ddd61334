//! XMP Core module
//!
//! This module contains the error types and the property-path model shared
//! by the path parser, the alias resolver and everything that reports a
//! property location.

pub mod error;
pub mod path;

pub use error::{XmpError, XmpResult};
pub use path::{Path, PathSegment, StepKind};
