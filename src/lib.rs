//! Option vocabularies and property paths for XMP metadata
//!
//! This crate provides two building blocks of an XMP toolkit:
//!
//! - Validated option sets ([`ParseOptions`], [`SerializeOptions`],
//!   [`IteratorOptions`], [`TemplateOptions`], [`PropertyOptions`],
//!   [`AliasOptions`]) sharing the [`OptionSet`] contract, each backed by
//!   a `bitflags` type such as [`SerializeFlags`].
//! - The property-path model ([`Path`], [`PathSegment`], [`StepKind`]).
//!
//! # Example
//!
//! ```rust
//! use xmpkit_options::{Encoding, OptionSet, SerializeOptions};
//!
//! let options = SerializeOptions::default()
//!     .with_use_compact_format(true)
//!     .with_encoding(Encoding::Utf16Le);
//!
//! assert_eq!(options.encoding().as_str(), "UTF-16LE");
//! assert_eq!(
//!     options.debug_string(),
//!     "LITTLE_ENDIAN_BIT | UTF16_BIT | USE_COMPACT_FORMAT"
//! );
//! ```

pub mod core;
pub mod options;

pub use crate::core::{Path, PathSegment, StepKind, XmpError, XmpResult};
pub use crate::options::{
    AliasFlags, AliasOptions, Encoding, IteratorFlags, IteratorOptions, OptionSet, ParseFlags,
    ParseOptions, PropertyFlags, PropertyOptions, SerializeFlags, SerializeOptions, TemplateFlags,
    TemplateOptions, NO_OPTIONS, UNDEFINED_OPTION_NAME,
};
