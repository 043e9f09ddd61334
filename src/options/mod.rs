//! Option vocabularies for XMP operations
//!
//! Every vocabulary (parse, serialize, iterate, template merge, property
//! shape, alias form) is a 32-bit `bitflags` word that can only hold the
//! bits the vocabulary declares. The shared contract lives in
//! [`OptionSet`]: validation, the consistency hook, raw access and bit
//! naming. Each vocabulary builds its named boolean accessors on
//! [`OptionSet::flag`] and [`OptionSet::set_flag`].
//!
//! # Example
//!
//! ```rust
//! use xmpkit_options::{OptionSet, ParseOptions};
//!
//! let mut options = ParseOptions::default();
//! options.set_require_xmp_meta(true);
//! assert!(options.require_xmp_meta());
//!
//! // Unknown bits are rejected before anything is committed
//! assert!(ParseOptions::from_raw(0x8000).is_err());
//! ```

use crate::core::error::{XmpError, XmpResult};
use bitflags::Flags;

pub mod alias;
pub mod iterator;
pub mod parse;
pub mod property;
pub mod serialize;
pub mod template;

pub use alias::{AliasFlags, AliasOptions};
pub use iterator::{IteratorFlags, IteratorOptions};
pub use parse::{ParseFlags, ParseOptions};
pub use property::{PropertyFlags, PropertyOptions};
pub use serialize::{Encoding, SerializeFlags, SerializeOptions};
pub use template::{TemplateFlags, TemplateOptions};

/// Token returned by [`OptionSet::debug_string`] for an empty bitmask
pub const NO_OPTIONS: &str = "<none>";

/// Name produced for a bit the vocabulary has no name for
pub const UNDEFINED_OPTION_NAME: &str = "<option name not defined>";

pub(crate) mod sealed {
    /// Access to the typed flag word, only reachable from inside the crate
    pub trait FlagWord {
        /// The `bitflags` type holding this vocabulary's bits
        type Flags: bitflags::Flags<Bits = u32> + Copy + std::fmt::Debug;

        fn word(&self) -> Self::Flags;
        fn word_mut(&mut self) -> &mut Self::Flags;
    }
}

/// A validated set of option bits
///
/// Implementors are sealed: only the vocabularies defined in this crate
/// can hold a flag word. Every bulk set is checked against the bits the
/// vocabulary's flag type declares, and named sets are truncated to them,
/// so `raw() & !valid_mask() == 0` always holds.
///
/// The consistency check runs when a whole bitmask is supplied
/// ([`from_raw`](Self::from_raw), [`set_raw`](Self::set_raw),
/// [`set_flags`](Self::set_flags)). Named accessors built on
/// [`set_flag`](Self::set_flag) only toggle bits and do not re-run it, so
/// a sequence of named sets can reach a combination `set_raw` would reject.
pub trait OptionSet: sealed::FlagWord + Default {
    /// Vocabulary name used in log output
    const KIND: &'static str;

    /// Vocabulary specific check of an otherwise valid bitmask
    fn check_consistency(_flags: Self::Flags) -> XmpResult<()> {
        Ok(())
    }

    /// Every bit this vocabulary recognizes
    fn valid_mask() -> u32 {
        <Self::Flags as Flags>::all().bits()
    }

    /// Create an option set holding exactly `bits`
    ///
    /// Non-flag fields keep their defaults.
    fn from_raw(bits: u32) -> XmpResult<Self> {
        let mut options = Self::default();
        options.set_raw(bits)?;
        Ok(options)
    }

    /// Create an option set with no bits set
    fn empty() -> Self {
        let mut options = Self::default();
        options.clear();
        options
    }

    /// Check `bits` against the valid mask and the consistency rules
    fn validate(bits: u32) -> XmpResult<Self::Flags> {
        let Some(flags) = <Self::Flags as Flags>::from_bits(bits) else {
            let invalid = bits & !Self::valid_mask();
            log::debug!(
                "rejected {} options 0x{:x}: unknown bit(s) 0x{:x}",
                Self::KIND,
                bits,
                invalid
            );
            return Err(XmpError::InvalidOptionBits(invalid));
        };
        Self::check_consistency(flags).map_err(|err| {
            log::debug!("rejected {} options 0x{:x}: {}", Self::KIND, bits, err);
            err
        })?;
        Ok(flags)
    }

    /// The raw bitmask
    fn raw(&self) -> u32 {
        self.word().bits()
    }

    /// The typed flags
    fn flags(&self) -> Self::Flags {
        self.word()
    }

    /// Replace the whole bitmask
    ///
    /// Nothing is changed when validation fails.
    fn set_raw(&mut self, bits: u32) -> XmpResult<()> {
        *self.word_mut() = Self::validate(bits)?;
        Ok(())
    }

    /// Replace all flags, with the same checks as [`set_raw`](Self::set_raw)
    fn set_flags(&mut self, flags: Self::Flags) -> XmpResult<()> {
        self.set_raw(flags.bits())
    }

    /// Reset to the empty bitmask
    fn clear(&mut self) {
        *self.word_mut() = <Self::Flags as Flags>::empty();
    }

    /// Whether any of `flags` is set
    fn flag(&self, flags: Self::Flags) -> bool {
        self.word().intersects(flags)
    }

    /// Set or clear `flags` without re-running the consistency check
    ///
    /// Bits the vocabulary does not declare are dropped.
    fn set_flag(&mut self, flags: Self::Flags, value: bool) {
        let known = <Self::Flags as Flags>::from_bits_truncate(flags.bits());
        if known.bits() != flags.bits() {
            log::debug!(
                "ignored unknown {} option bit(s) 0x{:x}",
                Self::KIND,
                flags.bits() & !known.bits()
            );
        }
        self.word_mut().set(known, value);
    }

    /// Whether the bitmask equals `flags`
    fn is_exactly(&self, flags: Self::Flags) -> bool {
        self.word().bits() == flags.bits()
    }

    /// Whether every bit of `flags` is set
    fn contains_all(&self, flags: Self::Flags) -> bool {
        self.word().contains(flags)
    }

    /// Whether at least one bit of `flags` is set
    fn contains_any(&self, flags: Self::Flags) -> bool {
        self.word().intersects(flags)
    }

    /// Display name of a single bit
    fn name_of(bit: u32) -> &'static str {
        let name = <Self::Flags as Flags>::FLAGS
            .iter()
            .find(|flag| !flag.name().is_empty() && flag.value().bits() == bit)
            .map(|flag| flag.name());
        match name {
            Some(name) => name,
            None => {
                log::trace!("{} option bit 0x{:x} has no name", Self::KIND, bit);
                UNDEFINED_OPTION_NAME
            }
        }
    }

    /// Names of all set bits, lowest bit first, joined by `" | "`
    fn debug_string(&self) -> String {
        let mut bits = self.raw();
        if bits == 0 {
            return NO_OPTIONS.to_string();
        }

        let mut out = String::new();
        while bits != 0 {
            let rest = bits & (bits - 1);
            out.push_str(Self::name_of(bits ^ rest));
            if rest != 0 {
                out.push_str(" | ");
            }
            bits = rest;
        }
        out
    }
}

/// Implement the flag word plumbing plus bitmask based equality, hashing
/// and `0x..` display for an option vocabulary.
macro_rules! impl_option_set {
    ($ty:ty, $flags:ty, $field:ident) => {
        impl $crate::options::sealed::FlagWord for $ty {
            type Flags = $flags;

            fn word(&self) -> $flags {
                self.$field
            }

            fn word_mut(&mut self) -> &mut $flags {
                &mut self.$field
            }
        }

        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.$field.bits() == other.$field.bits()
            }
        }

        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(&self.$field.bits(), state);
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "0x{:x}", self.$field.bits())
            }
        }
    };
}

pub(crate) use impl_option_set;
