//! Options describing the form of an alias
//!
//! An alias either maps directly onto its actual property, or onto the
//! first item of an array of some form. Each array form implies the weaker
//! ones, down to a plain array.

use crate::core::error::XmpResult;
use crate::options::{impl_option_set, OptionSet, PropertyFlags, PropertyOptions};

bitflags::bitflags! {
    /// Bits of [`AliasOptions`], sharing their values with [`PropertyFlags`]
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct AliasFlags: u32 {
        /// The actual property is the first item of an unordered array
        const PROP_ARRAY = PropertyFlags::ARRAY.bits();
        /// The actual property is the first item of an ordered array
        const PROP_ARRAY_ORDERED = PropertyFlags::ARRAY_ORDERED.bits();
        /// The actual property is the first item of an alternate array
        const PROP_ARRAY_ALTERNATE = PropertyFlags::ARRAY_ALTERNATE.bits();
        /// The actual property is the default item of an alt-text array
        const PROP_ARRAY_ALT_TEXT = PropertyFlags::ARRAY_ALT_TEXT.bits();
    }
}

impl AliasFlags {
    /// The actual property is a simple value
    pub const PROP_DIRECT: Self = Self::empty();
}

/// Form of an alias
#[derive(Debug, Clone, Copy, Default)]
pub struct AliasOptions {
    flags: AliasFlags,
}

impl AliasOptions {
    /// Whether the alias maps directly onto its actual property
    pub fn is_simple(&self) -> bool {
        self.is_exactly(AliasFlags::PROP_DIRECT)
    }

    /// The actual property is an array item
    pub fn is_array(&self) -> bool {
        self.flag(AliasFlags::PROP_ARRAY)
    }

    /// Set whether the actual property is an array item
    pub fn set_array(&mut self, value: bool) {
        self.set_flag(AliasFlags::PROP_ARRAY, value);
    }

    /// The actual property is an item of an ordered array
    pub fn is_array_ordered(&self) -> bool {
        self.flag(AliasFlags::PROP_ARRAY_ORDERED)
    }

    /// Setting also marks the array bit
    pub fn set_array_ordered(&mut self, value: bool) {
        self.set_flag(AliasFlags::PROP_ARRAY | AliasFlags::PROP_ARRAY_ORDERED, value);
    }

    /// The actual property is an item of an alternate array
    pub fn is_array_alternate(&self) -> bool {
        self.flag(AliasFlags::PROP_ARRAY_ALTERNATE)
    }

    /// Setting also marks the ordered and array bits
    pub fn set_array_alternate(&mut self, value: bool) {
        self.set_flag(
            AliasFlags::PROP_ARRAY | AliasFlags::PROP_ARRAY_ORDERED | AliasFlags::PROP_ARRAY_ALTERNATE,
            value,
        );
    }

    /// The actual property is the default item of an alt-text array
    pub fn is_array_alt_text(&self) -> bool {
        self.flag(AliasFlags::PROP_ARRAY_ALT_TEXT)
    }

    /// Setting also marks the alternate, ordered and array bits
    pub fn set_array_alt_text(&mut self, value: bool) {
        self.set_flag(AliasFlags::all(), value);
    }

    /// The matching node shape of the actual property
    pub fn to_property_options(&self) -> XmpResult<PropertyOptions> {
        PropertyOptions::from_raw(self.raw())
    }
}

impl_option_set!(AliasOptions, AliasFlags, flags);

impl OptionSet for AliasOptions {
    const KIND: &'static str = "alias";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_by_default() {
        let options = AliasOptions::default();
        assert!(options.is_simple());
        assert!(!options.is_array());
    }

    #[test]
    fn test_alt_text_implies_weaker_forms() {
        let mut options = AliasOptions::default();
        options.set_array_alt_text(true);
        assert!(options.is_array());
        assert!(options.is_array_ordered());
        assert!(options.is_array_alternate());
        assert!(options.is_array_alt_text());
        assert_eq!(
            options.debug_string(),
            "PROP_ARRAY | PROP_ARRAY_ORDERED | PROP_ARRAY_ALTERNATE | PROP_ARRAY_ALT_TEXT"
        );
    }

    #[test]
    fn test_to_property_options() {
        let mut options = AliasOptions::default();
        options.set_array_ordered(true);
        let property = options.to_property_options().unwrap();
        assert!(property.is_array());
        assert!(property.is_array_ordered());
        assert!(!property.is_array_alternate());
    }

    #[test]
    fn test_struct_bit_rejected() {
        let err = AliasOptions::from_raw(PropertyFlags::STRUCT.bits()).unwrap_err();
        assert_eq!(err.invalid_bits(), Some(0x0100));
    }

    #[test]
    fn test_set_flag_ignores_struct_bit() {
        let mut options = AliasOptions::default();
        options.set_flag(AliasFlags::from_bits_retain(PropertyFlags::STRUCT.bits()), true);
        assert!(options.is_simple());
        assert_eq!(options.raw(), 0);
    }
}
