//! Options describing the shape of an XMP node
//!
//! These flags tell simple values, structs and the array forms apart and
//! record whether a node carries qualifiers. Struct and array are mutually
//! exclusive, and a URI value only makes sense on a simple node.

use crate::core::error::{XmpError, XmpResult};
use crate::options::{impl_option_set, OptionSet};

bitflags::bitflags! {
    /// Bits of [`PropertyOptions`]
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PropertyFlags: u32 {
        /// The value is a URI
        const URI = 0x0000_0002;
        /// The node has qualifiers
        const HAS_QUALIFIERS = 0x0000_0010;
        /// The node is a qualifier of its parent
        const QUALIFIER = 0x0000_0020;
        /// The node has an `xml:lang` qualifier
        const HAS_LANGUAGE = 0x0000_0040;
        /// The node has an `rdf:type` qualifier
        const HAS_TYPE = 0x0000_0080;
        /// The node is a struct
        const STRUCT = 0x0000_0100;
        /// The node is an array (`rdf:Bag` unless further flags are set)
        const ARRAY = 0x0000_0200;
        /// The array is ordered (`rdf:Seq`)
        const ARRAY_ORDERED = 0x0000_0400;
        /// The array items are alternatives (`rdf:Alt`)
        const ARRAY_ALTERNATE = 0x0000_0800;
        /// The alternatives are language variants of a text
        const ARRAY_ALT_TEXT = 0x0000_1000;
        /// The node is a schema node
        const SCHEMA_NODE = 0x8000_0000;
    }
}

impl PropertyFlags {
    /// All array form bits
    pub const ARRAY_FORM_MASK: Self = Self::ARRAY
        .union(Self::ARRAY_ORDERED)
        .union(Self::ARRAY_ALTERNATE)
        .union(Self::ARRAY_ALT_TEXT);
}

/// Shape flags of a property, qualifier or schema node.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyOptions {
    flags: PropertyFlags,
}

impl PropertyOptions {
    /// The value is a URI
    pub fn is_uri(&self) -> bool {
        self.flag(PropertyFlags::URI)
    }

    /// Mark the value as a URI
    pub fn set_uri(&mut self, value: bool) {
        self.set_flag(PropertyFlags::URI, value);
    }

    /// The node has qualifiers
    pub fn has_qualifiers(&self) -> bool {
        self.flag(PropertyFlags::HAS_QUALIFIERS)
    }

    /// Set whether the node has qualifiers
    pub fn set_has_qualifiers(&mut self, value: bool) {
        self.set_flag(PropertyFlags::HAS_QUALIFIERS, value);
    }

    /// The node is a qualifier of its parent
    pub fn is_qualifier(&self) -> bool {
        self.flag(PropertyFlags::QUALIFIER)
    }

    /// Mark the node as a qualifier
    pub fn set_qualifier(&mut self, value: bool) {
        self.set_flag(PropertyFlags::QUALIFIER, value);
    }

    /// The node has an `xml:lang` qualifier
    pub fn has_language(&self) -> bool {
        self.flag(PropertyFlags::HAS_LANGUAGE)
    }

    /// Set whether the node has an `xml:lang` qualifier
    pub fn set_has_language(&mut self, value: bool) {
        self.set_flag(PropertyFlags::HAS_LANGUAGE, value);
    }

    /// The node has an `rdf:type` qualifier
    pub fn has_type(&self) -> bool {
        self.flag(PropertyFlags::HAS_TYPE)
    }

    /// Set whether the node has an `rdf:type` qualifier
    pub fn set_has_type(&mut self, value: bool) {
        self.set_flag(PropertyFlags::HAS_TYPE, value);
    }

    /// The node is a struct
    pub fn is_struct(&self) -> bool {
        self.flag(PropertyFlags::STRUCT)
    }

    /// Mark the node as a struct
    pub fn set_struct(&mut self, value: bool) {
        self.set_flag(PropertyFlags::STRUCT, value);
    }

    /// The node is an array of any form
    pub fn is_array(&self) -> bool {
        self.flag(PropertyFlags::ARRAY)
    }

    /// Mark the node as an array
    pub fn set_array(&mut self, value: bool) {
        self.set_flag(PropertyFlags::ARRAY, value);
    }

    /// The array is ordered
    pub fn is_array_ordered(&self) -> bool {
        self.flag(PropertyFlags::ARRAY_ORDERED)
    }

    /// Set whether the array is ordered
    pub fn set_array_ordered(&mut self, value: bool) {
        self.set_flag(PropertyFlags::ARRAY_ORDERED, value);
    }

    /// The array items are alternatives
    pub fn is_array_alternate(&self) -> bool {
        self.flag(PropertyFlags::ARRAY_ALTERNATE)
    }

    /// Set whether the array items are alternatives
    pub fn set_array_alternate(&mut self, value: bool) {
        self.set_flag(PropertyFlags::ARRAY_ALTERNATE, value);
    }

    /// The array is an alt-text array
    pub fn is_array_alt_text(&self) -> bool {
        self.flag(PropertyFlags::ARRAY_ALT_TEXT)
    }

    /// Set whether the array is an alt-text array
    pub fn set_array_alt_text(&mut self, value: bool) {
        self.set_flag(PropertyFlags::ARRAY_ALT_TEXT, value);
    }

    /// The node is a schema node
    pub fn is_schema_node(&self) -> bool {
        self.flag(PropertyFlags::SCHEMA_NODE)
    }

    /// Mark the node as a schema node
    pub fn set_schema_node(&mut self, value: bool) {
        self.set_flag(PropertyFlags::SCHEMA_NODE, value);
    }

    /// Whether the node is a struct or an array
    pub fn is_composite(&self) -> bool {
        self.contains_any(PropertyFlags::STRUCT | PropertyFlags::ARRAY)
    }

    /// Whether the node holds a plain value
    pub fn is_simple(&self) -> bool {
        !self.is_composite()
    }

    /// Whether both describe the same array form
    pub fn equal_array_types(&self, other: &PropertyOptions) -> bool {
        self.flags & PropertyFlags::ARRAY_FORM_MASK == other.flags & PropertyFlags::ARRAY_FORM_MASK
    }

    /// Whether only array form bits are set
    pub fn is_only_array_options(&self) -> bool {
        (self.flags - PropertyFlags::ARRAY_FORM_MASK).is_empty()
    }

    /// Add the bits of `other`
    ///
    /// The union is checked like a bulk set; on error nothing changes.
    pub fn merge_with(&mut self, other: &PropertyOptions) -> XmpResult<()> {
        self.set_flags(self.flags | other.flags)
    }
}

impl_option_set!(PropertyOptions, PropertyFlags, flags);

impl OptionSet for PropertyOptions {
    const KIND: &'static str = "property";

    fn check_consistency(flags: PropertyFlags) -> XmpResult<()> {
        if flags.contains(PropertyFlags::STRUCT | PropertyFlags::ARRAY) {
            return Err(XmpError::BadOptions(
                "IsStruct and IsArray options are mutually exclusive".to_string(),
            ));
        }
        if flags.contains(PropertyFlags::URI)
            && flags.intersects(PropertyFlags::STRUCT | PropertyFlags::ARRAY)
        {
            return Err(XmpError::BadOptions(
                "Structs and arrays can't have \"value\" options".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_struct_and_array_exclusive() {
        let err = PropertyOptions::from_raw((PropertyFlags::STRUCT | PropertyFlags::ARRAY).bits())
            .unwrap_err();
        assert!(matches!(err, XmpError::BadOptions(_)));
    }

    #[test]
    fn test_uri_only_on_simple() {
        let mut options = PropertyOptions::default();
        assert!(options
            .set_flags(PropertyFlags::URI | PropertyFlags::ARRAY)
            .is_err());
        assert!(options
            .set_flags(PropertyFlags::URI | PropertyFlags::HAS_TYPE)
            .is_ok());
    }

    #[test]
    fn test_composite() {
        let mut options = PropertyOptions::default();
        assert!(options.is_simple());
        options.set_struct(true);
        assert!(options.is_composite());
        assert!(!options.is_simple());
    }

    #[test]
    fn test_array_types() {
        let mut bag = PropertyOptions::default();
        bag.set_array(true);
        let mut seq = bag;
        seq.set_array_ordered(true);
        let mut qualified_seq = seq;
        qualified_seq.set_has_qualifiers(true);

        assert!(!bag.equal_array_types(&seq));
        assert!(seq.equal_array_types(&qualified_seq));
        assert!(seq.is_only_array_options());
        assert!(!qualified_seq.is_only_array_options());
    }

    #[test]
    fn test_merge_with() {
        let mut options = PropertyOptions::from_raw(0x0200).unwrap();
        let lang = PropertyOptions::from_raw(0x0040).unwrap();
        options.merge_with(&lang).unwrap();
        assert!(options.is_array());
        assert!(options.has_language());

        let structure = PropertyOptions::from_raw(0x0100).unwrap();
        assert!(options.merge_with(&structure).is_err());
        assert!(!options.is_struct());
    }

    #[test]
    fn test_schema_node_name() {
        let options = PropertyOptions::from_raw(0x8000_0000).unwrap();
        assert!(options.is_schema_node());
        assert_eq!(options.debug_string(), "SCHEMA_NODE");
        assert_eq!(options.to_string(), "0x80000000");
    }
}
