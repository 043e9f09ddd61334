//! Options for iterating over an XMP tree

use crate::options::{impl_option_set, OptionSet};

bitflags::bitflags! {
    /// Bits of [`IteratorOptions`]
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct IteratorFlags: u32 {
        /// Visit only the immediate children of the start node
        const JUST_CHILDREN = 0x0100;
        /// Report only leaf nodes
        const JUST_LEAFNODES = 0x0200;
        /// Report the leaf name instead of the full path
        const JUST_LEAFNAME = 0x0400;
        /// Skip qualifiers
        const OMIT_QUALIFIERS = 0x1000;
    }
}

/// Options deciding how deep an iteration goes and which nodes it reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct IteratorOptions {
    flags: IteratorFlags,
}

impl IteratorOptions {
    /// Visit only the immediate children of the start node
    pub fn just_children(&self) -> bool {
        self.flag(IteratorFlags::JUST_CHILDREN)
    }

    /// Set whether only immediate children are visited
    pub fn set_just_children(&mut self, value: bool) {
        self.set_flag(IteratorFlags::JUST_CHILDREN, value);
    }

    /// Builder form of [`set_just_children`](Self::set_just_children)
    pub fn with_just_children(mut self, value: bool) -> Self {
        self.set_just_children(value);
        self
    }

    /// Report only leaf nodes
    pub fn just_leaf_nodes(&self) -> bool {
        self.flag(IteratorFlags::JUST_LEAFNODES)
    }

    /// Set whether only leaf nodes are reported
    pub fn set_just_leaf_nodes(&mut self, value: bool) {
        self.set_flag(IteratorFlags::JUST_LEAFNODES, value);
    }

    /// Builder form of [`set_just_leaf_nodes`](Self::set_just_leaf_nodes)
    pub fn with_just_leaf_nodes(mut self, value: bool) -> Self {
        self.set_just_leaf_nodes(value);
        self
    }

    /// Report the leaf name instead of the full path
    pub fn just_leaf_name(&self) -> bool {
        self.flag(IteratorFlags::JUST_LEAFNAME)
    }

    /// Set whether the leaf name replaces the full path
    pub fn set_just_leaf_name(&mut self, value: bool) {
        self.set_flag(IteratorFlags::JUST_LEAFNAME, value);
    }

    /// Builder form of [`set_just_leaf_name`](Self::set_just_leaf_name)
    pub fn with_just_leaf_name(mut self, value: bool) -> Self {
        self.set_just_leaf_name(value);
        self
    }

    /// Skip qualifiers
    pub fn omit_qualifiers(&self) -> bool {
        self.flag(IteratorFlags::OMIT_QUALIFIERS)
    }

    /// Set whether qualifiers are skipped
    pub fn set_omit_qualifiers(&mut self, value: bool) {
        self.set_flag(IteratorFlags::OMIT_QUALIFIERS, value);
    }

    /// Builder form of [`set_omit_qualifiers`](Self::set_omit_qualifiers)
    pub fn with_omit_qualifiers(mut self, value: bool) -> Self {
        self.set_omit_qualifiers(value);
        self
    }
}

impl_option_set!(IteratorOptions, IteratorFlags, flags);

impl OptionSet for IteratorOptions {
    const KIND: &'static str = "iterator";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let mut options = IteratorOptions::default()
            .with_just_children(true)
            .with_omit_qualifiers(true);
        assert!(options.just_children());
        assert!(!options.just_leaf_nodes());
        assert!(options.omit_qualifiers());
        assert_eq!(options.raw(), 0x1100);

        options.set_just_children(false);
        assert!(options.is_exactly(IteratorFlags::OMIT_QUALIFIERS));
    }

    #[test]
    fn test_debug_string() {
        let options = IteratorOptions::from_raw(0x1600).unwrap();
        assert_eq!(
            options.debug_string(),
            "JUST_LEAFNODES | JUST_LEAFNAME | OMIT_QUALIFIERS"
        );
    }

    #[test]
    fn test_invalid_bits() {
        let err = IteratorOptions::from_raw(0x0101).unwrap_err();
        assert_eq!(err.invalid_bits(), Some(0x0001));
    }
}
