//! Options for applying a metadata template

use crate::options::{impl_option_set, OptionSet};

bitflags::bitflags! {
    /// Bits of [`TemplateOptions`]
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TemplateFlags: u32 {
        /// Delete destination properties that do not appear in the template
        const CLEAR_UNNAMED_PROPERTIES = 0x0002;
        /// Overwrite destination properties that also appear in the template
        const REPLACE_EXISTING_PROPERTIES = 0x0010;
        /// Also touch internal properties
        const INCLUDE_INTERNAL_PROPERTIES = 0x0020;
        /// Add template properties missing from the destination
        const ADD_NEW_PROPERTIES = 0x0040;
        /// Delete destination properties replaced by an empty template value
        const REPLACE_WITH_DELETE_EMPTY = 0x0080;
    }
}

/// Options deciding which properties a template merge adds, replaces or
/// clears in the destination.
///
/// Nothing is set by default, so a default merge leaves the destination
/// unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateOptions {
    flags: TemplateFlags,
}

impl TemplateOptions {
    /// Delete destination properties missing from the template
    pub fn clear_unnamed_properties(&self) -> bool {
        self.flag(TemplateFlags::CLEAR_UNNAMED_PROPERTIES)
    }

    /// Set whether unnamed destination properties are deleted
    pub fn set_clear_unnamed_properties(&mut self, value: bool) {
        self.set_flag(TemplateFlags::CLEAR_UNNAMED_PROPERTIES, value);
    }

    /// Builder form of [`set_clear_unnamed_properties`](Self::set_clear_unnamed_properties)
    pub fn with_clear_unnamed_properties(mut self, value: bool) -> Self {
        self.set_clear_unnamed_properties(value);
        self
    }

    /// Overwrite destination properties also found in the template
    pub fn replace_existing_properties(&self) -> bool {
        self.flag(TemplateFlags::REPLACE_EXISTING_PROPERTIES)
    }

    /// Set whether existing properties are overwritten
    pub fn set_replace_existing_properties(&mut self, value: bool) {
        self.set_flag(TemplateFlags::REPLACE_EXISTING_PROPERTIES, value);
    }

    /// Builder form of [`set_replace_existing_properties`](Self::set_replace_existing_properties)
    pub fn with_replace_existing_properties(mut self, value: bool) -> Self {
        self.set_replace_existing_properties(value);
        self
    }

    /// Include internal properties in the merge
    pub fn include_internal_properties(&self) -> bool {
        self.flag(TemplateFlags::INCLUDE_INTERNAL_PROPERTIES)
    }

    /// Set whether internal properties take part in the merge
    pub fn set_include_internal_properties(&mut self, value: bool) {
        self.set_flag(TemplateFlags::INCLUDE_INTERNAL_PROPERTIES, value);
    }

    /// Builder form of [`set_include_internal_properties`](Self::set_include_internal_properties)
    pub fn with_include_internal_properties(mut self, value: bool) -> Self {
        self.set_include_internal_properties(value);
        self
    }

    /// Add template properties missing from the destination
    pub fn add_new_properties(&self) -> bool {
        self.flag(TemplateFlags::ADD_NEW_PROPERTIES)
    }

    /// Set whether missing properties are added
    pub fn set_add_new_properties(&mut self, value: bool) {
        self.set_flag(TemplateFlags::ADD_NEW_PROPERTIES, value);
    }

    /// Builder form of [`set_add_new_properties`](Self::set_add_new_properties)
    pub fn with_add_new_properties(mut self, value: bool) -> Self {
        self.set_add_new_properties(value);
        self
    }

    /// Delete destination properties replaced by an empty value
    pub fn replace_with_delete_empty(&self) -> bool {
        self.flag(TemplateFlags::REPLACE_WITH_DELETE_EMPTY)
    }

    /// Set whether empty template values delete the destination property
    pub fn set_replace_with_delete_empty(&mut self, value: bool) {
        self.set_flag(TemplateFlags::REPLACE_WITH_DELETE_EMPTY, value);
    }

    /// Builder form of [`set_replace_with_delete_empty`](Self::set_replace_with_delete_empty)
    pub fn with_replace_with_delete_empty(mut self, value: bool) -> Self {
        self.set_replace_with_delete_empty(value);
        self
    }
}

impl_option_set!(TemplateOptions, TemplateFlags, flags);

impl OptionSet for TemplateOptions {
    const KIND: &'static str = "template";
}
