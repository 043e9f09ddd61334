//! Options for serializing XMP packets
//!
//! Two bits of the flag word form the output encoding. They are read and
//! written as one three-way value, never as independent flags.

use crate::core::error::{XmpError, XmpResult};
use crate::options::{impl_option_set, OptionSet};
use std::fmt;

/// Output encoding selected by the encoding bits of [`SerializeOptions`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    /// UTF-8 (both encoding bits clear)
    #[default]
    Utf8,
    /// UTF-16, big-endian
    Utf16Be,
    /// UTF-16, little-endian
    Utf16Le,
}

impl Encoding {
    /// Encoding name as written in the XML declaration
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf16Be => "UTF-16BE",
            Encoding::Utf16Le => "UTF-16LE",
        }
    }

    fn flags(self) -> SerializeFlags {
        match self {
            Encoding::Utf8 => SerializeFlags::ENCODE_UTF8,
            Encoding::Utf16Be => SerializeFlags::ENCODE_UTF16BE,
            Encoding::Utf16Le => SerializeFlags::ENCODE_UTF16LE,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options controlling how the RDF/XML serializer writes a packet.
///
/// Cloning copies the bitmask and every formatting field.
#[derive(Debug, Clone)]
pub struct SerializeOptions {
    flags: SerializeFlags,
    base_indent: usize,
    indent: String,
    newline: String,
    padding: usize,
    omit_version_attribute: bool,
}

bitflags::bitflags! {
    /// Bits of [`SerializeOptions`]
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SerializeFlags: u32 {
        /// Bit selecting little-endian byte order for UTF-16
        const LITTLE_ENDIAN_BIT = 0x0001;
        /// Bit selecting UTF-16
        const UTF16_BIT = 0x0002;
        /// Do not write the `<?xpacket ... ?>` wrapper
        const OMIT_PACKET_WRAPPER = 0x0010;
        /// Mark the packet as read-only
        const READONLY_PACKET = 0x0020;
        /// Use the compact RDF form (simple properties as attributes)
        const USE_COMPACT_FORMAT = 0x0040;
        /// Use the canonical RDF form
        const USE_CANONICAL_FORMAT = 0x0080;
        /// Reserve room for a thumbnail in the padding
        const INCLUDE_THUMBNAIL_PAD = 0x0100;
        /// Pad the packet to exactly the requested length
        const EXACT_PACKET_LENGTH = 0x0200;
        /// Do not write the `x:xmpmeta` element
        const OMIT_XMPMETA_ELEMENT = 0x1000;
        /// Sort schemas and properties
        const SORT = 0x2000;
    }
}

impl SerializeFlags {
    /// Both encoding bits
    pub const ENCODING_MASK: Self = Self::UTF16_BIT.union(Self::LITTLE_ENDIAN_BIT);
    /// UTF-8 encoding
    pub const ENCODE_UTF8: Self = Self::empty();
    /// UTF-16 big-endian encoding
    pub const ENCODE_UTF16BE: Self = Self::UTF16_BIT;
    /// UTF-16 little-endian encoding
    pub const ENCODE_UTF16LE: Self = Self::UTF16_BIT.union(Self::LITTLE_ENDIAN_BIT);
}

impl SerializeOptions {
    /// Default padding in bytes
    pub const DEFAULT_PADDING: usize = 2048;

    /// Skip the packet wrapper
    pub fn omit_packet_wrapper(&self) -> bool {
        self.flag(SerializeFlags::OMIT_PACKET_WRAPPER)
    }

    /// Set whether the packet wrapper is skipped
    pub fn set_omit_packet_wrapper(&mut self, value: bool) {
        self.set_flag(SerializeFlags::OMIT_PACKET_WRAPPER, value);
    }

    /// Builder form of [`set_omit_packet_wrapper`](Self::set_omit_packet_wrapper)
    pub fn with_omit_packet_wrapper(mut self, value: bool) -> Self {
        self.set_omit_packet_wrapper(value);
        self
    }

    /// Skip the `x:xmpmeta` element
    pub fn omit_xmpmeta_element(&self) -> bool {
        self.flag(SerializeFlags::OMIT_XMPMETA_ELEMENT)
    }

    /// Set whether the `x:xmpmeta` element is skipped
    pub fn set_omit_xmpmeta_element(&mut self, value: bool) {
        self.set_flag(SerializeFlags::OMIT_XMPMETA_ELEMENT, value);
    }

    /// Builder form of [`set_omit_xmpmeta_element`](Self::set_omit_xmpmeta_element)
    pub fn with_omit_xmpmeta_element(mut self, value: bool) -> Self {
        self.set_omit_xmpmeta_element(value);
        self
    }

    /// Write a read-only packet
    pub fn readonly_packet(&self) -> bool {
        self.flag(SerializeFlags::READONLY_PACKET)
    }

    /// Set whether the packet is read-only
    pub fn set_readonly_packet(&mut self, value: bool) {
        self.set_flag(SerializeFlags::READONLY_PACKET, value);
    }

    /// Builder form of [`set_readonly_packet`](Self::set_readonly_packet)
    pub fn with_readonly_packet(mut self, value: bool) -> Self {
        self.set_readonly_packet(value);
        self
    }

    /// Use the compact RDF form
    pub fn use_compact_format(&self) -> bool {
        self.flag(SerializeFlags::USE_COMPACT_FORMAT)
    }

    /// Set the compact RDF form
    pub fn set_use_compact_format(&mut self, value: bool) {
        self.set_flag(SerializeFlags::USE_COMPACT_FORMAT, value);
    }

    /// Builder form of [`set_use_compact_format`](Self::set_use_compact_format)
    pub fn with_use_compact_format(mut self, value: bool) -> Self {
        self.set_use_compact_format(value);
        self
    }

    /// Use the canonical RDF form
    pub fn use_canonical_format(&self) -> bool {
        self.flag(SerializeFlags::USE_CANONICAL_FORMAT)
    }

    /// Set the canonical RDF form
    pub fn set_use_canonical_format(&mut self, value: bool) {
        self.set_flag(SerializeFlags::USE_CANONICAL_FORMAT, value);
    }

    /// Builder form of [`set_use_canonical_format`](Self::set_use_canonical_format)
    pub fn with_use_canonical_format(mut self, value: bool) -> Self {
        self.set_use_canonical_format(value);
        self
    }

    /// Reserve thumbnail room in the padding
    pub fn include_thumbnail_pad(&self) -> bool {
        self.flag(SerializeFlags::INCLUDE_THUMBNAIL_PAD)
    }

    /// Set whether thumbnail room is reserved
    pub fn set_include_thumbnail_pad(&mut self, value: bool) {
        self.set_flag(SerializeFlags::INCLUDE_THUMBNAIL_PAD, value);
    }

    /// Builder form of [`set_include_thumbnail_pad`](Self::set_include_thumbnail_pad)
    pub fn with_include_thumbnail_pad(mut self, value: bool) -> Self {
        self.set_include_thumbnail_pad(value);
        self
    }

    /// Pad to exactly [`padding`](Self::padding) bytes
    pub fn exact_packet_length(&self) -> bool {
        self.flag(SerializeFlags::EXACT_PACKET_LENGTH)
    }

    /// Set exact packet length padding
    pub fn set_exact_packet_length(&mut self, value: bool) {
        self.set_flag(SerializeFlags::EXACT_PACKET_LENGTH, value);
    }

    /// Builder form of [`set_exact_packet_length`](Self::set_exact_packet_length)
    pub fn with_exact_packet_length(mut self, value: bool) -> Self {
        self.set_exact_packet_length(value);
        self
    }

    /// Sort schemas and properties
    pub fn sort(&self) -> bool {
        self.flag(SerializeFlags::SORT)
    }

    /// Set sorting
    pub fn set_sort(&mut self, value: bool) {
        self.set_flag(SerializeFlags::SORT, value);
    }

    /// Builder form of [`set_sort`](Self::set_sort)
    pub fn with_sort(mut self, value: bool) -> Self {
        self.set_sort(value);
        self
    }

    /// The selected output encoding
    pub fn encoding(&self) -> Encoding {
        let selected = self.flags() & SerializeFlags::ENCODING_MASK;
        if selected == SerializeFlags::ENCODE_UTF16BE {
            Encoding::Utf16Be
        } else if selected == SerializeFlags::ENCODE_UTF16LE {
            Encoding::Utf16Le
        } else {
            // LITTLE_ENDIAN_BIT alone carries no meaning and reads as UTF-8
            Encoding::Utf8
        }
    }

    /// Select the output encoding, replacing the previous one
    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.set_flag(SerializeFlags::ENCODING_MASK, false);
        self.set_flag(encoding.flags(), true);
    }

    /// Builder form of [`set_encoding`](Self::set_encoding)
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.set_encoding(encoding);
        self
    }

    /// Whether UTF-8 is selected
    pub fn encode_utf8(&self) -> bool {
        self.flags() & SerializeFlags::ENCODING_MASK == SerializeFlags::ENCODE_UTF8
    }

    /// Select UTF-8
    pub fn set_encode_utf8(&mut self) {
        self.set_flag(SerializeFlags::ENCODING_MASK, false);
    }

    /// Whether UTF-16 big-endian is selected
    pub fn encode_utf16be(&self) -> bool {
        self.flags() & SerializeFlags::ENCODING_MASK == SerializeFlags::ENCODE_UTF16BE
    }

    /// Select UTF-16 big-endian, or clear the encoding back to UTF-8
    pub fn set_encode_utf16be(&mut self, value: bool) {
        self.set_flag(SerializeFlags::ENCODING_MASK, false);
        self.set_flag(SerializeFlags::ENCODE_UTF16BE, value);
    }

    /// Whether UTF-16 little-endian is selected
    pub fn encode_utf16le(&self) -> bool {
        self.flags() & SerializeFlags::ENCODING_MASK == SerializeFlags::ENCODE_UTF16LE
    }

    /// Select UTF-16 little-endian, or clear the encoding back to UTF-8
    pub fn set_encode_utf16le(&mut self, value: bool) {
        self.set_flag(SerializeFlags::ENCODING_MASK, false);
        self.set_flag(SerializeFlags::ENCODE_UTF16LE, value);
    }

    /// Indent level of the outermost element
    pub fn base_indent(&self) -> usize {
        self.base_indent
    }

    /// Set the outermost indent level
    pub fn set_base_indent(&mut self, base_indent: usize) {
        self.base_indent = base_indent;
    }

    /// Builder form of [`set_base_indent`](Self::set_base_indent)
    pub fn with_base_indent(mut self, base_indent: usize) -> Self {
        self.base_indent = base_indent;
        self
    }

    /// String written once per indent level
    pub fn indent(&self) -> &str {
        &self.indent
    }

    /// Set the indent string
    pub fn set_indent(&mut self, indent: impl Into<String>) {
        self.indent = indent.into();
    }

    /// Builder form of [`set_indent`](Self::set_indent)
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.set_indent(indent);
        self
    }

    /// Line terminator
    pub fn newline(&self) -> &str {
        &self.newline
    }

    /// Set the line terminator
    pub fn set_newline(&mut self, newline: impl Into<String>) {
        self.newline = newline.into();
    }

    /// Builder form of [`set_newline`](Self::set_newline)
    pub fn with_newline(mut self, newline: impl Into<String>) -> Self {
        self.set_newline(newline);
        self
    }

    /// Padding budget in bytes, 0 means computed by the serializer
    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Set the padding budget
    pub fn set_padding(&mut self, padding: usize) {
        self.padding = padding;
    }

    /// Builder form of [`set_padding`](Self::set_padding)
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Skip the toolkit version attribute on `x:xmpmeta`
    pub fn omit_version_attribute(&self) -> bool {
        self.omit_version_attribute
    }

    /// Set whether the version attribute is skipped
    pub fn set_omit_version_attribute(&mut self, value: bool) {
        self.omit_version_attribute = value;
    }
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            flags: SerializeFlags::empty(),
            base_indent: 0,
            indent: "  ".to_string(),
            newline: "\n".to_string(),
            padding: Self::DEFAULT_PADDING,
            omit_version_attribute: false,
        }
    }
}

impl_option_set!(SerializeOptions, SerializeFlags, flags);

impl OptionSet for SerializeOptions {
    const KIND: &'static str = "serialize";

    fn check_consistency(flags: SerializeFlags) -> XmpResult<()> {
        if flags.contains(SerializeFlags::OMIT_PACKET_WRAPPER)
            && flags.intersects(
                SerializeFlags::READONLY_PACKET | SerializeFlags::INCLUDE_THUMBNAIL_PAD,
            )
        {
            return Err(XmpError::BadOptions(
                "Inconsistent options for non-packet serialize".to_string(),
            ));
        }
        if flags.contains(SerializeFlags::EXACT_PACKET_LENGTH)
            && flags.intersects(
                SerializeFlags::OMIT_PACKET_WRAPPER | SerializeFlags::INCLUDE_THUMBNAIL_PAD,
            )
        {
            return Err(XmpError::BadOptions(
                "Inconsistent options for exact size serialize".to_string(),
            ));
        }
        Ok(())
    }
}
