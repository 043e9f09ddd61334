//! Options for parsing XMP packets

use crate::core::error::{XmpError, XmpResult};
use crate::options::{impl_option_set, OptionSet};
use std::collections::HashMap;

/// Options controlling how the RDF/XML parser reads a packet.
///
/// Besides the flags, a node-limit table caps the number of children the
/// parser expands for a named node (e.g. `rdf:Bag`).
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use xmpkit_options::ParseOptions;
///
/// let options = ParseOptions::default()
///     .with_strict_aliasing(true)
///     .with_nodes_to_limit(HashMap::from([("rdf:Bag".to_string(), 10)]))?;
///
/// assert!(options.strict_aliasing());
/// assert!(options.are_nodes_limited());
/// # Ok::<(), xmpkit_options::XmpError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ParseOptions {
    flags: ParseFlags,
    nodes_to_limit: HashMap<String, u32>,
}

bitflags::bitflags! {
    /// Bits of [`ParseOptions`]
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ParseFlags: u32 {
        /// Require a surrounding `x:xmpmeta` element
        const REQUIRE_XMP_META = 0x0001;
        /// Do not reconcile alias differences, fail instead
        const STRICT_ALIASING = 0x0004;
        /// Convert ASCII control characters 0x01 - 0x1F (except tab, cr, and lf) to spaces
        const FIX_CONTROL_CHARS = 0x0008;
        /// Accept input that is not valid UTF-8 as Latin-1
        const ACCEPT_LATIN_1 = 0x0010;
        /// Skip normalization of the parsed tree
        const OMIT_NORMALIZATION = 0x0020;
        /// Reject input containing a DOCTYPE declaration
        const DISALLOW_DOCTYPE = 0x0040;
    }
}

impl ParseFlags {
    /// Bits set by [`ParseOptions::default`]
    pub const DEFAULT: Self = Self::FIX_CONTROL_CHARS
        .union(Self::ACCEPT_LATIN_1)
        .union(Self::DISALLOW_DOCTYPE);
}

impl ParseOptions {
    /// Require a surrounding `x:xmpmeta` element
    pub fn require_xmp_meta(&self) -> bool {
        self.flag(ParseFlags::REQUIRE_XMP_META)
    }

    /// Set whether `x:xmpmeta` is required
    pub fn set_require_xmp_meta(&mut self, value: bool) {
        self.set_flag(ParseFlags::REQUIRE_XMP_META, value);
    }

    /// Builder form of [`set_require_xmp_meta`](Self::set_require_xmp_meta)
    pub fn with_require_xmp_meta(mut self, value: bool) -> Self {
        self.set_require_xmp_meta(value);
        self
    }

    /// Fail on alias differences instead of reconciling them
    pub fn strict_aliasing(&self) -> bool {
        self.flag(ParseFlags::STRICT_ALIASING)
    }

    /// Set strict alias handling
    pub fn set_strict_aliasing(&mut self, value: bool) {
        self.set_flag(ParseFlags::STRICT_ALIASING, value);
    }

    /// Builder form of [`set_strict_aliasing`](Self::set_strict_aliasing)
    pub fn with_strict_aliasing(mut self, value: bool) -> Self {
        self.set_strict_aliasing(value);
        self
    }

    /// Replace control characters with spaces
    pub fn fix_control_chars(&self) -> bool {
        self.flag(ParseFlags::FIX_CONTROL_CHARS)
    }

    /// Set control character replacement
    pub fn set_fix_control_chars(&mut self, value: bool) {
        self.set_flag(ParseFlags::FIX_CONTROL_CHARS, value);
    }

    /// Builder form of [`set_fix_control_chars`](Self::set_fix_control_chars)
    pub fn with_fix_control_chars(mut self, value: bool) -> Self {
        self.set_fix_control_chars(value);
        self
    }

    /// Fall back to Latin-1 for invalid UTF-8
    pub fn accept_latin1(&self) -> bool {
        self.flag(ParseFlags::ACCEPT_LATIN_1)
    }

    /// Set the Latin-1 fallback
    pub fn set_accept_latin1(&mut self, value: bool) {
        self.set_flag(ParseFlags::ACCEPT_LATIN_1, value);
    }

    /// Builder form of [`set_accept_latin1`](Self::set_accept_latin1)
    pub fn with_accept_latin1(mut self, value: bool) -> Self {
        self.set_accept_latin1(value);
        self
    }

    /// Skip tree normalization after parsing
    pub fn omit_normalization(&self) -> bool {
        self.flag(ParseFlags::OMIT_NORMALIZATION)
    }

    /// Set whether normalization is skipped
    pub fn set_omit_normalization(&mut self, value: bool) {
        self.set_flag(ParseFlags::OMIT_NORMALIZATION, value);
    }

    /// Builder form of [`set_omit_normalization`](Self::set_omit_normalization)
    pub fn with_omit_normalization(mut self, value: bool) -> Self {
        self.set_omit_normalization(value);
        self
    }

    /// Reject DOCTYPE declarations
    pub fn disallow_doctype(&self) -> bool {
        self.flag(ParseFlags::DISALLOW_DOCTYPE)
    }

    /// Set DOCTYPE rejection
    pub fn set_disallow_doctype(&mut self, value: bool) {
        self.set_flag(ParseFlags::DISALLOW_DOCTYPE, value);
    }

    /// Builder form of [`set_disallow_doctype`](Self::set_disallow_doctype)
    pub fn with_disallow_doctype(mut self, value: bool) -> Self {
        self.set_disallow_doctype(value);
        self
    }

    /// Whether any node has a child limit
    pub fn are_nodes_limited(&self) -> bool {
        !self.nodes_to_limit.is_empty()
    }

    /// A copy of the node-limit table
    ///
    /// Changing the returned map does not affect these options.
    pub fn nodes_to_limit(&self) -> HashMap<String, u32> {
        self.nodes_to_limit.clone()
    }

    /// Add child limits for named nodes
    ///
    /// Each entry replaces an existing limit for the same node name. Limits
    /// must be positive; on error nothing is changed.
    pub fn set_nodes_to_limit(&mut self, limits: HashMap<String, u32>) -> XmpResult<()> {
        if let Some((name, _)) = limits.iter().find(|(_, limit)| **limit == 0) {
            return Err(XmpError::BadOptions(format!(
                "Node limit for '{}' must be positive",
                name
            )));
        }
        self.nodes_to_limit.extend(limits);
        Ok(())
    }

    /// Builder form of [`set_nodes_to_limit`](Self::set_nodes_to_limit)
    pub fn with_nodes_to_limit(mut self, limits: HashMap<String, u32>) -> XmpResult<Self> {
        self.set_nodes_to_limit(limits)?;
        Ok(self)
    }

    /// The child limit for `name`, if any
    pub fn node_limit(&self, name: &str) -> Option<u32> {
        self.nodes_to_limit.get(name).copied()
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            flags: ParseFlags::DEFAULT,
            nodes_to_limit: HashMap::new(),
        }
    }
}

impl_option_set!(ParseOptions, ParseFlags, flags);

impl OptionSet for ParseOptions {
    const KIND: &'static str = "parse";
}
