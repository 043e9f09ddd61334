//! Property paths for XMP
//!
//! A [`Path`] is the parsed form of a property path expression: a list of
//! typed [`PathSegment`]s. Segment 0 is the schema, segment 1 the root
//! property, and every later segment one nested step (struct field,
//! qualifier, array item or selector).
//!
//! Segment names are stored fully formatted (`dc:li[2]`, `[?xml:lang="x-default"]`),
//! so rendering a path back to a string only has to decide where a `/` goes.

use crate::core::error::{XmpError, XmpResult};
use crate::options::AliasOptions;
use std::fmt;

/// Kind of step a [`PathSegment`] represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// A field of a struct (`ns:field`)
    StructField,
    /// A qualifier (`?ns:qual`)
    Qualifier,
    /// An array item by index (`[2]`)
    ArrayIndex,
    /// The last array item (`[last()]`)
    ArrayLast,
    /// An array item selected by qualifier value (`[?xml:lang="en"]`)
    QualSelector,
    /// An array item selected by field value (`[ns:field="value"]`)
    FieldSelector,
    /// The synthetic schema step at index 0
    Schema,
}

impl StepKind {
    /// Numeric step code
    pub fn code(self) -> u32 {
        match self {
            StepKind::StructField => 0x01,
            StepKind::Qualifier => 0x02,
            StepKind::ArrayIndex => 0x03,
            StepKind::ArrayLast => 0x04,
            StepKind::QualSelector => 0x05,
            StepKind::FieldSelector => 0x06,
            StepKind::Schema => 0x8000_0000,
        }
    }

    /// Step kind for a numeric code
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0x01 => Some(StepKind::StructField),
            0x02 => Some(StepKind::Qualifier),
            0x03 => Some(StepKind::ArrayIndex),
            0x04 => Some(StepKind::ArrayLast),
            0x05 => Some(StepKind::QualSelector),
            0x06 => Some(StepKind::FieldSelector),
            0x8000_0000 => Some(StepKind::Schema),
            _ => None,
        }
    }

    /// Whether a `/` is written before a step of this kind
    pub fn is_separated(self) -> bool {
        matches!(self, StepKind::StructField | StepKind::Qualifier)
    }

    /// Whether this step selects an array item
    pub fn is_array_step(self) -> bool {
        matches!(
            self,
            StepKind::ArrayIndex
                | StepKind::ArrayLast
                | StepKind::QualSelector
                | StepKind::FieldSelector
        )
    }
}

/// One step of a property path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSegment {
    name: String,
    kind: StepKind,
    alias: Option<AliasOptions>,
}

impl PathSegment {
    /// Create a segment that is not alias-derived
    pub fn new(name: impl Into<String>, kind: StepKind) -> Self {
        Self {
            name: name.into(),
            kind,
            alias: None,
        }
    }

    /// Create the schema segment for a namespace URI
    pub fn schema(namespace: impl Into<String>) -> Self {
        Self::new(namespace, StepKind::Schema)
    }

    /// The step text, already in its rendered form
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> StepKind {
        self.kind
    }

    /// Whether the segment came from alias expansion
    pub fn is_alias(&self) -> bool {
        self.alias.is_some()
    }

    /// Alias form, only present for alias-derived segments
    pub fn alias_form(&self) -> Option<AliasOptions> {
        self.alias
    }

    /// Record that this segment was produced by expanding an alias of `form`
    pub fn mark_alias(&mut self, form: AliasOptions) {
        log::trace!("segment '{}' marked as alias ({})", self.name, form);
        self.alias = Some(form);
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A parsed property path
///
/// # Example
///
/// ```rust
/// use xmpkit_options::{Path, PathSegment, StepKind};
///
/// let mut path = Path::new();
/// path.push(PathSegment::schema("http://purl.org/dc/elements/1.1/"));
/// path.push(PathSegment::new("dc:creator", StepKind::StructField));
/// path.push(PathSegment::new("[1]", StepKind::ArrayIndex));
///
/// assert_eq!(path.to_string(), "dc:creator[1]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Index of the schema segment
    pub const SCHEMA_INDEX: usize = 0;
    /// Index of the root property segment
    pub const ROOT_PROPERTY_INDEX: usize = 1;

    /// Create an empty path
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty path with room for `capacity` segments
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            segments: Vec::with_capacity(capacity),
        }
    }

    /// Append a segment
    ///
    /// The kind of the new segment is not checked against its neighbours.
    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segment at `index`
    pub fn segment(&self, index: usize) -> XmpResult<&PathSegment> {
        let len = self.segments.len();
        self.segments
            .get(index)
            .ok_or(XmpError::IndexOutOfRange { index, len })
    }

    /// Mutable access to the segment at `index`, used to mark aliases
    pub fn segment_mut(&mut self, index: usize) -> XmpResult<&mut PathSegment> {
        let len = self.segments.len();
        self.segments
            .get_mut(index)
            .ok_or(XmpError::IndexOutOfRange { index, len })
    }

    /// The segment at `index`, if any
    pub fn get(&self, index: usize) -> Option<&PathSegment> {
        self.segments.get(index)
    }

    /// The schema segment
    pub fn schema(&self) -> Option<&PathSegment> {
        self.get(Self::SCHEMA_INDEX)
    }

    /// The root property segment
    pub fn root_property(&self) -> Option<&PathSegment> {
        self.get(Self::ROOT_PROPERTY_INDEX)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathSegment> {
        self.segments.iter()
    }
}

/// Canonical rendering: the schema segment is skipped, and a `/` is written
/// only in front of struct field and qualifier steps.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate().skip(1) {
            write!(f, "{}", segment)?;
            if let Some(next) = self.segments.get(i + 1) {
                if next.kind().is_separated() {
                    f.write_str("/")?;
                }
            }
        }
        Ok(())
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathSegment;
    type IntoIter = std::slice::Iter<'a, PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionSet;

    const DC: &str = "http://purl.org/dc/elements/1.1/";

    #[test]
    fn test_render_struct_fields() {
        let mut path = Path::new();
        path.push(PathSegment::schema(DC));
        path.push(PathSegment::new("rdf:Description", StepKind::StructField));
        path.push(PathSegment::new("dc:title", StepKind::StructField));
        assert_eq!(path.to_string(), "rdf:Description/dc:title");
    }

    #[test]
    fn test_render_array_index_no_separator() {
        let mut path = Path::new();
        path.push(PathSegment::schema(DC));
        path.push(PathSegment::new("rdf:Description", StepKind::StructField));
        path.push(PathSegment::new("[2]", StepKind::ArrayIndex));
        assert_eq!(path.to_string(), "rdf:Description[2]");
    }

    #[test]
    fn test_render_mixed_steps() {
        let path: Path = [
            PathSegment::schema(DC),
            PathSegment::new("dc:title", StepKind::StructField),
            PathSegment::new("[?xml:lang=\"x-default\"]", StepKind::QualSelector),
            PathSegment::new("?xml:lang", StepKind::Qualifier),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            path.to_string(),
            "dc:title[?xml:lang=\"x-default\"]/?xml:lang"
        );
    }

    #[test]
    fn test_render_short_paths() {
        assert_eq!(Path::new().to_string(), "");

        let path: Path = [PathSegment::schema(DC)].into_iter().collect();
        assert_eq!(path.to_string(), "");

        let path: Path = [
            PathSegment::schema(DC),
            PathSegment::new("dc:subject", StepKind::StructField),
            PathSegment::new("[last()]", StepKind::ArrayLast),
        ]
        .into_iter()
        .collect();
        assert_eq!(path.to_string(), "dc:subject[last()]");
    }

    #[test]
    fn test_segment_out_of_range() {
        let mut path = Path::new();
        path.push(PathSegment::schema(DC));
        assert!(path.segment(0).is_ok());
        assert_eq!(
            path.segment(1).unwrap_err(),
            XmpError::IndexOutOfRange { index: 1, len: 1 }
        );
        assert!(path.segment_mut(5).is_err());
    }

    #[test]
    fn test_mark_alias() {
        let mut path = Path::with_capacity(2);
        path.push(PathSegment::schema(DC));
        path.push(PathSegment::new("xmp:Author", StepKind::StructField));
        assert!(!path.segment(1).unwrap().is_alias());
        assert_eq!(path.segment(1).unwrap().alias_form(), None);

        let mut form = AliasOptions::default();
        form.set_array_ordered(true);
        path.segment_mut(1).unwrap().mark_alias(form);

        let segment = path.root_property().unwrap();
        assert!(segment.is_alias());
        assert!(segment.alias_form().unwrap().is_array_ordered());
        assert_eq!(segment.alias_form().unwrap().raw(), 0x600);
    }

    #[test]
    fn test_step_codes() {
        for kind in [
            StepKind::StructField,
            StepKind::Qualifier,
            StepKind::ArrayIndex,
            StepKind::ArrayLast,
            StepKind::QualSelector,
            StepKind::FieldSelector,
            StepKind::Schema,
        ] {
            assert_eq!(StepKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(StepKind::from_code(0x07), None);
        assert!(StepKind::FieldSelector.is_array_step());
        assert!(!StepKind::Qualifier.is_array_step());
    }
}
