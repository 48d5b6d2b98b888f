//! Field path representation for locating properties in nested structures.
//!
//! This module provides [`FieldPath`] and [`PathSegment`] types. A `FieldPath`
//! is used twice by the engine: as the *property path* a validation unit is
//! bound to (parsed from the builder's `"address.city"` strings), and as the
//! *field* of a reported [`FieldError`](crate::FieldError), where nested and
//! collection errors are composed into paths like `employees[2].address.city`.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ConfigError;

/// A segment of a field path.
///
/// Paths are built from segments that represent either property access or
/// collection indexing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A property access (e.g., `address`, `city`)
    Field(String),
    /// A collection index access (e.g., `[0]`, `[42]`)
    Index(usize),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

/// A path to a property in a nested object graph.
///
/// `FieldPath` represents locations like `employees[0].email` and provides
/// methods for building and composing paths. All builders return new paths;
/// a path is never modified in place.
///
/// # Example
///
/// ```rust
/// use verdict::FieldPath;
///
/// let path = FieldPath::from_field("employees")
///     .push_index(0)
///     .push_field("email");
///
/// assert_eq!(path.to_string(), "employees[0].email");
/// assert_eq!(FieldPath::parse("employees[0].email").unwrap(), path);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Creates an empty path.
    ///
    /// An empty path never appears as the field of an error; fieldless errors
    /// use `None` instead.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a path from a single field segment.
    pub fn from_field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Field(name.into())],
        }
    }

    /// Creates a path from a single index segment.
    pub fn from_index(idx: usize) -> Self {
        Self {
            segments: vec![PathSegment::Index(idx)],
        }
    }

    /// Parses a dotted property path such as `address.city` or `tags[1].en`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedPath`] for empty input, empty segments
    /// (`a..b`, `a.`), unterminated or non-numeric indexes (`a[`, `a[x]`) and
    /// stray brackets.
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let malformed = |reason: &str| ConfigError::MalformedPath {
            path: input.to_string(),
            reason: reason.to_string(),
        };

        if input.is_empty() {
            return Err(malformed("path is empty"));
        }

        let mut segments = Vec::new();
        let mut chars = input.chars().peekable();
        let mut name = String::new();
        // true right after a '.', or at the start: a field name must follow
        let mut expect_field = true;

        while let Some(c) = chars.next() {
            match c {
                '.' => {
                    if expect_field && name.is_empty() {
                        return Err(malformed("empty property name"));
                    }
                    if !name.is_empty() {
                        segments.push(PathSegment::Field(std::mem::take(&mut name)));
                    }
                    expect_field = true;
                }
                '[' => {
                    if !name.is_empty() {
                        segments.push(PathSegment::Field(std::mem::take(&mut name)));
                    } else if expect_field && !segments.is_empty() {
                        return Err(malformed("empty property name"));
                    }

                    let mut digits = String::new();
                    let mut closed = false;
                    for d in chars.by_ref() {
                        if d == ']' {
                            closed = true;
                            break;
                        }
                        digits.push(d);
                    }
                    if !closed {
                        return Err(malformed("unterminated index"));
                    }
                    let index = digits
                        .parse::<usize>()
                        .map_err(|_| malformed("index is not a non-negative integer"))?;
                    segments.push(PathSegment::Index(index));

                    match chars.peek() {
                        None | Some('.') | Some('[') => {}
                        Some(_) => return Err(malformed("expected '.' or '[' after index")),
                    }
                    expect_field = false;
                }
                ']' => return Err(malformed("unexpected ']'")),
                other => {
                    name.push(other);
                    expect_field = false;
                }
            }
        }

        if !name.is_empty() {
            segments.push(PathSegment::Field(name));
        } else if expect_field {
            return Err(malformed("empty property name"));
        }

        Ok(Self { segments })
    }

    /// Combines an optional parent path with an optional child path.
    ///
    /// - both present: `parent.child`
    /// - only the parent: `parent` (the child was a whole-object error)
    /// - only the child: `child`
    pub fn mix(parent: Option<&FieldPath>, child: Option<&FieldPath>) -> Option<FieldPath> {
        match (parent, child) {
            (Some(parent), Some(child)) => Some(parent.join(child)),
            (Some(parent), None) => Some(parent.clone()),
            (None, Some(child)) => Some(child.clone()),
            (None, None) => None,
        }
    }

    /// Returns a new path with a field segment appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Returns a new path with all segments of `other` appended.
    pub fn join(&self, other: &FieldPath) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + other.segments.len());
        segments.extend_from_slice(&self.segments);
        segments.extend_from_slice(&other.segments);
        Self { segments }
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the parent path (all segments except the last), or None if empty.
    pub fn parent(&self) -> Option<Self> {
        if self.segments.is_empty() {
            None
        } else {
            Some(Self {
                segments: self.segments[..self.segments.len() - 1].to_vec(),
            })
        }
    }

    /// Returns the last segment, or None if empty.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", name)?;
                }
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}

impl FromStr for FieldPath {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
