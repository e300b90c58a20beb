//! Segment classification for route patterns
//!
//! Pure functional parsing of a single path-pattern segment into a typed segment.
//! All functions are **pure**: same input → same output, no side effects.

/// A single segment of a route pattern
///
/// # Examples
///
/// ```
/// use storefront_router::route::pattern::{classify_segment, Segment};
///
/// let seg = classify_segment("cart");
/// assert_eq!(seg, Segment::Static("cart".to_string()));
///
/// let seg = classify_segment(":id");
/// assert_eq!(seg, Segment::Param("id".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Named parameter: `:id`, captures exactly one path segment
    Param(String),
    /// Static text segment
    Static(String),
}

impl Segment {
    /// Returns the parameter name, if this is a parameter segment
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Segment::Param(name) => Some(name),
            Segment::Static(_) => None,
        }
    }

    pub fn is_param(&self) -> bool {
        matches!(self, Segment::Param(_))
    }

    /// Matches a single path component against this segment
    ///
    /// Parameters accept any non-empty value. Static segments compare exactly,
    /// or ignoring ASCII case when `case_insensitive` is set.
    pub fn accepts(&self, component: &str, case_insensitive: bool) -> bool {
        match self {
            Segment::Param(_) => !component.is_empty(),
            Segment::Static(text) if case_insensitive => text.eq_ignore_ascii_case(component),
            Segment::Static(text) => text == component,
        }
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Param(name) => write!(f, ":{}", name),
            Segment::Static(text) => f.write_str(text),
        }
    }
}

/// Classifies a segment into a pattern segment (pure function)
///
/// # Parsing Rules
///
/// 1. **Parameter**: `:name`
/// 2. **Static**: any other text
///
/// An empty parameter name (a bare `:`) still classifies as a parameter;
/// rejecting it is the pattern parser's job.
pub fn classify_segment(segment: &str) -> Segment {
    match segment.strip_prefix(':') {
        Some(name) => Segment::Param(name.to_string()),
        None => Segment::Static(segment.to_string()),
    }
}
