//! Pattern parsing for route declarations
//!
//! Pure functional parser that turns pattern text like `/products/:id/edit`
//! into a typed [`Pattern`].

use std::fmt;

use super::pattern::{classify_segment, Segment};
use crate::error::{Result, RouterError};

/// A parsed route pattern: the ordered segments between slashes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    segments: Vec<Segment>,
}

impl Pattern {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Parameter names in order of appearance
    pub fn params(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Segment::param_name)
    }

    /// Whether the pattern has no parameter segments
    pub fn is_static(&self) -> bool {
        !self.segments.iter().any(Segment::is_param)
    }

    /// Whether both patterns describe the same locations
    ///
    /// Static segments compare ignoring ASCII case when `case_insensitive` is set.
    pub fn same_shape(&self, other: &Pattern, case_insensitive: bool) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(a, b)| match (a, b) {
                    (Segment::Static(a), Segment::Static(b)) if case_insensitive => {
                        a.eq_ignore_ascii_case(b)
                    }
                    (a, b) => a == b,
                })
    }

    /// Matches already-split path components against this pattern
    ///
    /// Returns the raw (still percent-encoded) captures in order of appearance.
    pub fn capture<'p>(
        &self,
        components: &[&'p str],
        case_insensitive: bool,
    ) -> Option<Vec<(String, &'p str)>> {
        if components.len() != self.segments.len() {
            return None;
        }

        self.segments
            .iter()
            .zip(components)
            .try_fold(Vec::new(), |mut captures, (segment, component)| {
                if !segment.accepts(component, case_insensitive) {
                    return None;
                }
                if let Segment::Param(name) = segment {
                    captures.push((name.clone(), *component));
                }
                Some(captures)
            })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

/// Fold accumulator for parsing; the first error short-circuits the rest
#[derive(Default)]
struct ParseState {
    segments: Vec<Segment>,
}

impl ParseState {
    fn with_segment(mut self, segment: Segment, source: &str) -> Result<Self> {
        if let Segment::Param(name) = &segment {
            if name.is_empty() {
                return Err(invalid(source, "parameter segment without a name"));
            }
            if self.segments.iter().any(|s| s.param_name() == Some(name.as_str())) {
                return Err(invalid(source, &format!("parameter `{}` declared twice", name)));
            }
        }
        self.segments.push(segment);
        Ok(self)
    }

    fn finalize(self) -> Pattern {
        Pattern {
            segments: self.segments,
        }
    }
}

fn invalid(pattern: &str, reason: &str) -> RouterError {
    RouterError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    }
}

/// Parses pattern text into a [`Pattern`]
///
/// Empty segments are ignored, so `/cart/` and `//cart` parse like `/cart`.
///
/// # Examples
///
/// ```
/// use storefront_router::route::parser::parse_pattern;
///
/// let pattern = parse_pattern("/products/:id/edit").unwrap();
/// assert_eq!(pattern.to_string(), "/products/:id/edit");
/// assert_eq!(pattern.params().collect::<Vec<_>>(), vec!["id"]);
///
/// assert!(parse_pattern("/").unwrap().is_static());
/// assert!(parse_pattern("cart").is_err());
/// ```
pub fn parse_pattern(text: &str) -> Result<Pattern> {
    if !text.starts_with('/') {
        return Err(invalid(text, "pattern must start with `/`"));
    }

    text.split('/')
        .filter(|s| !s.is_empty())
        .try_fold(ParseState::default(), |state, raw| {
            state.with_segment(classify_segment(raw), text)
        })
        .map(ParseState::finalize)
}
