//! GenBank-style locations used to cut a sub-range out of a record.
//!
//! Supported forms, all 1-based and inclusive:
//!
//! ```text
//! 42                    single base
//! 3..6                  span
//! <3..>6                partial span, markers ignored
//! complement(3..6)      reverse complement of the inner location
//! join(1..3,7..9)       concatenation (order(...) is read the same way)
//! ```

use crate::{
    error::{GetseqError, Result},
    seq::reverse_complement,
};

use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Span { start: usize, end: usize },
    Complement(Box<Location>),
    Join(Vec<Location>),
}

impl Location {
    /// Extracts the residues this location designates from `seq`.
    pub fn splice(&self, seq: &[u8]) -> Result<Vec<u8>> {
        match self {
            Location::Span { start, end } => {
                if *start == 0 || start > end {
                    return Err(GetseqError::invalid_range(
                        &self.to_string(),
                        "start must be >= 1 and <= end",
                    ));
                }
                seq.get(start - 1..*end).map(<[u8]>::to_vec).ok_or_else(|| {
                    GetseqError::invalid_range(
                        &self.to_string(),
                        format!("exceeds sequence length {}", seq.len()),
                    )
                })
            }
            Location::Complement(inner) => Ok(reverse_complement(&inner.splice(seq)?)),
            Location::Join(parts) => {
                let mut out = Vec::new();
                for part in parts {
                    out.extend(part.splice(seq)?);
                }
                Ok(out)
            }
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Span { start, end } if start == end => write!(f, "{}", start),
            Location::Span { start, end } => write!(f, "{}..{}", start, end),
            Location::Complement(inner) => write!(f, "complement({})", inner),
            Location::Join(parts) => {
                write!(f, "join(")?;
                for (idx, part) in parts.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", part)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl FromStr for Location {
    type Err = GetseqError;

    fn from_str(s: &str) -> Result<Self> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Err(GetseqError::invalid_range(s, "empty location"));
        }

        parse_location(&compact).map_err(|msg| GetseqError::invalid_range(s, msg))
    }
}

fn parse_location(s: &str) -> std::result::Result<Location, String> {
    if let Some(inner) = strip_call(s, "complement")? {
        return Ok(Location::Complement(Box::new(parse_location(inner)?)));
    }

    if let Some(inner) = strip_call(s, "join")?.or(strip_call(s, "order")?) {
        let parts = split_top_level(inner)?
            .into_iter()
            .map(parse_location)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        return Ok(Location::Join(parts));
    }

    parse_span(s)
}

/// Returns the argument of `name(...)` when `s` is exactly such a call.
fn strip_call<'a>(s: &'a str, name: &str) -> std::result::Result<Option<&'a str>, String> {
    let Some(rest) = s.strip_prefix(name) else {
        return Ok(None);
    };
    let Some(rest) = rest.strip_prefix('(') else {
        return Err(format!("expected '(' after {}", name));
    };
    let inner = rest
        .strip_suffix(')')
        .ok_or_else(|| format!("unbalanced parentheses in {}", name))?;

    if inner.is_empty() {
        return Err(format!("empty {}()", name));
    }

    Ok(Some(inner))
}

fn split_top_level(s: &str) -> std::result::Result<Vec<&str>, String> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut last = 0;

    for (idx, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| "unbalanced parentheses".to_string())?
            }
            ',' if depth == 0 => {
                parts.push(&s[last..idx]);
                last = idx + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err("unbalanced parentheses".to_string());
    }
    parts.push(&s[last..]);

    if parts.iter().any(|p| p.is_empty()) {
        return Err("empty element in join".to_string());
    }

    Ok(parts)
}

fn parse_span(s: &str) -> std::result::Result<Location, String> {
    let (start, end) = match s.split_once("..") {
        Some((start, end)) => (parse_coord(start)?, parse_coord(end)?),
        None => {
            let pos = parse_coord(s)?;
            (pos, pos)
        }
    };

    Ok(Location::Span { start, end })
}

fn parse_coord(s: &str) -> std::result::Result<usize, String> {
    let digits = s.trim_start_matches(['<', '>']);
    digits
        .parse::<usize>()
        .map_err(|_| format!("'{}' is not a coordinate", s))
}
