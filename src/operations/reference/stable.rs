use std::fmt;
use std::str::FromStr;

use crate::error::ReferenceError;

const SEPARATOR: char = ':';

/// Number of leading tokens that identify the instance and symbol.
const PREFIX_TOKENS: usize = 4;

/// Type tag appended after the sub-index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReferenceTag {
    /// The reference addresses an edge.
    Linear,
    /// The reference addresses a face.
    Surface,
    /// Any other tag the host emits, kept verbatim.
    Other(String),
}

impl ReferenceTag {
    fn parse(token: &str) -> Self {
        match token {
            "LINEAR" => Self::Linear,
            "SURFACE" => Self::Surface,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for ReferenceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("LINEAR"),
            Self::Surface => f.write_str("SURFACE"),
            Self::Other(tag) => f.write_str(tag),
        }
    }
}

/// Structured form of a host stable reference string.
///
/// Token layout, colon-separated:
///
/// | position | field     | example                                   |
/// |----------|-----------|-------------------------------------------|
/// | 0        | `context` | unique id of the placed instance          |
/// | 1        | `element` | element-local id, usually `0`             |
/// | 2        | `symbol`  | symbol marker, usually `INSTANCE`         |
/// | 3        | `path`    | unique id of the family symbol            |
/// | 4        | `index`   | sub-object index within the symbol        |
/// | 5        | `tag`     | `LINEAR` / `SURFACE`, optional            |
/// | 6..      | trailing  | kept verbatim                             |
///
/// Tokens 0 to 3 are mandatory; everything after is optional. The layout
/// is defined by the host and carries no version marker, so positions are
/// fixed here rather than inferred.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StableReference {
    context: String,
    element: String,
    symbol: String,
    path: String,
    index: Option<u32>,
    tag: Option<ReferenceTag>,
    trailing: Vec<String>,
}

impl StableReference {
    /// Parses a stable string.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError::TooFewTokens`] for fewer than four tokens and
    /// [`ReferenceError::InvalidIndex`] when token 4 is not a non-negative
    /// integer.
    pub fn parse(repr: &str) -> Result<Self, ReferenceError> {
        let tokens: Vec<&str> = repr.split(SEPARATOR).collect();
        if tokens.len() < PREFIX_TOKENS {
            return Err(ReferenceError::TooFewTokens {
                repr: repr.to_owned(),
                found: tokens.len(),
            });
        }

        let index = tokens
            .get(PREFIX_TOKENS)
            .map(|token| {
                token.parse::<u32>().map_err(|_| ReferenceError::InvalidIndex {
                    repr: repr.to_owned(),
                    token: (*token).to_owned(),
                })
            })
            .transpose()?;
        let tag = tokens.get(PREFIX_TOKENS + 1).map(|t| ReferenceTag::parse(t));
        let trailing = tokens
            .iter()
            .skip(PREFIX_TOKENS + 2)
            .map(|t| (*t).to_owned())
            .collect();

        Ok(Self {
            context: tokens[0].to_owned(),
            element: tokens[1].to_owned(),
            symbol: tokens[2].to_owned(),
            path: tokens[3].to_owned(),
            index,
            tag,
            trailing,
        })
    }

    /// Keeps the four prefix tokens and replaces everything after them with
    /// `index`.
    #[must_use]
    pub fn with_index(self, index: u32) -> Self {
        Self {
            index: Some(index),
            tag: None,
            trailing: Vec::new(),
            ..self
        }
    }

    /// Sets the type tag, dropping any trailing tokens.
    #[must_use]
    pub fn with_tag(self, tag: ReferenceTag) -> Self {
        Self {
            tag: Some(tag),
            trailing: Vec::new(),
            ..self
        }
    }

    /// Token 0: the owning instance.
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Token 3: the symbol path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Token 4, if present.
    #[must_use]
    pub fn index(&self) -> Option<u32> {
        self.index
    }

    /// Token 5, if present.
    #[must_use]
    pub fn tag(&self) -> Option<&ReferenceTag> {
        self.tag.as_ref()
    }

    /// The reference without its tag and trailing tokens.
    #[must_use]
    pub fn untagged(&self) -> Self {
        Self {
            tag: None,
            trailing: Vec::new(),
            ..self.clone()
        }
    }
}

impl FromStr for StableReference {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for StableReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.context, self.element, self.symbol, self.path
        )?;
        // The tag slot only exists after an index.
        if let Some(index) = self.index {
            write!(f, ":{index}")?;
            if let Some(tag) = &self.tag {
                write!(f, ":{tag}")?;
                for token in &self.trailing {
                    write!(f, ":{token}")?;
                }
            }
        }
        Ok(())
    }
}
