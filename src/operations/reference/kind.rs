use std::fmt;
use std::str::FromStr;

use crate::error::ReferenceError;

/// The nine logical anchor positions every family symbol exposes.
///
/// The discriminant is the sub-index the host uses for the anchor inside
/// the symbol's stable reference string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum SpecialReferenceKind {
    Left = 0,
    CenterLR = 1,
    Right = 2,
    Front = 3,
    CenterFB = 4,
    Back = 5,
    Bottom = 6,
    CenterElevation = 7,
    Top = 8,
}

impl SpecialReferenceKind {
    /// All kinds in index order.
    pub const ALL: [Self; 9] = [
        Self::Left,
        Self::CenterLR,
        Self::Right,
        Self::Front,
        Self::CenterFB,
        Self::Back,
        Self::Bottom,
        Self::CenterElevation,
        Self::Top,
    ];

    /// The sub-index of this anchor.
    #[must_use]
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Returns the kind's canonical name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::CenterLR => "CenterLR",
            Self::Right => "Right",
            Self::Front => "Front",
            Self::CenterFB => "CenterFB",
            Self::Back => "Back",
            Self::Bottom => "Bottom",
            Self::CenterElevation => "CenterElevation",
            Self::Top => "Top",
        }
    }
}

impl fmt::Display for SpecialReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpecialReferenceKind {
    type Err = ReferenceError;

    /// Parses a kind by name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ReferenceError::UnknownKind(s.to_owned()))
    }
}
