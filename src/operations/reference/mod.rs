//! Stable references into hosted family instances.
//!
//! A family instance (door, window) exposes logical anchors such as its
//! left/right extents or its left-right centre. The host addresses them
//! with colon-delimited stable strings; [`StableReference`] is the
//! structured form of that string and [`SpecialReference`] derives the
//! string for one anchor kind from a sampled reference.

mod kind;
mod special;
mod stable;

pub use kind::SpecialReferenceKind;
pub use special::{rewrite_index, EncodedReference, SpecialReference};
pub use stable::{ReferenceTag, StableReference};
