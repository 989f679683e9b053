//! Analytic carriers of edges and faces.
//!
//! Only the carriers that show up on walls and opening symbols are
//! modelled: lines and circular arcs for edges, planes and cylinders for
//! faces.

mod curve;
mod surface;

pub use curve::{Arc, Curve, Line};
pub use surface::{Cylinder, Plane, Surface};
