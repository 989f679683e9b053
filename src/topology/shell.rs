use super::face::FaceId;

slotmap::new_key_type! {
    /// Key of a shell in a [`TopologyStore`](super::TopologyStore).
    pub struct ShellId;
}

/// The faces bounding one side of a solid, in the host's order.
#[derive(Debug, Clone)]
pub struct ShellData {
    pub faces: Vec<FaceId>,
    /// `false` for open sheets and the empty shells of placeholder solids.
    pub is_closed: bool,
}
