use super::shell::ShellId;

slotmap::new_key_type! {
    /// Key of a solid in a [`TopologyStore`](super::TopologyStore).
    pub struct SolidId;
}

/// A solid body of an element's geometry.
#[derive(Debug, Clone)]
pub struct SolidData {
    pub outer_shell: ShellId,
    /// Cavities inside the body.
    pub inner_shells: Vec<ShellId>,
    /// Volume reported by the host. Zero marks a placeholder solid with
    /// nothing to dimension.
    pub volume: f64,
}
