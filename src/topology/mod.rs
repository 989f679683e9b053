pub mod edge;
pub mod face;
pub mod shell;
pub mod solid;
pub mod vertex;
pub mod wire;

pub use edge::{EdgeCurve, EdgeData, EdgeId};
pub use face::{FaceData, FaceId, FaceSurface};
pub use shell::{ShellData, ShellId};
pub use solid::{SolidData, SolidId};
pub use vertex::{VertexData, VertexId};
pub use wire::{OrientedEdge, WireData, WireId};

use crate::error::TopologyError;
use crate::math::Point3;
use slotmap::SlotMap;

/// Arena holding the faces, edges and solids of one geometry tree.
///
/// Entities point at each other through slotmap keys, so a [`Shape`]
/// clones its whole tree by cloning the store.
///
/// [`Shape`]: crate::shape::Shape
#[derive(Debug, Default, Clone)]
pub struct TopologyStore {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    wires: SlotMap<WireId, WireData>,
    faces: SlotMap<FaceId, FaceData>,
    shells: SlotMap<ShellId, ShellData>,
    solids: SlotMap<SolidId, SolidData>,
}

impl TopologyStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Vertices ---

    /// Stores a vertex and returns its key.
    pub fn add_vertex(&mut self, data: VertexData) -> VertexId {
        self.vertices.insert(data)
    }

    /// Looks up a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EntityNotFound`] for a key from another
    /// store or a removed entity.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    // --- Edges ---

    /// Stores an edge and returns its key.
    pub fn add_edge(&mut self, data: EdgeData) -> EdgeId {
        self.edges.insert(data)
    }

    /// Looks up an edge.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EntityNotFound`] for a key from another
    /// store or a removed entity.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, TopologyError> {
        self.edges
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()))
    }

    // --- Wires ---

    /// Stores a wire and returns its key.
    pub fn add_wire(&mut self, data: WireData) -> WireId {
        self.wires.insert(data)
    }

    /// Looks up a wire.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EntityNotFound`] for a key from another
    /// store or a removed entity.
    pub fn wire(&self, id: WireId) -> Result<&WireData, TopologyError> {
        self.wires
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("wire".into()))
    }

    // --- Faces ---

    /// Stores a face and returns its key.
    pub fn add_face(&mut self, data: FaceData) -> FaceId {
        self.faces.insert(data)
    }

    /// Looks up a face.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EntityNotFound`] for a key from another
    /// store or a removed entity.
    pub fn face(&self, id: FaceId) -> Result<&FaceData, TopologyError> {
        self.faces
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))
    }

    // --- Shells ---

    /// Stores a shell and returns its key.
    pub fn add_shell(&mut self, data: ShellData) -> ShellId {
        self.shells.insert(data)
    }

    /// Looks up a shell.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EntityNotFound`] for a key from another
    /// store or a removed entity.
    pub fn shell(&self, id: ShellId) -> Result<&ShellData, TopologyError> {
        self.shells
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("shell".into()))
    }

    // --- Solids ---

    /// Stores a solid and returns its key.
    pub fn add_solid(&mut self, data: SolidData) -> SolidId {
        self.solids.insert(data)
    }

    /// Looks up a solid.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EntityNotFound`] for a key from another
    /// store or a removed entity.
    pub fn solid(&self, id: SolidId) -> Result<&SolidData, TopologyError> {
        self.solids
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("solid".into()))
    }

    /// Mutable access used to attach references after construction.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EntityNotFound`] if the edge is missing.
    pub fn edge_mut(&mut self, id: EdgeId) -> Result<&mut EdgeData, TopologyError> {
        self.edges
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()))
    }

    /// Mutable access used to attach references after construction.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EntityNotFound`] if the face is missing.
    pub fn face_mut(&mut self, id: FaceId) -> Result<&mut FaceData, TopologyError> {
        self.faces
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))
    }

    /// The vertex each edge of a wire is entered from, in loop order.
    ///
    /// # Errors
    ///
    /// Returns an error if the wire, an edge or a vertex is missing.
    pub fn wire_points(&self, id: WireId) -> Result<Vec<Point3>, TopologyError> {
        self.wire(id)?
            .edges
            .iter()
            .map(|oe| {
                let edge = self.edge(oe.edge)?;
                let vertex = if oe.forward { edge.start } else { edge.end };
                Ok(self.vertex(vertex)?.point)
            })
            .collect()
    }

    /// Returns every face of a solid: the outer shell first, then each void
    /// shell, each in stored order.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid or one of its shells is missing.
    pub fn solid_faces(&self, id: SolidId) -> Result<Vec<FaceId>, TopologyError> {
        let solid = self.solid(id)?;
        let mut faces = Vec::new();
        for &shell_id in std::iter::once(&solid.outer_shell).chain(&solid.inner_shells) {
            faces.extend_from_slice(&self.shell(shell_id)?.faces);
        }
        Ok(faces)
    }
}
