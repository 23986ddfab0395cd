/// An identifier of a feature of a shape.
///
/// This identifier is shape-dependent. For triangle meshes, vertex and edge ids are
/// mesh-global so that a contact on an edge shared by two triangles keeps the same id
/// whichever triangle generated it.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Default)]
pub enum FeatureId {
    /// Shape-dependent identifier of a vertex.
    Vertex(u32),
    /// Shape-dependent identifier of an edge.
    Edge(u32),
    /// Shape-dependent identifier of a face.
    Face(u32),
    /// Unknown identifier.
    #[default]
    Unknown,
}

impl FeatureId {
    /// Is this a known feature?
    #[inline]
    pub fn is_known(self) -> bool {
        self != FeatureId::Unknown
    }

    /// Retrieves the value of the identifier if `self` is a vertex.
    pub fn unwrap_vertex(self) -> u32 {
        match self {
            FeatureId::Vertex(id) => id,
            _ => panic!("The feature id does not identify a vertex."),
        }
    }

    /// Retrieves the value of the identifier if `self` is an edge.
    pub fn unwrap_edge(self) -> u32 {
        match self {
            FeatureId::Edge(id) => id,
            _ => panic!("The feature id does not identify an edge."),
        }
    }
}
