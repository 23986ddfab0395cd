use std::sync::Arc;

use crate::bounding_volume::Aabb;
use crate::math::{AngularInertia, Isometry, Point, Real, Vector};
use crate::shape::{
    Capsule, Compound, ConvexPolyhedron, Cuboid, Cylinder, PagedTriMesh, Plane,
    PolygonalFeature, PolygonalFeatureMap, Sphere, TriMesh,
};

/// Enum representing the type of a shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// A sphere shape.
    Sphere = 0,
    /// An infinite plane.
    Plane,
    /// A cylindrical shape.
    Cylinder,
    /// A capsule shape.
    Capsule,
    /// A cuboid shape.
    Cuboid,
    /// A convex polyhedron.
    ConvexPolyhedron,
    /// A triangle mesh shape.
    TriMesh,
    /// A triangle mesh loaded page by page.
    PagedTriMesh,
    /// A Compound shape.
    Compound,
}

impl ShapeType {
    /// Every shape type.
    pub const ALL: [ShapeType; 9] = [
        ShapeType::Sphere,
        ShapeType::Plane,
        ShapeType::Cylinder,
        ShapeType::Capsule,
        ShapeType::Cuboid,
        ShapeType::ConvexPolyhedron,
        ShapeType::TriMesh,
        ShapeType::PagedTriMesh,
        ShapeType::Compound,
    ];
}

/// The shape of a rigid body.
///
/// Meshes and compounds are reference-counted so that cloning a shape is cheap. A
/// [`ConvexPolyhedron`] is stored by value because it owns the rotated data the owner of the
/// shape refreshes whenever the orientation of the body changes.
#[derive(Clone, Debug)]
pub enum Shape {
    /// An infinite plane.
    Plane(Plane),
    /// A sphere.
    Sphere(Sphere),
    /// A cylinder.
    Cylinder(Cylinder),
    /// A capsule.
    Capsule(Capsule),
    /// A cuboid.
    Cuboid(Cuboid),
    /// A convex polyhedron.
    ConvexPolyhedron(ConvexPolyhedron),
    /// A static triangle mesh.
    TriMesh(Arc<TriMesh>),
    /// A static triangle mesh loaded page by page.
    PagedTriMesh(PagedTriMesh),
    /// A union of other shapes.
    Compound(Arc<Compound>),
}

/// A reference to a convex shape, usable by the generic contact generator.
#[derive(Copy, Clone, Debug)]
pub enum ConvexShapeRef<'a> {
    /// A sphere.
    Sphere(&'a Sphere),
    /// A capsule.
    Capsule(&'a Capsule),
    /// A cylinder.
    Cylinder(&'a Cylinder),
    /// A cuboid.
    Cuboid(&'a Cuboid),
    /// A convex polyhedron.
    ConvexPolyhedron(&'a ConvexPolyhedron),
}

impl Shape {
    /// The type of this shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Plane(_) => ShapeType::Plane,
            Shape::Sphere(_) => ShapeType::Sphere,
            Shape::Cylinder(_) => ShapeType::Cylinder,
            Shape::Capsule(_) => ShapeType::Capsule,
            Shape::Cuboid(_) => ShapeType::Cuboid,
            Shape::ConvexPolyhedron(_) => ShapeType::ConvexPolyhedron,
            Shape::TriMesh(_) => ShapeType::TriMesh,
            Shape::PagedTriMesh(_) => ShapeType::PagedTriMesh,
            Shape::Compound(_) => ShapeType::Compound,
        }
    }

    /// Is this shape made of other shapes?
    #[inline]
    pub fn is_composite(&self) -> bool {
        matches!(self, Shape::Compound(_))
    }

    /// This shape as a convex shape, if it is one.
    pub fn as_convex(&self) -> Option<ConvexShapeRef<'_>> {
        match self {
            Shape::Sphere(s) => Some(ConvexShapeRef::Sphere(s)),
            Shape::Capsule(s) => Some(ConvexShapeRef::Capsule(s)),
            Shape::Cylinder(s) => Some(ConvexShapeRef::Cylinder(s)),
            Shape::Cuboid(s) => Some(ConvexShapeRef::Cuboid(s)),
            Shape::ConvexPolyhedron(s) => Some(ConvexShapeRef::ConvexPolyhedron(s)),
            Shape::Plane(_) | Shape::TriMesh(_) | Shape::PagedTriMesh(_) | Shape::Compound(_) => {
                None
            }
        }
    }

    /// Computes the AABB of this shape in its local-space.
    pub fn compute_local_aabb(&self) -> Aabb {
        match self {
            Shape::Plane(s) => s.local_aabb(),
            Shape::Sphere(s) => s.local_aabb(),
            Shape::Cylinder(s) => s.local_aabb(),
            Shape::Capsule(s) => s.local_aabb(),
            Shape::Cuboid(s) => s.local_aabb(),
            Shape::ConvexPolyhedron(s) => s.local_aabb(),
            Shape::TriMesh(s) => s.local_aabb(),
            Shape::PagedTriMesh(s) => s.local_aabb(),
            Shape::Compound(s) => *s.local_aabb(),
        }
    }

    /// Computes the AABB of this shape with the given position.
    pub fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb {
        let local_aabb = self.compute_local_aabb();
        if local_aabb.is_valid() {
            local_aabb.transform_by(position)
        } else {
            local_aabb
        }
    }

    /// The volume of this shape, or `None` if it doesn’t enclose a finite volume.
    pub fn volume(&self) -> Option<Real> {
        match self {
            Shape::Sphere(s) => Some(s.volume()),
            Shape::Cylinder(s) => Some(s.volume()),
            Shape::Capsule(s) => Some(s.volume()),
            Shape::Cuboid(s) => Some(s.volume()),
            Shape::ConvexPolyhedron(s) => Some(s.volume()),
            Shape::Compound(s) => s
                .shapes()
                .iter()
                .try_fold(0.0, |acc, (_, part)| Some(acc + part.volume()?)),
            Shape::Plane(_) | Shape::TriMesh(_) | Shape::PagedTriMesh(_) => None,
        }
    }

    /// The angular inertia of a solid with this shape and the given `mass`, about its local
    /// origin and expressed in its local frame.
    ///
    /// Returns `None` for the shapes that can only be attached to static bodies.
    pub fn inertia(&self, mass: Real) -> Option<AngularInertia<Real>> {
        match self {
            Shape::Sphere(s) => Some(s.inertia(mass)),
            Shape::Cylinder(s) => Some(s.inertia(mass)),
            Shape::Capsule(s) => Some(s.inertia(mass)),
            Shape::Cuboid(s) => Some(s.inertia(mass)),
            Shape::ConvexPolyhedron(s) => Some(s.inertia(mass)),
            Shape::Compound(s) => compound_inertia(s, mass),
            Shape::Plane(_) | Shape::TriMesh(_) | Shape::PagedTriMesh(_) => None,
        }
    }
}

// The mass is split between the parts proportionally to their volume, and each part inertia
// is moved to the compound origin with the parallel axis theorem.
fn compound_inertia(compound: &Compound, mass: Real) -> Option<AngularInertia<Real>> {
    let volumes = compound
        .shapes()
        .iter()
        .map(|(_, part)| part.volume())
        .collect::<Option<Vec<_>>>()?;
    let total_volume: Real = volumes.iter().sum();
    if total_volume <= 0.0 {
        return None;
    }

    let mut result = AngularInertia::zeros();
    for ((pos, part), volume) in compound.shapes().iter().zip(volumes) {
        let part_mass = mass * volume / total_volume;
        let rot = pos.rotation.to_rotation_matrix().into_inner();
        let local = part.inertia(part_mass)?;
        let shift = pos.translation.vector;

        result += rot * local * rot.transpose();
        result += (AngularInertia::identity() * shift.norm_squared() - shift * shift.transpose())
            * part_mass;
    }

    Some(result)
}

macro_rules! dispatch_convex(
    ($this: expr, $shape: ident => $e: expr) => {
        match $this {
            ConvexShapeRef::Sphere($shape) => $e,
            ConvexShapeRef::Capsule($shape) => $e,
            ConvexShapeRef::Cylinder($shape) => $e,
            ConvexShapeRef::Cuboid($shape) => $e,
            ConvexShapeRef::ConvexPolyhedron($shape) => $e,
        }
    }
);

impl PolygonalFeatureMap for ConvexShapeRef<'_> {
    fn margin(&self) -> Real {
        dispatch_convex!(self, s => s.margin())
    }

    fn is_curved(&self) -> bool {
        dispatch_convex!(self, s => s.is_curved())
    }

    fn support_projection(&self, pos: &Isometry<Real>, dir: &Vector<Real>) -> Real {
        dispatch_convex!(self, s => s.support_projection(pos, dir))
    }

    fn support_feature(
        &self,
        pos: &Isometry<Real>,
        dir: &Vector<Real>,
        tolerance: Real,
        out: &mut PolygonalFeature,
    ) {
        dispatch_convex!(self, s => s.support_feature(pos, dir, tolerance, out))
    }

    fn for_each_face_normal(&self, pos: &Isometry<Real>, f: impl FnMut(Vector<Real>)) {
        dispatch_convex!(self, s => s.for_each_face_normal(pos, f))
    }

    fn for_each_edge_dir(&self, pos: &Isometry<Real>, f: impl FnMut(Vector<Real>)) {
        dispatch_convex!(self, s => s.for_each_edge_dir(pos, f))
    }

    fn for_each_vertex(&self, pos: &Isometry<Real>, f: impl FnMut(Point<Real>)) {
        dispatch_convex!(self, s => s.for_each_vertex(pos, f))
    }

    fn for_each_edge(&self, pos: &Isometry<Real>, f: impl FnMut(Point<Real>, Point<Real>)) {
        dispatch_convex!(self, s => s.for_each_edge(pos, f))
    }

    fn project_point(&self, pos: &Isometry<Real>, pt: &Point<Real>) -> Option<Point<Real>> {
        dispatch_convex!(self, s => s.project_point(pos, pt))
    }
}
