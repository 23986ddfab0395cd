//! Support mapping based Plane shape.
use crate::bounding_volume::Aabb;
use crate::math::{Real, UnitVector, Vector};

/// An infinite plane.
///
/// The plane is the set of local points `x` such that `normal · x == constant`. Its solid
/// side is the half-space where `normal · x <= constant`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Plane {
    /// The plane’s normal, pointing away from its solid side.
    pub normal: UnitVector<Real>,
    /// The signed distance of the plane from the local origin, along its normal.
    pub constant: Real,
}

impl Plane {
    /// Builds a new plane from its normal and its offset along it.
    #[inline]
    pub fn new(normal: UnitVector<Real>, constant: Real) -> Plane {
        Plane { normal, constant }
    }

    /// The ground plane `y == 0`.
    #[inline]
    pub fn ground() -> Plane {
        Plane::new(Vector::y_axis(), 0.0)
    }

    /// The local-space AABB of this plane.
    ///
    /// Planes are unbounded so this is a huge but finite box.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::new_huge()
    }
}
