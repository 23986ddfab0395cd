use crate::math::{Real, Rotation, UnitVector, Vector};

/// The set of directions a contact normal may take on some feature of a triangle mesh.
///
/// It is approximated by a cone of directions around an axis. Clipping contact normals to the
/// cone of the feature they were generated from prevents contacts from "catching" the internal
/// edges of a mesh.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NormalCone {
    /// The axis of the cone.
    pub axis: UnitVector<Real>,
    /// The cosine of the half-angle of the cone: `1` allows only `axis`, `-1` any direction.
    pub cos_half_angle: Real,
}

impl NormalCone {
    /// A cone that only allows `axis`.
    #[inline]
    pub fn fixed(axis: UnitVector<Real>) -> Self {
        NormalCone {
            axis,
            cos_half_angle: 1.0,
        }
    }

    /// A cone that allows any direction.
    #[inline]
    pub fn free(axis: UnitVector<Real>) -> Self {
        NormalCone {
            axis,
            cos_half_angle: -1.0,
        }
    }

    /// The cone around `axis` that just contains all the `normals`.
    pub fn enclosing(
        axis: UnitVector<Real>,
        normals: impl IntoIterator<Item = Vector<Real>>,
    ) -> Self {
        let cos_half_angle = normals
            .into_iter()
            .map(|n| n.dot(axis.as_ref()))
            .fold(1.0, Real::min);
        NormalCone {
            axis,
            cos_half_angle,
        }
    }

    /// This cone with its axis rotated by `rotation`.
    #[inline]
    pub fn rotated(&self, rotation: &Rotation<Real>) -> Self {
        NormalCone {
            axis: rotation * self.axis,
            cos_half_angle: self.cos_half_angle,
        }
    }

    /// Does this cone allow the unit direction `dir`?
    #[inline]
    pub fn contains(&self, dir: &Vector<Real>) -> bool {
        self.cos_half_angle <= -1.0 || dir.dot(self.axis.as_ref()) >= self.cos_half_angle
    }

    /// Projects the unit direction `dir` so it is contained in this cone.
    ///
    /// Directions outside of the cone are rotated toward the axis until they reach its boundary.
    pub fn project(&self, dir: &Vector<Real>) -> Vector<Real> {
        if self.contains(dir) {
            return *dir;
        }

        if self.cos_half_angle >= 1.0 {
            return *self.axis;
        }

        let dot = dir.dot(self.axis.as_ref());
        let Some(orthogonal) = (dir - *self.axis * dot).try_normalize(1.0e-6) else {
            return *self.axis;
        };
        let sin_half_angle = (1.0 - self.cos_half_angle * self.cos_half_angle).max(0.0).sqrt();

        *self.axis * self.cos_half_angle + orthogonal * sin_half_angle
    }
}

/// The normal cones of the face, edges and vertices of a triangle of a mesh.
///
/// Edge `i` joins the vertices `i` and `i + 1` of the triangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TriangleNormalCones {
    /// The cone of the face: only its normal.
    pub face: NormalCone,
    /// The cones of the edges.
    pub edges: [NormalCone; 3],
    /// The cones of the vertices.
    pub vertices: [NormalCone; 3],
}

impl TriangleNormalCones {
    /// These cones with their axes rotated by `rotation`.
    pub fn rotated(&self, rotation: &Rotation<Real>) -> Self {
        TriangleNormalCones {
            face: self.face.rotated(rotation),
            edges: self.edges.map(|cone| cone.rotated(rotation)),
            vertices: self.vertices.map(|cone| cone.rotated(rotation)),
        }
    }
}
