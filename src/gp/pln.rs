//! Plane in 3D space.

use super::{Ax1, Ax3, Dir, Pnt, Vec3};

/// A plane in 3D space.
/// Defined by an axis system (Ax3) with origin and normal direction.
/// Parametrization: `P(u, v) = O + u * XDir + v * YDir`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pln {
    pos: Ax3,
}

impl Pln {
    /// Creates a plane coincident with the OXY plane.
    #[inline]
    pub const fn new() -> Self {
        Self {
            pos: Ax3::standard(),
        }
    }

    /// Creates a plane from an axis system.
    /// The main direction of the axis system is the normal to the plane.
    #[inline]
    pub const fn from_ax3(ax3: Ax3) -> Self {
        Self { pos: ax3 }
    }

    /// Creates a plane from a point and a normal direction.
    #[inline]
    pub fn from_pnt_dir(p: Pnt, n: Dir) -> Self {
        Self {
            pos: Ax3::new(p, n),
        }
    }

    #[inline]
    pub const fn position(&self) -> &Ax3 {
        &self.pos
    }

    #[inline]
    pub const fn location(&self) -> &Pnt {
        self.pos.location()
    }

    /// Returns the plane's normal axis.
    #[inline]
    pub const fn axis(&self) -> &Ax1 {
        self.pos.axis()
    }

    /// Point at plane parameters (u, v).
    pub fn value(&self, u: f64, v: f64) -> Pnt {
        let xyz = *self.location().xyz()
            + *self.pos.xdirection().xyz() * u
            + *self.pos.ydirection().xyz() * v;
        Pnt::from_xyz(xyz)
    }

    /// Parameters of the orthogonal projection of `p` onto the plane.
    pub fn parameters(&self, p: &Pnt) -> (f64, f64) {
        let d = Vec3::from_points(self.location(), p);
        (
            d.dot(&Vec3::from_dir(self.pos.xdirection())),
            d.dot(&Vec3::from_dir(self.pos.ydirection())),
        )
    }

    /// Signed distance along the normal: positive on the side N points to.
    pub fn signed_distance(&self, p: &Pnt) -> f64 {
        Vec3::from_points(self.location(), p).dot(&Vec3::from_dir(self.pos.direction()))
    }

    pub fn distance(&self, p: &Pnt) -> f64 {
        self.signed_distance(p).abs()
    }

    pub fn square_distance(&self, p: &Pnt) -> f64 {
        let d = self.signed_distance(p);
        d * d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_parameters_inverse() {
        let pln = Pln::from_pnt_dir(
            Pnt::from_coords(1.0, -2.0, 0.5),
            Dir::from_coords(1.0, 1.0, 1.0).unwrap(),
        );
        let p = pln.value(3.0, -4.0);
        let (u, v) = pln.parameters(&p);
        assert!((u - 3.0).abs() < 1e-12);
        assert!((v + 4.0).abs() < 1e-12);
        assert!(pln.distance(&p) < 1e-12);
    }

    #[test]
    fn test_signed_distance() {
        let pln = Pln::new();
        assert_eq!(pln.signed_distance(&Pnt::from_coords(3.0, 4.0, -2.0)), -2.0);
        assert_eq!(pln.square_distance(&Pnt::from_coords(0.0, 0.0, 3.0)), 9.0);
    }
}
