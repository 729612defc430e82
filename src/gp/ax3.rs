//! Right-handed local coordinate system.
//!
//! Every analytic surface and curve in this crate is positioned by an
//! [`Ax3`]: a location, a main direction N, and X/Y directions with
//! `Y = N ^ X`.

use super::{Ax1, Dir, Pnt, XYZ};

/// A located right-handed frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ax3 {
    axis: Ax1,
    vxdir: Dir,
    vydir: Dir,
}

impl Default for Ax3 {
    fn default() -> Self {
        Self::standard()
    }
}

impl Ax3 {
    /// Standard right-handed coordinate system at origin.
    pub const fn standard() -> Self {
        Self {
            axis: Ax1::new(Pnt::new(), Dir::dz()),
            vxdir: Dir::dx(),
            vydir: Dir::dy(),
        }
    }

    /// Creates from point and N direction.
    ///
    /// The X direction is chosen perpendicular to N by zeroing the component
    /// of N with the smallest magnitude, so that N = Z yields X = (1, 0, 0).
    pub fn new(p: Pnt, n: Dir) -> Self {
        let (a, b, c) = (n.x(), n.y(), n.z());
        let (aa, ba, ca) = (a.abs(), b.abs(), c.abs());
        let raw = if ba <= aa && ba <= ca {
            if aa > ca {
                XYZ::from_coords(-c, 0.0, a)
            } else {
                XYZ::from_coords(c, 0.0, -a)
            }
        } else if aa <= ba && aa <= ca {
            if ba > ca {
                XYZ::from_coords(0.0, -c, b)
            } else {
                XYZ::from_coords(0.0, c, -b)
            }
        } else if aa > ba {
            XYZ::from_coords(-b, a, 0.0)
        } else {
            XYZ::from_coords(b, -a, 0.0)
        };
        // raw is perpendicular to a unit N and has modulus >= 1/sqrt(2)
        let vxdir = Dir::from_xyz(raw).unwrap_or(Dir::dx());
        let vydir = Dir::from_xyz(n.xyz().crossed(vxdir.xyz())).unwrap_or(Dir::dy());
        Self {
            axis: Ax1::new(p, n),
            vxdir,
            vydir,
        }
    }

    /// Creates from point, N direction, and X direction.
    /// `vx` is projected onto the plane normal to N; None if it is parallel to N.
    pub fn new_with_x(p: Pnt, n: Dir, vx: Dir) -> Option<Self> {
        let proj = *vx.xyz() - *n.xyz() * n.dot(&vx);
        let vxdir = Dir::from_xyz(proj)?;
        let vydir = Dir::from_xyz(n.xyz().crossed(vxdir.xyz()))?;
        Some(Self {
            axis: Ax1::new(p, n),
            vxdir,
            vydir,
        })
    }

    #[inline]
    pub const fn axis(&self) -> &Ax1 {
        &self.axis
    }

    /// Returns the N direction.
    #[inline]
    pub const fn direction(&self) -> &Dir {
        self.axis.direction()
    }

    #[inline]
    pub const fn location(&self) -> &Pnt {
        self.axis.location()
    }

    #[inline]
    pub const fn xdirection(&self) -> &Dir {
        &self.vxdir
    }

    #[inline]
    pub const fn ydirection(&self) -> &Dir {
        &self.vydir
    }
}
