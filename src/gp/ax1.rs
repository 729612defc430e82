//! Axis in 3D space (point + direction).

use super::{Dir, Pnt};

/// An axis: a location and a unit direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ax1 {
    loc: Pnt,
    vdir: Dir,
}

impl Default for Ax1 {
    fn default() -> Self {
        Self::oz()
    }
}

impl Ax1 {
    /// Z axis at origin.
    pub const fn oz() -> Self {
        Self {
            loc: Pnt::new(),
            vdir: Dir::dz(),
        }
    }

    pub const fn new(p: Pnt, v: Dir) -> Self {
        Self { loc: p, vdir: v }
    }

    #[inline]
    pub const fn direction(&self) -> &Dir {
        &self.vdir
    }

    #[inline]
    pub const fn location(&self) -> &Pnt {
        &self.loc
    }
}
