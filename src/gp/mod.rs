//! Geometric primitives.
//!
//! Value types shared by the curve and surface adaptors and the extrema
//! solvers. Angles are in radians, lengths in model units.

mod xyz;
mod pnt;
mod vec;
mod dir;
mod ax1;
mod ax3;

pub use xyz::XYZ;
pub use pnt::Pnt;
pub use vec::Vec3;
pub use dir::Dir;
pub use ax1::Ax1;
pub use ax3::Ax3;

// Elementary curves
mod lin;
mod circ;
mod elips;

pub use lin::Lin;
pub use circ::Circ;
pub use elips::Elips;

// Elementary surfaces
mod pln;
mod sphere;
mod torus;

pub use pln::Pln;
pub use sphere::Sphere;
pub use torus::Torus;
