//! Vector types shared by the physics core and the lander front end.
mod coordinate;
mod vec3d;

pub use coordinate::Coordinate;
pub use vec3d::Vec3D;
