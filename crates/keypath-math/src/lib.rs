pub mod aabb;
pub mod vector;

pub use glam::{dvec3, DVec3};
pub use aabb::Aabb3;
pub use vector::{mix, normalize_or_zero};

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
