//! Value types shared by callers of the entity registry and area manager.
//!
//! Converted from `Base/Vector3.hpp`, `Base/AABB.hpp` and `Base/Sphere.hpp`
//! in the upstream C++ module: value semantics, trivial copy, and
//! lexicographic tuple comparison rather than magnitude comparison (§4.B).

mod aabb;
mod color;
mod quaternion;
mod sphere;
mod vector2;
mod vector3;
mod vector4;

pub use aabb::Aabb;
pub use color::{Color3, Color4};
pub use quaternion::Quaternion;
pub use sphere::Sphere;
pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;
