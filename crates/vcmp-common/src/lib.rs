//! Shared value types and error taxonomy for the VCMP scripting host core.
//!
//! Converted from the upstream `Base/*.hpp` value types and the `vcmpError`
//! enum (`include/vcmp.h`). Depended on by `vcmp-core` and `vcmp-plugin`.

pub mod error;
pub mod math;
pub mod pool;

pub use error::{EntityError, HostCallError, HostResult};
pub use math::{Aabb, Color3, Color4, Quaternion, Sphere, Vector2, Vector3, Vector4};
pub use pool::{PoolKind, INVALID_HANDLE};
