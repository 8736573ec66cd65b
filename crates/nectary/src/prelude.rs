//! Convenience re-exports — `use nectary::prelude::*` for the common items.

pub use crate::area::{AREA_DIAMETER, AreaError, FlowerArea};
pub use crate::flower::{Flower, NectarId};
pub use crate::host::{FlowerHost, NodeKind};
pub use crate::math::{Mat4, Quat, Transform, Vec3};
pub use crate::scene::{NodeId, Scene, SceneDoc};
