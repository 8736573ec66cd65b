//! # Scene — Hierarchy Host Implementation
//!
//! The concrete scene graph the crate ships for driving the registry without
//! an external engine:
//!
//! - [`node`] — generational node handles
//! - [`graph`] — the [`Scene`] arena and its [`FlowerHost`](crate::host::FlowerHost) impl
//! - [`doc`] — declarative JSON scene documents

pub mod doc;
pub mod graph;
pub mod node;

pub use doc::{FlowerDoc, KindDoc, NodeDoc, SceneDoc};
pub use graph::Scene;
pub use node::NodeId;
