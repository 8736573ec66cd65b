//! # Nectary — Flower Registry for Foraging Simulations
//!
//! A foraging simulation scatters nectar-bearing flowers across plants in a
//! scene hierarchy. When a forager touches a nectar collider, the simulation
//! needs to know — in constant time — which flower it just found, and at
//! every episode boundary all flowers must refill and the plants take fresh
//! random orientations.
//!
//! Nectary is that registry. [`FlowerArea`](area::FlowerArea) scans a
//! hierarchy once, records every plant and flower it finds (in a stable,
//! pre-order sequence), and builds the nectar-collider index. The hierarchy
//! itself stays behind the [`FlowerHost`](host::FlowerHost) adapter, so the
//! registry works against any engine's scene graph; the bundled
//! [`Scene`](scene::Scene) is a self-contained host for simulations, demos
//! and tests.
//!
//! Start with `use nectary::prelude::*`, build or load a [`Scene`](scene::Scene),
//! and call [`FlowerArea::discover`](area::FlowerArea::discover).

pub mod area;
pub mod flower;
pub mod host;
pub mod math;
pub mod prelude;
pub mod scene;
