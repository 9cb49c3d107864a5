//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (by pool handle)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Segment, crosses_either, segment_intersection};
pub use state::{
    FRUIT_CATALOG, Fruit, FruitKind, GameEvent, GameState, Particle, Pool, Trail, WorldBounds,
};
pub use tick::{TickInput, tick};
