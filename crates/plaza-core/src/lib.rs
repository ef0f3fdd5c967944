//! Core types for Plaza: entities, components, and the world container.
//!
//! This crate defines the spatial-entity model the layout engine operates
//! on. It is independent of any configuration or placement logic — you can
//! construct a [`World`] programmatically and hand it to the engine, or
//! build one by hand in tests.

/// Typed component data (transforms, meshes, lights).
pub mod component;
/// Entity types and identifiers.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// The world container that owns entities and their indexes.
pub mod world;

/// Re-export core entity types.
pub use entity::{Entity, EntityId, EntityKind};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export component primitives.
pub use component::{Transform, Vec3};
/// Re-export world container types.
pub use world::{World, WorldMeta};
