//! Spawn reconciliation and spatial placement for the plaza arena.
//!
//! The engine takes a declarative [`plaza_config::PlazaConfig`] and brings a
//! live [`plaza_core::World`] up to it: missing actors are spawned at valid
//! positions, visual overrides are applied to the actors already there, and
//! nothing that satisfies the configuration is touched. A separate
//! introspection pass walks the world afterwards and reconstructs what is
//! actually in it, independent of how it was built.

/// Explicitly constructed diagnostics sink passed between components.
pub mod diagnostics;
/// Error types for the engine crate.
pub mod error;
/// Read-only world introspection and report generation.
pub mod introspect;
/// The reconciliation manager that applies configuration to a world.
pub mod manager;
/// Spawn-point generation over the plaza floor.
pub mod placement;
/// Visual resource loading and symbolic skin resolution.
pub mod resources;
/// Declarative construction of the arena shell (floor, walls, light).
pub mod scaffold;

/// Re-exports of the diagnostics sink types.
pub use diagnostics::{DiagLevel, DiagRecord, Diagnostics};
/// Re-exports of [`error::EngineError`] and [`error::EngineResult`].
pub use error::{EngineError, EngineResult};
/// Re-exports of the introspection types.
pub use introspect::{ActorInfo, ClassTag, LayoutSummary, PlazaIntrospector, generate_report};
/// Re-exports of the reconciliation manager types.
pub use manager::{ApplyOutcome, PlazaManager, SpawnClass};
/// Re-export of [`placement::SpawnPlanner`].
pub use placement::SpawnPlanner;
/// Re-exports of the resource abstraction types.
pub use resources::{
    LoadedResource, ResourceCatalog, SkinResolver, SkinSlot, SkinTable, VisualResources,
    apply_skins,
};
/// Re-export of [`scaffold::build_arena`].
pub use scaffold::build_arena;
