use std::collections::{BTreeMap, BTreeSet};

use plaza_config::{PresetVisuals, ResourceRef, VisualConfig};

use crate::diagnostics::Diagnostics;

/// A successfully loaded visual resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedResource {
    path: String,
}

impl LoadedResource {
    /// Full asset path of the resource.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Short display name: the last path segment.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// Synchronous, load-on-demand access to visual resources.
///
/// The cache behind this trait is owned externally; the engine only ever
/// asks for loads and never mutates it structurally. A `None` return means
/// the reference could not be satisfied and the caller skips that entity.
pub trait VisualResources {
    /// Load the referenced resource, blocking until it is available.
    fn load_synchronous(&mut self, reference: &ResourceRef) -> Option<LoadedResource>;
}

/// An in-memory resource registry.
///
/// Stands in for the host's asset system: paths registered here load
/// successfully, everything else fails. Load counts are kept per path so
/// callers can observe repeated loads.
#[derive(Debug, Clone, Default)]
pub struct ResourceCatalog {
    known: BTreeSet<String>,
    load_counts: BTreeMap<String, u32>,
}

impl ResourceCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an asset path as loadable.
    pub fn register(&mut self, path: impl Into<String>) {
        self.known.insert(path.into());
    }

    /// Register an asset path, builder style.
    pub fn with_resource(mut self, path: impl Into<String>) -> Self {
        self.register(path);
        self
    }

    /// How many times the given path has been loaded.
    pub fn load_count(&self, path: &str) -> u32 {
        self.load_counts.get(path).copied().unwrap_or(0)
    }
}

impl VisualResources for ResourceCatalog {
    fn load_synchronous(&mut self, reference: &ResourceRef) -> Option<LoadedResource> {
        if !self.known.contains(reference.path()) {
            return None;
        }
        *self.load_counts.entry(reference.path().to_string()).or_insert(0) += 1;
        Some(LoadedResource {
            path: reference.path().to_string(),
        })
    }
}

/// Which configuration slot a symbolic skin name applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SkinSlot {
    /// The player character's skeletal mesh.
    Player,
    /// The target dummies' skeletal mesh.
    Dummy,
    /// The explosive barrels' static mesh.
    Barrel,
}

impl SkinSlot {
    fn label(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Dummy => "dummy",
            Self::Barrel => "barrel",
        }
    }
}

/// Maps symbolic skin names from a preset onto loadable resources.
///
/// Presets speak in designer-facing names ("Knight", "Rusty"); what those
/// mean is a content decision, so the mapping is injected rather than
/// baked into the codec.
pub trait SkinResolver {
    /// Resolve a skin name for a slot, or `None` if the name is unknown.
    fn resolve(&self, slot: SkinSlot, name: &str) -> Option<ResourceRef>;
}

/// A map-backed [`SkinResolver`].
#[derive(Debug, Clone, Default)]
pub struct SkinTable {
    entries: BTreeMap<(SkinSlot, String), ResourceRef>,
}

impl SkinTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mapping, builder style.
    pub fn with_skin(
        mut self,
        slot: SkinSlot,
        name: impl Into<String>,
        reference: ResourceRef,
    ) -> Self {
        self.entries.insert((slot, name.into()), reference);
        self
    }
}

impl SkinResolver for SkinTable {
    fn resolve(&self, slot: SkinSlot, name: &str) -> Option<ResourceRef> {
        self.entries.get(&(slot, name.to_string())).cloned()
    }
}

/// Map a preset's symbolic skin names onto a visual configuration.
///
/// Names the resolver does not recognize leave their slot untouched and
/// record an info diagnostic; the theme is recorded for awareness only.
pub fn apply_skins(
    visuals: &mut VisualConfig,
    preset: &PresetVisuals,
    resolver: &dyn SkinResolver,
    diagnostics: &mut Diagnostics,
) {
    let slots = [
        (SkinSlot::Player, preset.player_skin.as_deref()),
        (SkinSlot::Dummy, preset.dummy_skin.as_deref()),
        (SkinSlot::Barrel, preset.barrel_skin.as_deref()),
    ];

    for (slot, name) in slots {
        let Some(name) = name else { continue };
        match resolver.resolve(slot, name) {
            Some(reference) => {
                diagnostics.info(
                    "skins",
                    format!("{} skin \"{name}\" -> {reference}", slot.label()),
                );
                match slot {
                    SkinSlot::Player => visuals.player_mesh = Some(reference),
                    SkinSlot::Dummy => visuals.dummy_mesh = Some(reference),
                    SkinSlot::Barrel => visuals.barrel_mesh = Some(reference),
                }
            }
            None => diagnostics.info(
                "skins",
                format!("no resource mapped for {} skin \"{name}\"", slot.label()),
            ),
        }
    }

    if let Some(theme) = &preset.theme {
        diagnostics.info("skins", format!("theme \"{theme}\" noted"));
    }
}
