use std::collections::BTreeSet;

use plaza_core::component::{Rotation, Vec3};
use plaza_core::{Entity, EntityId, EntityKind, World};

/// Classification tag attached to a discovered entity.
///
/// Tags are explicit enum variants, not strings: report filtering and any
/// downstream tooling match on variants instead of searching substrings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ClassTag {
    /// A spawn anchor (player start).
    Spawn,
    /// An attackable practice target.
    Enemy,
    /// A damaging hazard.
    Hazard,
    /// A light source.
    Lighting,
    /// Large static geometry — floors and walls, inferred from scale.
    Structure,
    /// Carries a skeletal mesh (relevant for asset swapping).
    Skeletal,
}

impl ClassTag {
    /// Report label for this tag.
    pub fn label(self) -> &'static str {
        match self {
            Self::Spawn => "KEY:SPAWN",
            Self::Enemy => "KEY:ENEMY",
            Self::Hazard => "KEY:HAZARD",
            Self::Lighting => "KEY:LIGHTING",
            Self::Structure => "KEY:STRUCTURE",
            Self::Skeletal => "SKELETAL",
        }
    }

    /// True for tags that mark an entity as worth a report detail row.
    pub fn is_key(self) -> bool {
        !matches!(self, Self::Skeletal)
    }
}

/// Snapshot of a single discovered entity.
///
/// Rebuilt from scratch on every introspection pass; nothing here refers
/// back into the live world.
#[derive(Debug, Clone)]
pub struct ActorInfo {
    /// The entity's ID at the time of the pass.
    pub id: EntityId,
    /// The entity's display name.
    pub name: String,
    /// The entity's kind, rendered as a class name.
    pub class_name: String,
    /// World position in centimeters.
    pub position: Vec3,
    /// Orientation.
    pub rotation: Rotation,
    /// Per-axis scale.
    pub scale: Vec3,
    /// Resolved mesh asset path, static mesh checked before skeletal.
    pub mesh_asset_path: Option<String>,
    /// Resolved skeleton asset path, when a skeletal mesh is present.
    pub skeleton_asset_path: Option<String>,
    /// Classification tags.
    pub tags: BTreeSet<ClassTag>,
}

impl ActorInfo {
    /// True if any tag marks this entity for the report detail section.
    pub fn is_key(&self) -> bool {
        self.tags.iter().any(|t| t.is_key())
    }
}

/// Aggregate view of a world's layout, measured empirically.
///
/// The width/height here are observed positional extents — max bound minus
/// min bound — and are deliberately independent of whatever the layout
/// configuration declares. Disagreement between the two is diagnostic
/// information, not an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutSummary {
    /// Observed plaza width in centimeters (X extent of all positions).
    pub plaza_width_cm: f32,
    /// Observed plaza height in centimeters (Y extent of all positions).
    pub plaza_height_cm: f32,
    /// Number of target dummies discovered.
    pub num_target_dummies: usize,
    /// Number of explosive barrels discovered.
    pub num_explosive_barrels: usize,
    /// Number of player starts discovered.
    pub num_player_starts: usize,
    /// Number of static mesh entities discovered.
    pub num_static_meshes: usize,
    /// Number of entities carrying a light component.
    pub num_lights: usize,
    /// Total entities discovered (excluding any excluded IDs).
    pub total_actors: usize,
    /// Component-wise minimum of all entity positions.
    pub min_bounds: Vec3,
    /// Component-wise maximum of all entity positions.
    pub max_bounds: Vec3,
}

/// Read-only pass over a world that classifies every entity and measures
/// the observed layout. Never mutates anything; every pass rebuilds its
/// output from scratch.
#[derive(Debug, Clone, Default)]
pub struct PlazaIntrospector {
    excluded: Vec<EntityId>,
}

impl PlazaIntrospector {
    /// Create an introspector that looks at every entity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude an entity from the pass (e.g. the observer's own marker).
    pub fn with_excluded(mut self, id: EntityId) -> Self {
        self.excluded.push(id);
        self
    }

    /// Walk the world and build the layout summary plus per-entity info,
    /// sorted by entity name for stable output.
    pub fn perform_introspection(&self, world: &World) -> (LayoutSummary, Vec<ActorInfo>) {
        let mut summary = LayoutSummary::default();
        let mut actors = Vec::new();
        let mut bounds: Option<(Vec3, Vec3)> = None;

        for entity in world.all_entities() {
            if self.excluded.contains(&entity.id) {
                continue;
            }

            let position = entity.transform.position;
            bounds = Some(match bounds {
                None => (position, position),
                Some((min, max)) => (
                    min.component_min(position),
                    max.component_max(position),
                ),
            });

            match entity.kind {
                EntityKind::TargetDummy => summary.num_target_dummies += 1,
                EntityKind::ExplosiveBarrel => summary.num_explosive_barrels += 1,
                EntityKind::PlayerStart => summary.num_player_starts += 1,
                EntityKind::StaticMesh => summary.num_static_meshes += 1,
                _ => {}
            }
            if entity.components.light.is_some() {
                summary.num_lights += 1;
            }

            actors.push(ActorInfo {
                id: entity.id,
                name: entity.name.clone(),
                class_name: entity.kind.to_string(),
                position,
                rotation: entity.transform.rotation,
                scale: entity.transform.scale,
                mesh_asset_path: mesh_asset_path(entity),
                skeleton_asset_path: skeleton_asset_path(entity),
                tags: classify(entity),
            });
        }

        if let Some((min, max)) = bounds {
            summary.min_bounds = min;
            summary.max_bounds = max;
            summary.plaza_width_cm = max.x - min.x;
            summary.plaza_height_cm = max.y - min.y;
        }
        summary.total_actors = actors.len();

        actors.sort_by(|a, b| a.name.cmp(&b.name));
        (summary, actors)
    }
}

/// Classify an entity into its tag set.
pub fn classify(entity: &Entity) -> BTreeSet<ClassTag> {
    let mut tags = BTreeSet::new();

    match entity.kind {
        EntityKind::PlayerStart => {
            tags.insert(ClassTag::Spawn);
        }
        EntityKind::TargetDummy => {
            tags.insert(ClassTag::Enemy);
            tags.insert(ClassTag::Skeletal);
        }
        EntityKind::ExplosiveBarrel => {
            tags.insert(ClassTag::Hazard);
        }
        _ => {}
    }

    if entity.components.light.is_some() {
        tags.insert(ClassTag::Lighting);
    }

    if let Some(mesh) = &entity.components.mesh {
        if mesh.skeletal_mesh.is_some() {
            tags.insert(ClassTag::Skeletal);
        }
        // Large static meshes are assumed to be floors or walls. This is
        // a scale heuristic, not a type check.
        let scale = entity.transform.scale;
        if mesh.static_mesh.is_some() && (scale.x > 5.0 || scale.y > 5.0) {
            tags.insert(ClassTag::Structure);
        }
    }

    tags
}

fn mesh_asset_path(entity: &Entity) -> Option<String> {
    let mesh = entity.components.mesh.as_ref()?;
    mesh.static_mesh.clone().or_else(|| mesh.skeletal_mesh.clone())
}

fn skeleton_asset_path(entity: &Entity) -> Option<String> {
    let mesh = entity.components.mesh.as_ref()?;
    if mesh.skeletal_mesh.is_some() {
        mesh.skeleton.clone()
    } else {
        None
    }
}

/// Render the introspection output as a Markdown document.
///
/// Only key-tagged entities get a detail row; everything else is present
/// in the aggregate counts only.
pub fn generate_report(
    world_name: &str,
    summary: &LayoutSummary,
    actors: &[ActorInfo],
) -> String {
    let mut out = String::new();

    out.push_str("# Plaza Layout Manifest\n\n");
    out.push_str(&format!("World: **{world_name}**\n\n"));

    out.push_str("## Summary\n\n");
    out.push_str(&format!(
        "- **Estimated plaza size**: {:.1} x {:.1} m\n",
        summary.plaza_width_cm / 100.0,
        summary.plaza_height_cm / 100.0
    ));
    out.push_str(&format!(
        "- **Player starts**: {}\n",
        summary.num_player_starts
    ));
    out.push_str(&format!(
        "- **Target dummies**: {}\n",
        summary.num_target_dummies
    ));
    out.push_str(&format!(
        "- **Explosive barrels**: {}\n",
        summary.num_explosive_barrels
    ));
    out.push_str(&format!(
        "- **Static meshes**: {}\n",
        summary.num_static_meshes
    ));
    out.push_str(&format!("- **Lights**: {}\n", summary.num_lights));
    out.push_str(&format!("- **Total actors**: {}\n\n", summary.total_actors));

    out.push_str("## Key Actors\n\n");
    out.push_str("| Actor | Class | Location (X, Y, Z) | Asset Path | Tags |\n");
    out.push_str("|-------|-------|--------------------|------------|------|\n");
    for info in actors.iter().filter(|a| a.is_key()) {
        let tags: Vec<&str> = info.tags.iter().map(|t| t.label()).collect();
        out.push_str(&format!(
            "| {} | {} | ({:.0}, {:.0}, {:.0}) | {} | {} |\n",
            info.name,
            info.class_name,
            info.position.x,
            info.position.y,
            info.position.z,
            info.mesh_asset_path.as_deref().unwrap_or("-"),
            tags.join(", ")
        ));
    }

    out.push_str("\n## World Bounds\n\n");
    out.push_str(&format!(
        "- **Min**: ({:.1}, {:.1}, {:.1})\n",
        summary.min_bounds.x, summary.min_bounds.y, summary.min_bounds.z
    ));
    out.push_str(&format!(
        "- **Max**: ({:.1}, {:.1}, {:.1})\n",
        summary.max_bounds.x, summary.max_bounds.y, summary.max_bounds.z
    ));

    out
}
