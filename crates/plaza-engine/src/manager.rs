use plaza_config::{ConfigAsset, LayoutConfig, PlazaConfig, ResourceRef, VisualConfig};
use plaza_core::component::ComponentSet;
use plaza_core::{Entity, EntityId, EntityKind, Vec3, World};

use crate::diagnostics::Diagnostics;
use crate::error::{EngineError, EngineResult};
use crate::placement::SpawnPlanner;
use crate::resources::VisualResources;

const SOURCE: &str = "manager";

/// Template for instantiating entities of a tracked category.
#[derive(Debug, Clone)]
pub struct SpawnClass {
    kind: EntityKind,
    name_prefix: String,
    components: ComponentSet,
}

impl SpawnClass {
    /// Create a template for the given kind. Spawned entities are named
    /// `<prefix>_<short id>`.
    pub fn new(kind: EntityKind, name_prefix: impl Into<String>) -> Self {
        Self {
            kind,
            name_prefix: name_prefix.into(),
            components: ComponentSet::default(),
        }
    }

    /// Attach the component set every spawned entity starts with.
    pub fn with_components(mut self, components: ComponentSet) -> Self {
        self.components = components;
        self
    }

    /// The entity kind this template spawns.
    pub fn kind(&self) -> &EntityKind {
        &self.kind
    }

    /// Instantiate a fresh entity at the given position.
    pub fn instantiate(&self, position: Vec3) -> Entity {
        let id = EntityId::new();
        let mut entity = Entity::with_id(
            id,
            self.kind.clone(),
            format!("{}_{id}", self.name_prefix),
        );
        entity.transform.position = position;
        entity.components = self.components.clone();
        entity
    }
}

/// Counters reported by one configuration apply pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyOutcome {
    /// Target dummies spawned during the layout phase.
    pub dummies_spawned: u32,
    /// Explosive barrels spawned during the layout phase.
    pub barrels_spawned: u32,
    /// Entities whose visuals were swapped during the visual phase.
    pub visuals_applied: u32,
}

/// Owns the active configuration and reconciles a live world against it.
///
/// Reconciliation only ever moves counts *up* to the configured target:
/// entities that already satisfy the configuration are left alone, and
/// surplus entities are never despawned. Applying the same configuration
/// twice therefore spawns nothing the second time.
#[derive(Debug)]
pub struct PlazaManager {
    config: PlazaConfig,
    asset: Option<ConfigAsset>,
    dummy_class: Option<SpawnClass>,
    barrel_class: Option<SpawnClass>,
    world: Option<World>,
    planner: SpawnPlanner,
    diagnostics: Diagnostics,
}

impl PlazaManager {
    /// Create a manager owning the given configuration.
    pub fn new(config: PlazaConfig) -> Self {
        Self {
            config,
            asset: None,
            dummy_class: None,
            barrel_class: None,
            world: None,
            planner: SpawnPlanner::new(42),
            diagnostics: Diagnostics::new(0),
        }
    }

    /// Reseed the spawn planner for deterministic placement.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.planner = SpawnPlanner::new(seed);
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &PlazaConfig {
        &self.config
    }

    /// Replace the active configuration.
    pub fn set_config(&mut self, config: PlazaConfig) {
        self.diagnostics.info(
            SOURCE,
            format!(
                "config set: {:.0}x{:.0} cm, {} dummies, {} barrels",
                config.layout.plaza_width_cm,
                config.layout.plaza_height_cm,
                config.layout.num_target_dummies,
                config.layout.num_explosive_barrels
            ),
        );
        self.config = config;
    }

    /// Adopt a content asset. Its configuration is copied in now and again
    /// at the start of every apply pass — asset precedence is absolute.
    pub fn set_config_from_asset(&mut self, asset: &ConfigAsset) {
        self.diagnostics.info(
            SOURCE,
            format!(
                "config loaded from asset \"{}\" (v{})",
                asset.name(),
                asset.version()
            ),
        );
        self.config = asset.config().clone();
        self.asset = Some(asset.clone());
    }

    /// Set the template used to spawn target dummies.
    pub fn set_dummy_class(&mut self, class: SpawnClass) {
        self.dummy_class = Some(class);
    }

    /// Set the template used to spawn explosive barrels.
    pub fn set_barrel_class(&mut self, class: SpawnClass) {
        self.barrel_class = Some(class);
    }

    /// Attach the world this manager reconciles.
    pub fn attach_world(&mut self, world: World) {
        self.world = Some(world);
    }

    /// The attached world, if any.
    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    /// Detach and return the world.
    pub fn take_world(&mut self) -> Option<World> {
        self.world.take()
    }

    /// Diagnostics accumulated across operations on this manager.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Apply the active configuration to the attached world.
    ///
    /// Runs the layout phase (spawn up to target counts) and then the
    /// visual phase (swap meshes on affected live entities). Per-entity
    /// and per-category problems are recorded as warnings and skipped;
    /// only a missing world fails the call.
    pub fn apply_configuration(
        &mut self,
        resources: &mut dyn VisualResources,
    ) -> EngineResult<ApplyOutcome> {
        if let Some(asset) = &self.asset {
            self.config = asset.config().clone();
            self.diagnostics.info(
                SOURCE,
                format!("applying configuration from asset \"{}\"", asset.name()),
            );
        }

        let Some(world) = self.world.as_mut() else {
            self.diagnostics
                .error(SOURCE, "cannot apply configuration: no world attached");
            return Err(EngineError::MissingWorld);
        };

        log_current_config(&self.config, world, &mut self.diagnostics);

        let dummies_spawned = ensure_count(
            world,
            &mut self.planner,
            &self.config.layout,
            self.dummy_class.as_ref(),
            Category {
                kind: &EntityKind::TargetDummy,
                label: "dummy",
                plural: "dummies",
                target: self.config.layout.num_target_dummies,
            },
            &mut self.diagnostics,
        );
        let barrels_spawned = ensure_count(
            world,
            &mut self.planner,
            &self.config.layout,
            self.barrel_class.as_ref(),
            Category {
                kind: &EntityKind::ExplosiveBarrel,
                label: "barrel",
                plural: "barrels",
                target: self.config.layout.num_explosive_barrels,
            },
            &mut self.diagnostics,
        );

        let visuals_applied =
            apply_visual_config(world, &self.config.visuals, resources, &mut self.diagnostics);

        let outcome = ApplyOutcome {
            dummies_spawned,
            barrels_spawned,
            visuals_applied,
        };
        self.diagnostics.info(
            SOURCE,
            format!(
                "configuration applied: {} dummies spawned, {} barrels spawned, {} visuals applied",
                outcome.dummies_spawned, outcome.barrels_spawned, outcome.visuals_applied
            ),
        );

        Ok(outcome)
    }
}

/// Position of the first player start in the world, or the origin.
fn reference_point(world: &World) -> Vec3 {
    world
        .entities_by_kind(&EntityKind::PlayerStart)
        .first()
        .map(|e| e.transform.position)
        .unwrap_or(Vec3::ZERO)
}

fn log_current_config(config: &PlazaConfig, world: &World, diagnostics: &mut Diagnostics) {
    let layout = &config.layout;
    diagnostics.info(
        SOURCE,
        format!(
            "plaza size: {:.1} x {:.1} cm ({:.1} x {:.1} m), walls {:.1} cm",
            layout.plaza_width_cm,
            layout.plaza_height_cm,
            layout.width_meters(),
            layout.height_meters(),
            layout.wall_height_cm
        ),
    );
    diagnostics.info(
        SOURCE,
        format!(
            "spacing {:.1} cm, safe zone {:.1} cm",
            layout.min_actor_spacing_cm, layout.player_safe_zone_cm
        ),
    );
    diagnostics.info(
        SOURCE,
        format!(
            "overrides: player={}, dummy={}, barrel={}",
            config.visuals.has_player_override(),
            config.visuals.has_dummy_override(),
            config.visuals.has_barrel_override()
        ),
    );
    diagnostics.info(
        SOURCE,
        format!(
            "dummies in world: {} (config: {}), barrels in world: {} (config: {})",
            world.count_of_kind(&EntityKind::TargetDummy),
            layout.num_target_dummies,
            world.count_of_kind(&EntityKind::ExplosiveBarrel),
            layout.num_explosive_barrels
        ),
    );
}

/// One tracked entity category as seen by the layout phase.
struct Category<'a> {
    kind: &'a EntityKind,
    label: &'a str,
    plural: &'a str,
    target: u32,
}

fn ensure_count(
    world: &mut World,
    planner: &mut SpawnPlanner,
    layout: &LayoutConfig,
    class: Option<&SpawnClass>,
    category: Category<'_>,
    diagnostics: &mut Diagnostics,
) -> u32 {
    let Category {
        kind,
        label,
        plural,
        target,
    } = category;

    let live = world.count_of_kind(kind) as u32;
    if live >= target {
        diagnostics.info(SOURCE, format!("{label} count OK: {live}/{target}"));
        return 0;
    }

    let needed = target - live;
    diagnostics.info(
        SOURCE,
        format!("need to spawn {needed} {plural} ({live}/{target})"),
    );

    let Some(class) = class else {
        diagnostics.warn(
            SOURCE,
            format!("cannot spawn {plural}: spawn class not set"),
        );
        return 0;
    };

    let reference = reference_point(world);
    let positions = planner.compute_positions(layout, reference, needed as usize);

    let mut spawned = 0;
    for pos in positions {
        match world.spawn(class.instantiate(pos)) {
            Ok(_) => {
                spawned += 1;
                diagnostics.info(
                    SOURCE,
                    format!("spawned {label} at ({:.1}, {:.1}, {:.1})", pos.x, pos.y, pos.z),
                );
            }
            Err(e) => diagnostics.warn(SOURCE, format!("{label} spawn rejected: {e}")),
        }
    }

    spawned
}

fn apply_visual_config(
    world: &mut World,
    visuals: &VisualConfig,
    resources: &mut dyn VisualResources,
    diagnostics: &mut Diagnostics,
) -> u32 {
    let mut applied = 0;

    if let Some(mesh_ref) = &visuals.player_mesh {
        applied += swap_skeletal_meshes(
            world,
            &EntityKind::Player,
            mesh_ref,
            visuals.player_anim_class.as_ref(),
            resources,
            diagnostics,
            "player",
        );
    }

    if let Some(mesh_ref) = &visuals.dummy_mesh {
        applied += swap_skeletal_meshes(
            world,
            &EntityKind::TargetDummy,
            mesh_ref,
            visuals.dummy_anim_class.as_ref(),
            resources,
            diagnostics,
            "dummy",
        );
    }

    if let Some(mesh_ref) = &visuals.barrel_mesh {
        applied += swap_static_meshes(
            world,
            &EntityKind::ExplosiveBarrel,
            mesh_ref,
            resources,
            diagnostics,
            "barrel",
        );
    }

    applied
}

fn swap_skeletal_meshes(
    world: &mut World,
    kind: &EntityKind,
    mesh_ref: &ResourceRef,
    anim_ref: Option<&ResourceRef>,
    resources: &mut dyn VisualResources,
    diagnostics: &mut Diagnostics,
    label: &str,
) -> u32 {
    let ids: Vec<EntityId> = world.entities_by_kind(kind).iter().map(|e| e.id).collect();

    let mut applied = 0;
    for id in ids {
        let Some(resource) = resources.load_synchronous(mesh_ref) else {
            diagnostics.warn(
                SOURCE,
                format!("failed to load {label} mesh {mesh_ref}"),
            );
            continue;
        };

        let Some(entity) = world.get_entity_mut(id) else {
            continue;
        };
        let name = entity.name.clone();
        let Some(mesh) = entity.components.mesh.as_mut() else {
            diagnostics.warn(
                SOURCE,
                format!("{label} \"{name}\" has no mesh component"),
            );
            continue;
        };

        mesh.skeletal_mesh = Some(resource.path().to_string());
        applied += 1;
        diagnostics.info(
            SOURCE,
            format!("swapped {label} mesh to {}", resource.name()),
        );

        // Animation overrides ride on a successful mesh swap only.
        if let Some(anim_ref) = anim_ref
            && let Some(anim) = resources.load_synchronous(anim_ref)
        {
            mesh.anim_class = Some(anim.path().to_string());
            diagnostics.info(
                SOURCE,
                format!("set {label} anim class to {}", anim.name()),
            );
        }
    }

    applied
}

fn swap_static_meshes(
    world: &mut World,
    kind: &EntityKind,
    mesh_ref: &ResourceRef,
    resources: &mut dyn VisualResources,
    diagnostics: &mut Diagnostics,
    label: &str,
) -> u32 {
    let ids: Vec<EntityId> = world.entities_by_kind(kind).iter().map(|e| e.id).collect();

    let mut applied = 0;
    for id in ids {
        let Some(resource) = resources.load_synchronous(mesh_ref) else {
            diagnostics.warn(
                SOURCE,
                format!("failed to load {label} mesh {mesh_ref}"),
            );
            continue;
        };

        let Some(entity) = world.get_entity_mut(id) else {
            continue;
        };
        let name = entity.name.clone();
        let Some(mesh) = entity.components.mesh.as_mut() else {
            diagnostics.warn(
                SOURCE,
                format!("{label} \"{name}\" has no mesh component"),
            );
            continue;
        };

        mesh.static_mesh = Some(resource.path().to_string());
        applied += 1;
        diagnostics.info(
            SOURCE,
            format!("swapped {label} mesh to {}", resource.name()),
        );
    }

    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::ResourceCatalog;
    use plaza_core::component::MeshComponent;
    use plaza_core::world::WorldMeta;

    const DUMMY_MESH: &str = "/Game/Plaza/Meshes/SK_Dummy";
    const BARREL_MESH: &str = "/Game/Plaza/Meshes/SM_Barrel";

    fn dummy_class() -> SpawnClass {
        SpawnClass::new(EntityKind::TargetDummy, "TargetDummy").with_components(ComponentSet {
            mesh: Some(MeshComponent::skeletal(
                DUMMY_MESH,
                "/Game/Plaza/Skeletons/SK_Dummy_Skeleton",
            )),
            light: None,
        })
    }

    fn barrel_class() -> SpawnClass {
        SpawnClass::new(EntityKind::ExplosiveBarrel, "Barrel").with_components(ComponentSet {
            mesh: Some(MeshComponent::static_mesh(BARREL_MESH)),
            light: None,
        })
    }

    fn world_with_player_start() -> World {
        let mut world = World::new(WorldMeta::new("Test Plaza"));
        world
            .spawn(Entity::new(EntityKind::PlayerStart, "PlayerStart_Main"))
            .unwrap();
        world
    }

    fn manager_with_classes(config: PlazaConfig, world: World) -> PlazaManager {
        let mut manager = PlazaManager::new(config).with_seed(7);
        manager.set_dummy_class(dummy_class());
        manager.set_barrel_class(barrel_class());
        manager.attach_world(world);
        manager
    }

    #[test]
    fn apply_without_world_is_hard_failure() {
        let mut manager = PlazaManager::new(PlazaConfig::default());
        let mut resources = ResourceCatalog::new();
        let result = manager.apply_configuration(&mut resources);
        assert!(matches!(result, Err(EngineError::MissingWorld)));
    }

    #[test]
    fn spawns_up_to_configured_counts() {
        let mut manager =
            manager_with_classes(PlazaConfig::default(), world_with_player_start());
        let mut resources = ResourceCatalog::new();

        let outcome = manager.apply_configuration(&mut resources).unwrap();
        assert_eq!(outcome.dummies_spawned, 3);
        assert_eq!(outcome.barrels_spawned, 2);

        let world = manager.world().unwrap();
        assert_eq!(world.count_of_kind(&EntityKind::TargetDummy), 3);
        assert_eq!(world.count_of_kind(&EntityKind::ExplosiveBarrel), 2);
    }

    #[test]
    fn spawned_positions_respect_safe_zone() {
        let config = PlazaConfig::default();
        let safe_sq =
            config.layout.player_safe_zone_cm * config.layout.player_safe_zone_cm;

        let mut world = World::new(WorldMeta::new("Test Plaza"));
        let anchor = Vec3::new(600.0, -400.0, 0.0);
        world
            .spawn(Entity::new(EntityKind::PlayerStart, "PlayerStart_Main").at(anchor))
            .unwrap();

        let mut manager = manager_with_classes(config, world);
        let mut resources = ResourceCatalog::new();
        manager.apply_configuration(&mut resources).unwrap();

        let world = manager.world().unwrap();
        for entity in world.entities_by_kind(&EntityKind::TargetDummy) {
            assert!(entity.transform.position.dist_sq_planar(anchor) >= safe_sq);
        }
        for entity in world.entities_by_kind(&EntityKind::ExplosiveBarrel) {
            assert!(entity.transform.position.dist_sq_planar(anchor) >= safe_sq);
        }
    }

    #[test]
    fn tops_up_partial_population() {
        let config = PlazaConfig {
            layout: LayoutConfig::default().with_target_dummies(5),
            ..Default::default()
        };
        let mut world = world_with_player_start();
        world
            .spawn(Entity::new(EntityKind::TargetDummy, "Dummy_A").at(Vec3::new(800.0, 0.0, 0.0)))
            .unwrap();
        world
            .spawn(Entity::new(EntityKind::TargetDummy, "Dummy_B").at(Vec3::new(-800.0, 0.0, 0.0)))
            .unwrap();

        let mut manager = manager_with_classes(config, world);
        let mut resources = ResourceCatalog::new();
        let outcome = manager.apply_configuration(&mut resources).unwrap();

        assert_eq!(outcome.dummies_spawned, 3);
        assert_eq!(
            manager
                .world()
                .unwrap()
                .count_of_kind(&EntityKind::TargetDummy),
            5
        );
    }

    #[test]
    fn at_target_is_a_no_op() {
        let config = PlazaConfig {
            layout: LayoutConfig::default()
                .with_target_dummies(3)
                .with_explosive_barrels(0),
            ..Default::default()
        };
        let mut world = world_with_player_start();
        for name in ["Dummy_A", "Dummy_B", "Dummy_C"] {
            world
                .spawn(Entity::new(EntityKind::TargetDummy, name))
                .unwrap();
        }

        let mut manager = manager_with_classes(config, world);
        let mut resources = ResourceCatalog::new();
        let outcome = manager.apply_configuration(&mut resources).unwrap();

        assert_eq!(outcome.dummies_spawned, 0);
        assert_eq!(outcome.barrels_spawned, 0);
    }

    #[test]
    fn surplus_is_never_reconciled_downward() {
        let config = PlazaConfig {
            layout: LayoutConfig::default().with_target_dummies(2),
            ..Default::default()
        };
        let mut world = world_with_player_start();
        for name in ["Dummy_A", "Dummy_B", "Dummy_C", "Dummy_D"] {
            world
                .spawn(Entity::new(EntityKind::TargetDummy, name))
                .unwrap();
        }

        let mut manager = manager_with_classes(config, world);
        let mut resources = ResourceCatalog::new();
        let outcome = manager.apply_configuration(&mut resources).unwrap();

        assert_eq!(outcome.dummies_spawned, 0);
        assert_eq!(
            manager
                .world()
                .unwrap()
                .count_of_kind(&EntityKind::TargetDummy),
            4
        );
    }

    #[test]
    fn second_apply_spawns_nothing() {
        let mut manager =
            manager_with_classes(PlazaConfig::default(), world_with_player_start());
        let mut resources = ResourceCatalog::new();

        let first = manager.apply_configuration(&mut resources).unwrap();
        assert_eq!(first.dummies_spawned, 3);

        let second = manager.apply_configuration(&mut resources).unwrap();
        assert_eq!(second.dummies_spawned, 0);
        assert_eq!(second.barrels_spawned, 0);
        assert_eq!(
            manager
                .world()
                .unwrap()
                .count_of_kind(&EntityKind::TargetDummy),
            3
        );
    }

    #[test]
    fn unset_spawn_class_skips_category_with_warning() {
        let mut manager = PlazaManager::new(PlazaConfig::default()).with_seed(7);
        manager.set_barrel_class(barrel_class());
        manager.attach_world(world_with_player_start());
        let mut resources = ResourceCatalog::new();

        let outcome = manager.apply_configuration(&mut resources).unwrap();
        assert_eq!(outcome.dummies_spawned, 0);
        assert_eq!(outcome.barrels_spawned, 2);
        assert!(
            manager
                .diagnostics()
                .warnings()
                .iter()
                .any(|w| w.message.contains("spawn class not set"))
        );
    }

    #[test]
    fn asset_overrides_inline_config() {
        let inline = PlazaConfig {
            layout: LayoutConfig::default().with_target_dummies(1),
            ..Default::default()
        };
        let from_asset = PlazaConfig {
            layout: LayoutConfig::default()
                .with_target_dummies(4)
                .with_explosive_barrels(0),
            ..Default::default()
        };
        let asset = ConfigAsset::new("Gauntlet", from_asset);

        let mut manager = manager_with_classes(inline, world_with_player_start());
        manager.set_config_from_asset(&asset);

        let mut resources = ResourceCatalog::new();
        let outcome = manager.apply_configuration(&mut resources).unwrap();
        assert_eq!(outcome.dummies_spawned, 4);
        assert_eq!(outcome.barrels_spawned, 0);
    }

    #[test]
    fn visual_override_swaps_all_live_dummies() {
        let override_mesh = "/Game/Plaza/Meshes/SK_Dummy_Straw";
        let config = PlazaConfig {
            visuals: VisualConfig {
                dummy_mesh: Some(ResourceRef::new(override_mesh)),
                ..Default::default()
            },
            ..Default::default()
        };

        let mut manager = manager_with_classes(config, world_with_player_start());
        let mut resources = ResourceCatalog::new().with_resource(override_mesh);
        let outcome = manager.apply_configuration(&mut resources).unwrap();

        // Three dummies spawned this pass, all three then reskinned.
        assert_eq!(outcome.dummies_spawned, 3);
        assert_eq!(outcome.visuals_applied, 3);

        let world = manager.world().unwrap();
        for entity in world.entities_by_kind(&EntityKind::TargetDummy) {
            let mesh = entity.components.mesh.as_ref().unwrap();
            assert_eq!(mesh.skeletal_mesh.as_deref(), Some(override_mesh));
        }
    }

    #[test]
    fn anim_override_requires_successful_mesh_swap() {
        let mesh_path = "/Game/Plaza/Meshes/SK_Dummy_Straw";
        let anim_path = "/Game/Plaza/Anims/ABP_Dummy_Sway";
        let config = PlazaConfig {
            layout: LayoutConfig::default()
                .with_target_dummies(1)
                .with_explosive_barrels(0),
            visuals: VisualConfig {
                dummy_mesh: Some(ResourceRef::new(mesh_path)),
                dummy_anim_class: Some(ResourceRef::new(anim_path)),
                ..Default::default()
            },
        };

        // Mesh missing from the catalog: neither mesh nor anim applies.
        let mut manager =
            manager_with_classes(config.clone(), world_with_player_start());
        let mut resources = ResourceCatalog::new().with_resource(anim_path);
        let outcome = manager.apply_configuration(&mut resources).unwrap();
        assert_eq!(outcome.visuals_applied, 0);
        assert_eq!(resources.load_count(anim_path), 0);

        // Both available: anim class lands alongside the mesh.
        let mut manager = manager_with_classes(config, world_with_player_start());
        let mut resources = ResourceCatalog::new()
            .with_resource(mesh_path)
            .with_resource(anim_path);
        let outcome = manager.apply_configuration(&mut resources).unwrap();
        assert_eq!(outcome.visuals_applied, 1);

        let world = manager.world().unwrap();
        let dummy = &world.entities_by_kind(&EntityKind::TargetDummy)[0];
        let mesh = dummy.components.mesh.as_ref().unwrap();
        assert_eq!(mesh.anim_class.as_deref(), Some(anim_path));
    }

    #[test]
    fn load_failure_skips_entity_not_phase() {
        let dummy_override = "/Game/Plaza/Meshes/SK_Missing";
        let barrel_override = "/Game/Plaza/Meshes/SM_Barrel_Rusty";
        let config = PlazaConfig {
            visuals: VisualConfig {
                dummy_mesh: Some(ResourceRef::new(dummy_override)),
                barrel_mesh: Some(ResourceRef::new(barrel_override)),
                ..Default::default()
            },
            ..Default::default()
        };

        let mut manager = manager_with_classes(config, world_with_player_start());
        let mut resources = ResourceCatalog::new().with_resource(barrel_override);
        let outcome = manager.apply_configuration(&mut resources).unwrap();

        // Dummy loads fail, barrel swaps still proceed.
        assert_eq!(outcome.visuals_applied, 2);
        assert!(
            manager
                .diagnostics()
                .warnings()
                .iter()
                .any(|w| w.message.contains("failed to load"))
        );
    }

    #[test]
    fn entity_without_mesh_component_is_skipped() {
        let override_mesh = "/Game/Plaza/Meshes/SK_Knight";
        let config = PlazaConfig {
            layout: LayoutConfig::default()
                .with_target_dummies(0)
                .with_explosive_barrels(0),
            visuals: VisualConfig {
                player_mesh: Some(ResourceRef::new(override_mesh)),
                ..Default::default()
            },
        };

        let mut world = world_with_player_start();
        world
            .spawn(Entity::new(EntityKind::Player, "Player_1"))
            .unwrap();

        let mut manager = manager_with_classes(config, world);
        let mut resources = ResourceCatalog::new().with_resource(override_mesh);
        let outcome = manager.apply_configuration(&mut resources).unwrap();

        assert_eq!(outcome.visuals_applied, 0);
        assert!(
            manager
                .diagnostics()
                .warnings()
                .iter()
                .any(|w| w.message.contains("no mesh component"))
        );
    }

    #[test]
    fn reapplying_visuals_is_idempotent() {
        let override_mesh = "/Game/Plaza/Meshes/SM_Barrel_Rusty";
        let config = PlazaConfig {
            layout: LayoutConfig::default()
                .with_target_dummies(0)
                .with_explosive_barrels(1),
            visuals: VisualConfig {
                barrel_mesh: Some(ResourceRef::new(override_mesh)),
                ..Default::default()
            },
        };

        let mut manager = manager_with_classes(config, world_with_player_start());
        let mut resources = ResourceCatalog::new().with_resource(override_mesh);

        let first = manager.apply_configuration(&mut resources).unwrap();
        let second = manager.apply_configuration(&mut resources).unwrap();

        assert_eq!(first.barrels_spawned, 1);
        assert_eq!(second.barrels_spawned, 0);
        // The swap re-runs (one more load), but the world state is unchanged.
        assert_eq!(first.visuals_applied, 1);
        assert_eq!(second.visuals_applied, 1);
        assert_eq!(resources.load_count(override_mesh), 2);

        let world = manager.world().unwrap();
        let barrel = &world.entities_by_kind(&EntityKind::ExplosiveBarrel)[0];
        assert_eq!(
            barrel.components.mesh.as_ref().unwrap().static_mesh.as_deref(),
            Some(override_mesh)
        );
    }

    #[test]
    fn spawn_class_instantiates_unique_names() {
        let class = dummy_class();
        let a = class.instantiate(Vec3::ZERO);
        let b = class.instantiate(Vec3::ZERO);
        assert_ne!(a.name, b.name);
        assert_eq!(a.kind, EntityKind::TargetDummy);
        assert!(a.components.mesh.is_some());
    }
}
