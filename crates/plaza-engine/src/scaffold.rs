use plaza_config::LayoutConfig;
use plaza_core::component::{ComponentSet, LightComponent, MeshComponent};
use plaza_core::world::WorldMeta;
use plaza_core::{CoreResult, Entity, EntityKind, Vec3, World};

use crate::manager::SpawnClass;

/// Asset path of the stock floor mesh (100x100 cm tile, scaled up).
pub const FLOOR_MESH: &str = "/Game/Plaza/Meshes/SM_Floor";
/// Asset path of the stock wall mesh (100x100x100 cm block, scaled up).
pub const WALL_MESH: &str = "/Game/Plaza/Meshes/SM_Wall";
/// Asset path of the stock target dummy mesh.
pub const DUMMY_MESH: &str = "/Game/Plaza/Meshes/SK_Dummy";
/// Asset path of the stock target dummy skeleton.
pub const DUMMY_SKELETON: &str = "/Game/Plaza/Skeletons/SK_Dummy_Skeleton";
/// Asset path of the stock explosive barrel mesh.
pub const BARREL_MESH: &str = "/Game/Plaza/Meshes/SM_Barrel";
/// Asset path of the stock player mesh.
pub const PLAYER_MESH: &str = "/Game/Plaza/Meshes/SK_Player";
/// Asset path of the stock player skeleton.
pub const PLAYER_SKELETON: &str = "/Game/Plaza/Skeletons/SK_Player_Skeleton";

/// Build the arena shell a configured plaza lives in: floor, four walls,
/// a skylight, the player start at the origin, and the player pawn.
///
/// The result is an ordinary authored world; reconciliation and
/// introspection treat it no differently from one built by hand. Base
/// meshes are 100 cm units, so scale factors are dimensions over 100 —
/// comfortably past the introspector's large-static-mesh threshold.
pub fn build_arena(layout: &LayoutConfig, name: &str) -> CoreResult<World> {
    let mut world = World::new(WorldMeta::new(name));

    let width = layout.plaza_width_cm;
    let height = layout.plaza_height_cm;
    let wall_height = layout.wall_height_cm;
    let half_w = width / 2.0;
    let half_h = height / 2.0;

    let mut floor = Entity::new(EntityKind::StaticMesh, "Floor")
        .scaled(Vec3::new(width / 100.0, height / 100.0, 1.0));
    floor.components.mesh = Some(MeshComponent::static_mesh(FLOOR_MESH));
    world.spawn(floor)?;

    let walls = [
        ("Wall_North", Vec3::new(0.0, half_h, wall_height / 2.0), Vec3::new(width / 100.0, 1.0, wall_height / 100.0)),
        ("Wall_South", Vec3::new(0.0, -half_h, wall_height / 2.0), Vec3::new(width / 100.0, 1.0, wall_height / 100.0)),
        ("Wall_East", Vec3::new(half_w, 0.0, wall_height / 2.0), Vec3::new(1.0, height / 100.0, wall_height / 100.0)),
        ("Wall_West", Vec3::new(-half_w, 0.0, wall_height / 2.0), Vec3::new(1.0, height / 100.0, wall_height / 100.0)),
    ];
    for (name, position, scale) in walls {
        let mut wall = Entity::new(EntityKind::StaticMesh, name)
            .at(position)
            .scaled(scale);
        wall.components.mesh = Some(MeshComponent::static_mesh(WALL_MESH));
        world.spawn(wall)?;
    }

    let mut skylight = Entity::new(EntityKind::Light, "Skylight")
        .at(Vec3::new(0.0, 0.0, wall_height * 2.0));
    skylight.components.light = Some(LightComponent { intensity: 3.0 });
    world.spawn(skylight)?;

    world.spawn(Entity::new(EntityKind::PlayerStart, "PlayerStart_Main"))?;

    let mut player = Entity::new(EntityKind::Player, "Player_1");
    player.components.mesh = Some(MeshComponent::skeletal(PLAYER_MESH, PLAYER_SKELETON));
    world.spawn(player)?;

    Ok(world)
}

/// The stock spawn template for target dummies.
pub fn default_dummy_class() -> SpawnClass {
    SpawnClass::new(EntityKind::TargetDummy, "TargetDummy").with_components(ComponentSet {
        mesh: Some(MeshComponent::skeletal(DUMMY_MESH, DUMMY_SKELETON)),
        light: None,
    })
}

/// The stock spawn template for explosive barrels.
pub fn default_barrel_class() -> SpawnClass {
    SpawnClass::new(EntityKind::ExplosiveBarrel, "Barrel").with_components(ComponentSet {
        mesh: Some(MeshComponent::static_mesh(BARREL_MESH)),
        light: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::introspect::{ClassTag, PlazaIntrospector, classify};

    #[test]
    fn arena_contains_shell_entities() {
        let world = build_arena(&LayoutConfig::default(), "Shell Test").unwrap();
        assert_eq!(world.count_of_kind(&EntityKind::StaticMesh), 5);
        assert_eq!(world.count_of_kind(&EntityKind::PlayerStart), 1);
        assert_eq!(world.count_of_kind(&EntityKind::Player), 1);
        assert_eq!(world.count_of_kind(&EntityKind::Light), 1);
        assert!(world.find_by_name("Floor").is_some());
        assert!(world.find_by_name("Wall_North").is_some());
    }

    #[test]
    fn floor_and_walls_classify_as_structure() {
        let world = build_arena(&LayoutConfig::default(), "Shell Test").unwrap();
        let floor = world.find_by_name("Floor").unwrap();
        assert!(classify(floor).contains(&ClassTag::Structure));
        let wall = world.find_by_name("Wall_East").unwrap();
        assert!(classify(wall).contains(&ClassTag::Structure));
    }

    #[test]
    fn observed_extents_match_layout() {
        let layout = LayoutConfig::default()
            .with_width_cm(5000.0)
            .with_height_cm(3000.0);
        let world = build_arena(&layout, "Extent Test").unwrap();

        let (summary, _) = PlazaIntrospector::new().perform_introspection(&world);
        // Walls sit on the floor edges, so positional extents match the
        // configured dimensions exactly.
        assert_eq!(summary.plaza_width_cm, layout.plaza_width_cm);
        assert_eq!(summary.plaza_height_cm, layout.plaza_height_cm);
    }

    #[test]
    fn default_classes_spawn_their_kinds() {
        let dummy = default_dummy_class().instantiate(Vec3::ZERO);
        assert_eq!(dummy.kind, EntityKind::TargetDummy);
        assert!(
            dummy
                .components
                .mesh
                .as_ref()
                .is_some_and(|m| m.skeletal_mesh.is_some())
        );

        let barrel = default_barrel_class().instantiate(Vec3::ZERO);
        assert_eq!(barrel.kind, EntityKind::ExplosiveBarrel);
        assert!(
            barrel
                .components
                .mesh
                .as_ref()
                .is_some_and(|m| m.static_mesh.is_some())
        );
    }
}
