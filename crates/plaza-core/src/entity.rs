use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::component::{ComponentSet, Transform, Vec3};

/// Unique identifier for every entity in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Generate a new random entity ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// The kind of an entity. Extensible via `Custom(String)` for types the
/// layout engine does not track.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// The player-controlled pawn.
    Player,
    /// The designated spawn anchor for the player.
    PlayerStart,
    /// A practice target the player can attack.
    TargetDummy,
    /// A hazard that detonates when damaged.
    ExplosiveBarrel,
    /// A piece of static geometry (floor, wall, prop).
    StaticMesh,
    /// A light source.
    Light,
    /// A user-defined entity type not tracked by the engine.
    Custom(String),
}

impl EntityKind {
    /// Try to parse a kind from a string.
    pub fn parse(s: &str) -> Self {
        match s {
            "player" => Self::Player,
            "player_start" => Self::PlayerStart,
            "target_dummy" => Self::TargetDummy,
            "explosive_barrel" => Self::ExplosiveBarrel,
            "static_mesh" => Self::StaticMesh,
            "light" => Self::Light,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => write!(f, "player"),
            Self::PlayerStart => write!(f, "player_start"),
            Self::TargetDummy => write!(f, "target_dummy"),
            Self::ExplosiveBarrel => write!(f, "explosive_barrel"),
            Self::StaticMesh => write!(f, "static_mesh"),
            Self::Light => write!(f, "light"),
            Self::Custom(s) => write!(f, "{s}"),
        }
    }
}

/// Core entity struct. Every world object is an Entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier for this entity.
    pub id: EntityId,
    /// The kind (type) of this entity.
    pub kind: EntityKind,
    /// Display name of the entity. Unique within a world.
    pub name: String,
    /// World-space transform of the entity.
    pub transform: Transform,
    /// Typed component data attached to this entity.
    pub components: ComponentSet,
}

impl Entity {
    /// Create a new entity with a random ID at the origin.
    pub fn new(kind: EntityKind, name: impl Into<String>) -> Self {
        Self::with_id(EntityId::new(), kind, name)
    }

    /// Create an entity with a pre-assigned ID.
    pub fn with_id(id: EntityId, kind: EntityKind, name: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            transform: Transform::default(),
            components: ComponentSet::default(),
        }
    }

    /// Move the entity to the given position, keeping rotation and scale.
    pub fn at(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    /// Set the entity's scale.
    pub fn scaled(mut self, scale: Vec3) -> Self {
        self.transform.scale = scale;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_display_shows_short_form() {
        let id = EntityId(Uuid::parse_str("a3f2b1c8-1234-5678-9abc-def012345678").unwrap());
        assert_eq!(id.to_string(), "a3f2b1c8");
    }

    #[test]
    fn entity_kind_parse_known_kinds() {
        assert_eq!(EntityKind::parse("target_dummy"), EntityKind::TargetDummy);
        assert_eq!(
            EntityKind::parse("explosive_barrel"),
            EntityKind::ExplosiveBarrel
        );
        assert_eq!(EntityKind::parse("player_start"), EntityKind::PlayerStart);
    }

    #[test]
    fn entity_kind_parse_custom() {
        assert_eq!(
            EntityKind::parse("turret"),
            EntityKind::Custom("turret".to_string())
        );
    }

    #[test]
    fn entity_kind_display_round_trips() {
        for kind in [
            EntityKind::Player,
            EntityKind::PlayerStart,
            EntityKind::TargetDummy,
            EntityKind::ExplosiveBarrel,
            EntityKind::StaticMesh,
            EntityKind::Light,
        ] {
            assert_eq!(EntityKind::parse(&kind.to_string()), kind);
        }
    }

    #[test]
    fn new_entity_starts_at_origin() {
        let entity = Entity::new(EntityKind::TargetDummy, "Dummy_1");
        assert_eq!(entity.transform.position, Vec3::ZERO);
        assert_eq!(entity.kind, EntityKind::TargetDummy);
    }

    #[test]
    fn at_moves_entity() {
        let entity = Entity::new(EntityKind::ExplosiveBarrel, "Barrel_1")
            .at(Vec3::new(100.0, -200.0, 0.0));
        assert_eq!(entity.transform.position.x, 100.0);
        assert_eq!(entity.transform.position.y, -200.0);
    }

    #[test]
    fn with_id_preserves_given_id() {
        let id = EntityId(Uuid::parse_str("a3f2b1c8-1234-5678-9abc-def012345678").unwrap());
        let entity = Entity::with_id(id, EntityKind::Player, "Hero");
        assert_eq!(entity.id, id);
        assert_eq!(entity.name, "Hero");
    }

    #[test]
    fn entity_serializes_to_json() {
        let entity = Entity::new(EntityKind::Light, "Sun");
        let json = serde_json::to_string(&entity).unwrap();
        assert!(json.contains("\"light\""));
        let back: Entity = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, entity.id);
        assert_eq!(back.kind, EntityKind::Light);
    }
}
