use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityId, EntityKind};
use crate::error::{CoreError, CoreResult};

/// Metadata about the world itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldMeta {
    /// Display name of the world.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Timestamp when the world was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp when the world was last modified.
    pub updated_at: DateTime<Utc>,
}

impl WorldMeta {
    /// Create metadata with the given name and empty description.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// The central world container. Owns all entities.
#[derive(Debug, Clone)]
pub struct World {
    /// Metadata describing this world.
    pub meta: WorldMeta,
    entities: HashMap<EntityId, Entity>,

    // Indexes
    by_kind: HashMap<EntityKind, Vec<EntityId>>,
    by_name_lower: HashMap<String, EntityId>,
}

impl World {
    /// Create an empty world with the given metadata.
    pub fn new(meta: WorldMeta) -> Self {
        Self {
            meta,
            entities: HashMap::new(),
            by_kind: HashMap::new(),
            by_name_lower: HashMap::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Entity CRUD
    // -----------------------------------------------------------------------

    /// Spawn an entity into the world. Returns the entity's ID.
    pub fn spawn(&mut self, entity: Entity) -> CoreResult<EntityId> {
        let name_lower = entity.name.to_lowercase();
        if self.by_name_lower.contains_key(&name_lower) {
            return Err(CoreError::DuplicateName(entity.name.clone()));
        }

        let id = entity.id;
        self.by_kind
            .entry(entity.kind.clone())
            .or_default()
            .push(id);
        self.by_name_lower.insert(name_lower, id);
        self.entities.insert(id, entity);
        Ok(id)
    }

    /// Get a reference to an entity by ID.
    pub fn get_entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Get a mutable reference to an entity by ID.
    pub fn get_entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// Find an entity by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Entity> {
        self.by_name_lower
            .get(&name.to_lowercase())
            .and_then(|id| self.entities.get(id))
    }

    /// Remove an entity from the world.
    pub fn remove_entity(&mut self, id: EntityId) -> CoreResult<Entity> {
        let entity = self
            .entities
            .remove(&id)
            .ok_or(CoreError::EntityNotFound(id))?;

        let name_lower = entity.name.to_lowercase();
        self.by_name_lower.remove(&name_lower);
        if let Some(ids) = self.by_kind.get_mut(&entity.kind) {
            ids.retain(|eid| *eid != id);
        }

        Ok(entity)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Get all entities of a specific kind.
    pub fn entities_by_kind(&self, kind: &EntityKind) -> Vec<&Entity> {
        self.by_kind
            .get(kind)
            .map(|ids| ids.iter().filter_map(|id| self.entities.get(id)).collect())
            .unwrap_or_default()
    }

    /// Get all entities.
    pub fn all_entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// The display name of an entity, or a placeholder if it is unknown.
    pub fn entity_name(&self, id: EntityId) -> &str {
        self.entities
            .get(&id)
            .map(|e| e.name.as_str())
            .unwrap_or("<unknown>")
    }

    // -----------------------------------------------------------------------
    // Statistics
    // -----------------------------------------------------------------------

    /// Total number of entities in the world.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Number of live entities of a specific kind.
    pub fn count_of_kind(&self, kind: &EntityKind) -> usize {
        self.by_kind.get(kind).map(|ids| ids.len()).unwrap_or(0)
    }

    /// Count entities by kind.
    pub fn entity_counts_by_kind(&self) -> HashMap<EntityKind, usize> {
        self.by_kind
            .iter()
            .map(|(k, ids)| (k.clone(), ids.len()))
            .collect()
    }
}
