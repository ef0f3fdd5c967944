use std::fmt;

/// A reference to a lazily-loadable visual resource.
///
/// Holding a reference says nothing about whether the resource can actually
/// be loaded; "has override" is defined purely by reference presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef(String);

impl ResourceRef {
    /// Create a reference from an asset path.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The asset path this reference points at.
    pub fn path(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visual parameters for asset swapping: which meshes and materials to use
/// for the key actors. Every slot is optional; an unset slot means "keep
/// whatever the entity already has".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisualConfig {
    /// Override skeletal mesh for the player character.
    pub player_mesh: Option<ResourceRef>,
    /// Override animation class for the player.
    pub player_anim_class: Option<ResourceRef>,
    /// Override skeletal mesh for target dummies.
    pub dummy_mesh: Option<ResourceRef>,
    /// Override animation class for dummies.
    pub dummy_anim_class: Option<ResourceRef>,
    /// Override static mesh for explosive barrels.
    pub barrel_mesh: Option<ResourceRef>,
    /// Override material for the floor.
    pub floor_material: Option<ResourceRef>,
    /// Override material for the walls.
    pub wall_material: Option<ResourceRef>,
}

impl VisualConfig {
    /// True if a player mesh override is set.
    pub fn has_player_override(&self) -> bool {
        self.player_mesh.is_some()
    }

    /// True if a dummy mesh override is set.
    pub fn has_dummy_override(&self) -> bool {
        self.dummy_mesh.is_some()
    }

    /// True if a barrel mesh override is set.
    pub fn has_barrel_override(&self) -> bool {
        self.barrel_mesh.is_some()
    }
}
