use serde::{Deserialize, Serialize};

/// A three-component vector in world space. Units are centimeters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component (up).
    pub z: f32,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a vector from its components.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Component-wise minimum of two vectors.
    pub fn component_min(self, other: Self) -> Self {
        Self {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
            z: self.z.min(other.z),
        }
    }

    /// Component-wise maximum of two vectors.
    pub fn component_max(self, other: Self) -> Self {
        Self {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
            z: self.z.max(other.z),
        }
    }

    /// Squared distance on the X/Y plane, ignoring height.
    pub fn dist_sq_planar(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Orientation as yaw/pitch/roll in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    /// Rotation around the up axis, in degrees.
    pub yaw: f32,
    /// Rotation around the right axis, in degrees.
    pub pitch: f32,
    /// Rotation around the forward axis, in degrees.
    pub roll: f32,
}

/// World-space transform of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Position in centimeters.
    pub position: Vec3,
    /// Orientation.
    pub rotation: Rotation,
    /// Per-axis scale factors.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Rotation::default(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

/// The set of typed components attached to an entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentSet {
    /// Renderable mesh data, if the entity has any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh: Option<MeshComponent>,
    /// Light emission data, if the entity is a light source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<LightComponent>,
}

/// Renderable mesh slots. An entity carries either a static mesh, a
/// skeletal mesh, or both (rare, but nothing forbids it).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeshComponent {
    /// Asset path of the static mesh, if set.
    pub static_mesh: Option<String>,
    /// Asset path of the skeletal mesh, if set.
    pub skeletal_mesh: Option<String>,
    /// Asset path of the skeleton backing the skeletal mesh.
    pub skeleton: Option<String>,
    /// Asset path of the animation class driving the skeletal mesh.
    pub anim_class: Option<String>,
}

impl MeshComponent {
    /// Create a component with only a static mesh slot filled.
    pub fn static_mesh(path: impl Into<String>) -> Self {
        Self {
            static_mesh: Some(path.into()),
            ..Default::default()
        }
    }

    /// Create a component with a skeletal mesh and its skeleton.
    pub fn skeletal(mesh: impl Into<String>, skeleton: impl Into<String>) -> Self {
        Self {
            skeletal_mesh: Some(mesh.into()),
            skeleton: Some(skeleton.into()),
            ..Default::default()
        }
    }
}

/// Light emission attached to an entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightComponent {
    /// Emission intensity in arbitrary engine units.
    pub intensity: f32,
}

impl Default for LightComponent {
    fn default() -> Self {
        Self { intensity: 1.0 }
    }
}
