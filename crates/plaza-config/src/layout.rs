/// Layout parameters for the plaza: floor extents, wall height, tracked
/// actor counts, and spawn spacing rules.
///
/// Lengths are stored in centimeters; the preset file format speaks meters
/// and the codec converts on the way in and out. The meter getters are pure
/// functions of the centimeter fields, so the two units can never drift.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Width of the plaza floor in centimeters (X axis).
    pub plaza_width_cm: f32,
    /// Height/depth of the plaza floor in centimeters (Y axis).
    pub plaza_height_cm: f32,
    /// Height of the surrounding walls in centimeters.
    pub wall_height_cm: f32,
    /// Number of target dummies to ensure.
    pub num_target_dummies: u32,
    /// Number of explosive barrels to ensure.
    pub num_explosive_barrels: u32,
    /// Minimum distance between spawned actors in centimeters.
    pub min_actor_spacing_cm: f32,
    /// Radius around the player start where no actors spawn (centimeters).
    pub player_safe_zone_cm: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            plaza_width_cm: 4000.0,
            plaza_height_cm: 4000.0,
            wall_height_cm: 300.0,
            num_target_dummies: 3,
            num_explosive_barrels: 2,
            min_actor_spacing_cm: 200.0,
            player_safe_zone_cm: 500.0,
        }
    }
}

impl LayoutConfig {
    /// Smallest allowed floor extent, per axis.
    pub const MIN_PLAZA_DIM_CM: f32 = 1000.0;
    /// Largest allowed floor extent, per axis.
    pub const MAX_PLAZA_DIM_CM: f32 = 50000.0;
    /// Smallest allowed wall height.
    pub const MIN_WALL_HEIGHT_CM: f32 = 100.0;
    /// Largest allowed wall height.
    pub const MAX_WALL_HEIGHT_CM: f32 = 1000.0;
    /// Largest count of tracked actors per category.
    pub const MAX_TRACKED_ACTORS: u32 = 20;
    /// Smallest allowed actor spacing.
    pub const MIN_SPACING_CM: f32 = 100.0;
    /// Largest allowed actor spacing.
    pub const MAX_SPACING_CM: f32 = 1000.0;
    /// Largest allowed safe zone radius.
    pub const MAX_SAFE_ZONE_CM: f32 = 2000.0;

    /// Set the floor width, clamped to the designer range.
    pub fn with_width_cm(mut self, cm: f32) -> Self {
        self.plaza_width_cm = cm.clamp(Self::MIN_PLAZA_DIM_CM, Self::MAX_PLAZA_DIM_CM);
        self
    }

    /// Set the floor height, clamped to the designer range.
    pub fn with_height_cm(mut self, cm: f32) -> Self {
        self.plaza_height_cm = cm.clamp(Self::MIN_PLAZA_DIM_CM, Self::MAX_PLAZA_DIM_CM);
        self
    }

    /// Set the wall height, clamped to the designer range.
    pub fn with_wall_height_cm(mut self, cm: f32) -> Self {
        self.wall_height_cm = cm.clamp(Self::MIN_WALL_HEIGHT_CM, Self::MAX_WALL_HEIGHT_CM);
        self
    }

    /// Set the target dummy count, capped at the tracked-actor limit.
    pub fn with_target_dummies(mut self, count: u32) -> Self {
        self.num_target_dummies = count.min(Self::MAX_TRACKED_ACTORS);
        self
    }

    /// Set the explosive barrel count, capped at the tracked-actor limit.
    pub fn with_explosive_barrels(mut self, count: u32) -> Self {
        self.num_explosive_barrels = count.min(Self::MAX_TRACKED_ACTORS);
        self
    }

    /// Set the minimum actor spacing, clamped to the designer range.
    pub fn with_actor_spacing_cm(mut self, cm: f32) -> Self {
        self.min_actor_spacing_cm = cm.clamp(Self::MIN_SPACING_CM, Self::MAX_SPACING_CM);
        self
    }

    /// Set the player safe zone radius, clamped to the designer range.
    pub fn with_safe_zone_cm(mut self, cm: f32) -> Self {
        self.player_safe_zone_cm = cm.clamp(0.0, Self::MAX_SAFE_ZONE_CM);
        self
    }

    /// Plaza width in meters.
    pub fn width_meters(&self) -> f32 {
        self.plaza_width_cm / 100.0
    }

    /// Plaza height in meters.
    pub fn height_meters(&self) -> f32 {
        self.plaza_height_cm / 100.0
    }

    /// Wall height in meters.
    pub fn wall_height_meters(&self) -> f32 {
        self.wall_height_cm / 100.0
    }
}
