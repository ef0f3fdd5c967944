use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use plaza_config::LayoutConfig;
use plaza_core::Vec3;

/// Generates randomized, deduplicated spawn positions over the plaza floor.
///
/// This is a coverage sampler, not a collision solver: minimum spacing
/// comes from the candidate grid geometry and the only exclusion rule is
/// the safe zone around the reference point. Candidates are never checked
/// against entities already in the world.
#[derive(Debug)]
pub struct SpawnPlanner {
    rng: StdRng,
}

impl SpawnPlanner {
    /// Create a planner with a fixed RNG seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Compute up to `count` spawn positions for the given layout.
    ///
    /// Candidates form a grid across the floor, inset one spacing unit
    /// from each wall, stepped at the minimum actor spacing; anything
    /// inside the safe zone around `reference` is discarded. The
    /// survivors are shuffled and the first `count` returned. When fewer
    /// survive than requested, all of them are returned — positions are
    /// never fabricated and this never fails.
    pub fn compute_positions(
        &mut self,
        layout: &LayoutConfig,
        reference: Vec3,
        count: usize,
    ) -> Vec<Vec3> {
        if count == 0 {
            return Vec::new();
        }

        let mut candidates = candidate_grid(layout, reference);
        candidates.shuffle(&mut self.rng);
        candidates.truncate(count);
        candidates
    }
}

/// All grid candidates outside the safe zone, in grid order.
fn candidate_grid(layout: &LayoutConfig, reference: Vec3) -> Vec<Vec3> {
    let spacing = layout.min_actor_spacing_cm;
    if spacing <= 0.0 {
        return Vec::new();
    }

    let half_width = layout.plaza_width_cm / 2.0;
    let half_height = layout.plaza_height_cm / 2.0;
    let safe_zone_sq = layout.player_safe_zone_cm * layout.player_safe_zone_cm;

    let mut candidates = Vec::new();
    let mut x = -half_width + spacing;
    while x < half_width - spacing {
        let mut y = -half_height + spacing;
        while y < half_height - spacing {
            let pos = Vec3::new(x, y, 0.0);
            // Safe zone is planar: height never matters.
            if pos.dist_sq_planar(reference) >= safe_zone_sq {
                candidates.push(pos);
            }
            y += spacing;
        }
        x += spacing;
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn default_layout() -> LayoutConfig {
        LayoutConfig::default()
    }

    #[test]
    fn grid_count_matches_floor_formula() {
        // 4000 cm floor, 200 cm spacing: floor((4000 - 400) / 200) = 18
        // candidates per axis before safe-zone filtering.
        let layout = default_layout();
        let far_away = Vec3::new(1.0e9, 1.0e9, 0.0);
        let candidates = candidate_grid(&layout, far_away);
        assert_eq!(candidates.len(), 18 * 18);
    }

    #[test]
    fn all_positions_outside_safe_zone() {
        let layout = default_layout();
        let reference = Vec3::ZERO;
        let mut planner = SpawnPlanner::new(7);
        let positions = planner.compute_positions(&layout, reference, 300);

        let safe_sq = layout.player_safe_zone_cm * layout.player_safe_zone_cm;
        assert!(!positions.is_empty());
        for pos in &positions {
            assert!(pos.dist_sq_planar(reference) >= safe_sq);
        }
    }

    #[test]
    fn positions_respect_inset_bounds() {
        let layout = default_layout();
        let mut planner = SpawnPlanner::new(7);
        let positions = planner.compute_positions(&layout, Vec3::ZERO, 300);

        let half_w = layout.plaza_width_cm / 2.0;
        let half_h = layout.plaza_height_cm / 2.0;
        let spacing = layout.min_actor_spacing_cm;
        for pos in &positions {
            assert!(pos.x >= -half_w + spacing && pos.x < half_w - spacing);
            assert!(pos.y >= -half_h + spacing && pos.y < half_h - spacing);
            assert_eq!(pos.z, 0.0);
        }
    }

    #[test]
    fn request_capped_at_survivors() {
        let layout = default_layout();
        let mut planner = SpawnPlanner::new(7);
        let all = planner.compute_positions(&layout, Vec3::ZERO, usize::MAX);
        let survivors = all.len();
        assert!(survivors > 0);

        // Asking for more than exists returns exactly the survivors.
        let again = planner.compute_positions(&layout, Vec3::ZERO, survivors + 50);
        assert_eq!(again.len(), survivors);
    }

    #[test]
    fn zero_count_returns_nothing() {
        let mut planner = SpawnPlanner::new(7);
        assert!(
            planner
                .compute_positions(&default_layout(), Vec3::ZERO, 0)
                .is_empty()
        );
    }

    #[test]
    fn positions_are_deduplicated_grid_points() {
        let layout = default_layout();
        let mut planner = SpawnPlanner::new(7);
        let positions = planner.compute_positions(&layout, Vec3::ZERO, 300);

        let mut seen = std::collections::HashSet::new();
        for pos in &positions {
            let key = (pos.x.to_bits(), pos.y.to_bits());
            assert!(seen.insert(key), "duplicate position returned");
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let layout = default_layout();
        let a = SpawnPlanner::new(99).compute_positions(&layout, Vec3::ZERO, 10);
        let b = SpawnPlanner::new(99).compute_positions(&layout, Vec3::ZERO, 10);
        assert_eq!(a, b);

        let c = SpawnPlanner::new(100).compute_positions(&layout, Vec3::ZERO, 10);
        assert_ne!(a, c);
    }

    #[test]
    fn reference_offset_shifts_exclusion() {
        let layout = default_layout();
        let reference = Vec3::new(1000.0, 1000.0, 0.0);
        let mut planner = SpawnPlanner::new(7);
        let positions = planner.compute_positions(&layout, reference, 300);

        let safe_sq = layout.player_safe_zone_cm * layout.player_safe_zone_cm;
        for pos in &positions {
            assert!(pos.dist_sq_planar(reference) >= safe_sq);
        }
        // The origin itself is no longer excluded.
        assert!(positions.iter().any(|p| p.dist_sq_planar(Vec3::ZERO) < safe_sq));
    }

    proptest! {
        #[test]
        fn placement_validity_over_arbitrary_layouts(
            width in 1000.0f32..20000.0,
            height in 1000.0f32..20000.0,
            spacing in 100.0f32..1000.0,
            safe_zone in 0.0f32..2000.0,
            ref_x in -2000.0f32..2000.0,
            ref_y in -2000.0f32..2000.0,
            seed in 0u64..1000,
            count in 1usize..40,
        ) {
            let layout = LayoutConfig::default()
                .with_width_cm(width)
                .with_height_cm(height)
                .with_actor_spacing_cm(spacing)
                .with_safe_zone_cm(safe_zone);
            let reference = Vec3::new(ref_x, ref_y, 0.0);

            let mut planner = SpawnPlanner::new(seed);
            let positions = planner.compute_positions(&layout, reference, count);

            prop_assert!(positions.len() <= count);
            let safe_sq = layout.player_safe_zone_cm * layout.player_safe_zone_cm;
            let half_w = layout.plaza_width_cm / 2.0;
            let half_h = layout.plaza_height_cm / 2.0;
            for pos in &positions {
                prop_assert!(pos.dist_sq_planar(reference) >= safe_sq);
                prop_assert!(pos.x >= -half_w + layout.min_actor_spacing_cm);
                prop_assert!(pos.x < half_w - layout.min_actor_spacing_cm);
                prop_assert!(pos.y >= -half_h + layout.min_actor_spacing_cm);
                prop_assert!(pos.y < half_h - layout.min_actor_spacing_cm);
            }
        }
    }
}
