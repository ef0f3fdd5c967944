use crate::layout::LayoutConfig;
use crate::visual::VisualConfig;

/// Complete plaza configuration: layout plus visuals.
///
/// A plain value type. Copies share nothing; the reconciliation manager
/// owns its active copy and content assets own theirs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlazaConfig {
    /// Layout configuration (dimensions, counts, spacing).
    pub layout: LayoutConfig,
    /// Visual configuration (asset swapping).
    pub visuals: VisualConfig,
}
