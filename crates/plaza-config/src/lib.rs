//! Layered plaza configuration for the arena layout engine.
//!
//! Three concerns live here, kept free of any world or engine state:
//! the configuration data model ([`LayoutConfig`], [`VisualConfig`],
//! [`PlazaConfig`], [`ConfigAsset`]), the preset codec that moves a
//! configuration to and from its on-disk JSON form, and the source
//! resolver that decides *where* a preset comes from.

/// Named, persisted configuration assets.
pub mod asset;
/// Preset codec: JSON decode/encode with soft degradation.
pub mod codec;
/// The combined configuration record.
pub mod config;
/// Error types for the configuration crate.
pub mod error;
/// Layout parameters: dimensions, counts, spacing.
pub mod layout;
/// Preset source resolution: argument, environment, default discovery.
pub mod source;
/// Visual parameters: optional resource overrides.
pub mod visual;

/// Re-export of [`asset::ConfigAsset`].
pub use asset::ConfigAsset;
/// Re-exports of the codec entry points and document types.
pub use codec::{
    PresetDocument, PresetVisuals, decode_preset, encode_preset, load_preset_file,
    save_preset_file,
};
/// Re-export of [`config::PlazaConfig`].
pub use config::PlazaConfig;
/// Re-exports of [`error::ConfigError`] and [`error::ConfigResult`].
pub use error::{ConfigError, ConfigResult};
/// Re-export of [`layout::LayoutConfig`].
pub use layout::LayoutConfig;
/// Re-exports of the source resolution types.
pub use source::{PresetOrigin, PresetSource, ResolvedPreset};
/// Re-exports of [`visual::ResourceRef`] and [`visual::VisualConfig`].
pub use visual::{ResourceRef, VisualConfig};
