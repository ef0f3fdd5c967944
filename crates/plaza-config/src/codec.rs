use std::fs;
use std::path::Path;

use serde_json::{Map, Value, json};

use crate::config::PlazaConfig;
use crate::error::{ConfigError, ConfigResult};
use crate::layout::LayoutConfig;

/// Symbolic visual identifiers carried by a preset document.
///
/// These are theme/skin *names*, not resource paths. Mapping them onto
/// actual resources is the job of an injectable resolver downstream; at
/// this layer they are informational.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetVisuals {
    /// Symbolic skin name for the player character.
    pub player_skin: Option<String>,
    /// Symbolic skin name for target dummies.
    pub dummy_skin: Option<String>,
    /// Symbolic skin name for explosive barrels.
    pub barrel_skin: Option<String>,
    /// Overall visual theme name.
    pub theme: Option<String>,
}

impl PresetVisuals {
    /// True if no symbolic identifier was present at all.
    pub fn is_empty(&self) -> bool {
        self.player_skin.is_none()
            && self.dummy_skin.is_none()
            && self.barrel_skin.is_none()
            && self.theme.is_none()
    }
}

/// A decoded preset: the configuration plus everything else the document
/// carried, including warnings for sections that fell back to defaults.
#[derive(Debug, Clone)]
pub struct PresetDocument {
    /// Preset name, if the document declared one.
    pub name: Option<String>,
    /// The decoded configuration. Sections the document omitted or
    /// mangled sit at their constructed defaults.
    pub config: PlazaConfig,
    /// Symbolic visual identifiers from the `visuals` section.
    pub visuals: PresetVisuals,
    /// Soft-failure notes accumulated during decode.
    pub warnings: Vec<String>,
}

/// Decode a preset from its JSON text.
///
/// Fails only when the top level is unparsable or not an object. A missing
/// or malformed `layout`/`visuals` section leaves that sub-config at its
/// defaults and records a warning on the returned document.
pub fn decode_preset(text: &str) -> ConfigResult<PresetDocument> {
    let value: Value = serde_json::from_str(text)?;
    let root = value.as_object().ok_or(ConfigError::NotAnObject)?;

    let mut warnings = Vec::new();
    let name = root.get("name").and_then(Value::as_str).map(str::to_string);

    let mut config = PlazaConfig::default();
    match root.get("layout") {
        Some(Value::Object(section)) => config.layout = decode_layout(section),
        Some(_) => warnings.push("'layout' section malformed, using defaults".to_string()),
        None => warnings.push("no 'layout' section in preset, using defaults".to_string()),
    }

    let visuals = match root.get("visuals") {
        Some(Value::Object(section)) => decode_visuals(section),
        Some(_) => {
            warnings.push("'visuals' section malformed, no overrides applied".to_string());
            PresetVisuals::default()
        }
        None => PresetVisuals::default(),
    };

    Ok(PresetDocument {
        name,
        config,
        visuals,
        warnings,
    })
}

/// Read and decode a preset file.
pub fn load_preset_file(path: &Path) -> ConfigResult<PresetDocument> {
    let text = fs::read_to_string(path)?;
    decode_preset(&text)
}

/// Encode a configuration as a pretty-printed preset document.
///
/// Layout lengths are written in meters. The visuals section is written
/// with placeholder identifiers until skin names are tracked on the
/// configuration itself, so the round trip is exact for layout only.
pub fn encode_preset(
    config: &PlazaConfig,
    name: &str,
    description: &str,
) -> ConfigResult<String> {
    let doc = json!({
        "name": name,
        "description": description,
        "version": "1.0",
        "layout": {
            "width_m": config.layout.width_meters(),
            "height_m": config.layout.height_meters(),
            "wall_height_m": config.layout.wall_height_meters(),
            "num_target_dummies": config.layout.num_target_dummies,
            "num_explosive_barrels": config.layout.num_explosive_barrels,
            "min_actor_spacing_m": config.layout.min_actor_spacing_cm / 100.0,
            "player_safe_zone_m": config.layout.player_safe_zone_cm / 100.0,
        },
        "visuals": {
            "player_skin": "Default",
            "dummy_skin": "Default",
            "barrel_skin": "Default",
            "theme": "daylight",
        },
    });
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Encode a configuration and write it to disk.
pub fn save_preset_file(
    path: &Path,
    config: &PlazaConfig,
    name: &str,
    description: &str,
) -> ConfigResult<()> {
    let text = encode_preset(config, name, description)?;
    fs::write(path, text)?;
    Ok(())
}

fn decode_layout(section: &Map<String, Value>) -> LayoutConfig {
    let mut layout = LayoutConfig::default();

    // Lengths arrive in meters; internal representation is centimeters.
    if let Some(m) = section.get("width_m").and_then(Value::as_f64) {
        layout = layout.with_width_cm((m * 100.0) as f32);
    }
    if let Some(m) = section.get("height_m").and_then(Value::as_f64) {
        layout = layout.with_height_cm((m * 100.0) as f32);
    }
    if let Some(m) = section.get("wall_height_m").and_then(Value::as_f64) {
        layout = layout.with_wall_height_cm((m * 100.0) as f32);
    }
    if let Some(n) = section.get("num_target_dummies").and_then(Value::as_u64) {
        layout = layout.with_target_dummies(clamp_count(n));
    }
    if let Some(n) = section.get("num_explosive_barrels").and_then(Value::as_u64) {
        layout = layout.with_explosive_barrels(clamp_count(n));
    }
    if let Some(m) = section.get("min_actor_spacing_m").and_then(Value::as_f64) {
        layout = layout.with_actor_spacing_cm((m * 100.0) as f32);
    }
    if let Some(m) = section.get("player_safe_zone_m").and_then(Value::as_f64) {
        layout = layout.with_safe_zone_cm((m * 100.0) as f32);
    }

    layout
}

fn clamp_count(n: u64) -> u32 {
    u32::try_from(n).unwrap_or(LayoutConfig::MAX_TRACKED_ACTORS)
}

fn decode_visuals(section: &Map<String, Value>) -> PresetVisuals {
    let string_field = |key: &str| {
        section
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    };
    PresetVisuals {
        player_skin: string_field("player_skin"),
        dummy_skin: string_field("dummy_skin"),
        barrel_skin: string_field("barrel_skin"),
        theme: string_field("theme"),
    }
}
