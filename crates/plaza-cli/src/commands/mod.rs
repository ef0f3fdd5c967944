pub mod apply;
pub mod inspect;
pub mod presets;
pub mod save;
pub mod show;

use std::path::Path;

use colored::Colorize;

use plaza_config::{
    PlazaConfig, PresetDocument, PresetOrigin, PresetSource, PresetVisuals, ResourceRef,
    load_preset_file,
};
use plaza_engine::manager::{ApplyOutcome, PlazaManager};
use plaza_engine::resources::{ResourceCatalog, SkinSlot, SkinTable};
use plaza_engine::scaffold::{self, default_barrel_class, default_dummy_class};
use plaza_engine::{DiagLevel, Diagnostics, apply_skins, build_arena};

/// Resolve and decode the active preset.
///
/// Returns the decoded document plus a human-readable note describing
/// where it came from, or a default document (and no note) when nothing
/// resolves and the built-in defaults stand.
pub fn load_preset(
    root: &Path,
    explicit: Option<&Path>,
) -> Result<(PresetDocument, Option<String>), String> {
    let args: Vec<String> = explicit
        .map(|p| vec![format!("-PlazaPreset={}", p.display())])
        .unwrap_or_default();
    let source = PresetSource::new(root).with_args(args);

    match source.resolve() {
        Some(resolved) => {
            let doc = load_preset_file(&resolved.path)
                .map_err(|e| format!("cannot load preset {}: {e}", resolved.path.display()))?;
            let origin = match resolved.origin {
                PresetOrigin::CommandLine => "explicit path",
                PresetOrigin::Environment => "environment",
                PresetOrigin::DefaultFile => "default preset",
            };
            let note = format!("{} ({origin})", resolved.path.display());
            Ok((doc, Some(note)))
        }
        None => Ok((
            PresetDocument {
                name: None,
                config: PlazaConfig::default(),
                visuals: PresetVisuals::default(),
                warnings: Vec::new(),
            },
            None,
        )),
    }
}

/// The demo skin table shipped with the CLI.
pub fn builtin_skin_table() -> SkinTable {
    SkinTable::new()
        .with_skin(
            SkinSlot::Player,
            "Knight",
            ResourceRef::new("/Game/Plaza/Meshes/SK_Player_Knight"),
        )
        .with_skin(
            SkinSlot::Dummy,
            "Straw",
            ResourceRef::new("/Game/Plaza/Meshes/SK_Dummy_Straw"),
        )
        .with_skin(
            SkinSlot::Barrel,
            "Rusty",
            ResourceRef::new("/Game/Plaza/Meshes/SM_Barrel_Rusty"),
        )
}

/// A resource catalog covering the stock meshes and the demo skins.
pub fn builtin_catalog() -> ResourceCatalog {
    ResourceCatalog::new()
        .with_resource(scaffold::FLOOR_MESH)
        .with_resource(scaffold::WALL_MESH)
        .with_resource(scaffold::DUMMY_MESH)
        .with_resource(scaffold::BARREL_MESH)
        .with_resource(scaffold::PLAYER_MESH)
        .with_resource("/Game/Plaza/Meshes/SK_Player_Knight")
        .with_resource("/Game/Plaza/Meshes/SK_Dummy_Straw")
        .with_resource("/Game/Plaza/Meshes/SM_Barrel_Rusty")
}

/// Scaffold the arena from the document's layout and reconcile it.
///
/// Skin notes accumulate into `diagnostics`; the manager keeps its own
/// records, printable afterwards via [`print_diagnostics`].
pub fn build_and_apply(
    doc: &PresetDocument,
    seed: u64,
    use_skins: bool,
    diagnostics: &mut Diagnostics,
) -> Result<(PlazaManager, ApplyOutcome), String> {
    let mut config = doc.config.clone();
    if use_skins {
        apply_skins(
            &mut config.visuals,
            &doc.visuals,
            &builtin_skin_table(),
            diagnostics,
        );
    }

    let world_name = doc.name.as_deref().unwrap_or("Plaza");
    let world =
        build_arena(&config.layout, world_name).map_err(|e| format!("cannot scaffold arena: {e}"))?;

    let mut manager = PlazaManager::new(config).with_seed(seed);
    manager.set_dummy_class(default_dummy_class());
    manager.set_barrel_class(default_barrel_class());
    manager.attach_world(world);

    let mut resources = builtin_catalog();
    let outcome = manager
        .apply_configuration(&mut resources)
        .map_err(|e| e.to_string())?;

    Ok((manager, outcome))
}

/// Print the preset origin note and any decode warnings.
pub fn print_preset_header(note: Option<&str>, doc: &PresetDocument) {
    match note {
        Some(note) => println!("  {} {note}", "Preset:".bold()),
        None => println!("  {} built-in defaults", "Preset:".bold()),
    }
    if let Some(name) = &doc.name {
        println!("  {} {name}", "Name:".bold());
    }
    for warning in &doc.warnings {
        println!("  {}  {warning}", "WARN".yellow().bold());
    }
}

/// Print diagnostics records; all of them when verbose, warnings only
/// otherwise.
pub fn print_diagnostics(diagnostics: &Diagnostics, verbose: bool) {
    let records: Vec<_> = if verbose {
        diagnostics.records().iter().collect()
    } else {
        diagnostics.warnings()
    };
    if records.is_empty() {
        return;
    }

    println!("  {}", "Diagnostics".bold().underline());
    for record in records {
        let level = match record.level {
            DiagLevel::Info => "INFO".dimmed(),
            DiagLevel::Warning => "WARN".yellow().bold(),
            DiagLevel::Error => "ERROR".red().bold(),
        };
        println!("  {level}  [{}] {}", record.source, record.message);
    }
    println!();
}
