use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use plaza_engine::Diagnostics;

pub fn run(
    preset: Option<&Path>,
    root: &Path,
    seed: u64,
    skins: bool,
    verbose: bool,
) -> Result<(), String> {
    let (doc, note) = super::load_preset(root, preset)?;
    super::print_preset_header(note.as_deref(), &doc);

    let mut skin_notes = Diagnostics::new(0);
    let (manager, outcome) = super::build_and_apply(&doc, seed, skins, &mut skin_notes)?;

    let layout = &manager.config().layout;
    println!(
        "  {} {} {}",
        "Applied".bold(),
        doc.name.as_deref().unwrap_or("built-in defaults"),
        format!(
            "({:.0}x{:.0} m, seed={seed})",
            layout.width_meters(),
            layout.height_meters()
        )
        .dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Outcome", "Count"]);
    table.add_row(vec![
        "Dummies spawned".to_string(),
        outcome.dummies_spawned.to_string(),
    ]);
    table.add_row(vec![
        "Barrels spawned".to_string(),
        outcome.barrels_spawned.to_string(),
    ]);
    table.add_row(vec![
        "Visuals applied".to_string(),
        outcome.visuals_applied.to_string(),
    ]);
    println!("{table}");
    println!();

    super::print_diagnostics(&skin_notes, verbose);
    super::print_diagnostics(manager.diagnostics(), verbose);

    Ok(())
}
