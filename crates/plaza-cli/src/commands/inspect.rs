use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use plaza_engine::{Diagnostics, PlazaIntrospector, generate_report};

pub fn run(
    preset: Option<&Path>,
    root: &Path,
    seed: u64,
    markdown: bool,
    output: Option<&Path>,
) -> Result<(), String> {
    let (doc, note) = super::load_preset(root, preset)?;
    super::print_preset_header(note.as_deref(), &doc);

    let mut skin_notes = Diagnostics::new(0);
    let (mut manager, _) = super::build_and_apply(&doc, seed, true, &mut skin_notes)?;

    let world = manager
        .take_world()
        .ok_or_else(|| "no world to introspect".to_string())?;
    let (summary, actors) = PlazaIntrospector::new().perform_introspection(&world);

    if markdown || output.is_some() {
        let report = generate_report(&world.meta.name, &summary, &actors);
        match output {
            Some(path) => {
                std::fs::write(path, &report)
                    .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
                println!("  Wrote manifest to {}", path.display());
            }
            None => print!("{report}"),
        }
        return Ok(());
    }

    println!(
        "  {} '{}' {}",
        "Introspection".bold(),
        world.meta.name,
        format!(
            "(observed {:.1} x {:.1} m)",
            summary.plaza_width_cm / 100.0,
            summary.plaza_height_cm / 100.0
        )
        .dimmed()
    );
    println!();

    let mut counts = Table::new();
    counts.set_content_arrangement(ContentArrangement::Dynamic);
    counts.set_header(vec!["Category", "Count"]);
    counts.add_row(vec![
        "Player starts".to_string(),
        summary.num_player_starts.to_string(),
    ]);
    counts.add_row(vec![
        "Target dummies".to_string(),
        summary.num_target_dummies.to_string(),
    ]);
    counts.add_row(vec![
        "Explosive barrels".to_string(),
        summary.num_explosive_barrels.to_string(),
    ]);
    counts.add_row(vec![
        "Static meshes".to_string(),
        summary.num_static_meshes.to_string(),
    ]);
    counts.add_row(vec!["Lights".to_string(), summary.num_lights.to_string()]);
    counts.add_row(vec![
        "Total actors".to_string(),
        summary.total_actors.to_string(),
    ]);
    println!("{counts}");
    println!();

    println!("  {}", "Key Actors".bold().underline());
    println!();
    let mut detail = Table::new();
    detail.set_content_arrangement(ContentArrangement::Dynamic);
    detail.set_header(vec!["Actor", "Class", "Location", "Tags"]);
    for info in actors.iter().filter(|a| a.is_key()) {
        let tags: Vec<&str> = info.tags.iter().map(|t| t.label()).collect();
        detail.add_row(vec![
            info.name.clone(),
            info.class_name.clone(),
            format!(
                "({:.0}, {:.0}, {:.0})",
                info.position.x, info.position.y, info.position.z
            ),
            tags.join(", "),
        ]);
    }
    println!("{detail}");

    Ok(())
}
