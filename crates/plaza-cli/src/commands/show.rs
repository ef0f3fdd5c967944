use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(preset: Option<&Path>, root: &Path) -> Result<(), String> {
    let (doc, note) = super::load_preset(root, preset)?;
    super::print_preset_header(note.as_deref(), &doc);
    println!();

    let layout = &doc.config.layout;
    let visuals = &doc.config.visuals;

    println!("  {}", "Layout".bold().underline());
    println!();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Parameter", "Value"]);
    table.add_row(vec![
        "Plaza size".to_string(),
        format!(
            "{:.1} x {:.1} cm ({:.1} x {:.1} m)",
            layout.plaza_width_cm,
            layout.plaza_height_cm,
            layout.width_meters(),
            layout.height_meters()
        ),
    ]);
    table.add_row(vec![
        "Wall height".to_string(),
        format!(
            "{:.1} cm ({:.1} m)",
            layout.wall_height_cm,
            layout.wall_height_meters()
        ),
    ]);
    table.add_row(vec![
        "Target dummies".to_string(),
        layout.num_target_dummies.to_string(),
    ]);
    table.add_row(vec![
        "Explosive barrels".to_string(),
        layout.num_explosive_barrels.to_string(),
    ]);
    table.add_row(vec![
        "Min actor spacing".to_string(),
        format!("{:.1} cm", layout.min_actor_spacing_cm),
    ]);
    table.add_row(vec![
        "Player safe zone".to_string(),
        format!("{:.1} cm", layout.player_safe_zone_cm),
    ]);
    println!("{table}");
    println!();

    println!("  {}", "Visuals".bold().underline());
    println!();
    let yes_no = |set: bool| if set { "Yes" } else { "No" };
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Override", "Set", "Preset symbol"]);
    table.add_row(vec![
        "Player".to_string(),
        yes_no(visuals.has_player_override()).to_string(),
        doc.visuals.player_skin.clone().unwrap_or_else(|| "-".to_string()),
    ]);
    table.add_row(vec![
        "Dummy".to_string(),
        yes_no(visuals.has_dummy_override()).to_string(),
        doc.visuals.dummy_skin.clone().unwrap_or_else(|| "-".to_string()),
    ]);
    table.add_row(vec![
        "Barrel".to_string(),
        yes_no(visuals.has_barrel_override()).to_string(),
        doc.visuals.barrel_skin.clone().unwrap_or_else(|| "-".to_string()),
    ]);
    table.add_row(vec![
        "Theme".to_string(),
        "-".to_string(),
        doc.visuals.theme.clone().unwrap_or_else(|| "-".to_string()),
    ]);
    println!("{table}");

    Ok(())
}
