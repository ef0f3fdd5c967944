use std::path::Path;

use colored::Colorize;

use plaza_config::PresetSource;
use plaza_config::source::DEFAULT_PRESET_FILENAME;

pub fn run(root: &Path) -> Result<(), String> {
    let source = PresetSource::new(root);
    let presets = source.available_presets();

    println!(
        "  {} {}",
        "Presets in".bold(),
        source.presets_dir().display()
    );
    println!();

    if presets.is_empty() {
        println!("  {}", "(none found)".dimmed());
        return Ok(());
    }

    for path in &presets {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        if file_name == DEFAULT_PRESET_FILENAME {
            println!("  {file_name} {}", "(default)".dimmed());
        } else {
            println!("  {file_name}");
        }
    }

    Ok(())
}
