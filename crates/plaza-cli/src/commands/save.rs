use std::path::Path;

use plaza_config::{PlazaConfig, load_preset_file, save_preset_file};

pub fn run(
    path: &Path,
    name: &str,
    description: &str,
    from: Option<&Path>,
) -> Result<(), String> {
    let config = match from {
        Some(source) => {
            let doc = load_preset_file(source)
                .map_err(|e| format!("cannot load preset {}: {e}", source.display()))?;
            for warning in &doc.warnings {
                eprintln!("warning: {warning}");
            }
            doc.config
        }
        None => PlazaConfig::default(),
    };

    save_preset_file(path, &config, name, description)
        .map_err(|e| format!("cannot save preset {}: {e}", path.display()))?;

    println!("  Saved preset '{name}' to {}", path.display());
    Ok(())
}
