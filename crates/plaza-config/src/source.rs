use std::fs;
use std::path::{Path, PathBuf};

/// Command-line key that names an explicit preset file.
pub const PRESET_ARG_KEY: &str = "-PlazaPreset=";
/// Environment variable that names a preset file.
pub const PRESET_ENV_VAR: &str = "PLAZA_PRESET_PATH";
/// Directory under the project root where presets are discovered.
pub const PRESETS_DIR: &str = "presets";
/// File name of the default preset.
pub const DEFAULT_PRESET_FILENAME: &str = "PlazaPreset_Default.json";

/// Where a resolved preset path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetOrigin {
    /// The explicit `-PlazaPreset=` command-line key.
    CommandLine,
    /// The `PLAZA_PRESET_PATH` environment variable.
    Environment,
    /// The discovered default file under the presets directory.
    DefaultFile,
}

/// A preset path together with the source that supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPreset {
    /// Absolute (or root-resolved) path to the preset file.
    pub path: PathBuf,
    /// Which source won the resolution.
    pub origin: PresetOrigin,
}

/// Resolves where a preset comes from.
///
/// Priority, first match wins: explicit command-line key, then environment
/// variable, then the default file if it exists, otherwise nothing (the
/// caller keeps its built-in defaults). Relative paths from the first two
/// sources are resolved against the project root. An empty value counts as
/// "not set" and falls through.
#[derive(Debug, Clone)]
pub struct PresetSource {
    args: Vec<String>,
    project_root: PathBuf,
}

impl PresetSource {
    /// Create a source rooted at the given project directory.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            args: Vec::new(),
            project_root: project_root.into(),
        }
    }

    /// Supply command-line style arguments to scan for [`PRESET_ARG_KEY`].
    pub fn with_args(mut self, args: impl IntoIterator<Item = String>) -> Self {
        self.args = args.into_iter().collect();
        self
    }

    /// Resolve using the real process environment.
    pub fn resolve(&self) -> Option<ResolvedPreset> {
        let env_value = std::env::var(PRESET_ENV_VAR).ok();
        self.resolve_with_env(env_value.as_deref())
    }

    /// Resolve with the environment value passed in explicitly.
    ///
    /// This is the whole resolution algorithm; [`resolve`](Self::resolve)
    /// only feeds it the live environment.
    pub fn resolve_with_env(&self, env_value: Option<&str>) -> Option<ResolvedPreset> {
        for arg in &self.args {
            if let Some(path) = arg.strip_prefix(PRESET_ARG_KEY)
                && !path.is_empty()
            {
                return Some(ResolvedPreset {
                    path: self.resolve_against_root(path),
                    origin: PresetOrigin::CommandLine,
                });
            }
        }

        if let Some(value) = env_value
            && !value.is_empty()
        {
            return Some(ResolvedPreset {
                path: self.resolve_against_root(value),
                origin: PresetOrigin::Environment,
            });
        }

        let default = self.default_preset_path();
        if default.exists() {
            return Some(ResolvedPreset {
                path: default,
                origin: PresetOrigin::DefaultFile,
            });
        }

        None
    }

    /// The presets directory under the project root.
    pub fn presets_dir(&self) -> PathBuf {
        self.project_root.join(PRESETS_DIR)
    }

    /// Path of the default preset file (which may or may not exist).
    pub fn default_preset_path(&self) -> PathBuf {
        self.presets_dir().join(DEFAULT_PRESET_FILENAME)
    }

    /// All `.json` preset files under the presets directory, sorted.
    pub fn available_presets(&self) -> Vec<PathBuf> {
        let mut presets: Vec<PathBuf> = fs::read_dir(self.presets_dir())
            .into_iter()
            .flatten()
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        presets.sort();
        presets
    }

    fn resolve_against_root(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_relative() {
            self.project_root.join(path)
        } else {
            path.to_path_buf()
        }
    }
}
