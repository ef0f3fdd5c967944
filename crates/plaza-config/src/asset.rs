use crate::config::PlazaConfig;

/// A named, versioned, persisted plaza configuration.
///
/// Content assets live with the content system, independent of any running
/// world; the reconciliation manager copies the configuration out of one
/// rather than taking ownership. Mutation goes through the explicit
/// setters only.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigAsset {
    name: String,
    description: String,
    version: String,
    config: PlazaConfig,
}

impl ConfigAsset {
    /// Create an asset wrapping the given configuration, at version "1.0".
    pub fn new(name: impl Into<String>, config: PlazaConfig) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            version: "1.0".to_string(),
            config,
        }
    }

    /// The asset's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description of this configuration.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Version identifier for tracking changes.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The wrapped configuration.
    pub fn config(&self) -> &PlazaConfig {
        &self.config
    }

    /// Replace the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Replace the version identifier.
    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = version.into();
    }

    /// Replace the wrapped configuration.
    pub fn set_config(&mut self, config: PlazaConfig) {
        self.config = config;
    }
}
