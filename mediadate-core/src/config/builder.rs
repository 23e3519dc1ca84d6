// ============================================================================
// mediadate-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// Fluent construction of CoreConfig with defaults for everything except the
// target folder.
//
// AI-ASSISTANT-INFO: Builder pattern implementation for CoreConfig

// ---- Standard library imports ----
use std::path::PathBuf;

// ---- Internal crate imports ----
use super::CoreConfig;
use crate::external::PropertyStoreCapability;

/// Builder for creating CoreConfig instances.
///
/// # Examples
///
/// ```rust
/// use mediadate_core::config::CoreConfigBuilder;
/// use std::path::PathBuf;
///
/// let config = CoreConfigBuilder::new()
///     .folder(PathBuf::from("/path/to/photos"))
///     .commit(true)
///     .convert(false)
///     .build();
/// assert!(config.commit);
/// assert!(!config.convert);
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfigBuilder {
    folder: Option<PathBuf>,
    commit: bool,
    convert: bool,
    worker_count: usize,
    property_store: Option<PropertyStoreCapability>,
}

impl Default for CoreConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreConfigBuilder {
    /// Creates a new CoreConfigBuilder with default values.
    pub fn new() -> Self {
        Self {
            folder: None,
            commit: false,
            convert: true,
            worker_count: super::DEFAULT_WORKER_COUNT,
            property_store: None,
        }
    }

    /// Sets the folder to process.
    pub fn folder(mut self, folder: PathBuf) -> Self {
        self.folder = Some(folder);
        self
    }

    /// Sets commit mode. The default is a dry run.
    pub fn commit(mut self, commit: bool) -> Self {
        self.commit = commit;
        self
    }

    /// Enables or disables legacy format conversion.
    pub fn convert(mut self, convert: bool) -> Self {
        self.convert = convert;
        self
    }

    /// Sets the width of the extraction worker pool.
    pub fn worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    /// Overrides the detected property-store capability.
    pub fn property_store(mut self, capability: PropertyStoreCapability) -> Self {
        self.property_store = Some(capability);
        self
    }

    /// Builds the CoreConfig. A missing folder means the working directory.
    pub fn build(self) -> CoreConfig {
        CoreConfig {
            folder: self.folder.unwrap_or_else(|| PathBuf::from(".")),
            commit: self.commit,
            convert: self.convert,
            worker_count: self.worker_count,
            property_store: self
                .property_store
                .unwrap_or_else(PropertyStoreCapability::detect),
        }
    }
}
