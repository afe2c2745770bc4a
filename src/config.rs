//! Configuration for flatkv
//!
//! Centralized configuration with sensible defaults.

/// Main configuration for a flatkv Store instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Codec Configuration
    // -------------------------------------------------------------------------
    /// Maximum nesting depth accepted by the encoder.
    ///
    /// Values nested deeper than this are rejected at `set` time with
    /// `UnsupportedType` rather than risking unbounded recursion.
    pub max_depth: usize,

    // -------------------------------------------------------------------------
    // Commit Configuration
    // -------------------------------------------------------------------------
    /// Initial capacity (in bytes) of the staging buffer used by `commit_to`.
    ///
    /// Commits serialize the whole store into memory before touching the
    /// sink; a larger hint avoids reallocations for big stores.
    pub commit_buffer_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: 32,
            commit_buffer_capacity: 8 * 1024, // 8 KiB
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the maximum encoder nesting depth
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = depth;
        self
    }

    /// Set the initial commit staging buffer capacity (in bytes)
    pub fn commit_buffer_capacity(mut self, bytes: usize) -> Self {
        self.config.commit_buffer_capacity = bytes;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
