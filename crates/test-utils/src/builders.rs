use std::path::Path;

use jarlaunch::config::LaunchConfig;

/// Builder for `LaunchConfig` to simplify test setup.
pub struct LaunchConfigBuilder {
    config: LaunchConfig,
}

impl LaunchConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: LaunchConfig::default(),
        }
    }

    pub fn temp_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.config.temp_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn resource_name(mut self, name: &str) -> Self {
        self.config.resource_name = name.to_string();
        self
    }

    /// Replace the runtime program and its flag.
    pub fn runtime(mut self, program: &str, flag: &str) -> Self {
        self.config.runtime_program = program.to_string();
        self.config.runtime_flag = flag.to_string();
        self
    }

    pub fn build(self) -> LaunchConfig {
        self.config
    }
}

impl Default for LaunchConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
