use std::path::{Path, PathBuf};

/// Backing file used when none is given on the command line.
pub const DEFAULT_DATA_FILE: &str = "customers.json";

/// Resolved runtime settings.
///
/// Greenbook reads no configuration file and no environment variables; the
/// only setting is where the customer list lives, which defaults to
/// `customers.json` in the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreenbookConfig {
    data_file: PathBuf,
}

impl Default for GreenbookConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl GreenbookConfig {
    /// Defaults, with `data_file` replaced when one is given.
    pub fn resolve(data_file: Option<PathBuf>) -> Self {
        match data_file {
            Some(path) => Self::default().with_data_file(path),
            None => Self::default(),
        }
    }

    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GreenbookConfig::default();
        assert_eq!(config.data_file(), Path::new("customers.json"));
    }

    #[test]
    fn test_resolve_without_override() {
        assert_eq!(GreenbookConfig::resolve(None), GreenbookConfig::default());
    }

    #[test]
    fn test_resolve_with_override() {
        let config = GreenbookConfig::resolve(Some(PathBuf::from("/tmp/clients.json")));
        assert_eq!(config.data_file(), Path::new("/tmp/clients.json"));
    }
}
