//! Dataset loading configuration format.

use crate::common::*;

/// The main configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub dataset: DatasetConfig,
}

impl Config {
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        let config = json5::from_str(&text)?;
        Ok(config)
    }
}

/// Dataset options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// The dataset root directory.
    pub dataset_dir: PathBuf,
    /// If set, relabel training identities to a dense zero-based range.
    #[serde(default = "default_relabel")]
    pub relabel: bool,
    /// If set, log split statistics after loading.
    #[serde(default)]
    pub verbose: bool,
}

impl DatasetConfig {
    pub fn new<P>(dataset_dir: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            dataset_dir: dataset_dir.into(),
            relabel: default_relabel(),
            verbose: false,
        }
    }
}

fn default_relabel() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_config_text() -> Result<()> {
        let config: Config = json5::from_str(
            r#"{
                dataset: {
                    dataset_dir: "/data/market1501",
                    verbose: true,
                }
            }"#,
        )?;
        assert_eq!(config.dataset.dataset_dir, PathBuf::from("/data/market1501"));
        assert!(config.dataset.relabel);
        assert!(config.dataset.verbose);
        Ok(())
    }
}
