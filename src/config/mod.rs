use serde::Deserialize;
use std::path::PathBuf;

/// Built-in grid sampling defaults
pub mod defaults {
    pub const XYMIN: f64 = 0.0;
    pub const XYMAX: f64 = 1.0;
    pub const RES: u32 = 64;
}

fn default_xymin() -> f64 {
    defaults::XYMIN
}
fn default_xymax() -> f64 {
    defaults::XYMAX
}
fn default_res() -> u32 {
    defaults::RES
}
fn default_verbose() -> bool {
    false
}

/// Optional TOML file config; CLI flags take precedence over these values.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default = "default_xymin")]
    pub xymin: f64,
    #[serde(default = "default_xymax")]
    pub xymax: f64,
    #[serde(default = "default_res")]
    pub res: u32,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("shape2sdf.toml"));
    paths.push(PathBuf::from(".shape2sdf.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("shape2sdf").join("config.toml"));
        paths.push(config_dir.join("shape2sdf.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".shape2sdf.toml"));
        paths.push(home.join(".config").join("shape2sdf").join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.xymin, 0.0);
        assert_eq!(config.xymax, 1.0);
        assert_eq!(config.res, 64);
        assert!(config.output.is_none());
        assert!(!config.verbose);
    }

    #[test]
    fn test_partial_config() {
        let config: FileConfig = toml::from_str("res = 128\nverbose = true\n").unwrap();
        assert_eq!(config.res, 128);
        assert!(config.verbose);
        assert_eq!(config.xymax, 1.0);
    }
}
