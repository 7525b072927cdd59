//! Configuration parsing – reads a `KEY=VALUE` file (`shelter.conf`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

/// Application configuration, shared between the API server and the web site.
///
/// Both binaries load the same file; each ignores fields it does not need.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // ── database ─────────────────────────────────────────────────────
    pub db_path: PathBuf,
    /// Insert the demo breeds and dogs when the `dogs` table is empty.
    pub seed_demo_data: bool,

    // ── network ──────────────────────────────────────────────────────
    /// Address the standalone API server listens on.
    pub api_listen_addr: String,
}

impl Config {
    /// Default config path.
    pub fn default_path() -> &'static str {
        "/etc/shelter/shelter.conf"
    }
}

impl Default for Config {
    fn default() -> Self {
        from_map(&HashMap::new())
    }
}

/// Parse a `KEY=VALUE` configuration file.
///
/// Lines starting with `#` are comments.  Values may be optionally
/// double-quoted.  Unknown keys are silently ignored.
pub fn load(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read config: {}", path.display()))?;

    let map = parse_conf(&text);
    info!("Loaded config from {}", path.display());
    Ok(from_map(&map))
}

/// Like [`load`], but a missing file yields the defaults.
pub fn load_or_default(path: &Path) -> Result<Config> {
    if !path.exists() {
        info!("No config at {}, using defaults", path.display());
        return Ok(Config::default());
    }
    load(path)
}

fn from_map(map: &HashMap<String, String>) -> Config {
    let get = |key: &str| -> Option<String> { map.get(key).cloned().filter(|v| !v.is_empty()) };

    Config {
        db_path: PathBuf::from(get("DB_PATH").unwrap_or_else(|| "data/shelter.db".into())),
        seed_demo_data: get("SEED_DEMO_DATA")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(true),
        api_listen_addr: get("API_LISTEN_ADDR").unwrap_or_else(|| "0.0.0.0:5100".into()),
    }
}

/// Parse `KEY=VALUE` lines into a map, stripping optional double-quotes.
fn parse_conf(text: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, val)) = line.split_once('=') {
            let key = key.trim();
            let val = val.trim().trim_matches('"');
            map.insert(key.to_string(), val.to_string());
        }
    }
    map
}

// ─── tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_conf() {
        let text = r#"
# comment
DB_PATH="/var/lib/shelter/shelter.db"
API_LISTEN_ADDR=127.0.0.1:9000
SEED_DEMO_DATA=false
"#;
        let map = parse_conf(text);
        assert_eq!(map["DB_PATH"], "/var/lib/shelter/shelter.db");
        assert_eq!(map["API_LISTEN_ADDR"], "127.0.0.1:9000");
        assert_eq!(map["SEED_DEMO_DATA"], "false");
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.db_path, PathBuf::from("data/shelter.db"));
        assert_eq!(config.api_listen_addr, "0.0.0.0:5100");
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_load_file() {
        let path = tempfile("load.conf", "DB_PATH=/tmp/dogs.db\nSEED_DEMO_DATA=0\nUNKNOWN=1\n");
        let config = load(&path).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/dogs.db"));
        assert!(!config.seed_demo_data);
        assert_eq!(config.api_listen_addr, "0.0.0.0:5100");
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("shelter_test").join("does-not-exist.conf");
        assert!(load(&path).is_err());
        assert_eq!(load_or_default(&path).unwrap(), Config::default());
    }

    fn tempfile(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("shelter_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }
}
