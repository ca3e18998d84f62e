use anyhow::Context;

/// JSON key read from `CONFIG_FILE` for the listen port.
const PORT_KEY: &str = "http.port";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub assets_dir: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    ///
    /// The port comes from `HTTP_PORT`, then from the `"http.port"` entry of
    /// the JSON file named by `CONFIG_FILE`, then falls back to 8080.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("HTTP_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .context("HTTP_PORT must be a valid port number")?,
            None => match lookup("CONFIG_FILE") {
                Some(path) => port_from_file(&path)?,
                None => DEFAULT_PORT,
            },
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            assets_dir: lookup("ASSETS_DIR").unwrap_or_else(|| "assets".to_string()),
        })
    }
}

fn port_from_file(path: &str) -> anyhow::Result<u16> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path))?;
    port_from_json(&raw).with_context(|| format!("invalid config file {}", path))
}

fn port_from_json(raw: &str) -> anyhow::Result<u16> {
    let doc: serde_json::Value = serde_json::from_str(raw).context("config is not JSON")?;
    match doc.get(PORT_KEY) {
        None | Some(serde_json::Value::Null) => Ok(DEFAULT_PORT),
        Some(value) => value
            .as_u64()
            .and_then(|n| u16::try_from(n).ok())
            .with_context(|| format!("{} must be a port number, got {}", PORT_KEY, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.assets_dir, "assets");
    }

    #[test]
    fn http_port_env_wins() {
        let config = Config::from_lookup(lookup_from(&[
            ("HTTP_PORT", "9090"),
            ("CONFIG_FILE", "/does/not/exist.json"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn bad_http_port_is_an_error() {
        assert!(Config::from_lookup(lookup_from(&[("HTTP_PORT", "eighty")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("HTTP_PORT", "70000")])).is_err());
    }

    #[test]
    fn port_read_from_json_key() {
        assert_eq!(port_from_json(r#"{"http.port": 8181}"#).unwrap(), 8181);
        assert_eq!(port_from_json(r#"{"other": true}"#).unwrap(), 8080);
        assert!(port_from_json(r#"{"http.port": "x"}"#).is_err());
        assert!(port_from_json("not json").is_err());
    }

    #[test]
    fn port_read_from_config_file() {
        let path = std::env::temp_dir().join(format!("whisky-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"http.port": 8282}"#).unwrap();
        let config = Config::from_lookup(lookup_from(&[(
            "CONFIG_FILE",
            path.to_str().unwrap(),
        )]))
        .unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.port, 8282);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        assert!(Config::from_lookup(lookup_from(&[(
            "CONFIG_FILE",
            "/definitely/missing/whisky.json"
        )]))
        .is_err());
    }
}
