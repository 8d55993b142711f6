use std::fs;
use std::path::{Path, PathBuf};

use crate::error::HostConfigError;
use crate::host::HostConfig;

/// Location of the host config: `~/.config/ncurl/host.toml`.
pub fn config_path() -> Result<PathBuf, HostConfigError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ncurl")?;
    xdg_dirs
        .place_config_file("host.toml")
        .map_err(|source| HostConfigError::Io {
            path: xdg_dirs.get_config_home().join("host.toml"),
            source,
        })
}

/// Parse a host config from TOML text. Missing keys take their defaults.
pub fn parse(data: &str, origin: &Path) -> Result<HostConfig, HostConfigError> {
    toml::from_str(data).map_err(|source| HostConfigError::Parse {
        path: origin.to_path_buf(),
        source,
    })
}

/// Load host config from an explicit file.
pub fn load_from_path(path: &Path) -> Result<HostConfig, HostConfigError> {
    let data = fs::read_to_string(path).map_err(|source| HostConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg = parse(&data, path)?;
    tracing::debug!("loaded host config from {}", path.display());
    Ok(cfg)
}

/// Write the default host config to `path`, creating parent directories.
pub fn write_default(path: &Path) -> Result<HostConfig, HostConfigError> {
    let default_cfg = HostConfig::default();
    let toml = toml::to_string_pretty(&default_cfg)?;
    let io_err = |source| HostConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, toml).map_err(io_err)?;
    tracing::info!("created default host config at {}", path.display());
    Ok(default_cfg)
}

/// Load host config from the XDG location, creating a default file if none exists.
pub fn load_or_init() -> Result<HostConfig, HostConfigError> {
    let path = config_path()?;
    if !path.exists() {
        return write_default(&path);
    }
    load_from_path(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::DEFAULT_CORE_APPS;

    fn parse_str(data: &str) -> HostConfig {
        parse(data, Path::new("test.toml")).unwrap()
    }

    #[test]
    fn empty_file_is_default() {
        let cfg = parse_str("");
        assert_eq!(cfg, HostConfig::default());
        assert_eq!(cfg.core_apps, DEFAULT_CORE_APPS);
    }

    #[test]
    fn default_config_toml_roundtrip() {
        let cfg = HostConfig::default()
            .with_webroot("/nextcloud")
            .with_app_webroot("forms", "/apps-extra/forms");
        let toml = toml::to_string_pretty(&cfg).unwrap();
        assert_eq!(parse_str(&toml), cfg);
    }

    #[test]
    fn custom_values() {
        let cfg = parse_str(
            r#"
            webroot = ""
            core_apps = ["", "admin", "core"]
            mod_rewrite_working = true

            [app_webroots]
            forms = "/apps-extra/forms"

            [location]
            origin = "https://cloud.example.com"
            pathname = "/index.php/apps/files"
        "#,
        );
        assert_eq!(cfg.webroot.as_deref(), Some(""));
        assert_eq!(cfg.core_apps, ["", "admin", "core"]);
        assert!(cfg.mod_rewrite_working);
        assert_eq!(
            cfg.app_webroots.as_ref().and_then(|m| m.get("forms")).map(String::as_str),
            Some("/apps-extra/forms")
        );
        assert_eq!(cfg.location.origin, "https://cloud.example.com");
        assert_eq!(cfg.location.href, "https://cloud.example.com/index.php/apps/files");
    }

    #[test]
    fn location_from_href_only() {
        let cfg = parse_str(
            r#"
            [location]
            href = "https://cloud.example.com:8443/nextcloud/index.php/apps/files"
        "#,
        );
        assert!(cfg.webroot.is_none());
        assert_eq!(cfg.location.origin, "https://cloud.example.com:8443");
        assert_eq!(cfg.location.pathname, "/nextcloud/index.php/apps/files");
    }

    #[test]
    fn invalid_href_is_a_parse_error() {
        let err = parse("[location]\nhref = \"not a url\"\n", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, HostConfigError::Parse { .. }));
    }

    #[test]
    fn write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("host.toml");
        let written = write_default(&path).unwrap();
        let loaded = load_from_path(&path).unwrap();
        assert_eq!(written, loaded);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_path(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, HostConfigError::Io { .. }));
    }
}
