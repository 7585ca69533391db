use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, GenerationOptions, Result};

/// Project configuration read from `pagegen.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub api: ApiConfig,
    /// Defaults for every generated page; CLI flags override them.
    #[serde(default)]
    pub page: GenerationOptions,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory generated components are written to.
    pub dir: PathBuf,
    /// File extension without the leading dot.
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("src/components/generated"),
            extension: "jsx".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    /// REST base; each page talks to `<base_url>/<table>`.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
        }
    }
}

impl Config {
    pub const FILENAME: &'static str = "pagegen.toml";

    /// Read and parse a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Read `path` if it exists, otherwise fall back to the defaults.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config content, using `filename` in error reports.
    pub fn from_str_with_filename(src: &str, filename: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(src).map_err(|e| Error::config_parse(e, src, filename))?;
        config.validate(src, filename)?;
        config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        let extension = &self.output.extension;
        if extension.is_empty()
            || extension.starts_with('.')
            || !extension.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(Error::invalid_config(
                format!("invalid output extension '{}'", extension),
                "extension",
                src,
                filename,
            ));
        }

        let base_url = self.api.base_url.trim();
        if base_url.is_empty() || base_url.contains(['\'', '"', '`', '\\']) {
            return Err(Error::invalid_config(
                format!("invalid api base_url '{}'", base_url),
                "base_url",
                src,
                filename,
            ));
        }

        if let Some(name) = &self.page.component_name {
            if !name.trim().is_empty() {
                return Err(Error::invalid_config(
                    "component_name is set per page, not in [page] defaults",
                    "component_name",
                    src,
                    filename,
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::from_str_with_filename("", "pagegen.toml").unwrap();
        assert_eq!(config.output.dir, PathBuf::from("src/components/generated"));
        assert_eq!(config.output.extension, "jsx");
        assert_eq!(config.api.base_url, "http://localhost:8080/api");
        assert_eq!(config.page, GenerationOptions::default());
    }

    #[test]
    fn test_full_config() {
        let src = r#"
[output]
dir = "web/pages"
extension = "tsx"

[api]
base_url = "https://claims.example.com/api/"

[page]
crud = false
search = false
"#;
        let config = Config::from_str_with_filename(src, "pagegen.toml").unwrap();
        assert_eq!(config.output.dir, PathBuf::from("web/pages"));
        assert_eq!(config.output.extension, "tsx");
        assert_eq!(config.api.base_url, "https://claims.example.com/api");
        assert!(!config.page.crud);
        assert!(!config.page.search);
        assert!(config.page.pagination);
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = Config::from_str_with_filename("[output]\nfolder = \"x\"\n", "pagegen.toml")
            .unwrap_err();
        match *err {
            Error::ConfigParse { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_extension() {
        let src = "[output]\nextension = \".jsx\"\n";
        let err = Config::from_str_with_filename(src, "pagegen.toml").unwrap_err();
        match *err {
            Error::InvalidConfig { span, message, .. } => {
                assert!(message.contains(".jsx"));
                assert_eq!(span.map(|s| s.offset()), Some(9));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_quote_in_base_url() {
        let src = "[api]\nbase_url = \"http://x/'api\"\n";
        let err = Config::from_str_with_filename(src, "pagegen.toml").unwrap_err();
        assert!(matches!(*err, Error::InvalidConfig { .. }));
    }

    #[test]
    fn test_open_or_default() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(Config::FILENAME);

        let config = Config::open_or_default(&path).unwrap();
        assert_eq!(config.output.extension, "jsx");

        std::fs::write(&path, "[output]\ndir = \"out\"\n").unwrap();
        let config = Config::open_or_default(&path).unwrap();
        assert_eq!(config.output.dir, PathBuf::from("out"));
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = Config::open(temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
