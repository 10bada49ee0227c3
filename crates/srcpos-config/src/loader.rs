use crate::{ConfigError, Result, SrcposConfig};
use std::fs;
use std::path::{Path, PathBuf};

/// Names checked in each directory, most specific first.
const CONFIG_FILES: &[&str] = &[
    ".srcposrc.yml",
    ".srcposrc.yaml",
    ".srcposrc.json",
    ".srcposrc",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
}

impl Format {
    /// A bare `.srcposrc` is YAML, which also accepts JSON documents.
    fn of(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yml" | "yaml") => Some(Self::Yaml),
            Some("json") => Some(Self::Json),
            None if path.file_name().is_some_and(|name| name == ".srcposrc") => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// The config file closest to `start_dir`, looking in each ancestor in turn.
#[must_use]
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    start_dir.ancestors().find_map(|dir| {
        CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

pub fn load_config(path: &Path) -> Result<SrcposConfig> {
    let contents = fs::read_to_string(path)?;
    load_config_from_str(&contents, path)
}

/// Parse config text. `path` picks the format and is named in errors.
///
/// Field values are checked while deserializing, so a successful parse is a
/// usable config.
pub fn load_config_from_str(contents: &str, path: &Path) -> Result<SrcposConfig> {
    let format =
        Format::of(path).ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;

    let parsed = match format {
        Format::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
        Format::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
    };

    parsed.map_err(|message| ConfigError::Invalid {
        path: path.to_path_buf(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use srcpos::ColumnUnit;

    #[test]
    fn test_format_detection() {
        assert_eq!(Format::of(Path::new("a/.srcposrc.yml")), Some(Format::Yaml));
        assert_eq!(Format::of(Path::new("a/.srcposrc.yaml")), Some(Format::Yaml));
        assert_eq!(Format::of(Path::new("a/.srcposrc.json")), Some(Format::Json));
        assert_eq!(Format::of(Path::new("a/.srcposrc")), Some(Format::Yaml));
        assert_eq!(Format::of(Path::new("a/srcposrc")), None);
        assert_eq!(Format::of(Path::new("a/srcpos.toml")), None);
    }

    #[test]
    fn test_load_yaml_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(".srcposrc.yml");
        fs::write(&path, "columnUnit: bytes\nfilename: main.hcl\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.column_unit, ColumnUnit::Bytes);
        assert_eq!(config.filename.as_deref(), Some("main.hcl"));
    }

    #[test]
    fn test_bare_rc_accepts_json_text() {
        let config =
            load_config_from_str(r#"{"columnUnit": "utf16"}"#, Path::new(".srcposrc")).unwrap();
        assert_eq!(config.column_unit, ColumnUnit::Utf16);
        assert_eq!(config.filename, None);
    }

    #[test]
    fn test_json_file_rejects_yaml_text() {
        let result = load_config_from_str("columnUnit: bytes\n", Path::new(".srcposrc.json"));
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_invalid_values_name_the_file() {
        for (contents, needle) in [
            ("columnUnit: graphemes\n", "graphemes"),
            ("filename: \"  \"\n", "filename must not be blank"),
            ("tabWidth: 4\n", "tabWidth"),
        ] {
            let err = load_config_from_str(contents, Path::new("conf/.srcposrc.yml")).unwrap_err();
            let message = err.to_string();
            assert!(message.contains("conf/.srcposrc.yml"), "{message}");
            assert!(message.contains(needle), "{message}");
        }
    }

    #[test]
    fn test_unsupported_format() {
        let result = load_config_from_str("columnUnit = 'bytes'", Path::new("srcpos.toml"));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_nearest_config_shadows_outer_one() {
        let temp_dir = tempfile::tempdir().unwrap();
        let outer = temp_dir.path().join(".srcposrc.yml");
        fs::write(&outer, "columnUnit: bytes").unwrap();

        let project = temp_dir.path().join("project");
        let nested = project.join("src").join("blocks");
        fs::create_dir_all(&nested).unwrap();
        let inner = project.join(".srcposrc");
        fs::write(&inner, "columnUnit: utf16").unwrap();

        let found = find_config(&nested).unwrap();
        assert_eq!(found, inner);
        assert_eq!(load_config(&found).unwrap().column_unit, ColumnUnit::Utf16);

        assert_eq!(find_config(temp_dir.path()), Some(outer));
    }

    #[test]
    fn test_directory_named_like_config_is_skipped() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir(temp_dir.path().join(".srcposrc.yml")).unwrap();
        let json = temp_dir.path().join(".srcposrc.json");
        fs::write(&json, "{}").unwrap();

        assert_eq!(find_config(temp_dir.path()), Some(json));
    }
}
