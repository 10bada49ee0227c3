use serde::{Deserialize, Deserializer, Serialize};
use srcpos::ColumnUnit;

/// Settings for resolving byte offsets into positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SrcposConfig {
    /// What columns count
    pub column_unit: ColumnUnit,

    /// Name recorded in ranges instead of the path of the file being read
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "non_blank"
    )]
    pub filename: Option<String>,
}

fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let filename = Option::<String>::deserialize(deserializer)?;
    match filename {
        Some(name) if name.trim().is_empty() => Err(serde::de::Error::custom(
            "filename must not be blank",
        )),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SrcposConfig::default();
        assert_eq!(config.column_unit, ColumnUnit::Chars);
        assert_eq!(config.filename, None);
    }

    #[test]
    fn test_camel_case_fields() {
        let config: SrcposConfig =
            serde_json::from_str(r#"{"columnUnit": "utf16", "filename": "main.hcl"}"#).unwrap();
        assert_eq!(config.column_unit, ColumnUnit::Utf16);
        assert_eq!(config.filename.as_deref(), Some("main.hcl"));
    }

    #[test]
    fn test_blank_filename_rejected() {
        let err = serde_json::from_str::<SrcposConfig>(r#"{"filename": "   "}"#).unwrap_err();
        assert!(err.to_string().contains("filename must not be blank"));
    }

    #[test]
    fn test_null_filename_is_unset() {
        let config: SrcposConfig = serde_json::from_str(r#"{"filename": null}"#).unwrap();
        assert_eq!(config.filename, None);
    }

    #[test]
    fn test_skips_missing_filename() {
        let json = serde_json::to_string(&SrcposConfig::default()).unwrap();
        assert_eq!(json, r#"{"columnUnit":"chars"}"#);
    }
}
