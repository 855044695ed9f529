use super::AbiDocument;
use crate::error::InputError;
use regex::Regex;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// On-disk representation of an ABI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AbiFormat {
    /// A bare JSON array of entries.
    #[default]
    Json,
    /// An abigen Go binding with the ABI embedded in its `MetaData` literal.
    GoBinding,
}

impl AbiFormat {
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("go") => AbiFormat::GoBinding,
            _ => AbiFormat::Json,
        }
    }
}

/// Read and decode the ABI at `path`.
pub fn load_abi(path: &Path, format: AbiFormat) -> Result<AbiDocument, InputError> {
    let path_str = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            InputError::FileNotFound {
                path: path_str.clone(),
            }
        } else {
            InputError::Io {
                path: path_str.clone(),
                source,
            }
        }
    })?;

    debug!("Read {} bytes from {} as {:?}", content.len(), path_str, format);

    match format {
        AbiFormat::Json => AbiDocument::from_json_str(&content),
        AbiFormat::GoBinding => {
            let json = extract_go_abi(&content).ok_or(InputError::MissingGoAbi { path: path_str })??;
            AbiDocument::from_json_str(&json)
        }
    }
}

/// Pull the first `ABI: "..."` string literal out of a Go binding and
/// unescape it. Returns `None` when no literal is present.
fn extract_go_abi(source: &str) -> Option<Result<String, InputError>> {
    let pattern = Regex::new(r#"ABI:\s*"((?:[^"\\]|\\.)*)""#).ok()?;
    let body = pattern.captures(source)?.get(1)?.as_str();

    // abigen only escapes quotes and backslashes, which JSON string syntax shares.
    Some(
        serde_json::from_str::<String>(&format!("\"{body}\""))
            .map_err(|source| InputError::InvalidJson { source }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_format_from_extension() {
        assert_eq!(
            AbiFormat::detect(Path::new("abis/go/registry-relay.go")),
            AbiFormat::GoBinding
        );
        assert_eq!(AbiFormat::detect(Path::new("out/Store.json")), AbiFormat::Json);
        assert_eq!(AbiFormat::detect(Path::new("abi")), AbiFormat::Json);
    }

    #[test]
    fn test_extract_go_abi_unescapes_literal() {
        let source = r#"
var RegRelayMetaData = &bind.MetaData{
	ABI: "[{\"inputs\":[],\"name\":\"Unauthorized\",\"type\":\"error\"}]",
	Bin: "0x6080",
}
"#;
        let json = extract_go_abi(source).unwrap().unwrap();
        assert_eq!(
            json,
            r#"[{"inputs":[],"name":"Unauthorized","type":"error"}]"#
        );
    }

    #[test]
    fn test_load_abi_reads_json_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("Store.json");
        std::fs::write(&path, r#"[{"type":"error","name":"Unauthorized","inputs":[]}]"#).unwrap();

        let doc = load_abi(&path, AbiFormat::detect(&path)).unwrap();
        assert_eq!(doc.count_errors(), 1);
    }

    #[test]
    fn test_load_abi_missing_file_names_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing.json");

        match load_abi(&path, AbiFormat::Json).unwrap_err() {
            InputError::FileNotFound { path: reported } => {
                assert_eq!(reported, path.display().to_string())
            }
            other => panic!("Expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_extract_go_abi_absent() {
        assert!(extract_go_abi("package main\n").is_none());
    }
}
