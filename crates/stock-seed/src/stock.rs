//! Stock inventory file loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SeedError;

/// One inventory record from the stock file.
///
/// All four fields are required; a record missing any of them makes the
/// whole file malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    pub title: String,
    pub kind: String,
    pub description: String,
    pub quantity: i64,
}

/// Loads stock items from a JSON file.
///
/// The file must contain a JSON array of objects; item order is preserved.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<StockItem>, SeedError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| SeedError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = std::io::BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| SeedError::MalformedStock {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads stock items from JSON data in memory.
pub fn load_bytes(data: &[u8]) -> Result<Vec<StockItem>, serde_json::Error> {
    serde_json::from_slice(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_valid_stock() {
        let data = br#"[
            {"title": "Sunset", "kind": "BigPrint", "description": "A3 print", "quantity": 4},
            {"title": "Logo", "kind": "Button", "description": "Pin button", "quantity": 120}
        ]"#;

        let items = load_bytes(data).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Sunset");
        assert_eq!(items[0].quantity, 4);
        assert_eq!(items[1].kind, "Button");
    }

    #[test]
    fn test_missing_field_is_an_error() {
        // quantity absent
        let data = br#"[{"title": "Sunset", "kind": "BigPrint", "description": "A3 print"}]"#;

        assert!(load_bytes(data).is_err());
    }

    #[test]
    fn test_non_array_input_is_an_error() {
        let data = br#"{"title": "Sunset"}"#;

        assert!(load_bytes(data).is_err());
    }

    #[test]
    fn test_missing_file_error_names_the_path() {
        let err = load_file("no-such-stock.json").unwrap_err();

        assert!(err.to_string().contains("no-such-stock.json"));
    }
}
