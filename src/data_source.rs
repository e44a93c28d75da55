use std::path::Path;

use anyhow::Context;

use crate::record::Record;

/// Parses a JSON array of record rows. A `null` document means no records.
pub fn parse_records(json: &str) -> anyhow::Result<Vec<Record>> {
    let rows: Option<Vec<Record>> = serde_json::from_str(json).context("Malformed record data")?;
    Ok(rows.unwrap_or_default())
}

pub fn load_records(path: &Path) -> anyhow::Result<Vec<Record>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read records from {}", path.display()))?;
    let records = parse_records(&json).with_context(|| format!("In {}", path.display()))?;

    log::info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn null_document_is_empty() {
        assert!(parse_records("null").unwrap().is_empty());
        assert!(parse_records("[]").unwrap().is_empty());
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(parse_records("{\"rows\": []}").is_err());
        assert!(parse_records("[[\"only a name\"]]").is_err());
    }

    #[test]
    fn loads_rows_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[["Ada", "ada.png", 36, "UK", "Maths", "$250,000"]]"#
        )
        .unwrap();

        let records = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].display_name, "Ada");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let error = load_records(&dir.path().join("data.json")).unwrap_err();
        assert!(format!("{error:#}").contains("data.json"));
    }
}
