use anyhow::Result;
use std::path::{Path, PathBuf};

pub fn validate_tsv_or_csv_file(path: &str) -> Result<()> {
    let pb = PathBuf::from(path);

    let ext = pb
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match ext.as_deref() {
        Some("tsv") | Some("csv") => {}
        _ => anyhow::bail!("File must have a .tsv or .csv extension: {}", path),
    }

    if !pb.exists() {
        anyhow::bail!("File does not exist: {}", path);
    }

    Ok(())
}

/// Tab for `.tsv` files, comma otherwise.
pub fn delimiter_for<P: AsRef<Path>>(path: P) -> u8 {
    let is_tsv = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("tsv"))
        .unwrap_or(false);
    if is_tsv {
        b'\t'
    } else {
        b','
    }
}
