use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use ndarray::Array2;

use crate::util::delimiter_for;

/// Numeric feature table read from a delimited file.
#[derive(Debug, Clone)]
pub struct FeatureTable {
    /// Header names of the feature columns, in matrix column order.
    pub feature_names: Vec<String>,
    /// Per-row values of the label column, when one was requested.
    pub labels: Option<Vec<String>>,
    /// Shape (n_rows, n_features).
    pub x: Array2<f64>,
}

/// Load a feature table from a CSV or TSV file with a header row.
///
/// Every column except `label_column` must hold numbers. Rows keep their file order.
pub fn load_feature_table<P: AsRef<Path>>(path: P, label_column: Option<&str>) -> Result<FeatureTable> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open file: {:?}", path.as_ref()))?;
    let reader = BufReader::new(file);

    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter_for(&path))
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let label_idx = match label_column {
        Some(name) => Some(
            headers
                .iter()
                .position(|h| h == name)
                .with_context(|| format!("Label column '{}' not found in header", name))?,
        ),
        None => None,
    };

    let feature_names: Vec<String> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != label_idx)
        .map(|(_, h)| h.to_string())
        .collect();

    let mut values = Vec::new();
    let mut labels = Vec::new();
    let mut nrows = 0;

    for (row, result) in rdr.records().enumerate() {
        let record = result?;
        for (i, field) in record.iter().enumerate() {
            if Some(i) == label_idx {
                labels.push(field.to_string());
                continue;
            }
            let value = field.trim().parse::<f64>().with_context(|| {
                format!(
                    "Row {}: column '{}' is not numeric: {:?}",
                    row + 1,
                    headers.get(i).unwrap_or("?"),
                    field
                )
            })?;
            values.push(value);
        }
        nrows += 1;
    }

    let x = Array2::from_shape_vec((nrows, feature_names.len()), values)
        .context("Feature table rows have inconsistent lengths")?;

    log::info!(
        "Loaded {} rows x {} features from {:?}",
        x.nrows(),
        x.ncols(),
        path.as_ref()
    );

    Ok(FeatureTable {
        feature_names,
        labels: label_idx.map(|_| labels),
        x,
    })
}
