use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use ndarray::{ArrayBase, Data, Ix1};

use discrim::feature_selection::univariate_selection::MethodRanking;
use discrim::SelectionOutcome;

use crate::util::delimiter_for;

fn open_output(path: Option<&Path>) -> Result<(Box<dyn Write>, u8)> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {:?}", path))?;
            Ok((Box::new(BufWriter::new(file)), delimiter_for(path)))
        }
        None => Ok((Box::new(io::stdout()), b',')),
    }
}

/// Write the reduced matrix with the selected feature names as header.
///
/// The delimiter follows the output extension; stdout gets CSV. Nothing is
/// written when no feature was selected.
pub fn write_reduced_matrix(
    outcome: &SelectionOutcome,
    feature_names: &[String],
    output_path: Option<&Path>,
) -> Result<()> {
    let (sink, delimiter) = open_output(output_path)?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(sink);

    // csv writes `""` for an empty record, so zero selected columns give an empty table
    if outcome.indices.is_empty() {
        writer.flush()?;
        return Ok(());
    }

    writer.write_record(outcome.indices.iter().map(|&i| feature_names[i].as_str()))?;
    for row in outcome.reduced.rows() {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }

    writer.flush()?;
    Ok(())
}

/// Write a ranking table (`rank`, `index`, `feature`, `score`) for `order`.
pub fn write_ranking<S>(
    scores: &ArrayBase<S, Ix1>,
    order: &[usize],
    feature_names: &[String],
    output_path: Option<&Path>,
) -> Result<()>
where
    S: Data<Elem = f64>,
{
    let (sink, delimiter) = open_output(output_path)?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(sink);

    writer.write_record(["rank", "index", "feature", "score"])?;
    for (rank, &idx) in order.iter().enumerate() {
        writer.write_record(&[
            (rank + 1).to_string(),
            idx.to_string(),
            feature_names[idx].clone(),
            scores[idx].to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// One line per method: the selected feature names with their scores.
pub fn format_method_rankings(rankings: &[MethodRanking], feature_names: &[String]) -> String {
    let mut out = String::new();
    for ranking in rankings {
        let picked: Vec<String> = ranking
            .selection
            .indices
            .iter()
            .zip(ranking.selection.scores.iter())
            .map(|(&i, s)| format!("{}={:.4}", feature_names[i], s))
            .collect();
        out.push_str(&format!(
            "{:<24} top-{}: {}\n",
            ranking.method.to_string(),
            ranking.k.effective,
            picked.join(", ")
        ));
    }
    out
}
