//! CLI selection flow: load a feature table, score it and report the result.
pub mod input;
pub mod load_data;
pub mod output;

use anyhow::{Context, Result};

use discrim::feature_selection::build_scorer;
use discrim::feature_selection::top_k::rank;
use discrim::feature_selection::univariate_selection::{rank_all_methods, MethodRanking};
use discrim::feature_selection::FeatureScores;
use discrim::math::ClassSizes;
use discrim::{select, SelectionOutcome};

use input::SelectConfig;
use load_data::{load_feature_table, FeatureTable};

/// Result of `discrim select`.
#[derive(Debug)]
pub struct SelectRun {
    pub table: FeatureTable,
    pub outcome: SelectionOutcome,
    /// Rankings of every method when `compare_methods` is set.
    pub rankings: Option<Vec<MethodRanking>>,
}

/// Result of `discrim rank`.
#[derive(Debug)]
pub struct RankRun {
    pub table: FeatureTable,
    pub scored: FeatureScores,
    /// Best-first order of all features.
    pub order: Vec<usize>,
}

/// Explicit class sizes win over sizes derived from the label column.
pub fn resolve_class_sizes(config: &SelectConfig, table: &FeatureTable) -> Result<Vec<usize>> {
    if let Some(sizes) = &config.class_sizes {
        return Ok(sizes.clone());
    }
    let labels = table
        .labels
        .as_ref()
        .context("No class sizes given and no label column loaded")?;
    let sizes = ClassSizes::from_labels(labels)?;
    log::info!("Derived class sizes {}+{} from label column", sizes.n1, sizes.n2);
    Ok(vec![sizes.n1, sizes.n2])
}

fn load(config: &SelectConfig) -> Result<(FeatureTable, Vec<usize>)> {
    let table = load_feature_table(&config.data, config.label_column.as_deref())?;
    let class_sizes = resolve_class_sizes(config, &table)?;
    Ok((table, class_sizes))
}

/// Select the configured number of features and project the table onto them.
pub fn run_selection(config: &SelectConfig) -> Result<SelectRun> {
    let (table, class_sizes) = load(config)?;
    let scorer = build_scorer(config.method);

    let outcome = select(
        Some(table.x.view()),
        &class_sizes,
        Some(scorer.as_ref()),
        config.num_features,
    )?;

    let rankings = if config.compare_methods {
        Some(rank_all_methods(table.x.view(), &class_sizes, config.num_features)?)
    } else {
        None
    };

    for (score, &idx) in outcome.scores.iter().zip(outcome.indices.iter()) {
        log::info!("{}: {} ({}) score {:.6}", config.method, table.feature_names[idx], idx, score);
    }

    Ok(SelectRun {
        table,
        outcome,
        rankings,
    })
}

/// Score every feature and rank all of them, without projecting.
pub fn run_ranking(config: &SelectConfig) -> Result<RankRun> {
    let (table, class_sizes) = load(config)?;
    let num_features = config.num_features.unwrap_or(table.x.ncols() as isize);

    let scored = build_scorer(config.method).score(table.x.view(), &class_sizes, num_features)?;
    let mut order = rank(&scored.scores);
    order.truncate(scored.k.effective);

    Ok(RankRun {
        table,
        scored,
        order,
    })
}
