use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use discrim::ScoringMethod;

use crate::util::validate_tsv_or_csv_file;

/// Parameters of a `discrim select` / `discrim rank` run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SelectConfig {
    /// CSV/TSV feature table with a header row.
    pub data: String,
    /// Instance counts of the two classes, in row order.
    pub class_sizes: Option<Vec<usize>>,
    /// Column holding the class label. It is excluded from the features and,
    /// without `class_sizes`, used to derive them.
    pub label_column: Option<String>,
    pub method: ScoringMethod,
    /// Features to keep; all of them when unset.
    pub num_features: Option<isize>,
    /// Where to write the result. Defaults to stdout.
    pub output_file: Option<String>,
    /// Also rank the features with every scoring method.
    pub compare_methods: bool,
}

impl Default for SelectConfig {
    fn default() -> Self {
        SelectConfig {
            data: String::new(),
            class_sizes: None,
            label_column: None,
            method: ScoringMethod::default(),
            num_features: None,
            output_file: None,
            compare_methods: false,
        }
    }
}

/// Load a selection configuration from a JSON file.
pub fn load_select_config<P: AsRef<Path>>(path: P) -> Result<SelectConfig> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    parse_select_config(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))
}

/// Parse a JSON configuration, keeping defaults for missing or invalid fields.
pub fn parse_select_config(json: &str) -> Result<SelectConfig> {
    let partial: serde_json::Value = serde_json::from_str(json)?;
    let mut config = SelectConfig::default();

    macro_rules! load_or_default {
        ($field:ident) => {
            if let Some(val) = partial.get(stringify!($field)) {
                if let Ok(parsed) = serde_json::from_value(val.clone()) {
                    config.$field = parsed;
                } else {
                    log::warn!(
                        "Config Invalid value for '{}', using default: {:?}",
                        stringify!($field),
                        config.$field
                    );
                }
            } else {
                log::debug!(
                    "Config Missing field '{}', using default: {:?}",
                    stringify!($field),
                    config.$field
                );
            }
        };
    }

    load_or_default!(data);
    load_or_default!(class_sizes);
    load_or_default!(label_column);
    load_or_default!(method);
    load_or_default!(num_features);
    load_or_default!(output_file);
    load_or_default!(compare_methods);

    Ok(config)
}

impl SelectConfig {
    /// Build the configuration from an optional JSON file and apply CLI overrides.
    pub fn from_arguments(config_path: Option<&PathBuf>, matches: &ArgMatches) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => load_select_config(path)?,
            None => SelectConfig::default(),
        };

        if let Some(data) = matches.get_one::<String>("data") {
            config.data = data.clone();
        }
        validate_tsv_or_csv_file(&config.data)?;

        if let Some(sizes) = matches.get_many::<usize>("class_sizes") {
            config.class_sizes = Some(sizes.copied().collect());
        }
        if let Some(label_column) = matches.get_one::<String>("label_column") {
            config.label_column = Some(label_column.clone());
        }
        if let Some(method) = matches.get_one::<String>("method") {
            config.method = method.parse().map_err(anyhow::Error::msg)?;
        }
        if let Some(k) = matches.get_one::<isize>("num_features") {
            config.num_features = Some(*k);
        }
        if let Some(output_file) = matches.get_one::<String>("output_file") {
            config.output_file = Some(output_file.clone());
        }
        if let Ok(Some(true)) = matches.try_get_one::<bool>("compare") {
            config.compare_methods = true;
        }

        if config.class_sizes.is_none() && config.label_column.is_none() {
            anyhow::bail!("Provide either class sizes (--class-sizes n1,n2) or a label column (--label-column)");
        }

        Ok(config)
    }
}
