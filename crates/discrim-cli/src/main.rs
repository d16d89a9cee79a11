use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::{Path, PathBuf};

use discrim_cli::select::input::SelectConfig;
use discrim_cli::select::output::{format_method_rankings, write_ranking, write_reduced_matrix};
use discrim_cli::select::{run_ranking, run_selection};

fn data_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("config")
            .help("Path to a JSON selection configuration file")
            .required(false)
            .value_parser(clap::value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath),
    )
    .arg(
        Arg::new("data")
            .short('d')
            .long("data")
            .value_parser(clap::builder::NonEmptyStringValueParser::new())
            .help(
                "Path to the feature table (*.csv or *.tsv, with header). \
                 Overrides the data file specified in the configuration file.",
            )
            .value_hint(ValueHint::FilePath),
    )
    .arg(
        Arg::new("class_sizes")
            .short('c')
            .long("class-sizes")
            .help("Instance counts of the two classes in row order, e.g. 50,40")
            .value_delimiter(',')
            .num_args(1)
            .value_parser(clap::value_parser!(usize)),
    )
    .arg(
        Arg::new("label_column")
            .short('l')
            .long("label-column")
            .help("Column holding the class labels; rows must be grouped by class")
            .value_parser(clap::builder::NonEmptyStringValueParser::new()),
    )
    .arg(
        Arg::new("method")
            .short('m')
            .long("method")
            .help(
                "Scoring method: fisher, correlation_with_class (or correlation), t_test. \
                 Overrides the method in the configuration file.",
            )
            .value_parser(clap::builder::NonEmptyStringValueParser::new())
            .value_hint(ValueHint::Other),
    )
    .arg(
        Arg::new("num_features")
            .short('k')
            .long("num-features")
            .help("Number of features to keep. Defaults to all features, ranked.")
            .allow_negative_numbers(true)
            .value_parser(clap::value_parser!(isize)),
    )
    .arg(
        Arg::new("output_file")
            .short('o')
            .long("output")
            .help("Output file (*.csv or *.tsv). Defaults to stdout.")
            .value_parser(clap::builder::NonEmptyStringValueParser::new())
            .value_hint(ValueHint::FilePath),
    )
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("DISCRIM_LOG", "error,discrim=info"))
        .init();

    let matches = Command::new("discrim")
        .version(clap::crate_version!())
        .author("Justin Sing <justincsing@gmail.com>")
        .about("Rank features of a two-class dataset by discriminative power")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            data_args(
                Command::new("select")
                    .about("Keep the top-k features and write the reduced feature table"),
            )
            .arg(
                Arg::new("compare")
                    .long("compare")
                    .help("Also report the top-k features of every scoring method")
                    .action(ArgAction::SetTrue),
            ),
        )
        .subcommand(data_args(
            Command::new("rank").about("Write the ranking table of all features for one method"),
        ))
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Written by {author-with-newline}Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match matches.subcommand() {
        Some(("select", sub_m)) => handle_select(sub_m),
        Some(("rank", sub_m)) => handle_rank(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_select(matches: &ArgMatches) -> Result<()> {
    let config = SelectConfig::from_arguments(matches.get_one::<PathBuf>("config"), matches)?;
    log::info!("[discrim::select] Selecting features from {:?}", config.data);

    match run_selection(&config) {
        Ok(run) => {
            if let Some(rankings) = &run.rankings {
                eprint!("{}", format_method_rankings(rankings, &run.table.feature_names));
            }
            let output = config.output_file.as_deref().map(Path::new);
            write_reduced_matrix(&run.outcome, &run.table.feature_names, output)?;
            log::info!(
                "[discrim::select] Kept {} of {} features",
                run.outcome.k.effective,
                run.table.x.ncols()
            );
            Ok(())
        }
        Err(e) => {
            log::error!("Selection failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

fn handle_rank(matches: &ArgMatches) -> Result<()> {
    let config = SelectConfig::from_arguments(matches.get_one::<PathBuf>("config"), matches)?;
    log::info!(
        "[discrim::rank] Ranking features of {:?} with {}",
        config.data,
        config.method
    );

    match run_ranking(&config) {
        Ok(run) => {
            let output = config.output_file.as_deref().map(Path::new);
            write_ranking(&run.scored.scores, &run.order, &run.table.feature_names, output)
        }
        Err(e) => {
            log::error!("Ranking failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
