use clap::{Args, Parser, Subcommand};
use engineering_insights::config::AppConfig;
use engineering_insights::error::AppError;
use engineering_insights::insights::{
    CareerLevel, JobTrack, ReportAssembler, ReviewTable, ScoreGrid, ScoreMap,
};
use engineering_insights::telemetry;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "engineering-insights",
    about = "Render interactive comparisons of engineering review scores across levels and tracks",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the HTML comparison report (default command)
    Report(ReportArgs),
    /// Print the mean score per category for every level and track as JSON
    Scores(DataArgs),
}

#[derive(Args, Debug, Default)]
struct DataArgs {
    /// Review data CSV (defaults to INSIGHTS_DATA_PATH or data/data.csv)
    #[arg(long)]
    data: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
struct ReportArgs {
    #[command(flatten)]
    input: DataArgs,
    /// HTML template with the chart placeholders
    #[arg(long)]
    template: Option<PathBuf>,
    /// Where to write the rendered report
    #[arg(long)]
    output: Option<PathBuf>,
    /// Print a JSON summary of the aggregated data after writing
    #[arg(long)]
    summary: bool,
}

#[derive(Debug, Serialize)]
struct CohortScores<'a> {
    level: CareerLevel,
    track: JobTrack,
    data_level: &'a str,
    data_track: &'a str,
    scores: &'a ScoreMap,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli
        .command
        .unwrap_or_else(|| Command::Report(ReportArgs::default()))
    {
        Command::Report(args) => run_report(args, &config),
        Command::Scores(args) => run_scores(args, &config),
    }
}

fn run_report(args: ReportArgs, config: &AppConfig) -> Result<(), AppError> {
    let data = args.input.data.unwrap_or_else(|| config.paths.data.clone());
    let template = args
        .template
        .unwrap_or_else(|| config.paths.template.clone());
    let output = args.output.unwrap_or_else(|| config.paths.output.clone());

    let table = ReviewTable::from_path(&data, &config.columns)?;
    info!(data = %data.display(), rows = table.len(), "review data loaded");

    let assembler = ReportAssembler::new(config.labels.clone());
    let (written, summary) = assembler.generate_with_summary(&table, &template, &output)?;
    println!("{}", written.display());

    if args.summary {
        print_json(&summary)?;
    }

    Ok(())
}

fn run_scores(args: DataArgs, config: &AppConfig) -> Result<(), AppError> {
    let data = args.data.unwrap_or_else(|| config.paths.data.clone());
    let table = ReviewTable::from_path(&data, &config.columns)?;
    let grid = ScoreGrid::compute(&table, &config.labels);

    let cohorts: Vec<CohortScores<'_>> = JobTrack::ordered()
        .into_iter()
        .flat_map(|track| {
            CareerLevel::ordered()
                .into_iter()
                .map(move |level| (level, track))
        })
        .map(|(level, track)| CohortScores {
            level,
            track,
            data_level: config.labels.level(level),
            data_track: config.labels.track(track),
            scores: grid.get(level, track),
        })
        .collect();

    print_json(&cohorts)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
