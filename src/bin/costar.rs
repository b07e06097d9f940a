// src/bin/costar.rs
use std::path::PathBuf;
use std::process;

use anyhow::{bail, Result};
use clap::Parser;
use colored::Colorize;

use costar_core::cli::{Cli, Commands};
use costar_core::config::Config;
use costar_core::graph::{build_graph, centrality, CoStarGraph};
use costar_core::record::{MovieRecord, ReadStats, RecordReader};
use costar_core::report::{self, console};
use costar_core::similarity::{rank_similar, GenreMatrix, Metric};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load();
    match &cli.command {
        Some(Commands::Similar { actor, metric, top }) => {
            run_similar(&cli, &config, actor.clone(), *metric, *top)
        }
        Some(Commands::Centrality { top }) => run_centrality(&cli, &config, *top),
        None => run_centrality(&cli, &config, None),
    }
}

fn run_centrality(cli: &Cli, config: &Config, top: Option<usize>) -> Result<()> {
    let (records, read_stats) = load_records(cli, config)?;

    let mut graph = CoStarGraph::new();
    let build_stats = build_graph(records, &mut graph)?;

    let k = top.unwrap_or(config.top);
    let ranked = centrality::top_k(&graph, k);
    console::print_graph_summary(&graph, &ranked, read_stats, &build_stats, cli.verbose);

    let path = report::timestamped_path(&output_dir(cli, config), "network_centrality");
    report::export_edge_list(&graph, &path)?;
    console::print_report_written(&path);
    Ok(())
}

fn run_similar(
    cli: &Cli,
    config: &Config,
    actor: Option<String>,
    metric: Option<Metric>,
    top: Option<usize>,
) -> Result<()> {
    let Some(query_id) = actor.or_else(|| config.query_actor.clone()) else {
        bail!("no query actor: pass --actor <ID> or set query_actor in costar.toml");
    };
    let metric = metric.unwrap_or(config.metric);
    let k = top.unwrap_or(config.top);

    let (records, _read_stats) = load_records(cli, config)?;
    let matrix = GenreMatrix::build(&records);
    let ranked = rank_similar(&matrix, &query_id, metric, k)?;

    let query_name = matrix.actor_name(&query_id).unwrap_or(&query_id).to_string();
    console::print_similar(&query_id, &query_name, metric, &ranked);

    let path = report::timestamped_path(&output_dir(cli, config), "similar_actors_genre");
    report::export_similar_actors(&ranked, metric, &path)?;
    console::print_report_written(&path);
    Ok(())
}

fn load_records(cli: &Cli, config: &Config) -> Result<(Vec<MovieRecord>, ReadStats)> {
    let input = cli.input.clone().unwrap_or_else(|| config.input.clone());
    let mut reader = RecordReader::open(&input)?;
    let records: Vec<MovieRecord> = match cli.limit.or(config.limit) {
        Some(n) => reader.by_ref().take(n).collect(),
        None => reader.by_ref().collect(),
    };
    Ok((records, reader.stats()))
}

fn output_dir(cli: &Cli, config: &Config) -> PathBuf {
    cli.output_dir
        .clone()
        .unwrap_or_else(|| config.output_dir.clone())
}
