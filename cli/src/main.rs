//! Linkrank CLI: rank the nodes of an edge-list file, or generate a random one

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use linkrank::{
    build_graph, compute_rank, generate_edge_list, ranked_nodes, save_edge_list, top_n,
    Algorithm, Graph, RankConfig, RankOutcome, RankedNode,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(name = "linkrank", version, about = "PageRank for edge-list graphs")]
struct Cli {
    /// Log solver progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute PageRank for an edge-list file (`parent,child` per line)
    Rank {
        /// Edge-list file
        #[arg(short = 'f', long = "file")]
        file: PathBuf,

        /// YAML or JSON config file; flags given on the command line override it
        #[arg(long)]
        config: Option<PathBuf>,

        /// Damping factor in (0, 1)
        #[arg(long)]
        alpha: Option<f64>,

        /// Iteration cap for the iterative solver
        #[arg(long)]
        iterations: Option<usize>,

        /// `iterative` or `exact`
        #[arg(long)]
        algo: Option<Algorithm>,

        /// Round scores to three decimals (the default unless the config file says otherwise)
        #[arg(long, overrides_with = "no_round")]
        round: bool,

        /// Print full-precision scores instead of three decimals
        #[arg(long, overrides_with = "round")]
        no_round: bool,

        /// Only show the N best nodes, highest first
        #[arg(long)]
        top: Option<usize>,

        /// Output format
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },
    /// Write a random edge list
    Generate {
        /// Number of distinct node ids to draw from
        #[arg(long)]
        nodes: u64,

        /// Number of edges to draw
        #[arg(long)]
        edges: usize,

        /// Output file
        #[arg(long)]
        out: PathBuf,

        /// Seed for a reproducible edge list
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Rank {
            file,
            config,
            alpha,
            iterations,
            algo,
            round,
            no_round,
            top,
            format,
        } => load_config(config.as_deref()).and_then(|mut rank_config| {
            if let Some(alpha) = alpha {
                rank_config.alpha = alpha;
            }
            if let Some(iterations) = iterations {
                rank_config.max_iterations = iterations;
            }
            if let Some(algo) = algo {
                rank_config.algorithm = algo;
            }
            apply_round_flags(&mut rank_config, round, no_round);
            run_rank(&file, &rank_config, top, &format)
        }),
        Commands::Generate {
            nodes,
            edges,
            out,
            seed,
        } => run_generate(nodes, edges, &out, seed),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Config from file, or the defaults. Rounding is on unless the file sets `round`.
fn load_config(path: Option<&Path>) -> Result<RankConfig> {
    let Some(path) = path else {
        return Ok(RankConfig::default().with_rounding(true));
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let mut config = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => RankConfig::from_json_str(&text),
        _ => RankConfig::from_yaml_str(&text),
    }
    .with_context(|| format!("parsing config {}", path.display()))?;

    if !sets_round(&text) {
        config.round = true;
    }
    Ok(config)
}

/// Whether a YAML or JSON config names `round` at the top level
fn sets_round(text: &str) -> bool {
    serde_yaml::from_str::<serde_yaml::Value>(text)
        .ok()
        .and_then(|doc| doc.as_mapping().map(|m| m.contains_key("round")))
        .unwrap_or(false)
}

/// `--round` and `--no-round` override whatever the config decided
fn apply_round_flags(config: &mut RankConfig, round: bool, no_round: bool) {
    if round {
        config.round = true;
    } else if no_round {
        config.round = false;
    }
}

fn run_rank(file: &Path, config: &RankConfig, top: Option<usize>, format: &OutputFormat) -> Result<()> {
    config.validate().context("invalid rank options")?;
    let graph = build_graph(file).with_context(|| format!("loading {}", file.display()))?;
    let outcome = compute_rank(&graph, config)?;

    let rows = match top {
        Some(n) => top_n(&graph, &outcome.scores, n),
        None => ranked_nodes(&graph, &outcome.scores),
    };

    match format {
        OutputFormat::Json => print_json(&graph, &outcome, &rows)?,
        OutputFormat::Csv => {
            println!("position,node,score");
            for row in &rows {
                println!("{},{},{}", row.position, csv_field(row.name.as_str()), row.score);
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["#", "Node", "Score"]);
            for row in &rows {
                table.add_row(vec![
                    row.position.to_string(),
                    row.name.to_string(),
                    row.score.to_string(),
                ]);
            }
            println!("{}", table);
            print_summary(&graph, &outcome);
        }
    }

    Ok(())
}

fn print_json(graph: &Graph, outcome: &RankOutcome, rows: &[RankedNode]) -> Result<()> {
    let doc = serde_json::json!({
        "nodes": graph.len(),
        "edges": graph.edge_count(),
        "algorithm": outcome.algorithm,
        "iterations": outcome.iterations,
        "residual": outcome.residual,
        "converged": outcome.converged,
        "ranks": rows,
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn print_summary(graph: &Graph, outcome: &RankOutcome) {
    println!(
        "{} node(s), {} edge(s), {} solver",
        graph.len(),
        graph.edge_count(),
        outcome.algorithm
    );
    match outcome.algorithm {
        Algorithm::Iterative if !outcome.converged => println!(
            "warning: stopped at the iteration cap ({} iterations, last L1 step {:e})",
            outcome.iterations, outcome.residual
        ),
        Algorithm::Iterative => println!("converged after {} iteration(s)", outcome.iterations),
        Algorithm::Exact => println!("linear system residual {:e}", outcome.residual),
    }
}

fn csv_field(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

fn run_generate(nodes: u64, edges: usize, out: &Path, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let edge_list = generate_edge_list(nodes, edges, &mut rng)?;
    save_edge_list(out, &edge_list).with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {} edge(s) over {} node id(s) to {}", edge_list.len(), nodes, out.display());
    Ok(())
}
