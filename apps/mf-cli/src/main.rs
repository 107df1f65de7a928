use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use mf_session::{Session, SessionError};
use thiserror::Error;

#[derive(Parser)]
#[command(name = "mf-cli")]
#[command(about = "Max-flow solver over undirected weighted edge lists", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve max flow and print the step-by-step log
    Solve {
        /// Path to the edge list file (one `A B 10` line per edge)
        edges_path: PathBuf,
        /// Source node name
        #[arg(short, long)]
        source: String,
        /// Sink node name
        #[arg(short = 't', long)]
        sink: String,
        /// Emit the event log as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Parse and validate an edge list, reporting node and edge counts
    Check {
        /// Path to the edge list file
        edges_path: PathBuf,
    },
}

#[derive(Error, Debug)]
enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            edges_path,
            source,
            sink,
            json,
        } => cmd_solve(&edges_path, &source, &sink, json),
        Commands::Check { edges_path } => cmd_check(&edges_path),
    }
}

fn cmd_solve(edges_path: &Path, source: &str, sink: &str, json: bool) -> CliResult<()> {
    let mut session = load_session(edges_path)?;

    let total = session.run(source, sink)?;

    if json {
        println!("{}", serde_json::to_string_pretty(session.last_events())?);
    } else {
        println!("=== RUNNING MAX FLOW ===");
        for event in session.last_events() {
            println!("{}", event.describe(session.registry()));
        }
        println!("**********************");
        println!(" MAX FLOW: {total}");
        println!("**********************");
    }
    Ok(())
}

fn cmd_check(edges_path: &Path) -> CliResult<()> {
    let session = load_session(edges_path)?;
    println!(
        "OK: {} nodes, {} edges",
        session.nodes().len(),
        session.edge_count()
    );
    for node in session.nodes() {
        println!("  [{}] {}", node.id, node.name);
    }
    Ok(())
}

/// Read an edge list file into a fresh session. Each non-empty,
/// non-comment line is `<a> <b> <weight>` separated by whitespace.
fn load_session(edges_path: &Path) -> CliResult<Session> {
    let text = fs::read_to_string(edges_path)?;
    let mut session = Session::new();

    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        let &[a, b, weight] = fields.as_slice() else {
            return Err(SessionError::InvalidInput {
                what: format!(
                    "line {}: expected `<a> <b> <weight>`, got {:?}",
                    lineno + 1,
                    line
                ),
            }
            .into());
        };
        session.add_edge_text(a, b, weight)?;
    }
    Ok(session)
}
