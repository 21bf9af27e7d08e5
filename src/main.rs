use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use valleysim::artifact::write_routing_tables;
use valleysim::compiler::compile;
use valleysim::relabel::relabel_result_file;
use valleysim::topology::{parse_topology_file, validate_edge_consistency, Topology};

/// Topology compiler for inter-domain route propagation simulations
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the AS-relationship edge list (one '<from> <to> <relationship>' per line)
    #[arg(short, long)]
    topology: PathBuf,

    /// Output path for the compiled routing tables
    #[arg(short, long, default_value = "routing_tables.json")]
    output: PathBuf,

    /// Check that every link has a consistent reverse line before compiling
    #[arg(long)]
    validate: bool,

    /// Rewrite a result file's identity columns back to topology labels
    /// instead of compiling
    #[arg(long)]
    relabel: Option<PathBuf>,

    /// Output path for the relabeled result file
    #[arg(long, requires = "relabel")]
    relabel_output: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Reading topology from {:?}", args.topology);
    let edges = parse_topology_file(&args.topology)?;
    info!("Parsed {} links", edges.len());

    if args.validate {
        validate_edge_consistency(&edges)
            .map_err(|e| eyre!("Topology validation failed: {}", e))?;
        info!("Topology relationship consistency verified");
    }

    let topology = Topology::from_edges(&edges);
    info!("Indexed {} nodes", topology.node_count());

    // Handle relabeling if requested
    if let Some(result_file) = &args.relabel {
        let output_path = args.relabel_output.clone().unwrap_or_else(|| {
            let mut path = result_file.clone();
            path.set_extension("relabeled");
            path
        });

        relabel_result_file(&topology, result_file, &output_path)?;
        info!("Relabeled result written to {:?}", output_path);
        return Ok(());
    }

    let tables = compile(&topology)?;
    write_routing_tables(&tables, &args.output)?;
    info!(
        "Compiled routing tables for {} nodes to {:?}",
        topology.node_count(),
        args.output
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let args = Args::parse_from(["valleysim", "--topology", "topo.txt"]);

        assert_eq!(args.topology, PathBuf::from("topo.txt"));
        assert_eq!(args.output, PathBuf::from("routing_tables.json"));
        assert!(!args.validate);
        assert!(args.relabel.is_none());
    }

    #[test]
    fn test_relabel_args() {
        let args = Args::parse_from([
            "valleysim",
            "--topology",
            "topo.txt",
            "--relabel",
            "result.txt",
            "--relabel-output",
            "result_labeled.txt",
        ]);

        assert_eq!(args.relabel, Some(PathBuf::from("result.txt")));
        assert_eq!(args.relabel_output, Some(PathBuf::from("result_labeled.txt")));
    }
}
