use clap::{Parser, Subcommand, ValueEnum};
use stagewise::prelude::*;
use std::fs;
use std::time::Instant;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyCli {
    Staggered,
    Ranked,
}

/// Inspect, lay out, and round-trip staged pipeline documents
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a summary of the document's stages, functions, and warnings
    Inspect {
        /// Path to the pipeline document JSON file
        document_path: String,
    },
    /// Rebuild every stage graph, run a layout strategy, and write the
    /// document back with the computed positions
    Layout {
        /// Path to the pipeline document JSON file
        document_path: String,

        /// The layout strategy to apply
        #[arg(short, long, value_enum)]
        strategy: Option<StrategyCli>,

        /// Output path; defaults to overwriting the input
        #[arg(short, long)]
        out: Option<String>,
    },
    /// Load the document, convert it through the stage graphs, and
    /// re-export it, printing any warnings raised on the way
    Roundtrip {
        /// Path to the pipeline document JSON file
        document_path: String,

        /// Output path; defaults to overwriting the input
        #[arg(short, long)]
        out: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Command::Inspect { document_path } => run_inspect(document_path),
        Command::Layout {
            document_path,
            strategy,
            out,
        } => run_layout(document_path, strategy, out),
        Command::Roundtrip { document_path, out } => run_roundtrip(document_path, out),
    }
}

fn load_state(document_path: &str) -> EditorState {
    let bytes = fs::read(document_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read document file '{}': {}",
            document_path, e
        ))
    });
    let state = EditorState::load(&bytes, &EmptyCatalog)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load document: {}", e)));
    for warning in state.warnings() {
        eprintln!("warning: {}", warning);
    }
    state
}

fn run_inspect(document_path: String) {
    let load_start = Instant::now();
    let state = load_state(&document_path);
    let document = state.document();
    println!(
        "Loaded '{}' (version {}) in {:?}",
        document.name,
        document.version,
        load_start.elapsed()
    );

    for kind in StageKind::ALL {
        let stage = document.stage(kind).expect("loaded documents carry all stages");
        let graph = state.graph(kind).expect("one graph per stage");
        println!(
            "  {:<17} enabled={} steps={} functions={} parameter_nodes={} edges={}",
            kind,
            stage.enabled,
            stage.steps,
            stage.functions.len(),
            stage.parameters.len(),
            graph.edges.len()
        );
        for function in &stage.functions {
            println!(
                "    [{}] {} ({} params, {} bindings)",
                function.id,
                function.display_name(),
                function.parameters.len(),
                function.parameter_nodes.len()
            );
            for (name, value) in &function.parameters {
                println!("        {}: {} ({})", name, value, ParamKind::of(value));
            }
        }
    }
}

fn run_layout(document_path: String, strategy: Option<StrategyCli>, out: Option<String>) {
    let mut state = load_state(&document_path);

    let layout_start = Instant::now();
    match strategy.unwrap_or(StrategyCli::Staggered) {
        StrategyCli::Staggered => state.layout_all(&StaggeredLayout::new()),
        StrategyCli::Ranked => state.layout_all(&RankedLayout::default()),
    }
    println!("Layout computed in {:?}", layout_start.elapsed());

    let bytes = state
        .save()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize document: {}", e)));
    let out_path = out.unwrap_or(document_path);
    fs::write(&out_path, bytes).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to write document '{}': {}", out_path, e))
    });
    println!("Wrote '{}'", out_path);
}

fn run_roundtrip(document_path: String, out: Option<String>) {
    let state = load_state(&document_path);
    let bytes = state
        .save()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize document: {}", e)));
    let out_path = out.unwrap_or(document_path);
    fs::write(&out_path, bytes).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to write document '{}': {}", out_path, e))
    });
    println!("Wrote '{}'", out_path);
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
