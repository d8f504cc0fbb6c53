use clap::Parser;
use pipegraph::prelude::*;
use std::fs;
use std::time::Instant;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Replays a scripted editing session against the workflow graph editor
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the process palette JSON file (an array of process identifiers)
    processes_path: String,
    /// Path to the dataset collection JSON file (an object of key -> metadata)
    datasets_path: String,
    /// Path to the event script JSON file (an array of editor events)
    script_path: String,

    /// Optional editor configuration JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// Seed for node identifiers, overriding the config
    #[arg(short, long)]
    seed: Option<u64>,

    /// Where to write the rendered SVG
    #[arg(short, long, default_value = "workflow.svg")]
    output: String,

    /// Stop at the first event that fails instead of reporting it and continuing
    #[arg(long)]
    strict: bool,
}

fn main() {
    if let Err(e) = init_tracing() {
        eprintln!("Warning: {}", e);
    }

    let cli = Cli::parse();
    let sink = TracingSink;
    run(cli, &sink);
}

fn run(cli: Cli, sink: &dyn NotificationSink) {
    let total_start = Instant::now();

    // --- 1. Loading ---
    let palette = ProcessPalette::from_file(&cli.processes_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load process palette: {}", e)));
    let datasets = DatasetCollection::from_file(&cli.datasets_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load datasets: {}", e)));
    let mut config = match &cli.config {
        Some(path) => EditorConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => EditorConfig::default(),
    };
    if cli.seed.is_some() {
        config.id_seed = cli.seed;
    }

    let script_json = fs::read_to_string(&cli.script_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read script file '{}': {}",
            &cli.script_path, e
        ))
    });
    let script = EditorEvent::script_from_json(&script_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse script JSON: {}", e)));

    println!(
        "Loaded {} process types, {} datasets, {} events",
        palette.process_ids().len(),
        datasets.len(),
        script.len()
    );

    // --- 2. Replay ---
    let mut editor = WorkflowEditor::builder(palette)
        .with_datasets(datasets)
        .with_config(config)
        .build();

    let replay_start = Instant::now();
    let mut failures = 0usize;
    for (step, event) in script.into_iter().enumerate() {
        let description = format!("{:?}", event);
        if let Err(e) = editor.handle(event) {
            failures += 1;
            sink.error(&format!("Step {}: {} failed: {}", step, description, e));
            if cli.strict {
                exit_with_error(&format!("Aborting at step {}: {}", step, e));
            }
        }
    }
    let replay_duration = replay_start.elapsed();

    // --- 3. Output ---
    fs::write(&cli.output, editor.to_svg()).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to write SVG '{}': {}", &cli.output, e))
    });
    sink.message(&format!("Wrote scene to '{}'", &cli.output));

    // --- 4. Summary ---
    let model = editor.model();
    println!("\n--- Workflow Summary ---");
    for node in model.nodes() {
        let inputs: Vec<String> = node.inputs().iter().map(InputItem::display).collect();
        println!(
            "  {} at ({}, {}) <- [{}]",
            node.display(),
            node.position().x,
            node.position().y,
            inputs.join(", ")
        );
    }
    println!("Links: {}", model.links().len());

    if let (Some(node), Some(candidates)) = (editor.selected_node(), editor.candidates()) {
        println!("\nSelected: {}", node);
        let labels: Vec<String> = candidates
            .available()
            .iter()
            .map(InputItem::display)
            .collect();
        println!("  Candidates: [{}]", labels.join(", "));
        match candidates.chosen() {
            Some(item) => println!("  Chosen: {}", item),
            None => println!("  Chosen: <none>"),
        }
    }

    println!("\n--- Replay Summary ---");
    println!("Failed events:  {}", failures);
    println!("Replay:         {:?}", replay_duration);
    println!("Total:          {:?}", total_start.elapsed());
    println!();
}

/// Installs a formatted subscriber filtered by `RUST_LOG` (default `info`).
fn init_tracing() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| format!("Failed to create env filter: {e}"))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_level(true))
        .with(env_filter)
        .try_init()
        .map_err(|e| format!("Failed to initialize tracing: {e}"))?;
    Ok(())
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
