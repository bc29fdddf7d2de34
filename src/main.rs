//! pixflow command line
//!
//! Loads saved graphs and renders them headlessly, one image at a time or
//! in batches.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use log::info;

use pixflow::nodes::{LoggingHooks, NodeRegistry};
use pixflow::persistence::load_graph;
use pixflow::{BatchProcess, EngineConfig, NodeGraph, NodeId};

#[derive(Parser, Debug)]
#[command(name = "pixflow", version, about = "Node-based image processing")]
struct Cli {
    /// Config file to use instead of ~/.pixflow/config.json
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available node types by category.
    Types,
    /// Print the nodes, connections and state of a graph file.
    Inspect {
        /// Graph file (.imgflow)
        graph: PathBuf,
    },
    /// Render one node's first output to a PNG.
    Render(RenderArgs),
    /// Run a graph over many input images.
    Batch(BatchArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Graph file (.imgflow)
    graph: PathBuf,

    /// Uid of the node to render
    #[arg(long)]
    node: NodeId,

    /// Output PNG path
    #[arg(long)]
    out: PathBuf,

    /// Uid of a File In node to load `--image` into
    #[arg(long, requires = "image")]
    input: Option<NodeId>,

    /// Image to load into the `--input` node
    #[arg(long, requires = "input")]
    image: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Graph file (.imgflow)
    graph: PathBuf,

    /// Uid of the File In node that receives each input
    #[arg(long)]
    input_node: NodeId,

    /// Uid of the File Out node that is written for each input
    #[arg(long)]
    output_node: NodeId,

    /// Directory for `<name>_out.png` results
    #[arg(long)]
    out_dir: PathBuf,

    /// Input images
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => EngineConfig::load_from(path),
        None => EngineConfig::load(),
    }
    .context("load config")?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let registry = NodeRegistry::default();
    match cli.cmd {
        Command::Types => cmd_types(&registry),
        Command::Inspect { graph } => cmd_inspect(&registry, &config, &graph),
        Command::Render(args) => cmd_render(&registry, &config, args),
        Command::Batch(args) => cmd_batch(&registry, &config, args),
    }
}

fn open_graph(registry: &NodeRegistry, config: &EngineConfig, path: &Path) -> anyhow::Result<NodeGraph> {
    let mut graph = load_graph(path, registry)
        .with_context(|| format!("load graph '{}'", path.display()))?;
    config.apply_to(&mut graph);
    graph.add_hooks(Box::new(LoggingHooks));
    Ok(graph)
}

fn cmd_types(registry: &NodeRegistry) -> anyhow::Result<()> {
    for category in registry.categories() {
        println!("{}", category.display_string());
        for node_type in registry.nodes_in_category(category) {
            if let Some(meta) = registry.get_metadata(node_type) {
                println!("  {}", meta.listing());
                for port in meta.port_listing() {
                    println!("      {}", port);
                }
            }
        }
    }
    Ok(())
}

fn cmd_inspect(registry: &NodeRegistry, config: &EngineConfig, path: &Path) -> anyhow::Result<()> {
    let graph = open_graph(registry, config, path)?;

    println!("{}", path.display());
    for node in graph.nodes() {
        println!(
            "  [{}] {} ({}) at ({}, {})",
            node.id, node.title, node.type_name, node.position.x, node.position.y
        );
        for property in node.properties.iter().skip(1) {
            println!("      {} = {}", property.name, property.serialize_value());
        }
    }
    for connection in graph.connections() {
        println!("  {} -> {}", connection.from_socket(), connection.to_socket());
    }

    let stats = graph.get_stats();
    println!(
        "{} nodes, {} connections, {} stale",
        stats.total_nodes, stats.connections, stats.stale_nodes
    );
    Ok(())
}

fn cmd_render(registry: &NodeRegistry, config: &EngineConfig, args: RenderArgs) -> anyhow::Result<()> {
    let mut graph = open_graph(registry, config, &args.graph)?;

    if let (Some(input), Some(image)) = (args.input, &args.image) {
        graph
            .load_file(input, image)
            .with_context(|| format!("load '{}' into node {}", image.display(), input))?;
    }

    let rendered = graph
        .evaluate(args.node, 0)
        .with_context(|| format!("evaluate node {}", args.node))?
        .with_context(|| format!("node {} produced no image", args.node))?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    pixflow::nodes::pixel::save_png(&rendered, &args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    info!("Wrote {}", args.out.display());
    Ok(())
}

fn cmd_batch(registry: &NodeRegistry, config: &EngineConfig, args: BatchArgs) -> anyhow::Result<()> {
    let mut graph = open_graph(registry, config, &args.graph)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let report = BatchProcess::new()
        .with_input_files(args.files)
        .with_output_dir(&args.out_dir)
        .with_input_node(args.input_node)
        .with_output_node(args.output_node)
        .with_output_suffix(&config.output_suffix)
        .run(&mut graph)
        .context("run batch")?;

    for path in &report.processed {
        println!("wrote {}", path.display());
    }
    for (path, reason) in &report.failures {
        eprintln!("failed {}: {}", path.display(), reason);
    }
    if !report.is_success() {
        let total = report.failures.len() + report.processed.len();
        anyhow::bail!("{} of {} inputs failed", report.failures.len(), total);
    }
    Ok(())
}
