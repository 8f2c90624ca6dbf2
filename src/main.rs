use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use canopy::generator::{DEFAULT_MAX_CHILDREN, DEFAULT_MAX_DEPTH};
use canopy::{
    codec, find_narrowest, find_widest, validate_height, GeneratorConfig, Node, SubtreeSearch,
};
use clap::Parser;
use colored::Colorize;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

/// Find the widest and narrowest subtrees of a given height in an n-ary tree
#[derive(Parser, Debug)]
#[command(name = "canopy")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Height of the subtrees to search for (prompted for when omitted)
    #[arg(short = 'H', long, allow_negative_numbers = true)]
    height: Option<i64>,

    /// Tree file to load, and to write when generating
    #[arg(short, long, env = "CANOPY_FILE", default_value = "n_tree.json")]
    file: PathBuf,

    /// Generate a random tree and save it to the tree file first
    #[arg(short, long)]
    generate: bool,

    /// Number of levels in a generated tree
    #[arg(
        long,
        env = "CANOPY_MAX_DEPTH",
        default_value_t = DEFAULT_MAX_DEPTH,
        allow_negative_numbers = true
    )]
    max_depth: i64,

    /// Maximum number of children per node in a generated tree
    #[arg(
        long,
        env = "CANOPY_MAX_CHILDREN",
        default_value_t = DEFAULT_MAX_CHILDREN,
        allow_negative_numbers = true
    )]
    max_children: i64,

    /// Seed for a reproducible generated tree
    #[arg(long, env = "CANOPY_SEED")]
    seed: Option<u64>,

    /// Log verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

impl Cli {
    fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            max_depth: self.max_depth,
            max_children: self.max_children,
            seed: self.seed,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let target = match cli.height {
        Some(height) => height,
        None => prompt_height()?,
    };
    validate_height(target)?;

    if cli.generate {
        let config = cli.generator_config();
        let tree = config.generate()?;
        codec::save(&cli.file, tree.as_ref())
            .with_context(|| format!("Cannot save tree to {}", cli.file.display()))?;
        info!("Generated tree with {:?}", config);
    }

    let root = codec::load(&cli.file)
        .with_context(|| format!("Cannot load tree from {}", cli.file.display()))?;

    println!("{}", "Tree structure:".bold());
    match &root {
        Some(root) => print!("{}", root),
        None => println!("(empty)"),
    }
    println!();

    let start = Instant::now();
    match &root {
        Some(root) => {
            let search = SubtreeSearch::new(root);
            let widest = search.widest(target)?;
            let narrowest = search.narrowest(target)?;
            let elapsed = start.elapsed();

            print_subtrees("Widest", target, widest.nodes(), widest.width());
            println!();
            print_subtrees("Narrowest", target, narrowest.nodes(), narrowest.width());
            print_elapsed(elapsed.as_secs_f64());
        }
        None => {
            let widest = find_widest(None, target)?;
            let narrowest = find_narrowest(None, target)?;
            let elapsed = start.elapsed();

            print_subtrees("Widest", target, &widest, None);
            println!();
            print_subtrees("Narrowest", target, &narrowest, None);
            print_elapsed(elapsed.as_secs_f64());
        }
    }

    Ok(())
}

fn prompt_height() -> Result<i64> {
    print!("Subtree height: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Cannot read subtree height")?;

    let line = line.trim();
    debug!("Read height {:?}", line);
    line.parse()
        .with_context(|| format!("Invalid subtree height {:?}", line))
}

fn print_subtrees(kind: &str, target: i64, nodes: &[&Node], width: Option<usize>) {
    let Some(width) = width else {
        println!(
            "{}",
            format!("No subtree found at height {}.", target).yellow()
        );
        return;
    };

    println!(
        "{}",
        format!(
            "{} subtrees at height {} (width {}):",
            kind, target, width
        )
        .bold()
    );
    for (i, subtree) in nodes.iter().enumerate() {
        println!("\nSubtree {}:", i + 1);
        print!("{}", subtree);
    }
}

fn print_elapsed(seconds: f64) {
    println!();
    println!("Total search time: {:.6} seconds", seconds);
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // Logs go to stderr so they never interleave with rendered trees
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    debug!("Log level {}", filter);
}
