//! xmerkle CLI - Command line interface for xor_merkle
//!
//! Builds a tree from blocks given as arguments or read from a file (one
//! block per line) and prints the root, a proof path, or the tree's levels.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use xor_merkle::{Blake3, Config, Digest, HashAlgorithm, LeafHasher, MerkleTree, Sha256};

#[derive(Parser)]
#[command(name = "xmerkle")]
#[command(about = "Build XOR-combined hash trees and extract proof paths")]
#[command(version)]
struct Cli {
    /// Output format (json or text)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Leaf hash function
    #[arg(long)]
    hasher: Option<HashAlgorithm>,

    /// Path to a config file (default: ~/.config/xmerkle/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Args)]
struct BlockArgs {
    /// Data blocks, one per argument
    blocks: Vec<String>,

    /// Read blocks from a file, one per line (raw bytes; CRLF endings are stripped)
    #[arg(long, conflicts_with = "blocks")]
    file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the root digest of the tree
    Root {
        #[command(flatten)]
        input: BlockArgs,
    },

    /// Print the proof path for a block
    Proof {
        /// The block to extract a proof for
        #[arg(short, long)]
        target: String,
        #[command(flatten)]
        input: BlockArgs,
    },

    /// Print every level of the tree, leaves first
    Levels {
        #[command(flatten)]
        input: BlockArgs,
    },

    /// XOR two hex digests
    Combine {
        /// Left digest (hex)
        left: String,
        /// Right digest (hex)
        right: String,
    },

    /// Print the leaf digest of a single block
    Hash {
        /// The block data
        data: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => fail(cli.format.unwrap_or(OutputFormat::Json), &e.to_string()),
    };
    let format = cli.format.unwrap_or(if config.pretty {
        OutputFormat::Text
    } else {
        OutputFormat::Json
    });
    let hasher = cli.hasher.unwrap_or(config.hasher);

    let result = match hasher {
        HashAlgorithm::Sha256 => execute::<Sha256>(&cli.command),
        HashAlgorithm::Blake3 => execute::<Blake3>(&cli.command),
    };

    match result {
        Ok(value) => output(format, &value),
        Err(e) => fail(format, &format!("{:#}", e)),
    }

    Ok(())
}

fn execute<H: LeafHasher>(command: &Commands) -> anyhow::Result<serde_json::Value> {
    let value = match command {
        Commands::Root { input } => {
            let tree = build_tree::<H>(input)?;
            serde_json::json!({
                "root": tree.root_hex(),
                "leaves": tree.leaf_count(),
                "depth": tree.depth(),
                "hasher": tree.hasher_name()
            })
        }

        Commands::Proof { target, input } => {
            let tree = build_tree::<H>(input)?;
            let proof = tree.proof(target.as_bytes());
            serde_json::json!({
                "root": tree.root_hex(),
                "target": target,
                "leaf": H::hash(target.as_bytes()).to_hex(),
                "reaches_leaf": tree.walk_ends_at(target.as_bytes()),
                "proof": proof.to_hex()
            })
        }

        Commands::Levels { input } => {
            let tree = build_tree::<H>(input)?;
            let levels: Vec<Vec<String>> = tree
                .levels()
                .iter()
                .map(|level| level.iter().map(Digest::to_hex).collect())
                .collect();
            serde_json::json!({
                "root": tree.root_hex(),
                "depth": tree.depth(),
                "levels": levels
            })
        }

        Commands::Combine { left, right } => {
            let l = Digest::from_hex(left)?;
            let r = Digest::from_hex(right)?;
            serde_json::json!({
                "combined": xor_merkle::combine(&l, &r).to_hex()
            })
        }

        Commands::Hash { data } => serde_json::json!({
            "hasher": H::NAME,
            "digest": H::hash(data.as_bytes()).to_hex()
        }),
    };

    Ok(value)
}

fn build_tree<H: LeafHasher>(input: &BlockArgs) -> anyhow::Result<MerkleTree<H>> {
    let tree = match &input.file {
        Some(path) => {
            let content = std::fs::read(path)
                .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
            MerkleTree::<H>::build(split_lines(&content))?
        }
        None => MerkleTree::<H>::build(&input.blocks)?,
    };
    Ok(tree)
}

/// Split raw file contents into line blocks: `\n` separates blocks, a final
/// newline does not start an empty block, and a trailing `\r` is dropped.
fn split_lines(content: &[u8]) -> Vec<&[u8]> {
    let mut lines: Vec<&[u8]> = content.split(|&byte| byte == b'\n').collect();
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
        .into_iter()
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .collect()
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn output(format: OutputFormat, value: &serde_json::Value) {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(value),
        OutputFormat::Text => serde_json::to_string_pretty(value),
    };
    match rendered {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("Failed to render output: {}", e),
    }
}

fn fail(format: OutputFormat, message: &str) -> ! {
    output(
        format,
        &serde_json::json!({
            "status": "error",
            "message": message
        }),
    );
    std::process::exit(1);
}
