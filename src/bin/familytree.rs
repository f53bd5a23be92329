//! Family tree CLI.
//!
//! Reads a plain-text family description and writes a Graphviz DOT
//! descriptor, ready for a layout engine:
//!
//! ```bash
//! familytree -a 'Louis XIV' royal.txt | dot -Tpng -o royal.png
//! ```

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use familytree::{populate, DotEmitter, Family, FamilyError, RecordParser};

#[derive(Parser)]
#[command(name = "familytree")]
#[command(version)]
#[command(about = "Generates a family tree graph from a simple text file")]
struct Cli {
    /// The formatted text file describing the family
    input: PathBuf,

    /// Build the tree from this ancestor, matched by id or name
    /// (default: the first person found with no parents)
    #[arg(short = 'a', long)]
    ancestor: Option<String>,

    /// Write the descriptor to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Seed for `unique` id suffixes, for reproducible node ids
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut parser = match cli.seed {
        Some(seed) => RecordParser::with_seed(seed),
        None => RecordParser::new(),
    }?;

    let file = File::open(&cli.input)
        .with_context(|| format!("cannot open {}", cli.input.display()))?;
    let mut family = Family::new();
    populate(&mut family, BufReader::new(file), &mut parser)?;

    let ancestor = match &cli.ancestor {
        Some(name) => family
            .find_person(name)
            .ok_or_else(|| FamilyError::PersonNotFound { name: name.clone() })?,
        None => family
            .find_first_ancestor()
            .ok_or(FamilyError::NoAncestorFound)?,
    };

    match &cli.output {
        Some(path) => {
            let out = File::create(path)
                .with_context(|| format!("cannot write {}", path.display()))?;
            DotEmitter::new(&family, BufWriter::new(out)).emit_tree(ancestor)?;
        }
        None => {
            DotEmitter::new(&family, io::stdout().lock()).emit_tree(ancestor)?;
        }
    }
    Ok(())
}
