use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use threadwalk::{breadth_first, in_order_reference, parse_tree, traverse_in_order, Tree};

#[derive(Parser, Debug)]
#[command(
    name = "threadwalk",
    about = "In-order binary tree walks in O(1) auxiliary space"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the in-order value sequence of a tree literal.
    Walk {
        /// Tree literal: `(value left right)`, `_` for an empty subtree,
        /// bare integers as leaves. Example: "(2 1 (4 3 5))".
        literal: String,
        /// Print the breadth-first sequence instead.
        #[arg(long)]
        breadth: bool,
    },
    /// Run the threaded walk against the reference oracle and verify the
    /// tree comes back restored.
    Check {
        /// Tree literal (same syntax as `walk`).
        literal: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Walk { literal, breadth } => run_walk(&literal, breadth)?,
        Commands::Check { literal } => run_check(&literal)?,
    }

    Ok(())
}

fn run_walk(literal: &str, breadth: bool) -> Result<()> {
    let mut tree = parse_tree(literal).context("failed to parse tree literal")?;
    debug!(nodes = tree.len(), "parsed tree literal");

    let values = if breadth {
        breadth_first(&tree)
    } else {
        traverse_in_order(&mut tree)
    };
    println!("{}", join(&values));
    Ok(())
}

fn run_check(literal: &str) -> Result<()> {
    let mut tree = parse_tree(literal).context("failed to parse tree literal")?;
    debug!(nodes = tree.len(), "parsed tree literal");

    let expected = in_order_reference(&tree);
    let shape_before = shape(&tree);

    let first = traverse_in_order(&mut tree);
    let second = traverse_in_order(&mut tree);

    ensure!(
        first == expected,
        "threaded walk diverged from reference: {first:?} vs {expected:?}"
    );
    ensure!(
        second == first,
        "repeat walk diverged: {second:?} vs {first:?}"
    );
    ensure!(
        tree.is_restored() && shape(&tree) == shape_before,
        "child links changed across the walk"
    );

    println!("ok: {} nodes, in-order {}", tree.len(), join(&first));
    Ok(())
}

type Shape = Vec<(threadwalk::Link, threadwalk::Link)>;

fn shape(tree: &Tree<i64>) -> Shape {
    let arena = tree.arena();
    arena
        .ids()
        .map(|id| (arena.left(id), arena.right(id)))
        .collect()
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
