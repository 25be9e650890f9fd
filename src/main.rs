//! skilltree-layout CLI entry point.
//!
//! Reads a course catalog and an optimizer plan, runs the layout pipeline,
//! and prints the node/edge lists as JSON.

use std::fs;
use std::io::{self, Read};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use skilltree_layout::catalog::loader;
use skilltree_layout::{SkillTree, build_skill_tree, build_staged_tree};

/// Course catalog to skill-tree layout (JSON in, JSON out).
#[derive(Parser, Debug)]
#[command(
    name = "skilltree-layout",
    about = "Course catalog to skill-tree layout (JSON in, JSON out)"
)]
struct Cli {
    /// Course catalog JSON file
    catalog: String,

    /// Optimizer plan JSON file (reads from stdin if not provided)
    plan: Option<String>,

    /// Interpret the plan as pre-grouped stages instead of a flat id list
    #[arg(short = 's', long = "stages")]
    stages: bool,

    /// Completed course ids, comma-separated
    #[arg(short = 'c', long = "completed", value_delimiter = ',')]
    completed: Vec<String>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Pretty-print the JSON output
    #[arg(short = 'p', long = "pretty")]
    pretty: bool,
}

fn main() {
    // Diagnostics go to stderr; stdout carries only the JSON result.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("skilltree_layout=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let catalog = match loader::load_catalog(&cli.catalog) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    // Read plan from file or stdin
    let plan_text = if let Some(ref path) = cli.plan {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path, e);
                process::exit(1);
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: cannot read stdin: {}", e);
            process::exit(1);
        }
        buf
    };

    let tree = match build_tree(&catalog, &plan_text, cli.stages, &cli.completed) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&tree)
    } else {
        serde_json::to_string(&tree)
    };
    let rendered = match rendered {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: cannot encode output: {}", e);
            process::exit(1);
        }
    };

    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            eprintln!("error: cannot write '{}': {}", path, e);
            process::exit(1);
        }
    } else {
        println!("{}", rendered);
    }
}

fn build_tree(
    catalog: &[skilltree_layout::Course],
    plan_text: &str,
    staged: bool,
    completed: &[String],
) -> Result<SkillTree, loader::CatalogError> {
    if staged {
        let plan = loader::parse_staged_plan(plan_text)?;
        Ok(build_staged_tree(catalog, &plan.stages, completed))
    } else {
        let plan = loader::parse_plan(plan_text)?;
        Ok(build_skill_tree(
            catalog,
            &plan.recommended_course_ids,
            completed,
        ))
    }
}
