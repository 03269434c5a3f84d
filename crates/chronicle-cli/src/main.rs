//! Offline tools for chronicle scenario content.
//!
//! Provides the `chronicle` binary for browsing scenarios, printing the
//! ground-truth classification for a topic, explaining a single source, and
//! validating a directory of scenario documents before deploying it.
//!
//! Uses the same catalog loading and classification code as the HTTP server,
//! so what the CLI prints is what learners are graded against.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use chronicle_check::{classify_topic, explain};
use chronicle_content::{DirectorySource, EmbeddedSource, ScenarioCatalog};
use chronicle_core::{Scenario, Topic};

/// Primary source trainer content tools.
#[derive(Parser)]
#[command(name = "chronicle", about = "Primary source trainer content tools")]
struct Cli {
    /// Directory of scenario JSON files (default: embedded scenarios).
    #[arg(long, global = true)]
    content_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List every scenario with its topics.
    List,

    /// Print the correct classification for a scenario and topic.
    Classify {
        #[arg(short, long)]
        scenario: String,

        #[arg(short, long)]
        topic: String,
    },

    /// Explain why one source is primary or secondary for a topic.
    Explain {
        #[arg(short, long)]
        scenario: String,

        #[arg(short, long)]
        topic: String,

        #[arg(short, long)]
        node: String,
    },

    /// Load and validate the catalog, then print its statistics.
    Validate,
}

fn main() {
    let cli = Cli::parse();

    let catalog = match load_catalog(cli.content_dir) {
        Ok(catalog) => catalog,
        Err(code) => process::exit(code),
    };

    let exit_code = match cli.command {
        Commands::List => run_list(&catalog),
        Commands::Classify { scenario, topic } => run_classify(&catalog, &scenario, &topic),
        Commands::Explain {
            scenario,
            topic,
            node,
        } => run_explain(&catalog, &scenario, &topic, &node),
        Commands::Validate => run_validate(&catalog),
    };
    process::exit(exit_code);
}

/// Loads the catalog. Exit code 3 on any content failure.
fn load_catalog(content_dir: Option<PathBuf>) -> Result<ScenarioCatalog, i32> {
    let loaded = match &content_dir {
        Some(dir) => ScenarioCatalog::load(&DirectorySource::new(dir)),
        None => ScenarioCatalog::load(&EmbeddedSource),
    };
    loaded.map_err(|e| {
        match content_dir {
            Some(dir) => eprintln!("Error: failed to load '{}': {}", dir.display(), e),
            None => eprintln!("Error: embedded scenarios are invalid: {}", e),
        }
        3
    })
}

fn lookup<'a>(
    catalog: &'a ScenarioCatalog,
    scenario_id: &str,
    topic_id: &str,
) -> Result<(&'a Scenario, &'a Topic), i32> {
    match catalog.topic(scenario_id, topic_id) {
        Some(Ok(found)) => Ok(found),
        Some(Err(e)) => {
            eprintln!("Error: {}", e);
            Err(1)
        }
        None => {
            eprintln!("Error: no scenario '{}'", scenario_id);
            Err(1)
        }
    }
}

fn run_list(catalog: &ScenarioCatalog) -> i32 {
    for scenario in catalog.iter() {
        let topics: Vec<&str> = scenario.topics.iter().map(|t| t.id.as_str()).collect();
        println!(
            "{:<28} {:<6} {} ({}) [{}]",
            scenario.id.as_str(),
            scenario.difficulty.as_str(),
            scenario.event.title,
            scenario.event.year,
            topics.join(", ")
        );
    }
    0
}

fn run_classify(catalog: &ScenarioCatalog, scenario_id: &str, topic_id: &str) -> i32 {
    let (scenario, topic) = match lookup(catalog, scenario_id, topic_id) {
        Ok(found) => found,
        Err(code) => return code,
    };
    let classification = classify_topic(scenario, topic);
    let output = serde_json::json!({
        "scenario_id": scenario.id,
        "topic_id": topic.id,
        "primary_sources": classification.primary,
        "secondary_sources": classification.secondary,
    });
    print_json(&output);
    0
}

fn run_explain(catalog: &ScenarioCatalog, scenario_id: &str, topic_id: &str, node_id: &str) -> i32 {
    let (scenario, topic) = match lookup(catalog, scenario_id, topic_id) {
        Ok(found) => found,
        Err(code) => return code,
    };
    match explain(scenario, node_id, topic) {
        Ok(text) => {
            println!("{}", text);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn run_validate(catalog: &ScenarioCatalog) -> i32 {
    match serde_json::to_value(catalog.stats()) {
        Ok(stats) => {
            print_json(&stats);
            0
        }
        Err(e) => {
            eprintln!("Error: failed to serialize statistics: {}", e);
            3
        }
    }
}

fn print_json(value: &serde_json::Value) {
    let json = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize output: {}\"}}", e));
    println!("{}", json);
}
