//! CLI interface for bloom-objectives

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rustyline::error::ReadlineError;

use crate::config::{self, Config, OutputFormat};
use crate::engine::synthesis::capitalize_first;
use crate::engine::{validate_goal, ObjectiveEngine};
use crate::taxonomy::TAXONOMY;
use crate::types::ObjectiveSet;

#[derive(Debug, Parser)]
#[command(name = "bloom-objectives")]
#[command(about = "Generate learning objectives from course goals using Bloom's Taxonomy", long_about = None)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// The course goal to convert into learning objectives
    goal: Option<String>,

    /// Run in interactive mode (default when no goal is given)
    #[arg(short, long)]
    interactive: bool,

    /// Print the full result as JSON instead of the outline
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on (default from config, 8080)
        #[arg(short, long)]
        port: Option<u16>,
        /// Host to bind to (default from config, 127.0.0.1)
        #[arg(long)]
        host: Option<String>,
    },
    /// List the taxonomy levels and their verbs
    Levels,
    /// Show or reset the configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
        /// Print the configuration file path
        #[arg(long)]
        path: bool,
    },
}

/// Run the CLI
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve { port, host }) => {
            let config = Config::load_or_default();
            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);
            crate::server::start(&host, port).await?;
        }
        Some(Commands::Levels) => {
            print_levels();
        }
        Some(Commands::Config { show, reset, path }) => {
            if reset {
                config::reset_config()?;
            } else if path {
                println!("{}", config::config_path()?.display());
            } else if show {
                config::show_config()?;
            } else {
                println!("Configuration options:");
                println!("  --show     Display current configuration");
                println!("  --reset    Reset configuration to defaults");
                println!("  --path     Print the configuration file path");
            }
        }
        None => {
            let engine = ObjectiveEngine::new();
            match cli.goal {
                Some(goal) if !cli.interactive => {
                    let format = if cli.json {
                        OutputFormat::Json
                    } else {
                        Config::load_or_default().output.format
                    };
                    run_single(&engine, &goal, format)?;
                }
                _ => run_interactive(&engine)?,
            }
        }
    }

    Ok(())
}

/// Generate objectives for one goal and print them
fn run_single(engine: &ObjectiveEngine, raw: &str, format: OutputFormat) -> Result<()> {
    let goal = validate_goal(raw)?;
    let set = engine.generate(goal);
    println!("{}", render(&set, format)?);
    Ok(())
}

fn render(set: &ObjectiveSet, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(set.formatted_output.clone()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(set).context("Failed to serialize objectives")
        }
    }
}

/// Prompt for goals until the user quits
fn run_interactive(engine: &ObjectiveEngine) -> Result<()> {
    println!("Learning Objectives Generator");
    println!("{}", "=".repeat(50));
    println!("Enter a course goal and I'll generate learning objectives aligned to Bloom's Taxonomy.");
    println!("Type 'quit' to exit.\n");

    let mut rl = rustyline::DefaultEditor::new()
        .context("Failed to initialize line editor")?;

    loop {
        let line = match rl.readline("Enter course goal: ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => anyhow::bail!("Failed to read input: {}", e),
        };

        let goal = line.trim();
        if is_quit(goal) {
            break;
        }

        let goal = match validate_goal(goal) {
            Ok(goal) => goal,
            Err(_) => {
                println!("Please enter a valid goal.\n");
                continue;
            }
        };
        let _ = rl.add_history_entry(goal);

        let set = engine.generate(goal);
        print!("{}", session_report(&set));
    }

    Ok(())
}

fn is_quit(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "quit" | "exit" | "q")
}

/// Result block printed after each goal in interactive mode
fn session_report(set: &ObjectiveSet) -> String {
    format!(
        "\nOriginal Goal: {}\nTarget Bloom's Level: {} (Level {})\n\nGenerated Learning Objectives:\n{}\n{}\n\n{}\n",
        set.goal,
        capitalize_first(&set.target_level_name),
        set.target_level,
        "-".repeat(40),
        set.formatted_output,
        "=".repeat(50),
    )
}

fn print_levels() {
    for entry in TAXONOMY.iter() {
        println!("{}. {} - {}", entry.rank(), capitalize_first(entry.name()), entry.description);
        println!("   verbs: {}", entry.verbs.join(", "));
    }
}
