use clap::{Parser, Subcommand};
use pipeline_panels::prelude::*;
use serde_json::Value;
use std::fs;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Inspect and normalize pipeline node configurations
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the registered node types
    List,
    /// Print the default configuration of a node type
    Defaults {
        node_type: String,
        /// Print a whole node descriptor instead of just its configuration
        #[arg(short, long)]
        descriptor: bool,
    },
    /// Read a stored configuration and print it with every field populated
    Normalize {
        node_type: String,
        path: String,
        /// Treat the file as a node descriptor
        #[arg(short, long)]
        descriptor: bool,
    },
    /// Print the output ports of a stored node descriptor
    Outputs { node_type: String, path: String },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let registry = NodeRegistry::default();
    debug!(panels = registry.len(), "node registry ready");

    match cli.command {
        Command::List => {
            for node_type in registry.node_types() {
                let panel = lookup(&registry, node_type);
                println!("{:<16} {}", node_type, panel.display_name());
            }
        }
        Command::Defaults {
            node_type,
            descriptor,
        } => {
            let panel = lookup(&registry, &node_type);
            let json = if descriptor {
                panel.default_descriptor()
            } else {
                panel.default_config()
            };
            print_json(&json);
        }
        Command::Normalize {
            node_type,
            path,
            descriptor,
        } => {
            let panel = lookup(&registry, &node_type);
            let input = read_json(&path);
            info!(%node_type, %path, descriptor, "normalizing");
            let result = if descriptor {
                panel.normalize_descriptor(&input)
            } else {
                panel.normalize_config(&input)
            };
            let json =
                result.unwrap_or_else(|e| exit_with_error(&format!("Normalization failed: {}", e)));
            print_json(&json);
        }
        Command::Outputs { node_type, path } => {
            let panel = lookup(&registry, &node_type);
            let input = read_json(&path);
            let outputs = panel
                .outputs(&input)
                .unwrap_or_else(|e| exit_with_error(&format!("Could not derive outputs: {}", e)));
            let json = serde_json::to_value(&outputs)
                .unwrap_or_else(|e| exit_with_error(&format!("Could not encode outputs: {}", e)));
            print_json(&json);
        }
    }
}

fn init_tracing(log_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn lookup<'a>(registry: &'a NodeRegistry, node_type: &str) -> &'a dyn NodePanel {
    registry.get(node_type).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "{}. Known node types: {}",
            e,
            registry.node_types().join(", ")
        ))
    })
}

fn read_json(path: &str) -> Value {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read file '{}': {}", path, e)));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse JSON in '{}': {}", path, e)))
}

fn print_json(json: &Value) {
    match serde_json::to_string_pretty(json) {
        Ok(text) => println!("{}", text),
        Err(e) => exit_with_error(&format!("Could not format output: {}", e)),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
