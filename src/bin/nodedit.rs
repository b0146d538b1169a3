use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use nodedit::session::{self, Format};
use nodedit::{DocumentStore, EditSession, FileStore, NodeData, Path, tree};
use std::fs;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nodedit", about = "View and edit nodes of a JSON document by path")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Target {
    /// Document file.
    #[arg(long)]
    file: String,
    /// Node path in display form, e.g. `$["customer"][0]`.
    #[arg(long, conflicts_with = "path_json")]
    path: Option<String>,
    /// Node path as a JSON array, e.g. `["customer", 0]`.
    #[arg(long)]
    path_json: Option<String>,
}

impl Target {
    fn node_path(&self) -> Result<Path> {
        match (&self.path, &self.path_json) {
            (Some(display), _) => Ok(display.parse::<Path>()?),
            (None, Some(json)) => serde_json::from_str(json)
                .with_context(|| format!("Invalid path array: {}", json)),
            (None, None) => Ok(Path::root()),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the display form of a JSON-array path.
    Path { segments: String },
    /// Print the value at a path.
    Get {
        #[command(flatten)]
        target: Target,
        #[arg(long)]
        compact: bool,
    },
    /// Print a node's path and editable content.
    Show {
        #[command(flatten)]
        target: Target,
    },
    /// Merge or replace the value at a path with edited JSON and save the document.
    Edit {
        #[command(flatten)]
        target: Target,
        #[arg(long, conflicts_with = "text_file")]
        text: Option<String>,
        #[arg(long)]
        text_file: Option<String>,
        /// Print the result instead of writing it back.
        #[arg(long)]
        dry_run: bool,
        #[arg(long)]
        compact: bool,
    },
}

fn format_for(compact: bool) -> Format {
    if compact {
        Format::Compact
    } else {
        Format::Pretty
    }
}

fn load(file: &str) -> Result<nodedit::JsonValue> {
    let store = FileStore::new(file);
    let text = store
        .get_json()
        .with_context(|| format!("Failed to read file: {}", file))?;
    Ok(session::parse_document(&text)?)
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Path { segments } => {
            let path: Path = serde_json::from_str(&segments)
                .with_context(|| format!("Invalid path array: {}", segments))?;
            println!("{}", path);
        }
        Commands::Get { target, compact } => {
            let path = target.node_path()?;
            let document = load(&target.file)?;
            match tree::get(&document, &path) {
                Some(value) => println!("{}", session::to_document_text(value, format_for(compact))),
                None => return Err(anyhow!("Nothing at {} in {}", path, target.file)),
            }
        }
        Commands::Show { target } => {
            let path = target.node_path()?;
            let document = load(&target.file)?;
            let node = NodeData::select(&document, path.clone())
                .ok_or_else(|| anyhow!("Nothing at {} in {}", path, target.file))?;
            let view = EditSession::new(node);
            println!("JSON Path: {}", view.json_path());
            println!("{}", view.content());
        }
        Commands::Edit {
            target,
            text,
            text_file,
            dry_run,
            compact,
        } => {
            let path = target.node_path()?;
            let edited = match (text, text_file) {
                (Some(text), _) => text,
                (None, Some(file)) => fs::read_to_string(&file)
                    .with_context(|| format!("Failed to read file: {}", file))?,
                (None, None) => return Err(anyhow!("Either --text or --text-file is required")),
            };

            let mut store = FileStore::new(&target.file);
            let current = store.get_json()?;
            let updated = session::apply_text(&current, &path, &edited, format_for(compact))
                .with_context(|| format!("Edit at {} rejected", path))?;

            if dry_run {
                println!("{}", updated);
            } else {
                store
                    .set_json(updated)
                    .with_context(|| format!("Failed to write to file: {}", target.file))?;
                println!("Updated {} in {}", path, target.file);
            }
        }
    }

    Ok(())
}
