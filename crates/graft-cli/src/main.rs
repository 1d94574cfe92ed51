use std::path::PathBuf;

use clap::{Parser, Subcommand};
use graft_cli::{
    ensure_valid, extract_tokens, run, write_files, CliError, FileSource, GraftConfig,
    ImportRequest,
};
use graft_reference::canonical_node_id;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "graft")]
#[command(about = "Import design files as React Native components")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (defaults to ./graft.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse and validate a design file URL
    Parse {
        /// Design file URL
        url: String,
    },

    /// Extract design tokens from an exported file
    Tokens {
        /// Exported JSON file
        path: PathBuf,

        /// Design file URL the export came from
        #[arg(long)]
        url: Option<String>,

        /// Write the token set here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Generate theme and components from an exported file
    Generate {
        /// Exported JSON file
        path: PathBuf,

        /// Design file URL the export came from; its node-id selects a subtree
        #[arg(long)]
        url: Option<String>,

        /// Node to import (repeatable); accepts `1:2` or `1-2`
        #[arg(short, long = "node")]
        nodes: Vec<String>,

        /// Output directory
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Emit routed screens instead of components
        #[arg(long)]
        screen: bool,

        /// Emit .jsx instead of .tsx
        #[arg(long)]
        js: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    install_tracing(cli.verbose);

    let result = match cli.command {
        Command::Parse { url } => cmd_parse(&url),
        Command::Tokens { path, url, out } => {
            load_config(cli.config).and_then(|config| cmd_tokens(path, url, out, &config))
        }
        Command::Generate {
            path,
            url,
            nodes,
            out,
            screen,
            js,
        } => load_config(cli.config).and_then(|mut config| {
            config.codegen.screens |= screen;
            config.codegen.typescript &= !js;
            cmd_generate(path, url, nodes, out, &config)
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn install_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(path: Option<PathBuf>) -> Result<GraftConfig, CliError> {
    Ok(GraftConfig::load(path.as_deref())?)
}

fn cmd_parse(url: &str) -> Result<(), CliError> {
    let report = graft_reference::validate(url);
    println!("{}", serde_json::to_string_pretty(&report)?);
    ensure_valid(&report)
}

fn cmd_tokens(
    path: PathBuf,
    url: Option<String>,
    out: Option<PathBuf>,
    config: &GraftConfig,
) -> Result<(), CliError> {
    let source = FileSource::new(path);
    let request = build_request(&source, url.as_deref(), Vec::new())?;
    let tokens = extract_tokens(&source, &request, config)?;
    let json = tokens.to_json()?;

    match out {
        Some(out) => {
            std::fs::write(&out, json)?;
            eprintln!("Wrote {} tokens to {}", tokens.len(), out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_generate(
    path: PathBuf,
    url: Option<String>,
    nodes: Vec<String>,
    out: Option<PathBuf>,
    config: &GraftConfig,
) -> Result<(), CliError> {
    let source = FileSource::new(path);
    let request = build_request(&source, url.as_deref(), nodes)?;
    let project = run(&source, &request, config)?;

    let out_dir = out.unwrap_or_else(|| config.output_dir.clone());
    let written = write_files(&project.files, &out_dir)?;

    eprintln!("Generated {} files in {}", written.len(), out_dir.display());
    if !project.assets.is_empty() {
        eprintln!(
            "{} image assets listed in the asset manifest",
            project.assets.len()
        );
    }
    Ok(())
}

/// Combine the URL (if any) with explicit `--node` selections.
fn build_request(
    source: &FileSource,
    url: Option<&str>,
    nodes: Vec<String>,
) -> Result<ImportRequest, CliError> {
    let loaded = source.load()?;
    let mut request = ImportRequest {
        document_id: source.default_document_id(),
        subtree_ids: nodes.iter().map(|n| canonical_node_id(n)).collect(),
        page_ids: loaded.page_ids,
    };

    if let Some(url) = url {
        let reference = graft_reference::parse(url)?;
        debug!(?reference, "parsed design reference");
        request.document_id = reference.document_id;
        if request.subtree_ids.is_empty() {
            request.subtree_ids.extend(reference.subtree_id);
        }
        if let Some(page_id) = reference.page_id {
            request.page_ids = vec![page_id];
        }
    }
    Ok(request)
}
