use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use davbind_core::config::{Settings, load_config};
use davbind_rfc::rfc::dav::bind::BindRequest;
use davbind_rfc::rfc::dav::build::serialize_element;
use davbind_rfc::rfc::dav::core::DavError;
use davbind_rfc::rfc::dav::parse::parse_document;
use davbind_rfc::rfc::dav::xml::{Document, FromXml, ToXml};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

/// Decode and re-encode `WebDAV` BIND, REBIND and UNBIND request bodies
#[derive(Debug, Parser)]
#[command(name = "davbind")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Decode a request body and print its fields
    Decode {
        /// Body file (reads stdin if omitted)
        file: Option<PathBuf>,

        /// Print the decoded body as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decode a request body and print it re-encoded as XML
    Echo {
        /// Body file (reads stdin if omitted)
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    match cli.command {
        Commands::Decode { file, json } => cmd_decode(&config, file.as_deref(), json),
        Commands::Echo { file } => cmd_echo(&config, file.as_deref()),
    }
}

fn cmd_decode(config: &Settings, file: Option<&Path>, json: bool) -> Result<()> {
    let request = decode_body(config, &read_body(file)?)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&request)?);
    } else {
        println!("{}", describe(&request));
    }
    Ok(())
}

fn cmd_echo(config: &Settings, file: Option<&Path>) -> Result<()> {
    let request = decode_body(config, &read_body(file)?)?;
    let element = request.to_xml(&mut Document::new());

    println!("{}", serialize_element(&element, config.xml.indent)?);
    Ok(())
}

fn read_body(file: Option<&Path>) -> Result<Vec<u8>> {
    match file {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut body = Vec::new();
            std::io::stdin()
                .read_to_end(&mut body)
                .context("Failed to read request body from stdin")?;
            Ok(body)
        }
    }
}

/// Applies the body size limit, then parses and decodes.
fn decode_body(config: &Settings, body: &[u8]) -> Result<BindRequest, DavError> {
    if !config.xml.accepts_body_len(body.len()) {
        tracing::warn!(
            len = body.len(),
            max = config.xml.max_body_bytes,
            "Request body too large"
        );
        return Err(DavError::payload_too_large(format!(
            "request body exceeds {} bytes",
            config.xml.max_body_bytes
        )));
    }

    let root = parse_document(body)?;
    Ok(BindRequest::from_xml(&root)?)
}

fn describe(request: &BindRequest) -> String {
    match request {
        BindRequest::Bind(payload) => format!(
            "{}\nhref: {}\nsegment: {}",
            request.method(),
            payload.href(),
            payload.segment()
        ),
        BindRequest::Rebind(payload) => format!(
            "{}\nhref: {}\nsegment: {}",
            request.method(),
            payload.href(),
            payload.segment()
        ),
        BindRequest::Unbind(payload) => {
            format!("{}\nsegment: {}", request.method(), payload.segment())
        }
    }
}
