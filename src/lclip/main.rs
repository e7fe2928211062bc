use clap::Parser;
use colored::*;
use lclip::api::{CmdMessage, LclipApi, MessageLevel};
use lclip::error::Result;
use lclip::paths;
use std::io::{Read, Write};
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let path = match cli.file {
        Some(path) => path,
        None => paths::default_path()?,
    };
    let mut api = LclipApi::open(path)?;

    match cli.command {
        Commands::Get { label } => handle_get(&api, &label),
        Commands::Set { label, files } => handle_set(api, label, &files),
        Commands::Labels => handle_labels(&api),
        Commands::Delete { labels } => handle_delete(api, &labels),
        Commands::Path => handle_path(&api),
    }
}

fn handle_get(api: &LclipApi, label: &str) -> Result<()> {
    let result = api.get(label)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Some(payload) = &result.payload {
        out.write_all(payload)?;
    }
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

fn handle_set(mut api: LclipApi, label: String, files: &[PathBuf]) -> Result<()> {
    let payload = read_payload(files)?;
    let result = api.set(label, payload)?;
    api.close()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_labels(api: &LclipApi) -> Result<()> {
    let result = api.labels()?;
    for label in &result.listed_labels {
        println!("{}", label);
    }
    Ok(())
}

fn handle_delete(mut api: LclipApi, labels: &[String]) -> Result<()> {
    let result = api.delete(labels)?;
    api.close()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(api: &LclipApi) -> Result<()> {
    let result = api.store_path()?;
    if let Some(path) = &result.store_path {
        println!("{}", path.display());
    }
    Ok(())
}

/// Assemble the payload from the given files, concatenated in argument
/// order, or from stdin when no files are given.
fn read_payload(files: &[PathBuf]) -> Result<Vec<u8>> {
    if files.is_empty() {
        let mut payload = Vec::new();
        std::io::stdin().lock().read_to_end(&mut payload)?;
        return Ok(payload);
    }

    let mut payload = Vec::new();
    for file in files {
        payload.extend(std::fs::read(file)?);
    }
    Ok(payload)
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
