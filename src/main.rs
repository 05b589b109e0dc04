// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mindweave CLI entrypoint.
//!
//! Detects, imports, converts and validates mind map files. Log output goes to stderr and is
//! filtered by `MINDWEAVE_LOG` (default `warn`).

use std::error::Error;
use std::path::{Path, PathBuf};

use mindweave::format::detect_format_bytes;
use mindweave::{
    detect_format, export_mindmap, import_mindmap_from_file, validate_mindmap_value,
    ExportFormat, ExportOptions, ImportFormat, ImportOptions, ImportReport,
};

const LOG_ENV: &str = "MINDWEAVE_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} detect <file>\n  {program} import <file> [--from <format>]\n  {program} convert <file> --to <format> [--from <format>] [--out <path>] [--no-metadata]\n  {program} validate <file>\n\nImport formats: json, markdown, freemind, xmind, text (detected when --from is omitted).\nExport formats: json, markdown, freemind, xmind.\n\nconvert writes to --out, or to a file named after the mind map title in the current directory.\nSet {LOG_ENV} (e.g. {LOG_ENV}=debug) to control log output on stderr."
    );
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Detect,
    Import,
    Convert,
    Validate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    command: Command,
    file: String,
    from: Option<String>,
    to: Option<String>,
    out: Option<String>,
    no_metadata: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let command = match args.next().ok_or(())?.as_str() {
        "detect" => Command::Detect,
        "import" => Command::Import,
        "convert" => Command::Convert,
        "validate" => Command::Validate,
        _ => return Err(()),
    };

    let mut file = None;
    let mut from = None;
    let mut to = None;
    let mut out = None;
    let mut no_metadata = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--from" => {
                if from.is_some() {
                    return Err(());
                }
                from = Some(args.next().ok_or(())?);
            }
            "--to" => {
                if to.is_some() {
                    return Err(());
                }
                to = Some(args.next().ok_or(())?);
            }
            "--out" => {
                if out.is_some() {
                    return Err(());
                }
                out = Some(args.next().ok_or(())?);
            }
            "--no-metadata" => {
                if no_metadata {
                    return Err(());
                }
                no_metadata = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if file.is_some() {
                    return Err(());
                }
                file = Some(arg);
            }
        }
    }

    let file = file.ok_or(())?;
    let converting = command == Command::Convert;
    if converting && to.is_none() {
        return Err(());
    }
    if !converting && (to.is_some() || out.is_some() || no_metadata) {
        return Err(());
    }
    if from.is_some() && !matches!(command, Command::Import | Command::Convert) {
        return Err(());
    }

    Ok(CliOptions { command, file, from, to, out, no_metadata })
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn import_options(from: Option<&str>) -> Result<ImportOptions, Box<dyn Error>> {
    let format = from.map(str::parse::<ImportFormat>).transpose()?;
    Ok(ImportOptions { format })
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|name| name.to_str()).unwrap_or_default()
}

/// Runs one command. `Ok(false)` means the command completed but reports failure (exit 1).
fn run(options: CliOptions) -> Result<bool, Box<dyn Error>> {
    let path = PathBuf::from(&options.file);

    match options.command {
        Command::Detect => {
            let bytes = std::fs::read(&path)?;
            let format = match std::str::from_utf8(&bytes) {
                Ok(content) => detect_format(file_name(&path), content),
                Err(_) => detect_format_bytes(file_name(&path), &bytes),
            };
            println!("{format}");
            Ok(true)
        }
        Command::Import => {
            let import = import_options(options.from.as_deref())?;
            let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
            let result = runtime.block_on(import_mindmap_from_file(&path, &import));
            let report = ImportReport::from(result);
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(report.success)
        }
        Command::Convert => {
            let import = import_options(options.from.as_deref())?;
            let to = options.to.as_deref().unwrap_or_default().parse::<ExportFormat>()?;

            let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
            let imported = runtime.block_on(import_mindmap_from_file(&path, &import))?;
            for warning in &imported.warnings {
                eprintln!("mindweave: warning: {warning}");
            }

            let export = ExportOptions::new(to).with_metadata(!options.no_metadata);
            let result = export_mindmap(&imported.mindmap, &export)?;
            let target = options.out.map_or_else(|| PathBuf::from(&result.filename), PathBuf::from);
            std::fs::write(&target, result.blob)?;
            println!("{}", target.display());
            Ok(true)
        }
        Command::Validate => {
            let content = std::fs::read_to_string(&path)?;
            let value: serde_json::Value = serde_json::from_str(&content)?;
            let report = validate_mindmap_value(&value);
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(report.valid)
        }
    }
}

fn main() {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "mindweave".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    init_tracing();

    match run(options) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("mindweave: {err}");
            std::process::exit(1);
        }
    }
}
