mod report;

use artie::{FileEntry, parse_folder_name, validate_folder};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let (audio_files, text_files) = match collect_files(&config.folder) {
        Ok(files) => files,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    let folder_name = config
        .folder
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let folder_info = parse_folder_name(&folder_name);
    let result = validate_folder(&audio_files, &text_files);

    if config.json {
        let payload = serde_json::json!({
            "folderName": folder_name,
            "folderInfo": folder_info.as_ref().ok(),
            "folderError": folder_info.as_ref().err().map(|err| err.to_string()),
            "validation": &result,
        });
        println!("{}", serde_json::to_string_pretty(&payload).expect("report serialization"));
    } else {
        report::print_report(&folder_name, &folder_info, &result, config.color);
    }

    std::process::exit(if result.valid { 0 } else { 1 });
}

struct CliConfig {
    folder: PathBuf,
    json: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut folder: Option<PathBuf> = None;
    let mut json = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("artie {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--json" => json = true,
            "--color" => color = true,
            "--no-color" => color = false,
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                if folder.is_some() {
                    return Err("error: folder provided multiple times".to_string());
                }
                folder = Some(PathBuf::from(arg));
            }
        }
    }

    let folder = match folder {
        Some(path) => path,
        None => return Err(format!("error: no folder provided\n\n{}", help_text())),
    };

    Ok(CliConfig { folder, json, color })
}

/// Bucket the folder's files into audio and text lists by extension.
///
/// Names are sorted so the diagnostic order is reproducible across
/// platforms; file contents are never read.
fn collect_files(folder: &Path) -> Result<(Vec<FileEntry>, Vec<FileEntry>), String> {
    if !folder.is_dir() {
        return Err(format!("not a directory: {}", folder.display()));
    }

    let mut audio = Vec::new();
    let mut text = Vec::new();
    for entry in WalkDir::new(folder) {
        let entry = entry.map_err(|err| format!("failed to read {}: {err}", folder.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let size = entry.metadata().map(|meta| meta.len()).unwrap_or(0);
        let extension = Path::new(&name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("mp3") | Some("wav") => audio.push(FileEntry::new(name, size)),
            Some("usx") => text.push(FileEntry::new(name, size)),
            _ => {}
        }
    }

    audio.sort_by(|a, b| a.name.cmp(&b.name));
    text.sort_by(|a, b| a.name.cmp(&b.name));
    Ok((audio, text))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "artie {version}

Validates the naming conventions of a recorded Bible translation folder:
audio (.mp3/.wav) and text (.usx) filenames are parsed, book codes are
cross-checked between the two sets, and the folder name is decomposed into
dataset identity.

Usage:
  artie [OPTIONS] <folder>

Options:
  --json                     Print the full result as JSON instead of a report.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Folder is consistent.
  1  Folder failed validation.
  2  Invalid arguments or unreadable folder.
",
        version = env!("CARGO_PKG_VERSION")
    )
}
