use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use glob::glob;

use axscope_core::alert::{Alert, AlertDomain, Severity, classify};
use axscope_core::decode::decode_hex_stream;
use axscope_core::export::{export_file_name, serialize_csv};
use axscope_core::service::{DecodeRequest, DecodeService, HexFileService, is_wave_file};
use axscope_core::{Packet, make_report, modes};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("AXSCOPE_BUILD_COMMIT"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "axscope")]
#[command(version = VERSION)]
#[command(
    about = "Inspector for demodulated AX.25 packet streams (callsigns, HRGJIS text, CSV export).",
    long_about = None,
    after_help = "Examples:\n  axscope modes\n  axscope decode beacon.hex --mode 0\n  axscope decode beacon.hex --json\n  axscope decode beacon.hex --csv out.csv"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the selectable communication modes.
    Modes {
        /// Emit the mode table as JSON
        #[arg(long)]
        json: bool,
    },
    /// Decode a hex packet dump and print per-packet callsigns and text.
    #[command(
        after_help = "Examples:\n  axscope decode beacon.hex --mode 0\n  axscope decode beacon.hex --json\n  axscope decode beacon.hex --csv\n  axscope decode beacon.hex --csv out.csv --quiet"
    )]
    Decode {
        /// Path to a hex dump (.hex or .txt), one packet per line
        input: PathBuf,

        /// Communication mode number (see `axscope modes`)
        #[arg(short, long, default_value_t = 0)]
        mode: u32,

        /// Print the decode report as JSON
        #[arg(long, conflicts_with = "pretty")]
        json: bool,

        /// Print the decode report as pretty JSON
        #[arg(long)]
        pretty: bool,

        /// Write the CSV export; without a value the file lands next to the
        /// input under the conventional name
        #[arg(long, num_args = 0..=1)]
        csv: Option<Option<PathBuf>>,

        /// Language for alert messages
        #[arg(long, value_enum, default_value_t = Lang::En)]
        lang: Lang,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Lang {
    En,
    Ja,
}

impl Lang {
    fn pick<'a>(&self, alert: &'a Alert) -> &'a [String] {
        match self {
            Lang::En => &alert.detail.en,
            Lang::Ja => &alert.detail.ja,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Modes { json } => cmd_modes(json),
        Commands::Decode {
            input,
            mode,
            json,
            pretty,
            csv,
            lang,
            quiet,
        } => cmd_decode(input, mode, json, pretty, csv, lang, quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }

    fn classified(lang: Lang, signal: &str, hint: Option<String>) -> Self {
        let alert = classify(AlertDomain::Decode, Severity::Error, signal);
        Self::new(
            format!("[{}] {}", alert.code, lang.pick(&alert).join("; ")),
            hint,
        )
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn cmd_modes(json: bool) -> Result<(), CliError> {
    if json {
        let out = serde_json::to_string_pretty(modes::all())
            .context("JSON serialization failed")
            .map_err(CliError::from)?;
        println!("{}", out);
        return Ok(());
    }

    println!("{:<6}{:<12}{:<8}{}", "mode", "modulation", "baud", "protocol");
    for mode in modes::all() {
        println!(
            "{:<6}{:<12}{:<8}{}",
            mode.number, mode.modulation, mode.baud_rate, mode.protocol
        );
    }
    Ok(())
}

fn cmd_decode(
    input: PathBuf,
    mode: u32,
    json: bool,
    pretty: bool,
    csv: Option<Option<PathBuf>>,
    lang: Lang,
    quiet: bool,
) -> Result<(), CliError> {
    let mode = modes::by_number(mode).ok_or_else(|| {
        CliError::classified(
            lang,
            "Invalid URL parameter: 'mode'",
            Some("list valid modes with `axscope modes`".to_string()),
        )
    })?;

    let input = resolve_input_path(&input)?;
    validate_input_file(lang, &input)?;

    let request = DecodeRequest::ax25(&input, mode.baud_rate);
    let body = HexFileService.fetch(&request).map_err(|err| {
        CliError::classified(
            lang,
            err.alert_signal(),
            Some(format!("decode request failed for {}", input.display())),
        )
    })?;

    let packets = decode_hex_stream(&body).map_err(|err| {
        CliError::new(
            format!("malformed hex dump: {err}"),
            Some("each line must be even-length hex, one packet per line".to_string()),
        )
    })?;

    if packets.is_empty() && !quiet {
        let alert = classify(AlertDomain::Decode, Severity::Warning, "No result");
        eprintln!("warning: [{}] {}", alert.code, lang.pick(&alert).join("; "));
    }

    if json || pretty {
        let report = make_report(&input.display().to_string(), mode.number, mode.baud_rate, packets.clone());
        let out = if pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        let out = out
            .context("JSON serialization failed")
            .map_err(CliError::from)?;
        println!("{}", out);
    } else {
        print_packets(&packets);
    }

    if let Some(csv_path) = csv {
        let csv_path = csv_path.unwrap_or_else(|| default_csv_path(&input));
        write_csv(&packets, &csv_path)?;
        if !quiet {
            eprintln!("OK: CSV written -> {}", csv_path.display());
        }
    }

    Ok(())
}

fn print_packets(packets: &[Packet]) {
    for (index, packet) in packets.iter().enumerate() {
        println!(
            "Packet {}  dest \"{}\"  source \"{}\"",
            index + 1,
            packet.dest_callsign,
            packet.source_callsign
        );
        println!("  hex   {}", packet.hex);
        println!("  chars {}", packet.chars);
    }
}

fn write_csv(packets: &[Packet], path: &PathBuf) -> Result<(), CliError> {
    let hex_lines: Vec<&str> = packets.iter().map(|p| p.hex.as_str()).collect();
    let char_lines: Vec<&str> = packets.iter().map(|p| p.chars.as_str()).collect();
    let blob = serialize_csv(&hex_lines, &char_lines)
        .context("CSV serialization failed")
        .map_err(CliError::from)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(path, blob)
        .with_context(|| format!("Failed to write CSV: {}", path.display()))?;
    Ok(())
}

fn default_csv_path(input: &PathBuf) -> PathBuf {
    let base = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("decode-result");
    let name = export_file_name(base);
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(name),
        _ => PathBuf::from(name),
    }
}

fn validate_input_file(lang: Lang, input: &PathBuf) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::classified(
            lang,
            "File not found",
            Some(format!("no such file: {}", input.display())),
        ));
    }
    let ext = input
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != "hex" && ext != "txt" {
        let hint = if is_wave_file(input) {
            "raw WAVE audio must pass through the demodulating service first; \
             expected a .hex or .txt packet dump"
        } else {
            "expected a .hex or .txt packet dump"
        };
        return Err(CliError::classified(
            lang,
            "Invalid file type",
            Some(hint.to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &PathBuf) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.clone());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern; expected a .hex or .txt dump".to_string()),
        ));
    }
    if matches.len() > 1 {
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches)",
                pattern,
                matches.len()
            ),
            Some("pass a single dump file, or run once per file".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
