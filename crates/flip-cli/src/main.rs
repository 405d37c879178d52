//! `flipcfg` — work with FLipMouse configuration profiles offline.
//!
//! The tool operates on profile files (one AT-command line per row, the
//! same format the device stores per slot) and on captured serial dumps.
//! It never opens a serial port itself; transport belongs to whatever
//! produced the capture.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use flip_at_protocol::{first_unknown_key, CommandRegistry, DeviceLine, UiKind};
use flip_slots::{
    axis_readout, display_slot, read_profile, requests, store_slot, write_profile, BindingTable,
    DumpCollector, FieldValue, Slot,
};

#[derive(Parser)]
#[command(name = "flipcfg", about = "FLipMouse configuration profile tool", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the baseline configuration, or write it as a profile file.
    Default {
        /// Write to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Load a profile file and show the resolved configuration fields.
    Show {
        /// Profile file to load.
        file: PathBuf,
        /// Emit the binding table as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Check that a profile file survives a parse/store round trip.
    Roundtrip {
        /// Profile file to check.
        file: PathBuf,
    },
    /// Classify each line of a captured device dump.
    Classify {
        /// Capture file, one received line per row.
        file: PathBuf,
    },
    /// Print the wire sequence that applying a profile would send.
    ApplyLines {
        /// Profile file to load.
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let registry = CommandRegistry::standard();

    match cli.command {
        Command::Default { out } => {
            let slot = Slot::default();
            match out {
                Some(path) => {
                    write_profile(&slot, &path)
                        .with_context(|| format!("writing {}", path.display()))?;
                    tracing::info!("wrote baseline profile to {}", path.display());
                }
                None => {
                    for line in &slot.lines {
                        println!("{line}");
                    }
                }
            }
        }
        Command::Show { file, json } => {
            let slot = read_profile(&file).with_context(|| format!("reading {}", file.display()))?;
            let mut table = BindingTable::standard();
            let readout = display_slot(&slot, &mut table, &registry)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&table)?);
            } else {
                print_table(&slot, &table, &registry);
            }
            println!(
                "speed {} / deadzone {}{}",
                readout.speed,
                readout.deadzone,
                if readout.split_axes { " (split X/Y)" } else { "" }
            );
        }
        Command::Roundtrip { file } => {
            let slot = read_profile(&file).with_context(|| format!("reading {}", file.display()))?;
            let mut table = BindingTable::standard();
            display_slot(&slot, &mut table, &registry)?;
            let stored = store_slot(slot.name.clone(), &table, &registry)?;

            let mut restored = BindingTable::standard();
            display_slot(&stored, &mut restored, &registry)?;
            if restored != table {
                bail!("profile '{}' does not survive a round trip", slot.name);
            }

            // Lines with no binding (e.g. wheel step) are dropped on store;
            // report them so the user knows the rewrite is lossy.
            for line in slot.lines.iter().filter(|l| !stored.lines.contains(l)) {
                println!("not preserved: {line}");
            }
            println!("round trip ok ({} lines -> {} lines)", slot.lines.len(), stored.lines.len());
        }
        Command::Classify { file } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let mut collector = DumpCollector::new();
            for line in text.lines().filter(|l| !l.trim().is_empty()) {
                match DeviceLine::classify(line) {
                    Ok(classified) => println!("{classified:?}"),
                    Err(err) => println!("error: {err}"),
                }
                collector.feed(line);
            }
            if collector.is_complete() {
                for slot in collector.into_slots() {
                    println!("slot '{}': {} lines", slot.name, slot.lines.len());
                }
            }
        }
        Command::ApplyLines { file } => {
            let slot = read_profile(&file).with_context(|| format!("reading {}", file.display()))?;
            let mut table = BindingTable::standard();
            display_slot(&slot, &mut table, &registry)?;
            println!("{}", requests::end_reporting());
            for line in requests::apply_lines(&table, &registry)? {
                println!("{line}");
            }
            println!("{}", requests::calibrate());
            println!("{}", requests::start_reporting());
        }
    }
    Ok(())
}

/// Print the resolved fields of a displayed profile.
fn print_table(slot: &Slot, table: &BindingTable, registry: &CommandRegistry) {
    println!("slot '{}'", slot.name);
    for binding in table.iter() {
        match &binding.value {
            FieldValue::Slider { value } | FieldValue::Int { value } => {
                println!("  {:10} {}", binding.code, value);
            }
            FieldValue::Text { value } => println!("  {:10} {}", binding.code, value),
            FieldValue::Boolean { primary } => {
                println!("  {:10} {}", binding.code, if *primary { "1" } else { "0" });
            }
            FieldValue::Choice { action, number, text } => {
                let detail = match registry.ui_kind_by_description(action) {
                    Some(UiKind::IntField) => format!(" ({number})"),
                    Some(UiKind::TextField) => format!(" ({text})"),
                    Some(UiKind::KeySelect) => match first_unknown_key(text) {
                        Some(unknown) => format!(" ({text}) [unknown key {unknown}]"),
                        None => format!(" ({text})"),
                    },
                    _ => String::new(),
                };
                println!("  {:10} {action}{detail}", binding.code);
            }
        }
    }

    let readout = axis_readout(table);
    tracing::debug!(?readout, "axis readout recomputed");
}
