//! Quill CLI binary: assemble a prompt from a settings document or preset.
//!
//! Subcommands: `build` (assemble and print/export), `preset` (list/show the
//! fixed catalog), `init` (write a settings document to edit).

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cli::{render, write_settings_template, RecordSource};
use quill::preset::{Preset, ALL};
use quill::settings;

#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(about = "Quill — assemble a prompt from a settings file or preset")]
struct Args {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Assemble the prompt and print it (or export with --out)
    Build(BuildArgs),
    /// List or show the fixed preset catalog
    Preset(PresetArgs),
    /// Write a settings document to start editing from
    Init(InitArgs),
}

#[derive(clap::Args, Debug, Clone)]
struct BuildArgs {
    /// Settings document (JSON) holding the full options record
    #[arg(short, long, value_name = "FILE", conflicts_with = "preset")]
    settings: Option<PathBuf>,

    /// Preset name or id (see `quill preset list`)
    #[arg(short, long, value_name = "NAME")]
    preset: Option<String>,

    /// Export the assembled prompt to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Directory containing fragments.yaml overrides (default: QUILL_FRAGMENTS_DIR)
    #[arg(long, value_name = "DIR")]
    fragments: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Clone)]
struct PresetArgs {
    #[command(subcommand)]
    sub: PresetCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum PresetCommand {
    /// List all presets (id and display name)
    List,
    /// Print one preset's full record as a settings document
    Show(ShowPresetArgs),
}

#[derive(clap::Args, Debug, Clone)]
struct ShowPresetArgs {
    /// Preset name or id (e.g. coding-workflow)
    name: String,
}

#[derive(clap::Args, Debug, Clone)]
struct InitArgs {
    /// Where to write the settings document
    #[arg(short, long, value_name = "FILE", default_value = "prompt_settings.json")]
    out: PathBuf,

    /// Start from a preset's record instead of the defaults
    #[arg(short, long, value_name = "NAME")]
    preset: Option<String>,
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    match args.cmd {
        Command::Build(b) => {
            let source = RecordSource {
                settings: b.settings,
                preset: b.preset,
            };
            let prompt = render(&source, b.fragments.as_deref())?;
            match b.out {
                Some(path) => {
                    quill::export::write_prompt(&path, &prompt)?;
                    tracing::info!(path = %path.display(), "prompt exported");
                }
                None => println!("{}", prompt),
            }
        }
        Command::Preset(p) => match p.sub {
            PresetCommand::List => {
                for preset in ALL {
                    println!("{:<24} {}", preset.id(), preset.name());
                }
            }
            PresetCommand::Show(s) => {
                let preset = Preset::from_name(&s.name)
                    .ok_or_else(|| cli::CliError::UnknownPreset(s.name.clone()))?;
                println!("{}", settings::to_json(&preset.options()));
            }
        },
        Command::Init(i) => {
            write_settings_template(&i.out, i.preset.as_deref())?;
            tracing::info!(path = %i.out.display(), "settings written");
        }
    }
    Ok(())
}

fn main() {
    config::load_and_apply("quill", None).ok();
    config::init_tracing("QUILL_LOG");

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("quill: {}", e);
        std::process::exit(1);
    }
}
