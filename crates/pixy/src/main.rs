#![warn(clippy::all, clippy::pedantic)]

mod commands;
mod options;

pub use commands::*;
pub use options::*;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, Naming};
use pixy_engine_edit::{DirectorySaver, EditorSettings, GridEditor, ImageFormat, RenderOptions, DEFAULT_EXPORT_WIDTH, MAX_EXPORT_DIMENSION};

fn parse_format(value: &str) -> Result<ImageFormat, String> {
    ImageFormat::from_extension(value).ok_or_else(|| {
        let known: Vec<&str> = ImageFormat::ALL.iter().map(ImageFormat::extension).collect();
        format!("unknown image format '{value}' (use one of: {})", known.join(", "))
    })
}

/// Edit a pixel-art grid with a list of commands and export it as an image
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Editor settings (TOML) to start from instead of the stored options
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Export format
    #[arg(long, value_name = "png|jpeg", value_parser = parse_format)]
    format: Option<ImageFormat>,

    /// Directory to export into
    #[arg(long, short, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Grid name, also used as file name
    #[arg(long)]
    name: Option<String>,

    /// Width in pixels of the exported image
    #[arg(long, value_name = "PX", value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_EXPORT_DIMENSION)))]
    width: Option<u32>,

    /// Remember the settings of this run for the next one
    #[arg(long, default_value_t = false)]
    store: bool,

    /// Editing commands, applied in order: paint:R,C color:#hex background:#hex size:RxC
    /// rows:N columns:N spacing:N aspect:on|off flip-v flip-h rotate center undo redo
    #[arg(value_name = "COMMAND")]
    commands: Vec<Command>,
}

fn get_log_dir() -> Option<PathBuf> {
    let dir = Options::get_config_dir()?;
    if !dir.exists() {
        std::fs::create_dir_all(&dir).ok()?;
    }
    Some(dir)
}

fn load_settings(args: &Args, options: &Options) -> anyhow::Result<EditorSettings> {
    let mut settings = match &args.settings {
        Some(path) => {
            let text = std::fs::read_to_string(path).with_context(|| format!("Can't read settings file {}", path.display()))?;
            EditorSettings::from_toml_str(&text)?
        }
        None => options.editor.clone(),
    };
    if let Some(name) = &args.name {
        settings.appearance.grid_name.clone_from(name);
    }
    Ok(settings)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let _logger = match get_log_dir() {
        Some(log_dir) => Some(
            Logger::try_with_env_or_str("info")?
                .log_to_file(FileSpec::default().directory(&log_dir).basename("pixy").suffix("log").suppress_timestamp())
                .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
                .duplicate_to_stderr(flexi_logger::Duplicate::Warn)
                .start()?,
        ),
        None => {
            eprintln!("Failed to create log file");
            None
        }
    };

    log::info!("Starting pixy {}", env!("CARGO_PKG_VERSION"));

    let mut options = Options::load_options();
    let settings = load_settings(&args, &options)?;
    let mut editor = GridEditor::from_settings(&settings)?;

    for command in &args.commands {
        command.apply(&mut editor).with_context(|| format!("Command '{command}' failed"))?;
    }

    let format = args.format.unwrap_or_else(|| options.export_format());
    let width = args.width.or(options.export_width);
    let render_options = RenderOptions::for_width(width.unwrap_or(DEFAULT_EXPORT_WIDTH), editor.columns());
    let directory = args.output.clone().or_else(|| options.export_directory.clone()).unwrap_or_else(|| PathBuf::from("."));

    let path = editor.export(format, &render_options, &DirectorySaver::new(directory))?;
    println!("{}", path.display());

    if args.store {
        options.editor = editor.settings();
        options.export_format = Some(format.extension().to_string());
        options.export_width = width;
        if let Err(err) = options.store_options() {
            log::error!("{err:#}");
        }
    }

    log::info!("Shutting down.");
    Ok(())
}
