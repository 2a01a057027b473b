use crate::{
    catalog::CatalogConfig, constants::*, core::paginate::Navigation, utils::util::Result,
};
use anyhow::anyhow;
use chrono::Datelike;
use clap::{ArgAction, Parser, Subcommand};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

/// Full version string including the crate version and git description.
///
/// # Examples
/// * `0.1.0-1ba958a-dirty` - while on a dirty branch
/// * `0.1.0-1ba958a` - with a fresh commit
/// * `0.1.0` - when built outside a git checkout
pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    let git_describe = option_env!("VERGEN_GIT_DESCRIBE").unwrap_or_default();
    if git_describe.is_empty() {
        env!("CARGO_PKG_VERSION").to_string()
    } else {
        format!("{}-{}", env!("CARGO_PKG_VERSION"), git_describe)
    }
});

#[derive(Parser, Debug)]
#[command(name="gatein",
          author="Tom Mokveld <tmokveld@pacificbiosciences.com>",
          version=&**FULL_VERSION,
          about="Gate-in merchandise option catalog viewer and exporter",
          long_about = None,
          after_help = format!("Copyright (C) 2024-{}", chrono::Utc::now().year()),
          help_template = "{name} {version}\n{author}{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true
    )]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print one page of option cards
    View(ViewArgs),
    /// Write the ordered catalog to GateIn_Options.csv
    Export(ExportArgs),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::View(_) => "view",
            Command::Export(_) => "export",
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct DatasetArgs {
    /// JSON dataset of options (a JSON array, optionally gzip compressed)
    #[arg(
        long = "dataset",
        value_name = "DATASET",
        value_parser = check_file_exists
    )]
    pub dataset: PathBuf,

    /// Image URL used for options without an image
    #[arg(
        long = "placeholder-image-url",
        value_name = "URL",
        default_value = PLACEHOLDER_IMAGE_URL,
        help_heading = "Advanced",
        hide_default_value = true
    )]
    pub placeholder_image_url: String,
}

#[derive(Parser, Debug, Clone)]
#[command(arg_required_else_help(true))]
pub struct ViewArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Number of options per page
    #[arg(
        long = "page-size",
        value_name = "PAGE_SIZE",
        default_value_t = DEFAULT_PAGE_SIZE,
        value_parser = page_size_in_range
    )]
    pub page_size: usize,

    /// Page to show; page numbers outside the catalog are ignored
    #[arg(
        long = "page",
        value_name = "PAGE",
        allow_negative_numbers = true,
        conflicts_with = "nav"
    )]
    pub page: Option<i64>,

    /// Navigate from page 1: first, last, prev or next. Repeatable, applied in order
    #[arg(
        long = "nav",
        value_name = "NAV",
        action = ArgAction::Append,
        value_parser = parse_navigation_step
    )]
    pub nav: Vec<Navigation>,
}

impl ViewArgs {
    /// Navigation requests in the order they should be applied.
    pub fn navigation(&self) -> Vec<Navigation> {
        match self.page {
            Some(page) => vec![Navigation::Goto(page)],
            None => self.nav.clone(),
        }
    }

    pub fn catalog_config(&self) -> Result<CatalogConfig> {
        CatalogConfig::new(self.page_size, self.dataset.placeholder_image_url.clone())
    }
}

#[derive(Parser, Debug, Clone)]
#[command(arg_required_else_help(true))]
pub struct ExportArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Directory to write GateIn_Options.csv into
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        default_value = ".",
        value_parser = check_dir_exists
    )]
    pub output_dir: PathBuf,
}

impl ExportArgs {
    pub fn catalog_config(&self) -> Result<CatalogConfig> {
        CatalogConfig::new(DEFAULT_PAGE_SIZE, self.dataset.placeholder_image_url.clone())
    }
}

/// Initializes the verbosity level for logging based on the command-line arguments.
///
/// Sets up the logger with a specific verbosity level that is determined
/// by the number of occurrences of the `-v` or `--verbose` flag in the command-line arguments.
///
/// # Arguments
///
/// * `args` - A reference to the parsed command-line arguments.
pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.module_path().unwrap_or("unknown_module"),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn page_size_in_range(s: &str) -> anyhow::Result<usize> {
    let page_size: usize = s
        .parse::<usize>()
        .map_err(|_| anyhow!("`{}` is not a valid page size", s))?;
    if page_size == 0 {
        return Err(anyhow!("Page size must be >= 1"));
    }
    Ok(page_size)
}

fn parse_navigation_step(s: &str) -> anyhow::Result<Navigation> {
    match s.parse::<Navigation>().map_err(|e| anyhow!("{e}"))? {
        Navigation::Goto(_) => Err(anyhow!(
            "`{}` is not a navigation step, expected first, last, prev or next (use --page for page numbers)",
            s
        )),
        step => Ok(step),
    }
}

/// Checks if the provided file path exists.
fn check_file_exists(s: &str) -> anyhow::Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        return Err(anyhow!("File does not exist: {}", path.display()));
    }
    Ok(path.to_path_buf())
}

fn check_dir_exists(s: &str) -> anyhow::Result<PathBuf> {
    let path = Path::new(s);
    if !path.is_dir() {
        return Err(anyhow!("Directory does not exist: {}", path.display()));
    }
    Ok(path.to_path_buf())
}
