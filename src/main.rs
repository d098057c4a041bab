use ad_resizer::catalog::FormatCatalog;
use ad_resizer::config::{self, AppConfig};
use ad_resizer::generate::GenerateError;
use ad_resizer::imaging::{self, RustBackend};
use ad_resizer::session::Session;
use ad_resizer::{export, output};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Format selection shared by commands that take a source image.
#[derive(clap::Args, Clone)]
struct SelectArgs {
    /// Source image (JPEG, PNG, TIFF, WebP, GIF, BMP)
    source: PathBuf,

    /// Format id to render; repeat for several (see `formats`)
    #[arg(short = 'f', long = "format", value_name = "ID")]
    formats: Vec<String>,

    /// Select every format in the catalog
    #[arg(long, conflicts_with = "formats")]
    all: bool,
}

impl SelectArgs {
    fn selected(&self, catalog: &FormatCatalog) -> Vec<String> {
        if self.all {
            catalog.ids().into_iter().map(String::from).collect()
        } else {
            self.formats.clone()
        }
    }
}

#[derive(Parser)]
#[command(name = "ad-resizer")]
#[command(about = "Render one image into a set of ad formats")]
#[command(long_about = "\
Render one image into a set of ad formats

Each format is produced at its exact pixel size. The source is scaled so it
covers the whole canvas, centered, and any overhang is cropped evenly from
both sides. Transparent areas land on white. Output is always PNG, named
ad-<format id>.png.

Stock formats:
  fb-ig-square      FB/IG Square      1080×1080
  ig-story          IG Story/TikTok   1080×1920
  linkedin-banner   LinkedIn Banner   1200×628

Run 'ad-resizer gen-config' to generate a documented ad-resizer.toml.")]
#[command(version)]
struct Cli {
    /// Config file (default: ./ad-resizer.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the format catalog
    Formats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show where the source lands in each format without rendering
    Plan(SelectArgs),
    /// Render the source into the selected formats and save PNGs
    Generate {
        #[command(flatten)]
        select: SelectArgs,

        /// Output directory
        #[arg(short, long, default_value = "ads")]
        output: PathBuf,
    },
    /// Print a stock ad-resizer.toml with all options documented
    GenConfig,
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Formats { json } => {
            let catalog = load_config(cli.config.as_deref())?.catalog()?;
            if json {
                println!("{}", output::format_catalog_json(&catalog)?);
            } else {
                output::print_catalog(&catalog);
            }
        }
        Command::Plan(select) => {
            let catalog = load_config(cli.config.as_deref())?.catalog()?;
            let backend = RustBackend::new();
            let source = imaging::load_source(&backend, &select.source)?;
            let selected = select.selected(&catalog);
            if selected.is_empty() {
                return Err(GenerateError::NoFormatsSelected.into());
            }
            let mut plans = Vec::new();
            for format in catalog.iter().filter(|f| selected.contains(&f.id)) {
                let params = imaging::plan_composite(
                    source.dimensions(),
                    format.dimensions(),
                    imaging::Compression::default(),
                )?;
                plans.push((format.clone(), params));
            }
            output::print_plan(source.dimensions(), &plans);
        }
        Command::Generate { select, output } => {
            let config = load_config(cli.config.as_deref())?;
            let catalog = config.catalog()?;
            let backend = RustBackend::new();

            let mut session = Session::new(config.png.compression, config.min_latency());
            session.load_source(imaging::load_source(&backend, &select.source)?);
            for id in select.selected(&catalog) {
                if !session.is_selected(&id) {
                    session.toggle_format(&id);
                }
            }

            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    for line in output::format_generate_event(&event) {
                        println!("{}", line);
                    }
                }
            });
            let result = session.generate(&backend, &catalog, Some(tx));
            printer.join().ok();
            let assets = result?;

            let paths = export::save_assets(assets, &output)?;
            output::print_saved(&paths);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load an explicit config file, or `ad-resizer.toml` from the working
/// directory when none is given.
fn load_config(path: Option<&Path>) -> Result<AppConfig, config::ConfigError> {
    match path {
        Some(p) => config::load_config_file(p),
        None => config::load_config(Path::new(".")),
    }
}
