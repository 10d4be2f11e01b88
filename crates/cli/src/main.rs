use anyhow::{anyhow, bail, Context};
use config::{Config, File};
use hexgrid::{
    render::hexes_to_svg, timed, GridConfig, HexCoordinate, Point, Viewport,
};
use log::{info, LevelFilter};
use serde::Serialize;
use simple_logger::SimpleLogger;
use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
    process,
    str::FromStr,
};
use structopt::StructOpt;
use strum::{Display, EnumString};

/// CLI for flat-top hex grid math: coordinate conversions, distances, and
/// viewport culling.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexgrid")]
struct Opt {
    /// Path to a config file that defines the grid. Supported formats: JSON,
    /// TOML. Any field that's missing is populated from the default. If not
    /// given, the default config is used.
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Print the planar (world) position of a tile's center
    Point {
        #[structopt(long, allow_hyphen_values = true)]
        q: i32,
        #[structopt(long, allow_hyphen_values = true)]
        r: i32,
    },

    /// Print the tile that contains a planar (world) position
    Hex {
        #[structopt(long, allow_hyphen_values = true)]
        x: f64,
        #[structopt(long, allow_hyphen_values = true)]
        y: f64,
    },

    /// Print the number of steps between two tiles. Tiles are given as `q,r`
    Distance {
        #[structopt(long, allow_hyphen_values = true)]
        from: AxialArg,
        #[structopt(long, allow_hyphen_values = true)]
        to: AxialArg,
    },

    /// Print the six neighbors of a tile, starting with south-east and going
    /// counter-clockwise
    Neighbors {
        #[structopt(long, allow_hyphen_values = true)]
        q: i32,
        #[structopt(long, allow_hyphen_values = true)]
        r: i32,
    },

    /// Print every map tile that is visible on a screen of the given size
    Visible {
        #[structopt(flatten)]
        view: ViewOpt,
    },

    /// Render the tiles visible on a screen of the given size to an SVG file
    Render {
        #[structopt(flatten)]
        view: ViewOpt,

        /// A tile to highlight, given as `q,r`
        #[structopt(long, allow_hyphen_values = true)]
        select: Option<AxialArg>,

        /// Path of the SVG file to write
        #[structopt(short, long)]
        output: PathBuf,
    },

    /// Print the fully resolved config, with all defaults populated
    Config {
        /// The format to print in. Supported formats: json, toml
        #[structopt(short, long, default_value = "toml")]
        format: ConfigFormat,
    },
}

/// Options that define the screen a viewport is looking through
#[derive(Debug, StructOpt)]
struct ViewOpt {
    /// Screen width, in pixels
    #[structopt(long)]
    width: f64,

    /// Screen height, in pixels
    #[structopt(long)]
    height: f64,

    /// World x position at the center of the screen
    #[structopt(long, allow_hyphen_values = true, default_value = "0")]
    center_x: f64,

    /// World y position at the center of the screen
    #[structopt(long, allow_hyphen_values = true, default_value = "0")]
    center_y: f64,

    /// Screen pixels per world unit. Clamped to the configured zoom bounds.
    /// Defaults to the configured initial zoom.
    #[structopt(long)]
    zoom: Option<f64>,
}

impl ViewOpt {
    fn to_viewport(&self, config: &GridConfig) -> Viewport {
        let mut viewport = Viewport::new(&config.zoom, self.width, self.height);
        viewport.set_center(Point::new(self.center_x, self.center_y));
        if let Some(zoom) = self.zoom {
            viewport.set_zoom(zoom);
        }
        viewport
    }
}

/// A tile position on the command line, in the form `q,r`
#[derive(Copy, Clone, Debug)]
struct AxialArg(HexCoordinate);

impl FromStr for AxialArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (q, r) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("expected `q,r`, got {:?}", s))?;
        let q = q.trim().parse().with_context(|| format!("invalid q {:?}", q))?;
        let r = r.trim().parse().with_context(|| format!("invalid r {:?}", r))?;
        Ok(Self(HexCoordinate::try_new(q, r)?))
    }
}

/// Different formats for printing the config
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum ConfigFormat {
    Json,
    Toml,
}

fn load_config(config_path: &Path) -> anyhow::Result<GridConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    let config: GridConfig =
        settings.try_into().context("error reading config")?;
    config.validated().context("invalid config")
}

/// Print a value to stdout as pretty JSON
fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("error opening output file {:?}", path))?;
    file.write_all(bytes)
        .with_context(|| format!("error writing to file {:?}", path))
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = match &opt.config {
        Some(config_path) => {
            let config = load_config(config_path)?;
            info!("Loaded config from {:?}", config_path);
            config
        }
        None => GridConfig::default(),
    };
    let layout = config.layout()?;

    match opt.command {
        Command::Point { q, r } => {
            print_json(&layout.hex_to_point(HexCoordinate::try_new(q, r)?))
        }
        Command::Hex { x, y } => {
            if !(x.is_finite() && y.is_finite()) {
                bail!("position must be finite, got ({}, {})", x, y);
            }
            print_json(&layout.point_to_hex(Point::new(x, y)))
        }
        Command::Distance { from, to } => print_json(&from.0.distance_to(to.0)),
        Command::Neighbors { q, r } => {
            print_json(&HexCoordinate::try_new(q, r)?.neighbors())
        }
        Command::Visible { view } => {
            let viewport = view.to_viewport(&config);
            let radius = config.map_radius.into();
            let hexes = timed!(
                "Culling visible tiles",
                viewport.visible_hexes_within(&layout, radius)
            );
            info!("{} tiles visible", hexes.len());
            print_json(&hexes)
        }
        Command::Render {
            view,
            select,
            output,
        } => {
            let viewport = view.to_viewport(&config);
            let hexes = viewport
                .visible_hexes_within(&layout, config.map_radius.into());
            let document =
                hexes_to_svg(&layout, &hexes, select.map(|arg| arg.0));
            timed!(
                format!(
                    "Rendering {} tiles and writing to {:?}",
                    hexes.len(),
                    &output
                ),
                log::Level::Info,
                write_file(&output, document.to_string().as_bytes())
            )
        }
        Command::Config { format } => {
            let text = match format {
                ConfigFormat::Json => serde_json::to_string_pretty(&config)?,
                ConfigFormat::Toml => toml::to_string_pretty(&config)?,
            };
            println!("{}", text);
            Ok(())
        }
    }
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
