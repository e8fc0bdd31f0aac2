use std::path::PathBuf;

/// Choropleth map CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "choropleth", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Render the map to an SVG file
    Render(RenderArgs),

    /// Hit-test a pointer position and print the tooltip state as JSON
    Hover(HoverArgs),
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// TopoJSON topology (file path or http(s) URL)
    pub topology: String,

    /// Statistics JSON array (file path or http(s) URL)
    pub statistics: String,

    /// Output SVG file, defaults to "./map.svg"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Fit unprojected (lon/lat) coordinates into the viewBox
    #[arg(long)]
    pub fit: bool,
}

#[derive(clap::Args, Debug)]
pub struct HoverArgs {
    /// TopoJSON topology (file path or http(s) URL)
    pub topology: String,

    /// Statistics JSON array (file path or http(s) URL)
    pub statistics: String,

    /// Pointer x in map (viewBox) coordinates
    #[arg(long)]
    pub x: f64,

    /// Pointer y in map (viewBox) coordinates
    #[arg(long)]
    pub y: f64,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 1280.0)]
    pub viewport_width: f64,

    /// JSON configuration file
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Fit unprojected (lon/lat) coordinates into the viewBox
    #[arg(long)]
    pub fit: bool,
}
