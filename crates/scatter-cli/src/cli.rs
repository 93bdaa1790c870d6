// File: crates/scatter-cli/src/cli.rs
// Summary: clap definitions for the `health-scatter` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use scatter_core::Field;

#[derive(Parser, Debug)]
#[command(name = "health-scatter", version, about = "Smoking rate vs. median age scatter plot")]
pub struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the chart to a PNG or SVG file
    Render(RenderArgs),
    /// Print scale domains and marker positions
    Scales(ChartArgs),
}

#[derive(Args, Debug)]
pub struct ChartArgs {
    /// Input CSV with state, abbr, smokes and age columns
    #[arg(default_value = "assets/data.csv")]
    pub input: PathBuf,

    /// Field on the horizontal axis
    #[arg(long, default_value = "smokes")]
    pub x: Field,

    /// Field on the vertical axis
    #[arg(long, default_value = "age")]
    pub y: Field,

    /// TOML file overriding the default chart configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Theme preset (light, dark, high-contrast-dark)
    #[arg(long)]
    pub theme: Option<String>,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub chart: ChartArgs,

    /// Output path; defaults to target/out/scatter_<x>_<y>.<format>
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Output format; inferred from --out when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Png,
    Svg,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Format::Png => "png",
            Format::Svg => "svg",
        }
    }
}

impl RenderArgs {
    /// Explicit format, else the output extension, else SVG.
    pub fn resolved_format(&self) -> Format {
        if let Some(f) = self.format {
            return f;
        }
        let ext = self
            .out
            .as_ref()
            .and_then(|p| p.extension())
            .map(|e| e.to_string_lossy().to_lowercase());
        match ext.as_deref() {
            Some("png") => Format::Png,
            _ => Format::Svg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_args(argv: &[&str]) -> RenderArgs {
        match Cli::try_parse_from(argv).expect("parse").command {
            Commands::Render(args) => args,
            other => panic!("expected render, got {other:?}"),
        }
    }

    #[test]
    fn defaults_select_smokes_vs_age() {
        let args = render_args(&["health-scatter", "render"]);
        assert_eq!(args.chart.x, Field::Smokes);
        assert_eq!(args.chart.y, Field::Age);
        assert_eq!(args.chart.input, PathBuf::from("assets/data.csv"));
        assert_eq!(args.resolved_format(), Format::Svg);
    }

    #[test]
    fn format_follows_output_extension_unless_given() {
        let args = render_args(&["health-scatter", "render", "data.csv", "--out", "chart.PNG"]);
        assert_eq!(args.resolved_format(), Format::Png);
        let args = render_args(&["health-scatter", "render", "--out", "chart.png", "--format", "svg"]);
        assert_eq!(args.resolved_format(), Format::Svg);
    }

    #[test]
    fn unknown_field_is_a_usage_error() {
        assert!(Cli::try_parse_from(["health-scatter", "scales", "--x", "income"]).is_err());
    }
}
