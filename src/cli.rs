use crate::config::load_config;
use crate::model::parse_markers;
use crate::render::render_svg;
#[cfg(feature = "png")]
use crate::render::write_output_png;
use crate::render::write_output_svg;
use crate::theme::Theme;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "hillc", version, about = "Hill chart renderer in Rust")]
pub struct Args {
    /// Input markers file (JSON) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file (svg/png). Defaults to stdout for SVG if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file (theme, themeVariables, chart geometry)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Theme name (classic/modern); overrides the config file
    #[arg(short = 't', long = "theme")]
    pub theme: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Png,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;

    if let Some(theme_name) = args.theme.as_deref() {
        config.theme = match theme_name {
            "modern" => Theme::modern(),
            "classic" | "default" => Theme::classic(),
            other => return Err(anyhow::anyhow!("Unknown theme: {other}")),
        };
    }

    let input = read_input(args.input.as_deref())?;
    let markers = parse_markers(&input)?;
    let svg = render_svg(&markers, &config.theme, &config.chart);

    match args.output_format {
        OutputFormat::Svg => {
            write_output_svg(&svg, args.output.as_deref())?;
        }
        OutputFormat::Png => {
            #[cfg(feature = "png")]
            {
                let output = ensure_output(&args.output, "png")?;
                write_output_png(&svg, &output, &config.render)?;
            }
            #[cfg(not(feature = "png"))]
            {
                return Err(anyhow::anyhow!(
                    "PNG output requires the 'png' feature"
                ));
            }
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        return Ok(std::fs::read_to_string(path)?);
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

#[cfg(feature = "png")]
fn ensure_output(output: &Option<PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!("Output path required for {} output", ext))
}
