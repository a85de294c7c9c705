// Headless sampling: open an image, pick one color, print it.
//
//   pxa-picker --input art.png --x 12 --y 40
//   pxa-picker -i art.png --x 12.5 --y 40 --size 5 --source image --format rgba

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use crate::app::engine::PickerEngine;
use crate::app::error::Result;
use crate::app::io_service::IoService;
use crate::app::settings::PickerSettings;
use crate::core::color::Color;
use crate::tools::geometry::PointD;
use crate::tools::sampler::{PickTarget, SampleSize, SampleSource};
use crate::tools::tool_trait::{PointerButton, ToolType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    Layer,
    Image,
}

impl From<SourceArg> for SampleSource {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Layer => SampleSource::Layer,
            SourceArg::Image => SampleSource::Image,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Hex,
    Rgba,
}

/// Sample an averaged color from an image.
#[derive(Parser, Debug)]
#[command(name = "pxa-picker", version, about = "Pick an averaged color from an image")]
pub struct CliArgs {
    /// Image to sample.
    #[arg(short, long, value_name = "IMAGE")]
    pub input: PathBuf,

    /// Horizontal position in image pixels (fractions are truncated).
    #[arg(long, allow_negative_numbers = true)]
    pub x: f64,

    /// Vertical position in image pixels (fractions are truncated).
    #[arg(long, allow_negative_numbers = true)]
    pub y: f64,

    /// Edge of the sampled square: 1, 3, 5, 7 or 9. Overrides --settings.
    #[arg(short, long, value_parser = parse_sample_size)]
    pub size: Option<SampleSize>,

    /// Read the raw layer or the flattened image. Overrides --settings.
    #[arg(long, value_enum)]
    pub source: Option<SourceArg>,

    /// JSON picker settings used for anything not given on the command line.
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Hex)]
    pub format: OutputFormat,

    /// Debug logging for this crate.
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_sample_size(s: &str) -> std::result::Result<SampleSize, String> {
    let n: u32 = s.parse().map_err(|e| format!("{e}"))?;
    SampleSize::try_from(n).map_err(|e| e.to_string())
}

impl CliArgs {
    /// Settings file values with command-line overrides applied.
    pub fn resolve_settings(&self) -> Result<PickerSettings> {
        let mut settings = match &self.settings {
            Some(path) => PickerSettings::load(path)?,
            None => PickerSettings::default(),
        };
        if let Some(size) = self.size {
            settings.sample_size = size;
        }
        if let Some(source) = self.source {
            settings.sample_source = source.into();
        }
        Ok(settings)
    }
}

pub fn format_color(color: Color, format: OutputFormat) -> String {
    match format {
        OutputFormat::Hex => color.to_hex(),
        OutputFormat::Rgba => format!("{} {} {} {}", color.r, color.g, color.b, color.a),
    }
}

/// Opens the image and drives a primary-button press through the picker.
/// `None` when the point lies outside the image.
pub fn pick(args: &CliArgs) -> Result<Option<Color>> {
    let settings = args.resolve_settings()?;
    let store = IoService::open_document(&args.input)?;
    let mut engine = PickerEngine::with_store(store);
    engine.apply_settings(settings);
    engine.set_tool(ToolType::ColorPicker);

    let inside = engine.store().contains_point(PointD::new(args.x, args.y));
    engine.on_mouse_down(PointerButton::Primary, args.x, args.y);
    engine.on_mouse_up(PointerButton::Primary);
    Ok(inside.then(|| engine.palette().primary))
}

pub fn run(args: CliArgs) -> ExitCode {
    match pick(&args) {
        Ok(Some(color)) => {
            println!("{}", format_color(color, args.format));
            ExitCode::SUCCESS
        }
        Ok(None) => {
            tracing::error!(x = args.x, y = args.y, "point is outside the image");
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!(error = %e, input = %args.input.display(), "sampling failed");
            ExitCode::FAILURE
        }
    }
}
