use futures::executor::block_on;
use pathtext::render::raster::{self, RasterOptions};
use pathtext::render::{HeadlessConverter, HeadlessError};
use pathtext::{
    AttemptOutcome, Conversion, ConversionStage, ConvertOptions, DiskFontFile, RenderRequest,
    TerminalStage, download_file_name,
};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Convert(pathtext::Error),
    Raster(raster::RasterError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Convert(err) => write!(f, "{err}"),
            CliError::Raster(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<pathtext::Error> for CliError {
    fn from(value: pathtext::Error) -> Self {
        Self::Convert(value)
    }
}

impl From<HeadlessError> for CliError {
    fn from(value: HeadlessError) -> Self {
        match value {
            HeadlessError::Convert(err) => Self::Convert(err),
        }
    }
}

impl From<raster::RasterError> for CliError {
    fn from(value: raster::RasterError) -> Self {
        Self::Raster(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum OutputFormat {
    #[default]
    Svg,
    Png,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    font: Option<String>,
    default_font: Option<String>,
    font_size: f64,
    color: String,
    config: Option<String>,
    format: OutputFormat,
    scale: f32,
    background: Option<String>,
    out: Option<String>,
    out_dir: Option<String>,
    no_synthetic: bool,
    report: bool,
    verbose: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AttemptOut<'a> {
    family: &'a str,
    encoding: String,
    outcome: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportOut<'a> {
    stage: &'static str,
    cropped: bool,
    file_name: String,
    attempts: Vec<AttemptOut<'a>>,
}

fn usage() -> &'static str {
    "pathtext-cli\n\
\n\
USAGE:\n\
  pathtext-cli [--font <path>] [--default-font <path>] [--size <n>] [--color <css-color>] [--config <json>] [--format svg|png] [--scale <n>] [--background <css-color>] [--out <path> | --out-dir <dir>] [--no-synthetic] [--report] [--verbose] [<text>|-]\n\
\n\
NOTES:\n\
  - If <text> is omitted or '-', text is read from stdin (one trailing newline is dropped).\n\
  - --font accepts .ttf, .otf, .woff and .woff2 files; other extensions are rejected before reading.\n\
  - --default-font is the bundled default font; if it cannot be read the remote fallback is used.\n\
  - SVG is printed to stdout by default; --out writes a file, --out-dir saves under a name derived from the text.\n\
  - PNG output defaults to the name derived from the text in the current directory.\n\
  - --report prints the font attempts as JSON to stderr.\n\
"
}

fn next_value<'a>(it: &mut impl Iterator<Item = &'a String>) -> Result<&'a String, CliError> {
    it.next().ok_or(CliError::Usage(usage()))
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        font_size: 48.0,
        color: "#000000".to_string(),
        scale: 1.0,
        ..Default::default()
    };

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--font" => args.font = Some(next_value(&mut it)?.clone()),
            "--default-font" => args.default_font = Some(next_value(&mut it)?.clone()),
            "--size" => {
                args.font_size = next_value(&mut it)?
                    .parse::<f64>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--color" => args.color = next_value(&mut it)?.clone(),
            "--config" => args.config = Some(next_value(&mut it)?.clone()),
            "--format" => {
                args.format = next_value(&mut it)?
                    .parse::<OutputFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--scale" => {
                args.scale = next_value(&mut it)?
                    .parse::<f32>()
                    .map_err(|_| CliError::Usage(usage()))?;
                if !(args.scale.is_finite() && args.scale > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--background" => {
                let bg = next_value(&mut it)?;
                if !bg.trim().is_empty() {
                    args.background = Some(bg.trim().to_string());
                }
            }
            "--out" => args.out = Some(next_value(&mut it)?.clone()),
            "--out-dir" => args.out_dir = Some(next_value(&mut it)?.clone()),
            "--no-synthetic" => args.no_synthetic = true,
            "--report" => args.report = true,
            "--verbose" | "-v" => args.verbose = true,
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            text => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(text.to_string());
            }
        }
    }

    if args.out.is_some() && args.out_dir.is_some() {
        return Err(CliError::Usage(usage()));
    }
    Ok(args)
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

fn read_text(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            if buf.ends_with('\n') {
                buf.pop();
                if buf.ends_with('\r') {
                    buf.pop();
                }
            }
            Ok(buf)
        }
        Some(text) => Ok(text.to_string()),
    }
}

fn load_options(args: &Args) -> Result<ConvertOptions, CliError> {
    let mut options = match &args.config {
        Some(path) => ConvertOptions::from_json_str(&std::fs::read_to_string(path)?)?,
        None => ConvertOptions::default(),
    };
    if args.no_synthetic {
        options.terminal_stage = TerminalStage::Placeholder;
    }
    Ok(options)
}

fn stage_name(stage: ConversionStage) -> &'static str {
    match stage {
        ConversionStage::EmptyInput => "emptyInput",
        ConversionStage::Outlined { .. } => "outlined",
        ConversionStage::Synthetic => "synthetic",
        ConversionStage::Placeholder => "placeholder",
    }
}

fn write_report(conversion: &Conversion, text: &str) -> Result<(), CliError> {
    let report = ReportOut {
        stage: stage_name(conversion.stage),
        cropped: matches!(conversion.stage, ConversionStage::Outlined { cropped: true }),
        file_name: download_file_name(text),
        attempts: conversion
            .attempts
            .iter()
            .map(|a| AttemptOut {
                family: &a.family,
                encoding: a.encoding.to_string(),
                outcome: match &a.outcome {
                    AttemptOutcome::Success { paths } => format!("success ({paths} paths)"),
                    AttemptOutcome::NoGlyphsProduced => "no glyphs produced".to_string(),
                    AttemptOutcome::Threw(err) => err.to_string(),
                },
            })
            .collect(),
    };
    serde_json::to_writer_pretty(std::io::stderr().lock(), &report)?;
    eprintln!();
    Ok(())
}

fn output_path(args: &Args, text: &str, ext: &str) -> Option<PathBuf> {
    if let Some(out) = &args.out {
        return Some(PathBuf::from(out));
    }
    let name = Path::new(&download_file_name(text)).with_extension(ext);
    match (&args.out_dir, args.format) {
        (Some(dir), _) => Some(Path::new(dir).join(name)),
        (None, OutputFormat::Png) => Some(name),
        (None, OutputFormat::Svg) => None,
    }
}

async fn run(args: Args) -> Result<(), CliError> {
    let text = read_text(args.input.as_deref())?;
    let mut converter = HeadlessConverter::new().with_options(load_options(&args)?);

    if let Some(location) = &args.default_font {
        // A missing default font is not fatal; the warning is logged by the session.
        let _ = converter.load_default_font(location).await;
    }
    if let Some(path) = &args.font {
        converter.upload(DiskFontFile::new(path)).await?;
    }

    let request = RenderRequest::new(text.clone(), args.font_size, args.color.clone());
    let conversion = converter.convert(&request).await?;
    if args.report {
        write_report(&conversion, &text)?;
    }

    match args.format {
        OutputFormat::Svg => match output_path(&args, &text, "svg") {
            Some(path) => std::fs::write(path, &conversion.svg)?,
            None => print!("{}", conversion.svg),
        },
        OutputFormat::Png => {
            let raster = RasterOptions {
                scale: args.scale,
                background: args.background.clone(),
            };
            let bytes = raster::svg_to_png(&conversion.svg, &raster)?;
            if let Some(path) = output_path(&args, &text, "png") {
                std::fs::write(path, bytes)?;
            }
        }
    }
    Ok(())
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    init_tracing(args.verbose);

    if let Err(err) = block_on(run(args)) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
