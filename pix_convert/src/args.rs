//! Command-line arguments for the converter

use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

use lib_pix::{BodyPolicy, DecodeOptions, RenderMode};

#[derive(Parser, Debug)]
#[command(
    name = "pix-convert",
    version,
    about = "Converts Pixel Artboard .PIX files to PNG or BMP files"
)]
pub struct Args {
    /// Input filename
    #[arg(short = 'i', long = "infile")]
    pub in_file: PathBuf,

    /// Output filename (defaults to the input stem with a .png or .bmp extension)
    #[arg(short = 'o', long = "outfile")]
    pub out_file: Option<PathBuf>,

    /// Produce BMP instead of PNG output
    #[arg(short = 'b', long = "bmp", conflicts_with = "playdate")]
    pub bmp: bool,

    /// Produce Playdate-compatible two-tone PNG output
    #[arg(short = 'p', long = "playdate")]
    pub playdate: bool,

    /// Reject files whose body is shorter than the full 896 bytes
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write log output to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn render_mode(&self) -> RenderMode {
        if self.playdate {
            RenderMode::Stencil
        } else {
            RenderMode::Opaque
        }
    }

    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            body_policy: if self.strict {
                BodyPolicy::Strict
            } else {
                BodyPolicy::ZeroFill
            },
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
