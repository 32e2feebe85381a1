mod args;
mod filemanager;

use args::Args;
use clap::Parser;
use filemanager::{default_output_path, save_raster, ConvertError, OutputFormat};
use lib_pix::LogTarget;
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    let target = match &args.log_file {
        Some(path) => LogTarget::File(path),
        None => LogTarget::Stderr,
    };
    if let Err(err) = lib_pix::init_logging(args.log_level(), target) {
        eprintln!("Can't open log file: {}", err);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", error_chain(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), ConvertError> {
    let format = if args.bmp {
        OutputFormat::Bmp
    } else {
        OutputFormat::Png
    };
    let out_file = match &args.out_file {
        Some(path) => path.clone(),
        None => {
            let path = default_output_path(&args.in_file, format)?;
            println!("No outfile provided, defaulting to {}", path.display());
            path
        }
    };

    let image = lib_pix::load(&args.in_file, args.decode_options())?;
    let raster = lib_pix::compose(&image, args.render_mode());
    save_raster(&raster, &out_file, format)?;

    Ok(())
}

/// Joins an error and all of its sources into one line.
fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
