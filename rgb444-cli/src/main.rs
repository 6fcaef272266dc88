use argh::FromArgs;
use rgb444::Canvas;
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::ExitCode,
};

/// Converts an image into a 64x48 RGB444 memory-initialization file.
#[derive(FromArgs)]
struct Cli {
    /// the input image. May be a PNG, JPG, BMP, or TIFF; other sizes than 64x48 are resized.
    #[argh(positional)]
    input: PathBuf,
    /// the output file, one three-digit hex code per pixel
    #[argh(positional)]
    output: PathBuf,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args_os();
    let arg0 = args.next();
    let cmd = arg0
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .and_then(|name| name.to_str())
        .unwrap_or(env!("CARGO_PKG_NAME"));

    // exactly two paths, no flags; anything else is a usage error
    let Ok([input, output]) = <[OsString; 2]>::try_from(args.collect::<Vec<_>>()) else {
        print!("{}", usage(cmd));
        return Ok(ExitCode::FAILURE);
    };

    let Cli { input, output } = parse_paths(cmd, input, output)?;

    convert(&input, &output)?;
    println!(
        "Converted `{}` to `{}`",
        input.display(),
        output.display()
    );

    Ok(ExitCode::SUCCESS)
}

/// Parses the two paths without letting argh interpret either of them as a flag. Paths that
/// aren't valid UTF-8 are taken as they are.
fn parse_paths(cmd: &str, input: OsString, output: OsString) -> Result<Cli, String> {
    match (input.to_str(), output.to_str()) {
        (Some(i), Some(o)) => Cli::from_args(&[cmd], &["--", i, o]).map_err(|e| e.output),
        _ => Ok(Cli {
            input: input.into(),
            output: output.into(),
        }),
    }
}

fn usage(cmd: &str) -> String {
    format!(
        "Usage: {cmd} <input> <output>\n\n\
         Converts an image into a 64x48 RGB444 memory-initialization file.\n\n\
         Positional Arguments:\n  \
           input             the input image (PNG, JPG, BMP, or TIFF)\n  \
           output            the output file, one three-digit hex code per pixel\n"
    )
}

fn convert(input: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!(
        "Converting `{}` into `{}`",
        input.display(),
        output.display()
    );

    let canvas = Canvas::open(input)?;
    rgb444::encode::encode_to_file(&canvas, output)?;

    Ok(())
}
