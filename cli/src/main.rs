mod args;

use std::process::ExitCode;

use anyhow::Context;
use args::Args;
use clap::Parser;
use glyphramp::{Output, RenderConfig, palettes, render};

fn main() -> ExitCode {
    // Configure logging
    env_logger::init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if args.list_styles {
        for p in palettes() {
            let glyphs: String = p.glyphs().iter().collect();
            println!("{}: \"{}\"", p.index(), glyphs);
        }
        return Ok(());
    }

    // Validate before the image is opened
    let config = RenderConfig::from_args(args.width, args.style)
        .context("invalid arguments")?
        .with_filter(args.filter.into());

    let image = args.image.context("no input image given")?;
    log::info!(
        "rendering {} at width {} with style {}",
        image.display(),
        config.width,
        config.style
    );

    let art = render(&image, &config)?;
    Output::from_path(args.output_file).emit(&art)?;
    Ok(())
}
