use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use ninepatch::{
    InkscapeRasterizer, NinePatchOpts, ParseMode, PngRasterEditor, Rasterizer, ResvgRasterizer,
};
use tracing_subscriber::EnvFilter;

/// Create an Android nine-patch PNG from an SVG.
///
/// The input SVG must contain four paths with the ids `padding-x`, `padding-y`, `stretch-x`
/// and `stretch-y`. They can be placed anywhere in the drawing, preferably outside the canvas.
#[derive(Parser, Debug)]
#[command(name = "svg-ninepatch", version)]
struct Cli {
    /// Input SVG.
    input: PathBuf,

    /// Output PNG (conventionally `*.9.png`).
    output: PathBuf,

    /// Exported width in pixels, border excluded.
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Exported height in pixels, border excluded.
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Substitute empty regions for missing or malformed annotations instead of failing.
    #[arg(long)]
    lenient: bool,

    /// Rasterizer used to render the SVG.
    #[arg(long, value_enum, default_value_t = RasterizerChoice::Resvg)]
    rasterizer: RasterizerChoice,

    /// Print the computed guides as JSON on stdout.
    #[arg(long)]
    print_guides: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RasterizerChoice {
    /// Render in process with resvg.
    Resvg,
    /// Shell out to `inkscape` (must be on PATH).
    Inkscape,
}

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage errors exit 1; --help/--version exit 0.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let rasterizer = make_rasterizer(cli.rasterizer);
    let opts = NinePatchOpts {
        width: cli.width,
        height: cli.height,
        mode: if cli.lenient {
            ParseMode::Lenient
        } else {
            ParseMode::Strict
        },
    };

    let report = ninepatch::render_nine_patch(
        &cli.input,
        &cli.output,
        opts,
        rasterizer.as_ref(),
        &PngRasterEditor::default(),
    )?;

    if cli.print_guides {
        println!("{}", serde_json::to_string_pretty(&report.guides)?);
    }

    eprintln!("wrote {}", report.output.display());
    Ok(())
}

fn make_rasterizer(choice: RasterizerChoice) -> Box<dyn Rasterizer> {
    match choice {
        RasterizerChoice::Resvg => Box::new(ResvgRasterizer::new()),
        RasterizerChoice::Inkscape => Box::new(InkscapeRasterizer::default()),
    }
}
