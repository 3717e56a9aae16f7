use std::{path::PathBuf, rc::Rc};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tfe::{Editor, PiecewiseLinear, Point, RenderConfig, Tent};

#[derive(Parser, Debug)]
#[command(name = "tfe", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the demo editor stack as a PNG.
    Render(RenderArgs),
    /// Print the demo envelope sampled at uniform positions as JSON.
    Sample(SampleArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Render config JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the raster width.
    #[arg(long)]
    width: Option<u32>,

    /// Override the raster height.
    #[arg(long)]
    height: Option<u32>,

    /// Skip the envelope outline.
    #[arg(long)]
    no_outline: bool,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Number of samples.
    #[arg(long, default_value_t = 16)]
    count: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Sample(args) => cmd_sample(args),
    }
}

/// Ramp plus a centered tent, the stack the editor opens with.
fn demo_editor() -> Editor {
    let mut editor = Editor::new();
    editor.add_function(Rc::new(PiecewiseLinear::new(vec![
        Point::new(0.0, 1.0),
        Point::new(0.3, 0.8),
        Point::new(1.0, 1.0),
    ])));
    editor.add_function(Rc::new(Tent::default()));
    editor
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut cfg = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    if let Some(w) = args.width {
        cfg.width = w;
    }
    if let Some(h) = args.height {
        cfg.height = h;
    }
    if args.no_outline {
        cfg.show_outline = false;
    }
    cfg.validate()?;

    let mut editor = demo_editor();
    editor.set_background(Rc::new(cfg.checkers()));
    editor.set_show_outline(cfg.show_outline);

    let tex = editor.rasterize(cfg.width, cfg.height);

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &tex.to_rgba8(),
        tex.width(),
        tex.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let samples = demo_editor().sample_alpha(args.count);
    println!("{}", serde_json::to_string(&samples)?);
    Ok(())
}
