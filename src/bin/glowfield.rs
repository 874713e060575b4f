use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use glowfield::{
    FixedRefresh, FrameIndex, PaletteStore, Playground, PlaygroundConfig,
    PngSequenceSink, RefreshDriver, ToneFilter, Unpaced, write_png,
};

#[derive(Parser, Debug)]
#[command(name = "glowfield", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single animation frame as a PNG.
    Frame(FrameArgs),
    /// Render a sequence of frames as numbered PNGs.
    Render(RenderArgs),
    /// Print the idea board.
    Ideas(IdeasArgs),
    /// Print the palette presets.
    Palettes,
}

#[derive(Args, Debug)]
struct Overrides {
    /// Playground config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Palette preset index.
    #[arg(long)]
    palette: Option<usize>,

    /// RNG seed for reproducible particle placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Container width in logical pixels.
    #[arg(long)]
    width: Option<f64>,

    /// Container height in logical pixels.
    #[arg(long)]
    height: Option<f64>,

    /// Device pixel ratio.
    #[arg(long)]
    dpr: Option<f64>,
}

impl Overrides {
    fn load(&self) -> anyhow::Result<PlaygroundConfig> {
        let mut cfg = match &self.config {
            Some(path) => PlaygroundConfig::from_path(path)
                .with_context(|| format!("load config '{}'", path.display()))?,
            None => PlaygroundConfig::default(),
        };
        if let Some(p) = self.palette {
            cfg.palette = p;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        if let Some(w) = self.width {
            cfg.surface.width = w;
        }
        if let Some(h) = self.height {
            cfg.surface.height = h;
        }
        if let Some(r) = self.dpr {
            cfg.surface.device_pixel_ratio = r;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Frame index (0-based).
    #[arg(long, default_value_t = 0)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    overrides: Overrides,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Number of frames (defaults to the config value).
    #[arg(long)]
    frames: Option<u64>,

    /// Pace frames to the configured refresh rate instead of rendering flat out.
    #[arg(long, default_value_t = false)]
    realtime: bool,

    #[command(flatten)]
    overrides: Overrides,
}

#[derive(Parser, Debug)]
struct IdeasArgs {
    /// Tone filter: all, dreamy, kinetic, playful or minimal.
    #[arg(long)]
    tone: Option<ToneFilter>,

    #[command(flatten)]
    overrides: Overrides,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Ideas(args) => cmd_ideas(args),
        Command::Palettes => cmd_palettes(),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = args.overrides.load()?;
    let mut pg = Playground::new(&cfg)?;
    pg.mount()?;
    let frame = pg.render_frame(FrameIndex(args.frame))?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    write_png(&args.out, &frame).with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = args.overrides.load()?;
    let frames = args.frames.unwrap_or(cfg.frames);
    let mut driver: Box<dyn RefreshDriver> = match (args.realtime, cfg.refresh_hz) {
        (true, Some(hz)) => Box::new(FixedRefresh::new(hz)?),
        (true, None) => anyhow::bail!("--realtime needs refresh_hz in the config"),
        (false, _) => Box::new(Unpaced),
    };

    let mut pg = Playground::new(&cfg)?;
    pg.mount()?;
    let mut sink = PngSequenceSink::new(&args.out_dir);
    let stats = pg.run(frames, driver.as_mut(), &mut sink)?;

    eprintln!(
        "wrote {} of {} frames to {}",
        stats.frames_rendered,
        stats.frames_requested,
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_ideas(args: IdeasArgs) -> anyhow::Result<()> {
    let cfg = args.overrides.load()?;
    let mut pg = Playground::new(&cfg)?;
    pg.select_tone(args.tone.unwrap_or(cfg.tone));

    for card in pg.ideas() {
        println!(
            "{} [{}] accent={} soft={}",
            card.idea.title,
            card.idea.tone.label(),
            card.accent,
            card.accent_soft
        );
        println!("  {}", card.idea.description);
        println!("  -> {}", card.idea.cta);
    }
    Ok(())
}

fn cmd_palettes() -> anyhow::Result<()> {
    let store = PaletteStore::new();
    for (i, palette) in store.presets().iter().enumerate() {
        let hex: Vec<String> = palette.colors().iter().map(|c| c.to_hex()).collect();
        println!("{i}: {}", hex.join(" "));
    }
    Ok(())
}
