use std::{path::PathBuf, time::Duration};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use vsync_track::{
    CpuSurface, FetchRequest, LinearTimeScale, Rgba8, TimeSpan, TrackData, TrackRegistry,
    TrackState, VSYNC_KIND, Viewport, VsyncConfig, VsyncData,
};

#[derive(Parser, Debug)]
#[command(name = "vsync-track", version)]
struct Cli {
    /// Log scheduling decisions to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one frame of the track as a PNG and print the fetch it would issue.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Vsync snapshot JSON. Without it the track renders with no data.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Track state JSON (id, kind, config).
    #[arg(long)]
    track: Option<PathBuf>,

    /// Visible window start, in seconds.
    #[arg(long, allow_negative_numbers = true)]
    start: f64,

    /// Visible window end, in seconds.
    #[arg(long, allow_negative_numbers = true)]
    end: f64,

    /// Frame width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Frame height in pixels.
    #[arg(long, default_value_t = 40)]
    height: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

const CLEAR: Rgba8 = Rgba8::opaque(18, 20, 28);

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
    }
}

fn read_track_state(path: Option<&PathBuf>) -> anyhow::Result<TrackState> {
    match path {
        Some(p) => TrackState::from_path(p)
            .with_context(|| format!("load track state '{}'", p.display())),
        None => Ok(TrackState::new("vsync", VSYNC_KIND)),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let state = read_track_state(args.track.as_ref())?;
    let registry = TrackRegistry::with_builtin()?;
    let mut track = registry.create(&state)?;
    let debounce = VsyncConfig::from_track_state(&state)?.fetch.debounce();

    let data = match &args.data {
        Some(p) => Some(TrackData::from(
            VsyncData::from_path(p)
                .with_context(|| format!("load vsync data '{}'", p.display()))?,
        )),
        None => None,
    };

    let window = TimeSpan::new(args.start, args.end)?;
    let scale = LinearTimeScale::new(window, 0.0, f64::from(args.width))?;
    let viewport = Viewport::new(window, &scale);

    let mut surface = CpuSurface::new(args.width, args.height, CLEAR)?;
    let stats = track.render(&mut surface, data.as_ref(), &viewport, Duration::ZERO);
    let frame = surface.finish();

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {} ({:?})", args.out.display(), stats.refresh);

    let mut sent: Vec<FetchRequest> = Vec::new();
    track.tick(debounce, &viewport, &mut sent)?;
    for request in &sent {
        println!(
            "{}",
            serde_json::to_string(request).context("serialize fetch request")?
        );
    }
    Ok(())
}
