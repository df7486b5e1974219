use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use borderline::{
    BackendKind, BorderlineError, DisputedSet, Feature, FrameStatus, GeoDocument, RenderBackend,
    RenderSettings, Session, SessionOpts, Viewport,
};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "borderline", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the outline at one progress value as a PNG.
    Frame(FrameArgs),
    /// Render the whole animation as numbered PNGs.
    Frames(FramesArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// GeoJSON Feature or FeatureCollection.
    #[arg(long)]
    feature: PathBuf,

    /// ISO code or name used to pick a feature from a collection.
    #[arg(long)]
    name: Option<String>,

    /// Session options JSON.
    #[arg(long)]
    opts: Option<PathBuf>,

    /// GeoJSON of disputed border lines.
    #[arg(long)]
    disputed: Option<PathBuf>,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Backend to use. Unavailable backends fall back to cpu.
    #[arg(long, value_enum, default_value_t = BackendChoice::Cpu)]
    backend: BackendChoice,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Animation progress in [0, 1].
    #[arg(long, default_value_t = 1.0)]
    progress: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    input: InputArgs,

    #[arg(long, default_value_t = 30.0)]
    fps: f64,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BackendChoice {
    Cpu,
    Accelerated,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn read_geojson(path: &Path, what: &str) -> anyhow::Result<GeoDocument> {
    let f = File::open(path).with_context(|| format!("open {what} '{}'", path.display()))?;
    let doc: GeoDocument = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse {what} GeoJSON '{}'", path.display()))?;
    Ok(doc)
}

fn read_feature(path: &Path, name: Option<&str>) -> anyhow::Result<Feature> {
    let feature = read_geojson(path, "feature")?.select(name)?;
    if feature.polygon_parts().is_empty() {
        return Err(BorderlineError::geometry("selected feature has no polygon geometry").into());
    }
    Ok(feature)
}

fn read_opts(path: Option<&Path>) -> anyhow::Result<SessionOpts> {
    let Some(path) = path else {
        return Ok(SessionOpts::default());
    };
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read options '{}'", path.display()))?;
    Ok(SessionOpts::from_json_str(&s)?)
}

fn prepare(
    input: &InputArgs,
    opts: SessionOpts,
) -> anyhow::Result<(Session, Box<dyn RenderBackend>)> {
    let viewport = Viewport::new(input.width, input.height)?;
    let settings = RenderSettings {
        clear_rgba: Some(opts.background_rgba()),
    };
    let kind = match input.backend {
        BackendChoice::Cpu => BackendKind::Cpu,
        BackendChoice::Accelerated => BackendKind::Accelerated,
    };
    let (backend, used) = borderline::create_backend_with_fallback(kind, viewport, &settings)?;
    if used != kind {
        eprintln!("backend {kind:?} unavailable, using {used:?}");
    }

    let mut session = Session::new(opts, viewport)?;
    if let Some(path) = input.disputed.as_deref() {
        let doc = read_geojson(path, "disputed lines")?;
        session.set_disputed(DisputedSet::from_line_features(&doc.into_features()));
    }
    Ok((session, backend))
}

fn write_png(backend: &mut dyn RenderBackend, out: &Path) -> anyhow::Result<()> {
    let frame = backend
        .present()?
        .context("backend produced no pixels")?;

    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        out,
        &frame.to_straight_alpha(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    if !(0.0..=1.0).contains(&args.progress) {
        anyhow::bail!("--progress must be within [0, 1], got {}", args.progress);
    }
    let feature = read_feature(&args.input.feature, args.input.name.as_deref())?;
    let opts = read_opts(args.input.opts.as_deref())?;
    let duration_ms = opts.duration_ms();
    let (mut session, mut backend) = prepare(&args.input, opts)?;

    session.select(feature, 0.0);
    session.frame(args.progress * duration_ms, backend.as_mut());
    write_png(backend.as_mut(), &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    if !args.fps.is_finite() || args.fps <= 0.0 {
        anyhow::bail!("--fps must be > 0, got {}", args.fps);
    }
    let feature = read_feature(&args.input.feature, args.input.name.as_deref())?;
    let opts = read_opts(args.input.opts.as_deref())?;
    let (mut session, mut backend) = prepare(&args.input, opts)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let frame_ms = 1000.0 / args.fps;
    session.select(feature, 0.0);
    let mut index = 0u32;
    loop {
        let status = session.frame(f64::from(index) * frame_ms, backend.as_mut());
        let out = args.out_dir.join(format!("frame_{index:05}.png"));
        write_png(backend.as_mut(), &out)?;
        index += 1;
        if !matches!(status, FrameStatus::Animating { .. }) {
            break;
        }
    }

    eprintln!("wrote {index} frames to {}", args.out_dir.display());
    Ok(())
}
