use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "reelcraft", version)]
struct Cli {
    /// Style catalog JSON to use instead of the built-in one.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the known style ids.
    Styles,
    /// Print the design chosen for one scene of a style.
    Design(DesignArgs),
    /// Print the scheduled segments of a request.
    Timeline(RequestArgs),
    /// Print one frame as JSON.
    Frame(FrameArgs),
    /// Stream a frame range as newline-delimited JSON.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct DesignArgs {
    /// Style id (case-insensitive).
    #[arg(long)]
    style: String,

    /// Scene index (0-based).
    #[arg(long, default_value_t = 0)]
    index: usize,
}

#[derive(Parser, Debug)]
struct RequestArgs {
    /// Input request JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input request JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input request JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output NDJSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); the requested video length when omitted.
    #[arg(long)]
    end: Option<u64>,

    /// Evaluate frames in parallel.
    #[arg(long)]
    parallel: bool,

    /// Worker threads when parallel.
    #[arg(long)]
    threads: Option<usize>,

    /// Frames per batch.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let custom = cli
        .catalog
        .as_deref()
        .map(|p| {
            reelcraft::VariantRegistry::from_path(p)
                .with_context(|| format!("load style catalog '{}'", p.display()))
        })
        .transpose()?;
    let registry = match &custom {
        Some(r) => r,
        None => reelcraft::VariantRegistry::builtin()?,
    };

    match cli.cmd {
        Command::Styles => cmd_styles(registry),
        Command::Design(args) => cmd_design(registry, args),
        Command::Timeline(args) => cmd_timeline(registry, args),
        Command::Frame(args) => cmd_frame(registry, args),
        Command::Render(args) => cmd_render(registry, args),
    }
}

fn open_output(path: Option<&Path>) -> anyhow::Result<Box<dyn Write + Send>> {
    match path {
        Some(p) => {
            if let Some(parent) = p.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(p).with_context(|| format!("create '{}'", p.display()))?;
            Ok(Box::new(BufWriter::new(f)))
        }
        None => Ok(Box::new(BufWriter::new(std::io::stdout()))),
    }
}

fn open_session(
    registry: &reelcraft::VariantRegistry,
    in_path: &Path,
    opts: reelcraft::RenderOpts,
) -> anyhow::Result<reelcraft::RenderSession> {
    let request = reelcraft::RenderRequest::from_path(in_path)
        .with_context(|| format!("read request '{}'", in_path.display()))?;
    Ok(reelcraft::RenderSession::new(&request, registry, opts)?)
}

fn cmd_styles(registry: &reelcraft::VariantRegistry) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    for v in registry.iter() {
        writeln!(out, "{}\t{}", v.id, v.fonts.join(", "))?;
    }
    Ok(())
}

fn cmd_design(registry: &reelcraft::VariantRegistry, args: DesignArgs) -> anyhow::Result<()> {
    let design = registry.resolve(&args.style)?.design(args.index);
    println!("{}", serde_json::to_string_pretty(&design)?);
    Ok(())
}

fn cmd_timeline(registry: &reelcraft::VariantRegistry, args: RequestArgs) -> anyhow::Result<()> {
    let session = open_session(registry, &args.in_path, reelcraft::RenderOpts::default())?;
    let segments: Vec<serde_json::Value> = session
        .timeline()
        .segments()
        .iter()
        .map(|s| {
            serde_json::json!({
                "scene_index": s.scene_index,
                "start": s.start.0,
                "duration_frames": s.duration_frames,
                "text": session.variant().display_text(&s.scene),
            })
        })
        .collect();
    let report = serde_json::json!({
        "style_id": session.variant().id,
        "segments": segments,
        "discrepancy": session.discrepancy(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn cmd_frame(registry: &reelcraft::VariantRegistry, args: FrameArgs) -> anyhow::Result<()> {
    let session = open_session(registry, &args.in_path, reelcraft::RenderOpts::default())?;
    let frame = session.render_frame(reelcraft::FrameIndex(args.frame))?;

    let mut out = open_output(args.out.as_deref())?;
    serde_json::to_writer_pretty(&mut out, &frame).context("write frame JSON")?;
    writeln!(out)?;
    out.flush()?;

    if let Some(p) = &args.out {
        eprintln!("wrote {} (fingerprint {})", p.display(), frame.fingerprint());
    }
    Ok(())
}

fn cmd_render(registry: &reelcraft::VariantRegistry, args: RenderArgs) -> anyhow::Result<()> {
    let opts = reelcraft::RenderOpts {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };
    let session = open_session(registry, &args.in_path, opts)?;
    let range = match args.end {
        Some(end) => reelcraft::FrameRange::new(
            reelcraft::FrameIndex(args.start),
            reelcraft::FrameIndex(end),
        )?,
        None => reelcraft::FrameRange::new(
            reelcraft::FrameIndex(args.start),
            session.full_range().end,
        )?,
    };

    let mut sink = reelcraft::JsonLinesSink::new(open_output(args.out.as_deref())?);
    let stats = session.render_range(range, &mut sink)?;

    if let Some(p) = &args.out {
        eprintln!(
            "wrote {} ({} frames, {} held)",
            p.display(),
            stats.frames_total,
            stats.frames_held
        );
    }
    Ok(())
}
