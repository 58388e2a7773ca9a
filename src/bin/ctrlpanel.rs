use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ctrlpanel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate task pairs (first/final PNGs, prompt, optional MP4).
    Generate(GenerateArgs),
    /// Dump the ground-truth animation of one task as numbered PNGs.
    Frames(FramesArgs),
}

#[derive(Parser, Debug)]
struct CommonArgs {
    /// Generator config JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the config seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the requested control count (clamped to 2..=5).
    #[arg(long)]
    controls: Option<usize>,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Output directory; one sub-directory per task.
    #[arg(long)]
    out: PathBuf,

    /// Number of tasks.
    #[arg(long, default_value_t = 1)]
    count: usize,

    /// Skip video generation.
    #[arg(long, default_value_t = false)]
    no_video: bool,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Output directory for `frame_NNNN.png` files.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn load_config(args: &CommonArgs) -> anyhow::Result<ctrlpanel::GeneratorConfig> {
    let mut cfg = match &args.config {
        Some(path) => ctrlpanel::GeneratorConfig::from_path(path)?,
        None => ctrlpanel::GeneratorConfig::default(),
    };
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }
    if let Some(n) = args.controls {
        cfg.num_controls = n;
    }
    Ok(cfg)
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(&args.common)?;
    if args.no_video {
        cfg.generate_videos = false;
    }
    let mut generator = ctrlpanel::TaskGenerator::new(cfg)?;

    for task in generator.generate_tasks(args.count)? {
        let dir = args.out.join(&task.task_id);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("create task dir '{}'", dir.display()))?;
        task.first_image.save_png(&dir.join("first_frame.png"))?;
        task.final_image.save_png(&dir.join("final_frame.png"))?;
        write_text(&dir.join("prompt.txt"), &task.prompt)?;
        if let Some(video) = &task.ground_truth_video {
            let dst = dir.join("ground_truth.mp4");
            std::fs::copy(video, &dst)
                .with_context(|| format!("copy video '{}'", video.display()))?;
        }
        eprintln!("wrote {}", dir.display());
    }
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(&args.common)?;
    cfg.generate_videos = false;
    let mut generator = ctrlpanel::TaskGenerator::new(cfg)?;
    let anim = generator.config().animation();

    let panel = generator.generate_panel();
    let frames = ctrlpanel::build_frames(generator.renderer_mut(), &panel, anim)?;
    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;
    for (i, frame) in frames.iter().enumerate() {
        frame.save_png(&args.out.join(format!("frame_{i:04}.png")))?;
    }
    eprintln!("wrote {} frames to {}", frames.len(), args.out.display());
    Ok(())
}

fn write_text(path: &Path, text: &str) -> anyhow::Result<()> {
    std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))
}
