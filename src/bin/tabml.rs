use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "tabml", version, about = "7x7 LED matrix animation generator")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a .tabml animation from text.
    Generate(GenerateArgs),
    /// Decode a .tabml file and print its metadata.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Text to display (A-Z, 0-9, space and ! ? . - + * ^).
    text: Option<String>,

    /// Read the whole animation description from a JSON manifest instead.
    #[arg(long, conflicts_with = "text")]
    manifest: Option<PathBuf>,

    /// Animation mode.
    #[arg(short, long, value_enum, default_value_t = ModeChoice::Static)]
    mode: ModeChoice,

    /// Frames per second, 1-255 (default: 5 static, 10 scrolling).
    #[arg(short, long)]
    fps: Option<u8>,

    /// Color for on pixels, 6 hex digits.
    #[arg(short, long, default_value = "#00FFFF")]
    color: String,

    /// Blank columns/rows between glyphs when scrolling.
    #[arg(short, long, default_value_t = tabml::DEFAULT_GAP)]
    gap: usize,

    /// Shift every frame down (positive) or up (negative) this many pixels.
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    shift_row: i32,

    /// Shift every frame right (positive) or left (negative) this many pixels.
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    shift_col: i32,

    /// Output file path.
    #[arg(short, long, default_value = "output.tabml")]
    out: PathBuf,

    /// Skip the per-frame ASCII preview.
    #[arg(long)]
    no_preview: bool,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Container file to decode.
    file: PathBuf,

    /// Dump every frame as ASCII art.
    #[arg(long)]
    frames: bool,

    /// Print the metadata as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Static,
    ScrollLeft,
    ScrollRight,
    ScrollUp,
    ScrollDown,
}

impl From<ModeChoice> for tabml::Mode {
    fn from(choice: ModeChoice) -> Self {
        match choice {
            ModeChoice::Static => tabml::Mode::Static,
            ModeChoice::ScrollLeft => tabml::Mode::ScrollLeft,
            ModeChoice::ScrollRight => tabml::Mode::ScrollRight,
            ModeChoice::ScrollUp => tabml::Mode::ScrollUp,
            ModeChoice::ScrollDown => tabml::Mode::ScrollDown,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let cfg = match &args.manifest {
        Some(path) => tabml::GenerateConfig::from_path(path)?,
        None => {
            let text = args
                .text
                .clone()
                .context("pass TEXT or --manifest <FILE>")?;
            tabml::GenerateConfig {
                text,
                mode: args.mode.into(),
                fps: args.fps,
                color: tabml::Rgb::from_hex(&args.color)?,
                gap: args.gap,
                shift: tabml::Shift::new(args.shift_row, args.shift_col),
            }
        }
    };

    let frames = tabml::generate_frames(&cfg)?;
    let bytes = tabml::write_path(&args.out, &frames, cfg.fps(), cfg.color, cfg.shift)?;

    println!("Generated: {}", args.out.display());
    println!("  Frames: {}", frames.len());
    println!("  FPS:    {}", cfg.fps());
    println!("  Color:  {}", cfg.color);
    println!("  Size:   {bytes} bytes");

    if !args.no_preview {
        for (i, frame) in frames.iter().enumerate() {
            println!();
            println!("  Frame {i}:");
            print_grid(&frame.shifted(cfg.shift));
        }
    }

    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let container = tabml::read_path(&args.file)?;

    if args.json {
        #[derive(serde::Serialize)]
        struct Meta {
            rows: u8,
            cols: u8,
            frames: usize,
            fps: u8,
            color: tabml::Rgb,
        }
        let meta = Meta {
            rows: container.rows,
            cols: container.cols,
            frames: container.frame_count(),
            fps: container.fps,
            color: container.color,
        };
        println!("{}", serde_json::to_string_pretty(&meta)?);
    } else {
        println!(
            "{}  |  {}x{}  |  {} frames  |  {} fps  |  {}",
            args.file.display(),
            container.cols,
            container.rows,
            container.frame_count(),
            container.fps,
            container.color,
        );
    }

    if args.frames {
        for (i, frame) in container.frames.iter().enumerate() {
            println!();
            println!("  Frame {} / {}:", i + 1, container.frame_count());
            print_grid(frame);
        }
    }

    Ok(())
}

fn print_grid(grid: &tabml::Grid) {
    for line in grid.to_string().lines() {
        println!("  {line}");
    }
}
