mod device;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, DynamicImage, Frame};
use indicatif::{ProgressBar, ProgressStyle};
use pixoo_render::{Align, Color, GlyphSet, Pixoo, Point};
use rand::Rng;
use walkdir::WalkDir;

use device::DeviceClient;

#[derive(Parser, Debug)]
#[command(author, version, about = "Draw on and configure a Divoom Pixoo display")]
struct Cli {
    /// Device network address, e.g. 192.168.1.117
    #[arg(short, long)]
    address: String,
    /// Display size in pixels (the Pixoo line ships 16, 32, and 64)
    #[arg(short, long, default_value_t = 64)]
    size: usize,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fill the whole display with one color
    Fill(FillArgs),
    /// Draw a line of text
    Text(TextArgs),
    /// Draw an image file, resized to fit
    Image(ImageArgs),
    /// Play a GIF or a directory of frames on the display
    Animate(AnimateArgs),
    /// Fill the display with random colors in a loop
    Cycle(CycleArgs),
    /// Set the display brightness (0-100)
    Brightness { value: u8 },
    /// Select a display channel (0 faces, 1 cloud, 2 visualizer, 3 custom, 4 black)
    Channel { index: u8 },
    /// Switch the screen on or off
    Screen { state: ScreenState },
    /// Remove any text items previously sent to the display
    ClearText,
}

#[derive(Parser, Debug)]
struct FillArgs {
    /// Fill color as hex, e.g. "#336699" or "f00"
    color: String,
}

#[derive(Parser, Debug)]
struct TextArgs {
    text: String,
    /// Display row the text baseline starts on
    #[arg(long, default_value_t = 5)]
    row: i32,
    #[arg(long, value_enum, default_value = "center")]
    align: AlignChoice,
    /// Pixels of padding for left/right alignment
    #[arg(long, default_value_t = 0)]
    padding: i32,
    /// Text color as hex
    #[arg(long, default_value = "#FFFFFF")]
    color: String,
    /// Glyph set name (pico or numeric)
    #[arg(long, default_value = "pico")]
    font: String,
}

#[derive(Parser, Debug)]
struct ImageArgs {
    input: PathBuf,
    /// Top-left corner of the drawn image
    #[arg(long, default_value_t = 0)]
    x: i32,
    #[arg(long, default_value_t = 0)]
    y: i32,
    /// Target width; defaults to the display size
    #[arg(long)]
    width: Option<u32>,
    /// Target height; defaults to the display size
    #[arg(long)]
    height: Option<u32>,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    /// GIF file or directory of image frames
    input: PathBuf,
    /// Frame delay when the input lacks timing information
    #[arg(long, default_value_t = 100)]
    frame_ms: u64,
    /// How many times to play the sequence
    #[arg(long, default_value_t = 1)]
    loops: u32,
}

#[derive(Parser, Debug)]
struct CycleArgs {
    #[arg(long, default_value_t = 10)]
    count: u32,
    #[arg(long, default_value_t = 500)]
    interval_ms: u64,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum AlignChoice {
    Left,
    Right,
    Center,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ScreenState {
    On,
    Off,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let client = DeviceClient::new(&cli.address);

    match cli.command {
        Commands::Fill(args) => fill(client, cli.size, args),
        Commands::Text(args) => text(client, cli.size, args),
        Commands::Image(args) => image_cmd(client, cli.size, args),
        Commands::Animate(args) => animate(client, cli.size, args),
        Commands::Cycle(args) => cycle(client, cli.size, args),
        Commands::Brightness { value } => Ok(client.set_brightness(value)?),
        Commands::Channel { index } => Ok(client.set_channel(index)?),
        Commands::Screen { state } => {
            Ok(client.set_screen_on(matches!(state, ScreenState::On))?)
        },
        Commands::ClearText => Ok(client.clear_remote_text()?),
    }
}

fn fill(client: DeviceClient, size: usize, args: FillArgs) -> Result<()> {
    let color: Color = args.color.parse()?;
    let mut pixoo = Pixoo::new(client, size);
    pixoo.reset_counter()?;
    pixoo.fill(color);
    pixoo.push()?;
    Ok(())
}

fn text(client: DeviceClient, size: usize, args: TextArgs) -> Result<()> {
    let color: Color = args.color.parse()?;
    let font = GlyphSet::by_name(&args.font)
        .with_context(|| format!("unknown glyph set {:?}", args.font))?;
    let align = match args.align {
        AlignChoice::Left => Align::Left,
        AlignChoice::Right => Align::Right,
        AlignChoice::Center => Align::Center,
    };

    let mut pixoo = Pixoo::new(client, size);
    pixoo.reset_counter()?;
    pixoo.clear();
    pixoo.draw_text_aligned(&args.text, args.row, align, args.padding, color, font)?;
    pixoo.push()?;
    Ok(())
}

fn image_cmd(client: DeviceClient, size: usize, args: ImageArgs) -> Result<()> {
    let width = args.width.unwrap_or(size as u32);
    let height = args.height.unwrap_or(size as u32);

    let mut pixoo = Pixoo::new(client, size);
    pixoo.reset_counter()?;
    pixoo.clear();
    pixoo
        .draw_image(&args.input, Point::new(args.x, args.y), (width, height))
        .with_context(|| format!("failed to render {:?}", args.input))?;
    pixoo.push()?;
    Ok(())
}

fn animate(client: DeviceClient, size: usize, args: AnimateArgs) -> Result<()> {
    let frames = load_frames(&args.input)?;
    let fallback = Duration::from_millis(args.frame_ms);

    let mut pixoo = Pixoo::new(client, size);
    pixoo.reset_counter()?;

    let progress = ProgressBar::new(u64::from(args.loops) * frames.len() as u64);
    progress.set_style(
        ProgressStyle::with_template(
            "{spinner} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} frames",
        )
        .unwrap()
        .progress_chars("=> "),
    );

    for _ in 0..args.loops {
        for frame in &frames {
            let delay = Duration::from(frame.delay());
            let dynamic = DynamicImage::ImageRgba8(frame.buffer().clone());
            pixoo.draw_image_data(&dynamic, Point::new(0, 0), (size as u32, size as u32));
            pixoo.push()?;
            progress.inc(1);
            std::thread::sleep(if delay.is_zero() { fallback } else { delay });
        }
    }

    progress.finish();
    Ok(())
}

fn cycle(client: DeviceClient, size: usize, args: CycleArgs) -> Result<()> {
    let mut rng = rand::thread_rng();
    let mut pixoo = Pixoo::new(client, size);
    pixoo.reset_counter()?;

    for _ in 0..args.count {
        let color = Color::new(rng.gen(), rng.gen(), rng.gen());
        log::info!("frame {:?}: filling with {:?}", pixoo.counter(), color);
        pixoo.fill(color);
        pixoo.push()?;
        std::thread::sleep(Duration::from_millis(args.interval_ms));
    }
    Ok(())
}

/// Formats the display can play frame by frame; other files in a frame
/// directory (readme, hidden files) are skipped rather than decoded.
const FRAME_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default()
}

fn load_frames(path: &Path) -> Result<Vec<Frame>> {
    if path.is_dir() {
        return load_frames_from_directory(path);
    }
    match extension_of(path).as_str() {
        "gif" => load_frames_from_gif(path),
        _ => {
            let image =
                image::open(path).with_context(|| format!("failed to open image {:?}", path))?;
            Ok(vec![Frame::new(image.into_rgba8())])
        },
    }
}

fn load_frames_from_gif(path: &Path) -> Result<Vec<Frame>> {
    let file =
        std::fs::File::open(path).with_context(|| format!("failed to open GIF {:?}", path))?;
    let decoder =
        GifDecoder::new(file).with_context(|| format!("failed to decode GIF {:?}", path))?;
    decoder
        .into_frames()
        .collect_frames()
        .with_context(|| format!("failed to collect frames from {:?}", path))
}

fn load_frames_from_directory(path: &Path) -> Result<Vec<Frame>> {
    let mut frame_paths: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| FRAME_EXTENSIONS.contains(&extension_of(path).as_str()))
        .collect();
    frame_paths.sort();
    if frame_paths.is_empty() {
        anyhow::bail!("no image frames found in {:?}", path);
    }

    let mut frames = Vec::with_capacity(frame_paths.len());
    for frame_path in frame_paths {
        let image = image::open(&frame_path)
            .with_context(|| format!("failed to open frame {:?}", frame_path))?;
        frames.push(Frame::new(image.into_rgba8()));
    }
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_text_subcommand_parses() {
        let cli =
            Cli::try_parse_from(["pixoo_cli", "--address", "10.0.0.5", "clear-text"]).unwrap();
        assert!(matches!(cli.command, Commands::ClearText));
    }

    #[test]
    fn frame_directories_skip_non_image_files() {
        assert_eq!(extension_of(Path::new("frames/frame_0001.PNG")), "png");
        assert!(FRAME_EXTENSIONS.contains(&extension_of(Path::new("frames/a.webp")).as_str()));
        assert!(!FRAME_EXTENSIONS.contains(&extension_of(Path::new("frames/README.md")).as_str()));
        assert!(!FRAME_EXTENSIONS.contains(&extension_of(Path::new("frames/noext")).as_str()));
    }
}
