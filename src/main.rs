use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use image_view::viewer::{
    Command, Display, Flow, ImageCrateLoader, Navigator, PpmSnapshot, ViewOptions,
};
use image_view::{ByteOrder, Gradient};

/// Page through images; 16-bit PGMs are decoded natively.
///
/// Reads key names (left, right, up, down, space, backspace, escape, q, ...)
/// from stdin, one per line, and writes the displayed image to a PPM snapshot.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Color 16-bit PGM images with a rainbow gradient
    #[arg(long)]
    colorize: bool,

    /// Interpret 16-bit PGM images as little endian; this is the opposite
    /// of Netpbm (and ImageMagick)
    #[arg(long)]
    little_endian: bool,

    /// Where the displayed image is written
    #[arg(long, default_value = "image-view.ppm")]
    snapshot: PathBuf,

    /// Draw onto the viewer canvas (at least 512x256, gray background)
    #[arg(long)]
    canvas: bool,

    /// Paths to images
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

impl Args {
    fn view_options(&self) -> ViewOptions {
        ViewOptions {
            gradient: if self.colorize {
                Gradient::Rainbow
            } else {
                Gradient::Grayscale
            },
            byte_order: if self.little_endian {
                ByteOrder::LittleEndian
            } else {
                ByteOrder::BigEndian
            },
            ..Default::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut display = PpmSnapshot::new(&args.snapshot, args.canvas);
    let mut nav = Navigator::new(args.files.clone(), args.view_options(), ImageCrateLoader)
        .context("no files given")?;

    // The first file must load; later failures keep the previous image.
    nav.apply(Command::Redraw)?;
    draw(&nav, &mut display)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("reading commands from stdin")?;
        let Some(command) = Command::from_key(&line) else {
            log::debug!("ignoring unknown key {line:?}");
            continue;
        };
        match nav.apply(command) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => draw(&nav, &mut display)?,
            Err(err) => log::error!("{err}"),
        }
    }
    Ok(())
}

fn draw(nav: &Navigator<ImageCrateLoader>, display: &mut impl Display) -> anyhow::Result<()> {
    let Some(shown) = nav.shown() else {
        return Ok(());
    };
    let title = shown
        .path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| shown.path.display().to_string());
    log::info!(
        "{title} ({}x{}, {}/{})",
        shown.image.width,
        shown.image.height,
        nav.index() + 1,
        nav.file_count()
    );
    display
        .show(&title, &shown.image)
        .with_context(|| format!("writing snapshot for {title}"))
}
