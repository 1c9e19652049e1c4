use std::{fs, fs::File, io::BufReader, path::Path};

use anyhow::{Context as _, Result};
use image::{io::Reader, GenericImageView};
use png::{BitDepth, ColorType, Compression, Encoder};

use crate::{basis::Color, canvas::Canvas};

/// Facts about a written icon file, re-read from disk for the final report.
pub(crate) struct IconReport {
    pub(crate) bytes: u64,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

fn encode(canvas: &Canvas) -> Result<Vec<u8>> {
    let mut buf = Vec::new();

    let mut encoder = Encoder::new(&mut buf, canvas.width(), canvas.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(Compression::Fast);

    let mut writer = encoder
        .write_header()
        .context("failed to write png header")?;
    writer
        .write_image_data(&canvas.rgb_bytes())
        .context("failed to encode png image data")?;
    writer.finish().context("failed to finish png stream")?;

    Ok(buf)
}

/// Startup check that the png stack can produce a file at all. Encodes a
/// single pixel in memory; nothing touches the filesystem.
pub(crate) fn probe() -> Result<()> {
    encode(&Canvas::new(1, 1, Color::from_hex(0))).map(|_| ())
}

pub(crate) fn write_png(canvas: &Canvas, path: &Path) -> Result<()> {
    let data = encode(canvas)?;
    fs::write(path, data).with_context(|| format!("failed to write {}", path.display()))
}

pub(crate) fn report(path: &Path) -> Result<IconReport> {
    let bytes = fs::metadata(path)
        .with_context(|| format!("failed to stat {}", path.display()))?
        .len();

    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let decoded = Reader::new(BufReader::new(file))
        .with_guessed_format()
        .with_context(|| format!("failed to sniff format of {}", path.display()))?
        .decode()
        .with_context(|| format!("failed to decode {}", path.display()))?;
    let (width, height) = decoded.dimensions();

    Ok(IconReport {
        bytes,
        width,
        height,
    })
}

#[test]
fn test_probe() {
    assert!(probe().is_ok());
}

#[test]
fn test_write_then_report() -> Result<()> {
    let dir = std::env::temp_dir().join("clock_icons_encode_test");
    fs::create_dir_all(&dir)?;
    let path = dir.join("icon-16.png");

    let canvas = Canvas::new(16, 16, Color::from_hex(0x667eea));
    write_png(&canvas, &path)?;

    let info = report(&path)?;
    assert_eq!((info.width, info.height), (16, 16));
    assert!(info.bytes > 0);
    Ok(())
}

#[test]
fn test_write_failure_surfaces() {
    let canvas = Canvas::new(8, 8, Color::from_hex(0));
    let path = std::env::temp_dir().join("clock_icons_missing_dir/icon-8.png");
    assert!(write_png(&canvas, &path).is_err());
}

#[test]
fn test_writes_are_idempotent() -> Result<()> {
    let dir = std::env::temp_dir().join("clock_icons_encode_test");
    fs::create_dir_all(&dir)?;
    let path = dir.join("icon-idempotent.png");

    let mut canvas = Canvas::new(24, 24, Color::from_hex(0x764ba2));
    canvas.fill_circle(12.0, 12.0, 6.0, Color::from_hex(0xffffff));

    write_png(&canvas, &path)?;
    let first = fs::read(&path)?;
    write_png(&canvas, &path)?;
    assert_eq!(first, fs::read(&path)?);
    Ok(())
}
