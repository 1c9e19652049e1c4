#![allow(dead_code)]

use std::path::Path;

use anyhow::{Context as _, Result};

mod basis;
mod canvas;
mod clock;
mod encode;

const SIZES: [u32; 2] = [192, 512];

fn main() -> Result<()> {
    if let Err(err) = encode::probe() {
        eprintln!("png encoding is unavailable: {:#}", err);
        eprintln!("no icons were generated");
        eprintln!(
            "fallbacks: run the make_svg tool for scalable icons, or use the browser generator page"
        );
        std::process::exit(1);
    }

    println!("generating {} icons", SIZES.len());

    for &size in &SIZES {
        let name = format!("icon-{}.png", size);
        println!("generating {}...", name);

        let mut canvas = clock::gradient_background(size);
        clock::paint_clock(&mut canvas);
        encode::write_png(&canvas, name.as_ref())
            .with_context(|| format!("generation of {} failed", name))?;

        println!("{} OK", name);
    }

    println!("done. generated files:");
    for &size in &SIZES {
        let name = format!("icon-{}.png", size);
        if !Path::new(&name).exists() {
            continue;
        }
        let info = encode::report(name.as_ref())?;
        println!(
            "  {} ({}x{}, {} bytes)",
            name, info.width, info.height, info.bytes
        );
    }

    Ok(())
}
