//! Emits scalable SVG renditions of the clock icons, the fallback for
//! environments where the raster pipeline cannot run.

use std::f32::consts::{FRAC_PI_2, TAU};
use std::fs;

const SIZES: [u32; 2] = [192, 512];

fn hour_angle(i: u32) -> f32 {
    i as f32 * TAU / 12.0 - FRAC_PI_2
}

fn icon_svg(size: u32) -> String {
    let s = size as f32;
    let center = s / 2.0;
    let radius = s * 0.35;

    let mut svg = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    svg += &format!(
        "<svg width=\"{0}\" height=\"{0}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        size
    );

    // diagonal gradient backdrop with rounded corners
    svg += "  <defs>\n";
    svg += "    <linearGradient id=\"grad\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"100%\">\n";
    svg += "      <stop offset=\"0%\" stop-color=\"#667eea\"/>\n";
    svg += "      <stop offset=\"100%\" stop-color=\"#764ba2\"/>\n";
    svg += "    </linearGradient>\n";
    svg += "  </defs>\n";
    svg += &format!(
        "  <rect width=\"{0}\" height=\"{0}\" fill=\"url(#grad)\" rx=\"{1}\"/>\n",
        size,
        s * 0.1
    );

    svg += &format!(
        "  <circle cx=\"{0}\" cy=\"{0}\" r=\"{1}\" fill=\"white\" stroke=\"#667eea\" stroke-width=\"{2}\"/>\n",
        center,
        radius,
        s * 0.03
    );

    for i in 0..12 {
        let angle = hour_angle(i);
        svg += &format!(
            "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#333\" stroke-width=\"{}\"/>\n",
            center + angle.cos() * radius * 0.75,
            center + angle.sin() * radius * 0.75,
            center + angle.cos() * radius * 0.9,
            center + angle.sin() * radius * 0.9,
            s * 0.015
        );
    }

    // hands frozen at 3:00
    let hour = hour_angle(3);
    svg += &format!(
        "  <line x1=\"{0}\" y1=\"{0}\" x2=\"{1}\" y2=\"{2}\" stroke=\"#333\" stroke-width=\"{3}\" stroke-linecap=\"round\"/>\n",
        center,
        center + hour.cos() * radius * 0.5,
        center + hour.sin() * radius * 0.5,
        s * 0.02
    );
    svg += &format!(
        "  <line x1=\"{0}\" y1=\"{0}\" x2=\"{0}\" y2=\"{1}\" stroke=\"#667eea\" stroke-width=\"{2}\" stroke-linecap=\"round\"/>\n",
        center,
        center - radius * 0.7,
        s * 0.015
    );

    svg += &format!(
        "  <circle cx=\"{0}\" cy=\"{0}\" r=\"{1}\" fill=\"#667eea\"/>\n",
        center,
        s * 0.03
    );
    svg += "</svg>\n";

    svg
}

fn main() {
    for &size in &SIZES {
        let name = format!("icon-{}.svg", size);
        fs::write(&name, icon_svg(size)).expect("failed to write svg icon");
        println!("{} written", name);
    }
}

#[test]
fn svg_mentions_every_element() {
    let svg = icon_svg(192);
    assert!(svg.starts_with("<?xml"));
    assert_eq!(svg.matches("<line ").count(), 14, "12 ticks and 2 hands");
    assert_eq!(svg.matches("<circle ").count(), 2, "dial and hub");
    assert!(svg.contains("width=\"192\""));
    assert!(svg.ends_with("</svg>\n"));
}
