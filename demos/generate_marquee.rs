//! Generate a scrolling marquee container and print its preview.
//!
//! ```sh
//! cargo run --example generate_marquee
//! ```

use tabml::{GenerateConfig, Mode, Rgb, Shift};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let cfg = GenerateConfig {
        text: "HELLO".to_string(),
        mode: Mode::ScrollLeft,
        fps: None,
        color: Rgb::from_hex("#00FFFF")?,
        gap: 1,
        shift: Shift::ZERO,
    };

    let out = std::path::Path::new("target/demos/marquee.tabml");
    let summary = tabml::generate_to_path(&cfg, out)?;

    println!(
        "wrote {} ({} frames at {} fps, {} bytes)",
        out.display(),
        summary.frame_count,
        summary.fps,
        summary.bytes
    );

    // Show the first fully on-screen frame.
    let frames = tabml::generate_frames(&cfg)?;
    println!("{}", frames[5]);
    Ok(())
}
