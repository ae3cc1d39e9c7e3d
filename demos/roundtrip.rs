//! Encode a custom frame in memory, decode it back and dump the result.
//!
//! ```sh
//! cargo run --example roundtrip
//! ```

use tabml::{HEART, Rgb, Shift, render_glyph};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let frames = vec![
        render_glyph(&HEART),
        render_glyph(&HEART).shifted(Shift::new(-1, 0)),
    ];

    let bytes = tabml::encode(&frames, 4, Rgb::from_hex("#40FFFF")?, Shift::ZERO)?;
    let container = tabml::decode(&bytes)?;

    println!(
        "{} frames at {} fps, color {}",
        container.frame_count(),
        container.fps,
        container.color
    );
    for (i, frame) in container.frames.iter().enumerate() {
        println!();
        println!("frame {i}:");
        println!("{frame}");
    }
    Ok(())
}
