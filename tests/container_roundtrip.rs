use std::path::PathBuf;

use tabml::{
    Container, GenerateConfig, Grid, HEADER_LEN, Mode, Rgb, Shift, decode, encode,
    generate_to_path, read_path, scroll_left, static_frames,
};

// The `A` glyph centered in the 7x7 grid.
const A_ROWS: [&str; 7] = [
    ".......",
    "..###..",
    ".#...#.",
    ".#####.",
    ".#...#.",
    ".#...#.",
    ".......",
];

#[test]
fn static_a_container_is_byte_exact() {
    let frames = static_frames("A");
    let bytes = encode(&frames, 5, Rgb::from_hex("#00FFFF").unwrap(), Shift::ZERO).unwrap();

    assert_eq!(bytes.len(), 179);
    assert_eq!(&bytes[..5], b"tabml");
    assert_eq!(&bytes[5..9], [0x01, 0x05, 0x07, 0x07]);
    assert!(bytes[9..32].iter().all(|&b| b == 0));

    let mut expected = Vec::new();
    for row in A_ROWS {
        for cell in row.bytes() {
            if cell == b'#' {
                expected.extend_from_slice(&[0x00, 0xFF, 0xFF]);
            } else {
                expected.extend_from_slice(&[0x00, 0x00, 0x00]);
            }
        }
    }
    assert_eq!(&bytes[32..], expected);
}

#[test]
fn hand_built_empty_container_decodes() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"tabml");
    bytes.extend_from_slice(&[0, 10, 7, 7]);
    bytes.resize(HEADER_LEN, 0);

    let container: Container = decode(&bytes).unwrap();
    assert!(container.frames.is_empty());
    assert_eq!(container.fps, 10);
    assert_eq!(container.color, Rgb::CYAN);
}

#[test]
fn scroll_sequences_roundtrip_through_bytes() {
    let frames = scroll_left("AB", 1);
    assert_eq!(frames.len(), 17);

    let bytes = encode(&frames, 10, Rgb::CYAN, Shift::ZERO).unwrap();
    let container = decode(&bytes).unwrap();
    assert_eq!(container.frames, frames);
    assert_eq!(container.fps, 10);
}

#[test]
fn shifted_encode_decodes_to_shifted_frames() {
    let frames = static_frames("I");
    let shift = Shift::new(-1, 2);
    let container = decode(&encode(&frames, 5, Rgb::CYAN, shift).unwrap()).unwrap();

    let expected: Vec<Grid> = frames.iter().map(|f| f.shifted(shift)).collect();
    assert_eq!(container.frames, expected);
}

#[test]
fn pipeline_writes_a_readable_file() {
    let dir = PathBuf::from("target").join("container_roundtrip");
    let out = dir.join("hello.tabml");
    let _ = std::fs::remove_file(&out);

    let cfg = GenerateConfig {
        text: "HELLO".to_string(),
        mode: Mode::ScrollLeft,
        fps: Some(12),
        color: Rgb::from_hex("#20FFFF").unwrap(),
        gap: 1,
        shift: Shift::ZERO,
    };

    let summary = generate_to_path(&cfg, &out).unwrap();
    // Five characters, gap 1: strip 29 wide, 35 frames.
    assert_eq!(summary.frame_count, 35);
    assert_eq!(summary.bytes, HEADER_LEN + 35 * 147);

    let container = read_path(&out).unwrap();
    assert_eq!(container.frame_count(), 35);
    assert_eq!(container.fps, 12);
    assert_eq!(container.color, Rgb::from_hex("#20FFFF").unwrap());
    assert_eq!(
        std::fs::metadata(&out).unwrap().len(),
        summary.bytes as u64
    );
}

#[test]
fn manifest_file_drives_the_pipeline() {
    let dir = PathBuf::from("target").join("container_roundtrip");
    std::fs::create_dir_all(&dir).unwrap();
    let manifest = dir.join("anim.json");
    let out = dir.join("manifest_out.tabml");

    std::fs::write(
        &manifest,
        r#"{"text": "OK", "mode": "scroll_up", "fps": 8}"#,
    )
    .unwrap();

    let cfg = GenerateConfig::from_path(&manifest).unwrap();
    let summary = generate_to_path(&cfg, &out).unwrap();
    // Two characters, gap 1: strip 11 tall, 17 frames.
    assert_eq!(summary.frame_count, 17);

    let container = read_path(&out).unwrap();
    assert_eq!(container.fps, 8);
    assert_eq!(container.frame_count(), 17);
}
