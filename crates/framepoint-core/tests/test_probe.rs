use std::io::Cursor;

use image::{ImageBuffer, Rgb};

use framepoint_core::error::FramepointError;
use framepoint_core::io::probe::{probe_bytes, probe_path};

fn checker(width: u32, height: u32) -> ImageBuffer<Rgb<u8>, Vec<u8>> {
    ImageBuffer::from_fn(width, height, |x, y| {
        if (x + y) % 2 == 0 {
            Rgb([220, 220, 220])
        } else {
            Rgb([40, 40, 40])
        }
    })
}

#[test]
fn test_probe_png_from_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("probe.png");
    checker(32, 20).save(&path).unwrap();

    let metrics = probe_path(&path).unwrap();
    assert_eq!(metrics.width(), 32);
    assert_eq!(metrics.height(), 20);
    assert!((metrics.aspect_ratio() - 1.6).abs() < 1e-12);
}

#[test]
fn test_probe_from_bytes() {
    let mut bytes = Vec::new();
    checker(20, 32)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();

    let metrics = probe_bytes(&bytes).unwrap();
    assert_eq!(metrics.width(), 20);
    assert_eq!(metrics.height(), 32);
}

#[test]
fn test_probe_missing_file_fails() {
    let err = probe_path("does/not/exist.png".as_ref()).unwrap_err();
    // image reports the failure through its own error type for path probes.
    assert!(matches!(
        err,
        FramepointError::ImageError(_) | FramepointError::Io(_)
    ));
}

#[test]
fn test_probe_garbage_bytes_fails() {
    assert!(probe_bytes(b"definitely not an image").is_err());
}
