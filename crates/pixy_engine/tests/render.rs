//! Bitmap description and image rendering tests

use image::GenericImageView;
use pixy_engine::{BitmapDescriptor, BitmapPixel, Color, EngineError, ImageFormat, PixelBuffer, RenderOptions, MAX_EXPORT_DIMENSION};
use pretty_assertions::assert_eq;

fn create_test_buffer() -> PixelBuffer {
    let mut buffer = PixelBuffer::new(2, 3, Color::GRAY).unwrap();
    buffer.set(0, 0, Color::BLACK).unwrap();
    buffer.set(1, 2, Color::RED).unwrap();
    buffer
}

#[test]
fn test_descriptor_opaque() {
    let bitmap = BitmapDescriptor::from_buffer(&create_test_buffer(), Color::GRAY, false);
    assert_eq!((bitmap.rows(), bitmap.columns()), (2, 3));
    assert_eq!(bitmap.pixels().len(), 6);
    assert!(!bitmap.has_transparency());
    assert_eq!(bitmap.pixel(0, 1), Some(BitmapPixel::Color(Color::GRAY)));
    assert_eq!(bitmap.pixel(1, 2), Some(BitmapPixel::Color(Color::RED)));
    assert_eq!(bitmap.pixel(2, 0), None);
}

#[test]
fn test_descriptor_transparent_background() {
    let bitmap = BitmapDescriptor::from_buffer(&create_test_buffer(), Color::GRAY, true);
    assert_eq!(bitmap.pixel(0, 0), Some(BitmapPixel::Color(Color::BLACK)));
    assert_eq!(bitmap.pixel(0, 1), Some(BitmapPixel::Transparent));
    assert_eq!(bitmap.pixels().iter().filter(|p| p.is_transparent()).count(), 4);
}

#[test]
fn test_render_png_keeps_transparency() {
    let bitmap = BitmapDescriptor::from_buffer(&create_test_buffer(), Color::GRAY, true);
    let options = RenderOptions {
        cell_size: 4,
        ..Default::default()
    };
    let bytes = ImageFormat::Png.render(&bitmap, &options).unwrap();

    let img = image::load_from_memory(&bytes).unwrap();
    assert_eq!(img.dimensions(), (12, 8));
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
    assert_eq!(img.get_pixel(3, 3).0, [0, 0, 0, 255]);
    assert_eq!(img.get_pixel(4, 0).0[3], 0);
    assert_eq!(img.get_pixel(11, 7).0, Color::RED.get_rgba());
}

#[test]
fn test_render_jpeg_is_opaque() {
    let bitmap = BitmapDescriptor::from_buffer(&create_test_buffer(), Color::GRAY, false);
    let bytes = ImageFormat::Jpeg.render(&bitmap, &RenderOptions::for_width(30, 3)).unwrap();

    let img = image::load_from_memory(&bytes).unwrap();
    assert_eq!(img.dimensions(), (30, 20));
    assert!(!img.color().has_alpha());
    // lossy: only check the dark cell stays dark
    let pixel = img.get_pixel(5, 5).0;
    assert!(pixel[0] < 40 && pixel[1] < 40 && pixel[2] < 40, "unexpected pixel {pixel:?}");
}

#[test]
fn test_render_rejects_oversized_images() {
    let buffer = PixelBuffer::new(1, 32, Color::GRAY).unwrap();
    let bitmap = BitmapDescriptor::from_buffer(&buffer, Color::GRAY, false);

    // cell size from a single column times 32 columns does not fit in u32
    let overflowing = RenderOptions::for_width(u32::MAX, 1);
    for format in ImageFormat::ALL {
        let result = format.render(&bitmap, &overflowing);
        assert!(matches!(result, Err(EngineError::ImageBufferCreationFailed)), "{format}");
    }

    let too_wide = RenderOptions::for_width((MAX_EXPORT_DIMENSION + 32) * 32, 32);
    assert!(matches!(ImageFormat::Png.render(&bitmap, &too_wide), Err(EngineError::ImageBufferCreationFailed)));
}

#[test]
fn test_render_options_for_width() {
    assert_eq!(RenderOptions::for_width(900, 16).cell_size, 56);
    assert_eq!(RenderOptions::for_width(900, 32).cell_size, 28);
    assert_eq!(RenderOptions::for_width(10, 32).cell_size, 1);
    assert_eq!(RenderOptions::default().jpeg_quality, 80);
    assert_eq!(RenderOptions::default().with_jpeg_quality(50).jpeg_quality, 50);
}

#[test]
fn test_format_lookup() {
    assert_eq!(ImageFormat::from_extension("PNG"), Some(ImageFormat::Png));
    assert_eq!(ImageFormat::from_extension("jpeg"), Some(ImageFormat::Jpeg));
    assert_eq!(ImageFormat::from_extension("gif"), None);
    assert_eq!(ImageFormat::from_path(std::path::Path::new("art/smiley.jpg")), Some(ImageFormat::Jpeg));
    for format in ImageFormat::ALL {
        assert_eq!(ImageFormat::from_extension(format.extension()), Some(*format));
    }
    assert!(ImageFormat::Png.supports_transparency());
    assert!(!ImageFormat::Jpeg.supports_transparency());
}
