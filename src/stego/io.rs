//! Image and text files for the codec.
//!
//! RGB images load with 3 channels, anything with alpha with 4. Other color
//! types are converted to 8-bit RGB(A) first. Only PNG and BMP are written;
//! a lossy encoder would scramble the low nibbles.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageFormat, RgbImage, RgbaImage};
use log::debug;

use super::buffer::ChannelBuffer;
use super::image::ImageStegoError;
use crate::codec::Shape;

/// Loads an image file into a channel buffer.
pub fn read_image<P: AsRef<Path>>(path: P) -> Result<ChannelBuffer, ImageStegoError> {
    let path = path.as_ref();
    let image =
        image::open(path).map_err(|e| ImageStegoError::ImageLoadError(e.to_string()))?;
    debug!("Loaded {} ({:?})", path.display(), image.color());
    buffer_from_image(&image)
}

/// Loads an encoded image (PNG or BMP bytes) into a channel buffer.
pub fn read_image_bytes(bytes: &[u8]) -> Result<ChannelBuffer, ImageStegoError> {
    let image = image::load_from_memory(bytes)
        .map_err(|e| ImageStegoError::ImageLoadError(e.to_string()))?;
    buffer_from_image(&image)
}

/// Saves `buffer` to `path`; the extension must name PNG or BMP.
pub fn write_image<P: AsRef<Path>>(path: P, buffer: &ChannelBuffer) -> Result<(), ImageStegoError> {
    let path = path.as_ref();
    let format = ensure_lossless(path)?;
    image_from_buffer(buffer)?
        .save_with_format(path, format)
        .map_err(|e| ImageStegoError::ImageSaveError(e.to_string()))?;
    debug!("Saved {} as {:?}", path.display(), format);
    Ok(())
}

/// Returns `buffer` encoded as PNG bytes.
pub fn to_png_bytes(buffer: &ChannelBuffer) -> Result<Vec<u8>, ImageStegoError> {
    let mut bytes = Vec::new();
    image_from_buffer(buffer)?
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| ImageStegoError::ImageSaveError(e.to_string()))?;
    Ok(bytes)
}

/// Reads a UTF-8 text file.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String, ImageStegoError> {
    Ok(fs::read_to_string(path)?)
}

/// Checks that `path` names a lossless output format and returns it.
pub fn ensure_lossless(path: &Path) -> Result<ImageFormat, ImageStegoError> {
    match ImageFormat::from_path(path) {
        Ok(format @ (ImageFormat::Png | ImageFormat::Bmp)) => Ok(format),
        _ => Err(ImageStegoError::LossyFormat(path.display().to_string())),
    }
}

/// Copies a decoded image into a channel buffer.
pub fn buffer_from_image(image: &DynamicImage) -> Result<ChannelBuffer, ImageStegoError> {
    let (width, height) = image.dimensions();
    let (channels, data) = if image.color().has_alpha() {
        (4, image.to_rgba8().into_raw())
    } else {
        (3, image.to_rgb8().into_raw())
    };

    let shape = Shape::new(height as usize, width as usize, channels)?;
    Ok(ChannelBuffer::new(shape, data)?)
}

/// Builds an RGB or RGBA image from a 3- or 4-channel buffer.
pub fn image_from_buffer(buffer: &ChannelBuffer) -> Result<DynamicImage, ImageStegoError> {
    let shape = buffer.shape();
    let width = u32::try_from(shape.columns())
        .map_err(|e| ImageStegoError::ImageSaveError(e.to_string()))?;
    let height = u32::try_from(shape.rows())
        .map_err(|e| ImageStegoError::ImageSaveError(e.to_string()))?;
    let data = buffer.as_bytes().to_vec();

    let image = match shape.channels() {
        3 => RgbImage::from_raw(width, height, data).map(DynamicImage::ImageRgb8),
        4 => RgbaImage::from_raw(width, height, data).map(DynamicImage::ImageRgba8),
        other => return Err(ImageStegoError::UnsupportedChannels(other)),
    };

    image.ok_or_else(|| ImageStegoError::ImageSaveError("buffer does not match image size".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stego::image::{decode_message, encode_message};
    use image::{ImageBuffer, Rgb, Rgba};

    fn create_test_image(width: u32, height: u32) -> DynamicImage {
        let img = ImageBuffer::from_fn(width, height, |x, y| {
            Rgb([
                ((x * 17) % 256) as u8,
                ((y * 23) % 256) as u8,
                (((x + y) * 31) % 256) as u8,
            ])
        });
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_buffer_layout() {
        let image = create_test_image(5, 3);
        let buffer = buffer_from_image(&image).unwrap();

        let shape = buffer.shape();
        assert_eq!((shape.rows(), shape.columns(), shape.channels()), (3, 5, 3));
        // pixel (x=4, y=2) lives at row 2, column 4
        assert_eq!(buffer.get(2, 4, 0), (4 * 17) as u8);
        assert_eq!(buffer.get(2, 4, 1), (2 * 23) as u8);
    }

    #[test]
    fn test_alpha_images_keep_four_channels() {
        let img = ImageBuffer::from_fn(4, 4, |x, y| Rgba([x as u8, y as u8, 0, 128]));
        let buffer = buffer_from_image(&DynamicImage::ImageRgba8(img)).unwrap();
        assert_eq!(buffer.shape().channels(), 4);
        assert_eq!(buffer.get(1, 2, 3), 128);
    }

    #[test]
    fn test_png_roundtrip() {
        let mut buffer = buffer_from_image(&create_test_image(64, 64)).unwrap();
        encode_message(&mut buffer, "Test PNG roundtrip").unwrap();

        let png_bytes = to_png_bytes(&buffer).unwrap();
        let reloaded = read_image_bytes(&png_bytes).unwrap();

        assert_eq!(reloaded, buffer);
        assert_eq!(decode_message(&reloaded).unwrap(), "Test PNG roundtrip");
    }

    #[test]
    fn test_lossless_check() {
        assert_eq!(ensure_lossless(Path::new("out.png")).unwrap(), ImageFormat::Png);
        assert_eq!(ensure_lossless(Path::new("out.BMP")).unwrap(), ImageFormat::Bmp);
        assert!(matches!(
            ensure_lossless(Path::new("out.jpg")),
            Err(ImageStegoError::LossyFormat(_))
        ));
        assert!(ensure_lossless(Path::new("no_extension")).is_err());
    }

    #[test]
    fn test_wide_buffers_cannot_be_saved() {
        let shape = Shape::new(2, 2, 5).unwrap();
        let buffer = ChannelBuffer::filled(shape, 0);
        assert!(matches!(
            image_from_buffer(&buffer),
            Err(ImageStegoError::UnsupportedChannels(5))
        ));
    }
}
