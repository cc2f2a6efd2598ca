use image::imageops::{self, FilterType};
use image::{GrayImage, ImageBuffer, Luma, Rgba};

/// Linear upscale factor applied before OCR.
pub const UPSCALE_FACTOR: u32 = 2;

/// Contrast multiplier applied after grayscale conversion.
pub const CONTRAST_FACTOR: f32 = 2.0;

/// Prepares a captured frame for OCR.
///
/// Order matters: upscale, then grayscale, then contrast.
pub fn prepare_for_ocr(img: &ImageBuffer<Rgba<u8>, Vec<u8>>) -> GrayImage {
    let upscaled = upscale(img, UPSCALE_FACTOR);
    let gray = to_grayscale(&upscaled);
    enhance_contrast(&gray, CONTRAST_FACTOR)
}

/// Resizes the image by `factor` in each dimension with Lanczos resampling.
///
/// Larger glyph strokes give Tesseract noticeably better results on small
/// game fonts.
pub fn upscale(img: &ImageBuffer<Rgba<u8>, Vec<u8>>, factor: u32) -> ImageBuffer<Rgba<u8>, Vec<u8>> {
    let (width, height) = img.dimensions();
    imageops::resize(img, width * factor, height * factor, FilterType::Lanczos3)
}

/// Converts to single-channel luma.
///
/// Uses the ITU-R BT.601 luma formula: Y = 0.299*R + 0.587*G + 0.114*B,
/// in 16-bit fixed point with rounding.
pub fn to_grayscale(img: &ImageBuffer<Rgba<u8>, Vec<u8>>) -> GrayImage {
    let (width, height) = img.dimensions();
    let mut output = ImageBuffer::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels() {
        let r = pixel[0] as u32;
        let g = pixel[1] as u32;
        let b = pixel[2] as u32;
        let luma = (r * 19595 + g * 38470 + b * 7471 + 0x8000) >> 16;
        output.put_pixel(x, y, Luma([luma as u8]));
    }

    output
}

/// Pushes every pixel away from the image's mean luma by `factor`.
///
/// `out = mean + factor * (px - mean)`, truncated and clamped to 0..=255.
/// A factor of 1.0 leaves the image unchanged; a uniform image is unchanged
/// for any factor.
pub fn enhance_contrast(img: &GrayImage, factor: f32) -> GrayImage {
    let mean = mean_luma(img) as f32;
    let mut output = img.clone();

    for pixel in output.pixels_mut() {
        let value = mean + factor * (pixel[0] as f32 - mean);
        pixel[0] = value.trunc().clamp(0.0, 255.0) as u8;
    }

    output
}

/// Mean luma rounded to the nearest integer; 0 for an empty image.
fn mean_luma(img: &GrayImage) -> u8 {
    let count = img.width() as u64 * img.height() as u64;
    if count == 0 {
        return 0;
    }
    let total: u64 = img.pixels().map(|p| p[0] as u64).sum();
    ((total as f64 / count as f64) + 0.5) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_row(values: &[u8]) -> GrayImage {
        GrayImage::from_fn(values.len() as u32, 1, |x, _| Luma([values[x as usize]]))
    }

    #[test]
    fn test_upscale_doubles_dimensions() {
        let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_pixel(30, 12, Rgba([200, 200, 200, 255]));
        let upscaled = upscale(&img, 2);
        assert_eq!(upscaled.dimensions(), (60, 24));
        // A flat image stays (nearly) flat
        let value = upscaled.get_pixel(31, 7)[0];
        assert!((199..=200).contains(&value), "got {}", value);
    }

    #[test]
    fn test_to_grayscale() {
        let mut img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::new(3, 1);
        img.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
        img.put_pixel(1, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(2, 0, Rgba([0, 0, 0, 255]));

        let gray = to_grayscale(&img);

        assert_eq!(gray.get_pixel(0, 0)[0], 255);
        assert_eq!(gray.get_pixel(1, 0)[0], 76);
        assert_eq!(gray.get_pixel(2, 0)[0], 0);
    }

    #[test]
    fn test_to_grayscale_rounds() {
        let mut img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::new(3, 1);
        img.put_pixel(0, 0, Rgba([0, 255, 0, 255]));
        img.put_pixel(1, 0, Rgba([0, 0, 255, 255]));
        img.put_pixel(2, 0, Rgba([128, 128, 128, 255]));

        let gray = to_grayscale(&img);

        // 149.685 and 29.07
        assert_eq!(gray.get_pixel(0, 0)[0], 150);
        assert_eq!(gray.get_pixel(1, 0)[0], 29);
        assert_eq!(gray.get_pixel(2, 0)[0], 128);
    }

    #[test]
    fn test_enhance_contrast_stretches_around_mean() {
        let img = gray_row(&[100, 200]);
        let enhanced = enhance_contrast(&img, 2.0);
        // mean = 150
        assert_eq!(enhanced.get_pixel(0, 0)[0], 50);
        assert_eq!(enhanced.get_pixel(1, 0)[0], 250);
    }

    #[test]
    fn test_enhance_contrast_clamps() {
        let img = gray_row(&[0, 255]);
        let enhanced = enhance_contrast(&img, 2.0);
        assert_eq!(enhanced.get_pixel(0, 0)[0], 0);
        assert_eq!(enhanced.get_pixel(1, 0)[0], 255);
    }

    #[test]
    fn test_enhance_contrast_uniform_image_unchanged() {
        let img = gray_row(&[90, 90, 90, 90]);
        let enhanced = enhance_contrast(&img, 2.0);
        assert!(enhanced.pixels().all(|p| p[0] == 90));
    }

    #[test]
    fn test_prepare_for_ocr_output_shape() {
        let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_pixel(40, 10, Rgba([10, 20, 30, 255]));
        let prepared = prepare_for_ocr(&img);
        assert_eq!(prepared.dimensions(), (80, 20));
    }
}
