use image::imageops::FilterType;
use image::{ImageError, ImageFormat, ImageReader};
use std::io::Cursor;

pub fn resize(image_bytes: &[u8], width: u32, height: u32) -> Result<Vec<u8>, ImageError> {
    let cursor = Cursor::new(image_bytes);
    let image = ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(ImageError::IoError)?
        .decode()?;

    let resized_image = image.resize(width, height, FilterType::Lanczos3);

    // For a rough estimate, assume 4 bytes per pixel (RGBA) for a PNG image.
    let estimated_size = (width as usize) * (height as usize) * 4;
    let mut resized_image_bytes_buffer = Cursor::new(Vec::with_capacity(estimated_size));
    resized_image.write_to(&mut resized_image_bytes_buffer, ImageFormat::Png)?;

    Ok(resized_image_bytes_buffer.into_inner())
}
