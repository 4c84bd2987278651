use std::{
    fs,
    io::Cursor,
    path::Path,
};

use image::{DynamicImage, RgbaImage};

use crate::{
    error::{MergeError, MergeResult},
    source::SourceFormat,
};

/// Encode the canvas in memory. JPEG has no alpha, so it gets the RGB part only
/// and transparent padding comes out black.
pub fn encode(canvas: RgbaImage, format: SourceFormat) -> MergeResult<Vec<u8>>{
    let img = match format{
        SourceFormat::Png => DynamicImage::ImageRgba8(canvas),
        SourceFormat::Jpeg => DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(canvas).into_rgb8()),
    };
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, format.image_format())
        .map_err(MergeError::Encode)?;
    Ok(bytes.into_inner())
}

/// Nothing touches the disk until the whole file is encoded.
pub fn save(canvas: RgbaImage, format: SourceFormat, path: &Path) -> MergeResult<usize>{
    let bytes = encode(canvas, format)?;
    fs::write(path, &bytes)
        .map_err(|source| MergeError::Write{ path: path.to_path_buf(), source })?;
    Ok(bytes.len())
}
