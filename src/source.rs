use std::{
    fmt,
    fs::File,
    io::BufReader,
    path::Path,
};

use image::{
    DynamicImage,
    ImageFormat,
    ImageReader as IR,
};

use crate::error::{MergeError, MergeResult};

/// The encodings we can read and write back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat{
    Jpeg,
    Png,
}

impl SourceFormat{
    pub fn from_image_format(format: ImageFormat) -> Option<Self>{
        match format{
            ImageFormat::Jpeg => Some(Self::Jpeg),
            ImageFormat::Png => Some(Self::Png),
            _ => None,
        }
    }

    pub fn image_format(self) -> ImageFormat{
        match self{
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Png => ImageFormat::Png,
        }
    }

    /// Extension used when naming the output file.
    pub fn extension(self) -> &'static str{
        match self{
            Self::Jpeg => "jpg",
            Self::Png => "png",
        }
    }

    /// Whether `ext` is a conventional extension for this format, ignoring case.
    pub fn owns_extension(self, ext: &str) -> bool{
        let ext = ext.to_ascii_lowercase();
        match self{
            Self::Jpeg => matches!(ext.as_str(), "jpg" | "jpeg" | "jpe"),
            Self::Png => ext == "png",
        }
    }
}

impl fmt::Display for SourceFormat{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result{
        match self{
            Self::Jpeg => write!(f, "JPEG"),
            Self::Png => write!(f, "PNG"),
        }
    }
}

pub struct SourceImage{
    pub format: SourceFormat,
    pub image: DynamicImage,
}

impl SourceImage{
    pub fn dims(&self) -> (u32, u32){
        (self.image.width(), self.image.height())
    }
}

/// Open and decode an image. The format comes from the file contents only, the
/// extension is never consulted.
pub fn load(path: &Path) -> MergeResult<SourceImage>{
    let reader = File::open(path)
        .and_then(|f| IR::new(BufReader::new(f)).with_guessed_format())
        .map_err(|source| MergeError::Open{ path: path.to_path_buf(), source })?;

    let detected = reader.format()
        .ok_or_else(|| MergeError::UnknownFormat{ path: path.to_path_buf() })?;
    let format = SourceFormat::from_image_format(detected)
        .ok_or_else(|| MergeError::UnsupportedFormat{
            path: path.to_path_buf(),
            format: detected,
        })?;
    log::debug!("{:?} sniffed as {}", path, format);

    let image = reader
        .decode()
        .map_err(|source| MergeError::Decode{ path: path.to_path_buf(), source })?;

    Ok(SourceImage{ format, image })
}

/// Both eyes have to come from the same encoder, we never convert between formats.
pub fn ensure_same_format(first: &SourceImage, second: &SourceImage) -> MergeResult<SourceFormat>{
    if first.format != second.format {
        return Err(MergeError::FormatMismatch{
            first: first.format,
            second: second.format,
        });
    }
    Ok(first.format)
}
