use std::{
    io,
    path::PathBuf,
};

use image::{ImageError, ImageFormat};
use thiserror::Error;

use crate::source::SourceFormat;

#[derive(Debug, Error)]
pub enum MergeError{
    #[error("could not open {}: {source}", path.display())]
    Open{
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a recognizable image", path.display())]
    UnknownFormat{ path: PathBuf },

    #[error("{} is a {format:?} image, only JPEG and PNG are supported", path.display())]
    UnsupportedFormat{
        path: PathBuf,
        format: ImageFormat,
    },

    #[error("could not decode {}: {source}", path.display())]
    Decode{
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    #[error("images must be in the same format (first is {first}, second is {second})")]
    FormatMismatch{
        first: SourceFormat,
        second: SourceFormat,
    },

    #[error("merged canvas would be too large ({width} x {height} does not fit in 32 bits)")]
    CanvasTooLarge{
        width: u64,
        height: u64,
    },

    #[error("{} does not name an output file", path.display())]
    InvalidOutput{ path: PathBuf },

    #[error("could not encode output image: {0}")]
    Encode(#[source] ImageError),

    #[error("could not write {}: {source}", path.display())]
    Write{
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type MergeResult<T> = Result<T, MergeError>;
