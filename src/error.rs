use failure::Fail;
use std::io;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong around a scan
#[derive(Debug, Fail)]
pub enum Error {
    #[fail(
        display = "rgb buffer too short for {}x{}: expected {} bytes, got {}",
        width, height, expected, actual
    )]
    BufferTooShort {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[fail(display = "image has no pixels")]
    EmptyImage,
    #[fail(
        display = "image is {}x{} but the scan covered {}x{}",
        width, height, expected_width, expected_height
    )]
    DimensionMismatch {
        width: u32,
        height: u32,
        expected_width: u32,
        expected_height: u32,
    },
    #[fail(display = "image error: {}", _0)]
    Image(#[cause] image::ImageError),
    #[fail(display = "io error: {}", _0)]
    Io(#[cause] io::Error),
    #[fail(display = "invalid config: {}", _0)]
    Config(#[cause] serde_json::Error),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Error {
        Error::Image(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::Config(err)
    }
}
