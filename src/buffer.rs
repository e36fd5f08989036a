use crate::error::{Error, Result};
use image::Rgb;
use image::RgbImage;

/// Read-only view over packed 8-bit RGB pixels
#[derive(Debug, Clone, Copy)]
pub struct RgbBuffer<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> RgbBuffer<'a> {
    /// Wrap a raw row-major RGB buffer.
    ///
    /// Fails if either dimension is zero or if `data` holds fewer than
    /// `width * height * 3` bytes. Trailing bytes are ignored.
    pub fn from_raw(width: u32, height: u32, data: &'a [u8]) -> Result<RgbBuffer<'a>> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyImage);
        }

        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(3))
            .unwrap_or(usize::MAX);

        if data.len() < expected {
            return Err(Error::BufferTooShort {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }

        Ok(RgbBuffer {
            width,
            height,
            data,
        })
    }

    pub fn from_image(image: &'a RgbImage) -> Result<RgbBuffer<'a>> {
        let (width, height) = image.dimensions();
        RgbBuffer::from_raw(width, height, image.as_raw())
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn total_pixels(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Returns the pixel at `(x, y)`, or `None` outside of the image
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb<u8>> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 3;
        let px = &self.data[offset..offset + 3];
        Some(Rgb([px[0], px[1], px[2]]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw() {
        let data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let buffer = RgbBuffer::from_raw(2, 2, &data).unwrap();
        assert_eq!(buffer.total_pixels(), 4);
        assert_eq!(buffer.get(0, 0), Some(Rgb([1, 2, 3])));
        assert_eq!(buffer.get(1, 0), Some(Rgb([4, 5, 6])));
        assert_eq!(buffer.get(0, 1), Some(Rgb([7, 8, 9])));
        assert_eq!(buffer.get(1, 1), Some(Rgb([10, 11, 12])));
        assert_eq!(buffer.get(2, 0), None);
        assert_eq!(buffer.get(0, 2), None);
    }

    #[test]
    fn test_buffer_too_short() {
        let data = [0u8; 11];
        match RgbBuffer::from_raw(2, 2, &data) {
            Err(Error::BufferTooShort {
                expected, actual, ..
            }) => {
                assert_eq!(expected, 12);
                assert_eq!(actual, 11);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_empty_image() {
        assert!(matches!(
            RgbBuffer::from_raw(0, 4, &[]),
            Err(Error::EmptyImage)
        ));
        assert!(matches!(
            RgbBuffer::from_image(&RgbImage::new(3, 0)),
            Err(Error::EmptyImage)
        ));
    }
}
