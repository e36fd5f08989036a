use image::Primitive;
use image::Rgb;

#[inline]
fn math_max(r: f64, g: f64, b: f64) -> f64 {
    let mut x = r;
    if g > x {
        x = g;
    }
    if b > x {
        x = b;
    }
    x
}

#[inline]
fn math_min(r: f64, g: f64, b: f64) -> f64 {
    let mut x = r;
    if g < x {
        x = g;
    }
    if b < x {
        x = b;
    }
    x
}

/// Determine if the pixel is likely to be a skin pixel
///
/// Only the explicit RGB rule from "A Survey on Pixel-Based Skin Color
/// Detection Techniques" is used, channels are expected in `0..=255`.
pub fn classify_skin<T: Primitive>(rgb: Rgb<T>) -> bool
where
    T: Into<f64>,
{
    let r: f64 = rgb[0].into();
    let g: f64 = rgb[1].into();
    let b: f64 = rgb[2].into();

    (r > 95.0)
        && (g > 40.0 && g < 100.0)
        && (b > 20.0)
        && (r > g)
        && (r > b)
        && ((math_max(r, g, b) - math_min(r, g, b)) > 15.0)
        && ((r - b).abs() > 15.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_skin() {
        assert!(classify_skin(Rgb([200u8, 80, 60])));
        assert!(classify_skin(Rgb([127u8, 83, 58])));

        // green too bright
        assert!(!classify_skin(Rgb([175u8, 125, 102])));
        assert!(!classify_skin(Rgb([219u8, 191, 177])));
        assert!(!classify_skin(Rgb([112u8, 110, 89])));
        assert!(!classify_skin(Rgb([0u8, 0, 0])));
        assert!(!classify_skin(Rgb([255u8, 255, 255])));
    }

    #[test]
    fn test_classify_skin_boundaries() {
        // red must be strictly above 95
        assert!(!classify_skin(Rgb([95u8, 60, 30])));
        assert!(classify_skin(Rgb([96u8, 60, 30])));

        // green is an open interval
        assert!(!classify_skin(Rgb([150u8, 40, 30])));
        assert!(!classify_skin(Rgb([150u8, 100, 30])));
        assert!(classify_skin(Rgb([150u8, 41, 30])));

        // blue must be above 20
        assert!(!classify_skin(Rgb([150u8, 60, 20])));

        // red and blue too close
        assert!(!classify_skin(Rgb([150u8, 60, 135])));
    }

    #[test]
    fn test_classify_skin_float_channels() {
        assert!(classify_skin(Rgb([200.0f32, 80.0, 60.0])));
        assert!(!classify_skin(Rgb([20.0f32, 80.0, 60.0])));
    }
}
