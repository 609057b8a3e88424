use serde::{Deserialize, Serialize};

/// RGB color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Blend two colors channel by channel
///
/// Each channel is `c1 + (c2 - c1) * factor`, truncated toward zero. The
/// factor is not clamped: values outside `[0, 1]` extrapolate, saturating
/// only where a channel would leave `0..=255`.
pub fn interpolate(c1: Rgb, c2: Rgb, factor: f64) -> Rgb {
    let channel = |a: u8, b: u8| {
        let a = f64::from(a);
        let b = f64::from(b);
        // `as` saturates at the u8 bounds
        (a + (b - a) * factor).trunc() as u8
    };

    Rgb {
        r: channel(c1.r, c2.r),
        g: channel(c1.g, c2.g),
        b: channel(c1.b, c2.b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_endpoints() {
        let pairs = [
            (Rgb::GREEN, Rgb::RED),
            (Rgb::RED, Rgb::BLUE),
            (Rgb::new(12, 200, 99), Rgb::new(250, 3, 100)),
        ];

        for (c1, c2) in pairs {
            assert_eq!(interpolate(c1, c2, 0.0), c1);
            assert_eq!(interpolate(c1, c2, 1.0), c2);
        }
    }

    #[test]
    fn test_interpolate_truncates() {
        // 255 * 0.5 = 127.5
        assert_eq!(
            interpolate(Rgb::GREEN, Rgb::RED, 0.5),
            Rgb::new(127, 127, 0)
        );
        // 255 + (0 - 255) * 0.3 = 178.5
        assert_eq!(interpolate(Rgb::RED, Rgb::BLUE, 0.3).r, 178);
    }

    #[test]
    fn test_interpolate_extrapolates() {
        let c1 = Rgb::new(100, 100, 100);
        let c2 = Rgb::new(200, 150, 50);
        assert_eq!(interpolate(c1, c2, 1.5), Rgb::new(250, 175, 25));
        assert_eq!(interpolate(c1, c2, -0.5), Rgb::new(50, 75, 125));
    }

    #[test]
    fn test_interpolate_same_color() {
        let c = Rgb::new(7, 8, 9);
        assert_eq!(interpolate(c, c, 0.42), c);
    }
}
