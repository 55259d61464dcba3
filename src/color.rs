use std::fmt::Display;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RGBColorFormat<T> {
    pub red: T,
    pub green: T,
    pub blue: T,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RGBAColorFormat<T> {
    pub red: T,
    pub green: T,
    pub blue: T,
    pub alpha: T,
}

/// 16 bit packed color, 5 bits red, 6 bits green, 5 bits blue, MSB first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RGB565ColorFormat {
    value: u16,
}

impl<T> RGBColorFormat<T> {
    pub const fn new(red: T, green: T, blue: T) -> Self {
        RGBColorFormat { red, green, blue }
    }
}

impl RGBColorFormat<u8> {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
}

impl<T> RGBAColorFormat<T> {
    pub const fn new(red: T, green: T, blue: T, alpha: T) -> Self {
        RGBAColorFormat {
            red,
            green,
            blue,
            alpha,
        }
    }
}

impl RGBAColorFormat<u8> {
    /// Blends the color onto an opaque background, weighted by alpha.
    pub fn composite_over(&self, background: &RGBColorFormat<u8>) -> RGBColorFormat<u8> {
        RGBColorFormat {
            red: blend(self.red, background.red, self.alpha),
            green: blend(self.green, background.green, self.alpha),
            blue: blend(self.blue, background.blue, self.alpha),
        }
    }
}

fn blend(foreground: u8, background: u8, alpha: u8) -> u8 {
    let alpha = alpha as u16;
    let weighted = foreground as u16 * alpha + background as u16 * (255 - alpha);
    ((weighted + 127) / 255) as u8
}

impl RGB565ColorFormat {
    pub fn value(&self) -> u16 {
        self.value
    }
}

impl From<&RGBColorFormat<u8>> for RGB565ColorFormat {
    fn from(value: &RGBColorFormat<u8>) -> Self {
        let red = (value.red >> 3) as u16;
        let green = (value.green >> 2) as u16;
        let blue = (value.blue >> 3) as u16;
        RGB565ColorFormat {
            value: (red << 11) | (green << 5) | blue,
        }
    }
}

impl From<RGBColorFormat<u8>> for RGB565ColorFormat {
    fn from(value: RGBColorFormat<u8>) -> Self {
        RGB565ColorFormat::from(&value)
    }
}

impl Display for RGBColorFormat<u8> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl FromStr for RGBColorFormat<u8> {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!(
                "'{}' is not a color, expected six hex digits like FF8C00",
                value
            ));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|e| e.to_string())
        };
        Ok(RGBColorFormat {
            red: channel(0..2)?,
            green: channel(2..4)?,
            blue: channel(4..6)?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::{RGB565ColorFormat, RGBAColorFormat, RGBColorFormat};

    fn rgb565(red: u8, green: u8, blue: u8) -> u16 {
        RGB565ColorFormat::from(RGBColorFormat::new(red, green, blue)).value()
    }

    #[test]
    fn convert_primaries_to_rgb565() {
        assert_eq!(rgb565(255, 255, 255), 0xFFFF);
        assert_eq!(rgb565(0, 0, 0), 0x0000);
        assert_eq!(rgb565(255, 0, 0), 0xF800);
        assert_eq!(rgb565(0, 255, 0), 0x07E0);
        assert_eq!(rgb565(0, 0, 255), 0x001F);
    }

    #[test]
    fn rgb565_truncates_low_bits() {
        // 0b1111_1000 red, 0b1111_1100 green, 0b0000_0111 blue
        assert_eq!(rgb565(0xFF, 0xFF, 0x07), rgb565(0xF8, 0xFC, 0x00));
        assert_eq!(rgb565(255, 140, 0), 0xFC60);
    }

    #[test]
    fn opaque_pixel_is_unchanged_by_compositing() {
        let pixel = RGBAColorFormat::new(12, 34, 56, 255);
        assert_eq!(
            pixel.composite_over(&RGBColorFormat::WHITE),
            RGBColorFormat::new(12, 34, 56)
        );
    }

    #[test]
    fn transparent_pixel_becomes_background() {
        let pixel = RGBAColorFormat::new(12, 34, 56, 0);
        assert_eq!(
            pixel.composite_over(&RGBColorFormat::WHITE),
            RGBColorFormat::WHITE
        );
    }

    #[test]
    fn half_transparent_pixel_is_blended() {
        let pixel = RGBAColorFormat::new(0, 0, 0, 128);
        let blended = pixel.composite_over(&RGBColorFormat::WHITE);
        assert_eq!(blended, RGBColorFormat::new(127, 127, 127));
    }

    #[test]
    fn parse_hex_color() {
        assert_eq!(
            "FF8C00".parse::<RGBColorFormat<u8>>(),
            Ok(RGBColorFormat::new(255, 140, 0))
        );
        assert_eq!(
            "#0a0B0c".parse::<RGBColorFormat<u8>>(),
            Ok(RGBColorFormat::new(10, 11, 12))
        );
        assert!("FFF".parse::<RGBColorFormat<u8>>().is_err());
        assert!("GG0000".parse::<RGBColorFormat<u8>>().is_err());
    }

    #[test]
    fn display_as_hex() {
        assert_eq!(RGBColorFormat::new(255, 140, 0).to_string(), "FF8C00");
    }
}
