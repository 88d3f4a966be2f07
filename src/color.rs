//! Color specification parsing and ANSI 24-bit code generation.
//!
//! Accepted formats: named colors (case-insensitive), `#RRGGBB` hex, and
//! `rgb(R,G,B)` with decimal components in 0-255.

use std::str::FromStr;

use thiserror::Error;

/// Errors raised for malformed color specifications.
#[derive(Debug, Error)]
pub enum ColorError {
    #[error("empty color specification")]
    Empty,
    #[error("unknown color format {0:?}")]
    UnknownFormat(String),
    #[error("invalid {channel} hex value in {spec:?}")]
    InvalidHex {
        spec: String,
        channel: &'static str,
    },
    #[error("missing closing parenthesis in {0:?}")]
    MissingParen(String),
    #[error("rgb() components cannot be empty")]
    EmptyComponents,
    #[error("rgb() requires exactly 3 components, got {0}")]
    ComponentCount(usize),
    #[error("invalid rgb() component {0:?}")]
    InvalidComponent(String),
}

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("black", Rgb { r: 0, g: 0, b: 0 }),
    ("red", Rgb { r: 255, g: 0, b: 0 }),
    ("green", Rgb { r: 0, g: 255, b: 0 }),
    ("yellow", Rgb { r: 255, g: 255, b: 0 }),
    ("blue", Rgb { r: 0, g: 0, b: 255 }),
    ("magenta", Rgb { r: 255, g: 0, b: 255 }),
    ("cyan", Rgb { r: 0, g: 255, b: 255 }),
    ("white", Rgb { r: 255, g: 255, b: 255 }),
    ("orange", Rgb { r: 255, g: 165, b: 0 }),
    ("purple", Rgb { r: 128, g: 0, b: 128 }),
    ("pink", Rgb { r: 255, g: 192, b: 203 }),
    ("brown", Rgb { r: 165, g: 42, b: 42 }),
    ("gray", Rgb { r: 128, g: 128, b: 128 }),
];

impl Rgb {
    /// 24-bit ANSI foreground escape sequence for this color.
    pub fn ansi(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(ColorError::Empty);
        }

        let lower = spec.to_ascii_lowercase();
        if let Some((_, rgb)) = NAMED_COLORS.iter().find(|(name, _)| *name == lower) {
            return Ok(*rgb);
        }
        if spec.len() == 7 && spec.starts_with('#') {
            return parse_hex(spec);
        }
        if lower.starts_with("rgb(") {
            return parse_rgb(&lower);
        }
        Err(ColorError::UnknownFormat(spec.to_string()))
    }
}

fn parse_hex(spec: &str) -> Result<Rgb, ColorError> {
    let channel = |start: usize, name: &'static str| {
        spec.get(start..start + 2)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
            .ok_or_else(|| ColorError::InvalidHex {
                spec: spec.to_string(),
                channel: name,
            })
    };
    Ok(Rgb {
        r: channel(1, "red")?,
        g: channel(3, "green")?,
        b: channel(5, "blue")?,
    })
}

fn parse_rgb(spec: &str) -> Result<Rgb, ColorError> {
    let body = spec
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| ColorError::MissingParen(spec.to_string()))?
        .trim();
    if body.is_empty() {
        return Err(ColorError::EmptyComponents);
    }

    let parts: Vec<&str> = body.split(',').collect();
    if parts.len() != 3 {
        return Err(ColorError::ComponentCount(parts.len()));
    }

    let mut channels = [0u8; 3];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        let token = part.trim();
        *slot = token
            .parse()
            .map_err(|_| ColorError::InvalidComponent(token.to_string()))?;
    }
    Ok(Rgb {
        r: channels[0],
        g: channels[1],
        b: channels[2],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_named_colors() {
        assert_eq!("red".parse::<Rgb>().unwrap(), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(
            "orange".parse::<Rgb>().unwrap(),
            Rgb { r: 255, g: 165, b: 0 }
        );
        assert_eq!(
            "gray".parse::<Rgb>().unwrap(),
            Rgb { r: 128, g: 128, b: 128 }
        );
    }

    #[test]
    fn named_colors_ignore_case_and_whitespace() {
        assert_eq!(
            "  Magenta ".parse::<Rgb>().unwrap(),
            Rgb { r: 255, g: 0, b: 255 }
        );
    }

    #[test]
    fn every_named_color_round_trips() {
        for (name, rgb) in NAMED_COLORS {
            assert_eq!(name.parse::<Rgb>().unwrap(), *rgb, "color {name}");
        }
    }

    #[test]
    fn parses_hex() {
        assert_eq!(
            "#ff8000".parse::<Rgb>().unwrap(),
            Rgb { r: 255, g: 128, b: 0 }
        );
        assert_eq!("#000000".parse::<Rgb>().unwrap(), Rgb { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn rejects_bad_hex_digits() {
        assert!(matches!(
            "#ff00zz".parse::<Rgb>(),
            Err(ColorError::InvalidHex { channel: "blue", .. })
        ));
    }

    #[test]
    fn short_hex_is_an_unknown_format() {
        assert!(matches!(
            "#fff".parse::<Rgb>(),
            Err(ColorError::UnknownFormat(_))
        ));
    }

    #[test]
    fn parses_rgb_with_spaces() {
        assert_eq!(
            "rgb(255, 99, 0)".parse::<Rgb>().unwrap(),
            Rgb { r: 255, g: 99, b: 0 }
        );
        assert_eq!(
            "RGB(1,2,3)".parse::<Rgb>().unwrap(),
            Rgb { r: 1, g: 2, b: 3 }
        );
    }

    #[test]
    fn rejects_malformed_rgb() {
        assert!(matches!(
            "rgb(1,2,3".parse::<Rgb>(),
            Err(ColorError::MissingParen(_))
        ));
        assert!(matches!(
            "rgb()".parse::<Rgb>(),
            Err(ColorError::EmptyComponents)
        ));
        assert!(matches!(
            "rgb(1,2)".parse::<Rgb>(),
            Err(ColorError::ComponentCount(2))
        ));
        assert!(matches!(
            "rgb(1,2,3,4)".parse::<Rgb>(),
            Err(ColorError::ComponentCount(4))
        ));
        assert!(matches!(
            "rgb(256,0,0)".parse::<Rgb>(),
            Err(ColorError::InvalidComponent(_))
        ));
        assert!(matches!(
            "rgb(1,x,3)".parse::<Rgb>(),
            Err(ColorError::InvalidComponent(_))
        ));
    }

    #[test]
    fn rejects_empty_and_unknown_specs() {
        assert!(matches!("".parse::<Rgb>(), Err(ColorError::Empty)));
        assert!(matches!("   ".parse::<Rgb>(), Err(ColorError::Empty)));
        assert!(matches!(
            "chartreuse".parse::<Rgb>(),
            Err(ColorError::UnknownFormat(_))
        ));
    }

    #[test]
    fn ansi_code_has_24_bit_format() {
        assert_eq!(Rgb { r: 255, g: 0, b: 0 }.ansi(), "\x1b[38;2;255;0;0m");
        assert_eq!(Rgb { r: 1, g: 22, b: 3 }.ansi(), "\x1b[38;2;1;22;3m");
    }
}
