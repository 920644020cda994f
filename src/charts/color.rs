//! CSS-style colour values used in chart styling.

use crate::error::ColorParseError;
use egui::Color32;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Straight (unmultiplied) RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Colour with a CSS alpha in `0.0..=1.0`.
    pub fn with_alpha(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self {
            r,
            g,
            b,
            a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
        }
    }

    pub fn to_color32(self) -> Color32 {
        Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }
}

impl From<Rgba> for Color32 {
    fn from(c: Rgba) -> Self {
        c.to_color32()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            // Three decimals keep every 8-bit alpha distinct.
            let alpha = f32::from(self.a) / 255.0;
            write!(f, "rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, alpha)
        }
    }
}

impl TryFrom<String> for Rgba {
    type Error = ColorParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    /// Accepts `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r, g, b)` and `rgba(r, g, b, a)`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let s = raw.trim();
        let err = || ColorParseError(raw.to_string());

        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(err);
        }

        let lower = s.to_ascii_lowercase();
        let (body, has_alpha) = if let Some(rest) = lower.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = lower.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(err());
        };
        let body = body.strip_suffix(')').ok_or_else(err)?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();

        match (parts.as_slice(), has_alpha) {
            ([r, g, b], false) => Ok(Self::rgb(
                r.parse().map_err(|_| err())?,
                g.parse().map_err(|_| err())?,
                b.parse().map_err(|_| err())?,
            )),
            ([r, g, b, a], true) => {
                let alpha: f32 = a.parse().map_err(|_| err())?;
                if !(0.0..=1.0).contains(&alpha) {
                    return Err(err());
                }
                Ok(Self::with_alpha(
                    r.parse().map_err(|_| err())?,
                    g.parse().map_err(|_| err())?,
                    b.parse().map_err(|_| err())?,
                    alpha,
                ))
            }
            _ => Err(err()),
        }
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        3 => {
            let nibble = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok();
            Some(Rgba::rgb(nibble(0)? * 17, nibble(1)? * 17, nibble(2)? * 17))
        }
        6 => Some(Rgba::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Rgba {
            r: byte(0)?,
            g: byte(2)?,
            b: byte(4)?,
            a: byte(6)?,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!("#FF6384".parse(), Ok(Rgba::rgb(255, 99, 132)));
        assert_eq!("#fff".parse(), Ok(Rgba::rgb(255, 255, 255)));
        assert_eq!(
            "#36A2EB80".parse(),
            Ok(Rgba {
                r: 0x36,
                g: 0xA2,
                b: 0xEB,
                a: 0x80
            })
        );
    }

    #[test]
    fn test_parse_functional_forms() {
        assert_eq!("rgb(1, 2, 3)".parse(), Ok(Rgba::rgb(1, 2, 3)));
        assert_eq!(
            "rgba(75, 192, 192, 0.5)".parse(),
            Ok(Rgba::with_alpha(75, 192, 192, 0.5))
        );
        assert_eq!(Rgba::with_alpha(0, 0, 0, 0.5).a, 128);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        for bad in ["", "red", "#12", "#GGGGGG", "rgb(1,2)", "rgba(1,2,3,1.5)", "rgb(300,0,0)"] {
            assert!(bad.parse::<Rgba>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let c = Rgba::with_alpha(255, 99, 132, 0.9);
        let back: Rgba = c.to_string().parse().unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_display_keeps_low_alpha() {
        let faint = Rgba {
            r: 10,
            g: 20,
            b: 30,
            a: 1,
        };
        assert_eq!(faint.to_string(), "rgba(10, 20, 30, 0.004)");
        for a in 0..=u8::MAX {
            let c = Rgba {
                r: 1,
                g: 2,
                b: 3,
                a,
            };
            assert_eq!(c.to_string().parse::<Rgba>(), Ok(c), "alpha {a}");
        }
    }
}
