use std::fmt;

use crate::render::Color;

/// CSS color string parsed into a canonical, encoding-aware value.
///
/// Parsing never fails: encodings other than `rgb()`, `rgba()` and 6-digit
/// hex are kept verbatim as [`CssColor::Unsupported`] and pass through
/// brightening unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssColor {
    Rgb {
        red: u8,
        green: u8,
        blue: u8,
    },
    /// Alpha keeps its source text so it is re-emitted untouched.
    Rgba {
        red: u8,
        green: u8,
        blue: u8,
        alpha: String,
    },
    Hex {
        red: u8,
        green: u8,
        blue: u8,
    },
    Unsupported(String),
}

impl CssColor {
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if let Some(body) = trimmed
            .strip_prefix("rgba(")
            .or_else(|| trimmed.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            if let Some(color) = parse_functional(trimmed.starts_with("rgba("), body) {
                return color;
            }
        } else if let Some(digits) = trimmed.strip_prefix('#') {
            if let Some([red, green, blue]) = parse_hex_triplet(digits) {
                return Self::Hex { red, green, blue };
            }
        }
        Self::Unsupported(input.to_owned())
    }

    /// Raises every channel by `factor * 255`, clamped to `[0, 255]`.
    #[must_use]
    pub fn brighten(&self, factor: f64) -> Self {
        let lift = |channel: u8| -> u8 {
            (f64::from(channel) + 255.0 * factor)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        match self {
            Self::Rgb { red, green, blue } => Self::Rgb {
                red: lift(*red),
                green: lift(*green),
                blue: lift(*blue),
            },
            Self::Rgba {
                red,
                green,
                blue,
                alpha,
            } => Self::Rgba {
                red: lift(*red),
                green: lift(*green),
                blue: lift(*blue),
                alpha: alpha.clone(),
            },
            Self::Hex { red, green, blue } => Self::Hex {
                red: lift(*red),
                green: lift(*green),
                blue: lift(*blue),
            },
            Self::Unsupported(raw) => Self::Unsupported(raw.clone()),
        }
    }

    /// Canvas color, when the encoding is understood.
    #[must_use]
    pub fn to_color(&self) -> Option<Color> {
        match self {
            Self::Rgb { red, green, blue } | Self::Hex { red, green, blue } => {
                Some(Color::opaque(*red, *green, *blue))
            }
            Self::Rgba {
                red,
                green,
                blue,
                alpha,
            } => {
                let alpha = alpha.trim().parse::<f64>().ok()?.clamp(0.0, 1.0);
                Some(Color::rgba8(*red, *green, *blue, alpha))
            }
            Self::Unsupported(_) => None,
        }
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb { red, green, blue } => write!(f, "rgb({red},{green},{blue})"),
            Self::Rgba {
                red,
                green,
                blue,
                alpha,
            } => write!(f, "rgba({red},{green},{blue},{alpha})"),
            Self::Hex { red, green, blue } => write!(f, "#{red:02x}{green:02x}{blue:02x}"),
            Self::Unsupported(raw) => f.write_str(raw),
        }
    }
}

/// String-in, string-out brightening used by hover effects.
#[must_use]
pub fn brighten_color(color: &str, factor: f64) -> String {
    match CssColor::parse(color) {
        CssColor::Unsupported(_) => color.to_owned(),
        parsed => parsed.brighten(factor).to_string(),
    }
}

fn parse_functional(is_rgba: bool, body: &str) -> Option<CssColor> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let red = parse_channel(parts[0])?;
    let green = parse_channel(parts[1])?;
    let blue = parse_channel(parts[2])?;

    match parts.get(3) {
        Some(alpha) if !alpha.is_empty() => Some(CssColor::Rgba {
            red,
            green,
            blue,
            alpha: (*alpha).to_owned(),
        }),
        Some(_) => None,
        None if is_rgba => Some(CssColor::Rgba {
            red,
            green,
            blue,
            alpha: "1".to_owned(),
        }),
        None => Some(CssColor::Rgb { red, green, blue }),
    }
}

fn parse_channel(text: &str) -> Option<u8> {
    let value = text.parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value.trunc().clamp(0.0, 255.0) as u8)
}

fn parse_hex_triplet(digits: &str) -> Option<[u8; 3]> {
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_alpha_text_is_preserved() {
        let color = CssColor::parse("rgba(10, 117, 87, 0.90)");
        assert_eq!(
            color,
            CssColor::Rgba {
                red: 10,
                green: 117,
                blue: 87,
                alpha: "0.90".to_owned(),
            }
        );
        assert_eq!(color.brighten(0.2).to_string(), "rgba(61,168,138,0.90)");
    }

    #[test]
    fn short_hex_is_unsupported() {
        assert!(matches!(CssColor::parse("#fff"), CssColor::Unsupported(_)));
    }
}
