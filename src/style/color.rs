use serde::{Deserialize, Serialize};

/// A palette color token.
///
/// Keeps the token exactly as written in the catalog (`"#F00"`, `"#1A3F99"`,
/// `"rgba(0, 0, 0, 0.5)"`) next to its parsed straight-alpha RGBA8 value, so drawables can be
/// handed to a CSS-like rasterizer verbatim or to a pixel pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    token: String,
    rgba: [u8; 4],
}

impl Color {
    pub fn parse(token: &str) -> Result<Self, String> {
        let token = token.trim();
        let rgba = if let Some(hex) = token.strip_prefix('#') {
            parse_hex(hex)?
        } else if let Some(body) = token
            .strip_prefix("rgba(")
            .or_else(|| token.strip_prefix("rgb("))
            .and_then(|s| s.strip_suffix(')'))
        {
            parse_rgb_fn(body)?
        } else {
            return Err(format!("unsupported color token \"{token}\""));
        };
        Ok(Self {
            token: token.to_owned(),
            rgba,
        })
    }

    /// Opaque color with a canonical `#rrggbb` token.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            token: format!("#{r:02x}{g:02x}{b:02x}"),
            rgba: [r, g, b, 255],
        }
    }

    pub fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn rgba(&self) -> [u8; 4] {
        self.rgba
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.token)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

fn parse_hex(s: &str) -> Result<[u8; 4], String> {
    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }
    fn hex_nibble(c: &str) -> Result<u8, String> {
        Ok(hex_byte(c)? * 17)
    }

    if !s.is_ascii() {
        return Err("hex color must be ASCII".to_owned());
    }
    match s.len() {
        3 | 4 => {
            let r = hex_nibble(&s[0..1])?;
            let g = hex_nibble(&s[1..2])?;
            let b = hex_nibble(&s[2..3])?;
            let a = if s.len() == 4 {
                hex_nibble(&s[3..4])?
            } else {
                255
            };
            Ok([r, g, b, a])
        }
        6 | 8 => {
            let r = hex_byte(&s[0..2])?;
            let g = hex_byte(&s[2..4])?;
            let b = hex_byte(&s[4..6])?;
            let a = if s.len() == 8 { hex_byte(&s[6..8])? } else { 255 };
            Ok([r, g, b, a])
        }
        _ => Err("hex color must be #RGB, #RGBA, #RRGGBB or #RRGGBBAA".to_owned()),
    }
}

fn parse_rgb_fn(body: &str) -> Result<[u8; 4], String> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(format!("rgb()/rgba() needs 3 or 4 components, got {}", parts.len()));
    }
    let mut out = [0u8, 0, 0, 255];
    for (i, p) in parts[..3].iter().enumerate() {
        out[i] = p
            .parse::<u8>()
            .map_err(|_| format!("invalid color channel \"{p}\""))?;
    }
    if let Some(a) = parts.get(3) {
        let a: f64 = a
            .parse()
            .map_err(|_| format!("invalid alpha \"{a}\""))?;
        if !a.is_finite() {
            return Err("alpha must be finite".to_owned());
        }
        out[3] = (a.clamp(0.0, 1.0) * 255.0).round() as u8;
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/style/color.rs"]
mod tests;
