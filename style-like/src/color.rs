use crate::error::StyleError;

// RGBA in [0, 1]. Hex bodies must be plain hex digits; radix parsing alone
// lets a sign through (`#+F+F+F`).
pub fn parse_color(s: &str) -> Option<[f64; 4]> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
    }
    let c = csscolorparser::parse(s).ok()?;
    Some([c.r, c.g, c.b, c.a])
}

pub(crate) fn validate_color(color: Option<String>) -> Result<Option<String>, StyleError> {
    match color {
        Some(c) if parse_color(&c).is_none() => Err(StyleError::InvalidColor(c)),
        other => Ok(other),
    }
}
