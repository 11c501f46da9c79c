//! Site palette. One source of truth for both canvas fills and markup.

pub type Rgb = (u8, u8, u8);

/// Near-black used for high-density blocks and body text.
pub const INK: Rgb = (29, 29, 31);
/// Medium gray, mid-density blocks and secondary text.
pub const GRAPHITE: Rgb = (134, 134, 139);
/// Light gray, low-density blocks.
pub const FOG: Rgb = (209, 209, 214);
/// Flat neutral fill for placeholder render modes.
pub const NEUTRAL: Rgb = (229, 229, 234);
/// Accent blue for vitality flow pulses and positive spillover.
pub const ACCENT: Rgb = (0, 113, 227);
/// Warning red for core heat and negative spillover.
pub const EMBER: Rgb = (215, 78, 70);
/// Periphery gray for the stress-test drain.
pub const DRAIN: Rgb = (142, 142, 147);
/// Green for the sustainable policy zone.
pub const VERDANT: Rgb = (52, 199, 89);

/// Format RGB as an opaque CSS color string.
pub fn rgb_css((r, g, b): Rgb) -> String {
    format!("rgb({r},{g},{b})")
}

/// Format RGBA as a CSS color string.
pub fn rgba_css((r, g, b): Rgb, a: f64) -> String {
    format!("rgba({r},{g},{b},{a})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_formatting() {
        assert_eq!(rgb_css(INK), "rgb(29,29,31)");
        assert_eq!(rgba_css(EMBER, 0.5), "rgba(215,78,70,0.5)");
    }
}
