use plotters::style::RGBAColor;

/// Parses `rgb(r,g,b)` / `rgba(r,g,b,a)` colour strings as used in the
/// chart style. Alpha may be written without a leading zero (`.125`).
pub fn parse_css_color(css: &str) -> Option<RGBAColor> {
    let css = css.trim();
    let (body, has_alpha) = if let Some(rest) = css.strip_prefix("rgba(") {
        (rest, true)
    } else if let Some(rest) = css.strip_prefix("rgb(") {
        (rest, false)
    } else {
        return None;
    };
    let parts: Vec<&str> = body.strip_suffix(')')?.split(',').map(str::trim).collect();
    if parts.len() != if has_alpha { 4 } else { 3 } {
        return None;
    }

    let r = parts[0].parse::<u8>().ok()?;
    let g = parts[1].parse::<u8>().ok()?;
    let b = parts[2].parse::<u8>().ok()?;
    let a = if has_alpha {
        parts[3].parse::<f64>().ok()?.clamp(0.0, 1.0)
    } else {
        1.0
    };
    Some(RGBAColor(r, g, b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_style_colours() {
        assert_eq!(parse_css_color("rgba(2,117,216,0.2)"), Some(RGBAColor(2, 117, 216, 0.2)));
        assert_eq!(parse_css_color("rgba(0, 0, 0, .125)"), Some(RGBAColor(0, 0, 0, 0.125)));
        assert_eq!(parse_css_color("rgb(255, 255, 255)"), Some(RGBAColor(255, 255, 255, 1.0)));
    }

    #[test]
    fn rejects_other_notations() {
        assert_eq!(parse_css_color("#0275d8"), None);
        assert_eq!(parse_css_color("rgba(2,117,216)"), None);
        assert_eq!(parse_css_color("rgb(300,0,0)"), None);
    }
}
