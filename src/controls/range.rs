use web_sys::HtmlInputElement;

/// Static description of one range slider, read once at bind time.
///
/// Range inputs only hold integers, so `multiplier` converts between the
/// slider's raw position and the fractional value shown to the user:
/// `display = raw / multiplier`, `raw = display * multiplier`.
#[derive(Clone, Copy, Debug)]
pub struct RangeSpec {
    pub min: f64,
    pub max: f64,
    pub multiplier: f64,
}

impl RangeSpec {
    pub fn from_input(input: &HtmlInputElement) -> Self {
        Self {
            min: parse_attr(input, "min"),
            max: parse_attr(input, "max"),
            multiplier: parse_attr_or(input, "data-multiplier", 1.0),
        }
    }

    pub fn display_value(&self, raw: f64) -> f64 {
        raw / self.multiplier
    }

    /// Convert a display value back to a raw slider value, clamped to
    /// `[min, max]`. A NaN bound disables clamping on that side, so a
    /// slider without numeric min/max attributes passes values through
    /// unchanged (the browser still enforces its own range).
    pub fn raw_value(&self, display: f64) -> f64 {
        let mut raw = display * self.multiplier;
        if !self.min.is_nan() && raw < self.min {
            raw = self.min;
        }
        if !self.max.is_nan() && raw > self.max {
            raw = self.max;
        }
        raw
    }
}

/// Numeric attribute or NaN when the attribute is absent or unparsable.
fn parse_attr(input: &HtmlInputElement, name: &str) -> f64 {
    input
        .get_attribute(name)
        .and_then(|v| v.trim().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Numeric attribute with a fallback default.
fn parse_attr_or(input: &HtmlInputElement, name: &str, default: f64) -> f64 {
    match input.get_attribute(name) {
        None => default,
        Some(v) => v.trim().parse::<f64>().unwrap_or_else(|_| {
            log::debug!("ignoring non-numeric {name}={v:?}, using {default}");
            default
        }),
    }
}

/// Parse typed text-field input, keeping the last valid display value
/// when the text is not a finite number. Rust's f64 parser accepts
/// "nan" and "inf", which would otherwise slip past the fallback and
/// reset the slider instead of leaving it alone.
pub fn parse_field_value(text: &str, last_valid: f64) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(last_valid)
}

/// Format a display value the way the browser would: no trailing ".0".
pub fn format_display(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::RangeSpec;

    fn spec(min: f64, max: f64, multiplier: f64) -> RangeSpec {
        RangeSpec { min, max, multiplier }
    }

    #[test]
    fn test_unit_multiplier_round_trip() {
        let s = spec(0.0, 100.0, 1.0);
        assert_eq!(s.display_value(50.0), 50.0);
        assert_eq!(s.raw_value(75.0), 75.0);
    }

    #[test]
    fn test_multiplier_scales_display() {
        let s = spec(0.0, 100.0, 10.0);
        assert_eq!(s.display_value(35.0), 3.5);
        assert_eq!(s.raw_value(7.2), 72.0);
    }

    #[test]
    fn test_clamps_to_bounds() {
        let s = spec(10.0, 90.0, 1.0);
        assert_eq!(s.raw_value(-5.0), 10.0);
        assert_eq!(s.raw_value(120.0), 90.0);
        assert_eq!(s.raw_value(42.0), 42.0);
    }

    #[test]
    fn test_clamp_applies_after_multiplier() {
        let s = spec(0.0, 100.0, 10.0);
        // 20 * 10 = 200 raw, clamped to the raw-scale max.
        assert_eq!(s.raw_value(20.0), 100.0);
    }

    #[test]
    fn test_nan_bounds_pass_through() {
        let s = spec(f64::NAN, f64::NAN, 1.0);
        assert_eq!(s.raw_value(-1000.0), -1000.0);
        assert_eq!(s.raw_value(1000.0), 1000.0);

        let low_only = spec(0.0, f64::NAN, 1.0);
        assert_eq!(low_only.raw_value(-5.0), 0.0);
        assert_eq!(low_only.raw_value(1e9), 1e9);
    }

    #[test]
    fn test_field_parse_accepts_finite_numbers() {
        assert_eq!(super::parse_field_value("7.2", 1.0), 7.2);
        assert_eq!(super::parse_field_value(" 50 ", 1.0), 50.0);
        assert_eq!(super::parse_field_value("-3", 1.0), -3.0);
    }

    #[test]
    fn test_field_parse_keeps_last_value_for_bad_input() {
        assert_eq!(super::parse_field_value("abc", 3.5), 3.5);
        assert_eq!(super::parse_field_value("", 3.5), 3.5);
        // f64::from_str accepts these, but writing them to the slider
        // would reset it rather than leave it in place.
        assert_eq!(super::parse_field_value("nan", 3.5), 3.5);
        assert_eq!(super::parse_field_value("NaN", 3.5), 3.5);
        assert_eq!(super::parse_field_value("inf", 3.5), 3.5);
        assert_eq!(super::parse_field_value("-inf", 3.5), 3.5);
    }

    #[test]
    fn test_format_display_drops_trailing_zero() {
        assert_eq!(super::format_display(50.0), "50");
        assert_eq!(super::format_display(3.5), "3.5");
    }
}
