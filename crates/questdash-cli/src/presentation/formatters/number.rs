/// Render a finite number as a string, else "-".
///
/// Integral values drop the fractional part ("3", not "3.0") to match
/// how the generator writes iteration counters.
pub fn number_or_dash(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            if v.fract() == 0.0 {
                format!("{}", v as i64)
            } else {
                format!("{}", v)
            }
        }
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_or_dash_zero() {
        assert_eq!(number_or_dash(Some(0.0)), "0");
    }

    #[test]
    fn test_number_or_dash_integral() {
        assert_eq!(number_or_dash(Some(3.0)), "3");
        assert_eq!(number_or_dash(Some(12.0)), "12");
    }

    #[test]
    fn test_number_or_dash_fractional() {
        assert_eq!(number_or_dash(Some(2.5)), "2.5");
    }

    #[test]
    fn test_number_or_dash_non_finite() {
        assert_eq!(number_or_dash(Some(f64::NAN)), "-");
        assert_eq!(number_or_dash(Some(f64::INFINITY)), "-");
        assert_eq!(number_or_dash(None), "-");
    }
}
