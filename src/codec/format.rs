/// Weight as written back into edit text and load files: integers without a fractional
/// part, `inf` for infinity. Always re-parses with `str::parse::<f64>`.
pub fn format_weight(weight: f64) -> String {
	if weight.is_infinite() {
		return if weight > 0.0 { "inf".into() } else { "-inf".into() };
	}
	if weight.fract() == 0.0 && weight.abs() < 1e15 {
		return format!("{}", weight as i64);
	}
	format!("{weight}")
}

/// Weight as shown to a reader: like [`format_weight`] but infinity renders as `∞`.
pub fn display_weight(weight: f64) -> String {
	if weight.is_infinite() {
		return if weight > 0.0 { "∞".into() } else { "-∞".into() };
	}
	format_weight(weight)
}
