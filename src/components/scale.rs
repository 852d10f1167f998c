//! Visual scales shared by the views.

/// Categorical palette for node groups and word colors.
pub const COLORS: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

/// Color for a group tag, wrapping around the palette.
pub fn group_color(group: u32) -> &'static str {
	COLORS[group as usize % COLORS.len()]
}

/// Stroke width for an accumulated link weight.
pub fn link_stroke_width(weight: f64) -> f64 {
	weight.max(0.0).sqrt()
}

/// Font size for an influence weight. The cloud sizes words by raw weight.
pub fn font_size(value: f64) -> f64 {
	value
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn group_color_wraps() {
		assert_eq!(group_color(0), group_color(COLORS.len() as u32));
		assert_eq!(group_color(3), COLORS[3]);
	}

	#[test]
	fn stroke_width_is_square_root_scaled() {
		assert_eq!(link_stroke_width(25.0), 5.0);
		assert_eq!(link_stroke_width(0.0), 0.0);
		assert_eq!(link_stroke_width(-4.0), 0.0);
	}

	#[test]
	fn font_size_is_the_identity_mapper() {
		assert_eq!(font_size(12.0), 12.0);
	}
}
