//! Word placement for the influence cloud.
//!
//! Words walk an Archimedean spiral out from the canvas center until their
//! box stops intersecting every previously placed box. Placement takes the
//! text-measuring function as an argument, so it runs without a canvas.

use super::transform::WordWeight;
use crate::components::scale::font_size;

/// Axis-aligned box around a word's center.
#[derive(Clone, Copy, Debug, PartialEq)]
struct WordBox {
	x: f64,
	y: f64,
	width: f64,
	height: f64,
}

impl WordBox {
	fn intersects(&self, other: &WordBox) -> bool {
		(self.x - other.x).abs() * 2.0 < self.width + other.width
			&& (self.y - other.y).abs() * 2.0 < self.height + other.height
	}

	fn inside(&self, width: f64, height: f64) -> bool {
		self.x - self.width / 2.0 >= -width / 2.0
			&& self.x + self.width / 2.0 <= width / 2.0
			&& self.y - self.height / 2.0 >= -height / 2.0
			&& self.y + self.height / 2.0 <= height / 2.0
	}
}

/// A word with its final center position and font size.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedWord {
	pub text: String,
	pub size: f64,
	pub x: f64,
	pub y: f64,
}

const SPIRAL_STEP: f64 = 0.3;
const SPIRAL_GROWTH: f64 = 1.1;
const MAX_PROBES: usize = 2000;

/// Place words heaviest-first around the center. `measure` returns the pixel
/// width of a text at a font size. Words that never fit inside the canvas
/// are dropped.
pub fn layout_words<F>(words: &[WordWeight], width: f64, height: f64, measure: F) -> Vec<PlacedWord>
where
	F: Fn(&str, f64) -> f64,
{
	let mut order: Vec<&WordWeight> = words.iter().collect();
	order.sort_by(|a, b| {
		b.value
			.total_cmp(&a.value)
			.then_with(|| a.text.cmp(&b.text))
	});

	let mut placed: Vec<PlacedWord> = Vec::new();
	let mut boxes: Vec<WordBox> = Vec::new();

	for word in order {
		let size = font_size(word.value);
		if size <= 0.0 {
			continue;
		}
		let (box_width, box_height) = (measure(&word.text, size), size);

		for step in 0..MAX_PROBES {
			let theta = step as f64 * SPIRAL_STEP;
			let radius = SPIRAL_GROWTH * theta;
			let candidate = WordBox {
				x: radius * theta.cos(),
				y: radius * theta.sin(),
				width: box_width,
				height: box_height,
			};
			if !candidate.inside(width, height) {
				continue;
			}
			if boxes.iter().all(|b| !candidate.intersects(b)) {
				placed.push(PlacedWord {
					text: word.text.clone(),
					size,
					x: candidate.x,
					y: candidate.y,
				});
				boxes.push(candidate);
				break;
			}
		}
	}
	placed
}

#[cfg(test)]
mod tests {
	use super::*;

	fn word(text: &str, value: f64) -> WordWeight {
		WordWeight { text: text.into(), value }
	}

	fn monospace(text: &str, size: f64) -> f64 {
		text.chars().count() as f64 * size * 0.6
	}

	fn overlap(a: &PlacedWord, b: &PlacedWord) -> bool {
		let (wa, wb) = (monospace(&a.text, a.size), monospace(&b.text, b.size));
		(a.x - b.x).abs() * 2.0 < wa + wb && (a.y - b.y).abs() * 2.0 < a.size + b.size
	}

	#[test]
	fn heaviest_word_lands_in_the_center() {
		let words = [word("a@x.com", 10.0), word("b@x.com", 40.0)];
		let placed = layout_words(&words, 960.0, 550.0, monospace);
		assert_eq!(placed[0].text, "b@x.com");
		assert_eq!((placed[0].x, placed[0].y), (0.0, 0.0));
	}

	#[test]
	fn placed_words_never_overlap() {
		let words: Vec<WordWeight> = (0..30)
			.map(|i| word(&format!("person{}@mail.com", i), 10.0 + i as f64))
			.collect();
		let placed = layout_words(&words, 960.0, 550.0, monospace);
		assert!(placed.len() > 1);
		for (i, a) in placed.iter().enumerate() {
			for b in &placed[i + 1..] {
				assert!(!overlap(a, b), "{} overlaps {}", a.text, b.text);
			}
		}
	}

	#[test]
	fn placed_words_stay_inside_the_canvas() {
		let words: Vec<WordWeight> = (0..30)
			.map(|i| word(&format!("person{}@mail.com", i), 10.0 + i as f64))
			.collect();
		for w in layout_words(&words, 400.0, 300.0, monospace) {
			let width = monospace(&w.text, w.size);
			assert!(w.x - width / 2.0 >= -200.0 && w.x + width / 2.0 <= 200.0);
			assert!(w.y - w.size / 2.0 >= -150.0 && w.y + w.size / 2.0 <= 150.0);
		}
	}

	#[test]
	fn an_oversized_word_is_dropped() {
		let words = [word("gigantic@mail.com", 500.0), word("tiny@mail.com", 12.0)];
		let placed = layout_words(&words, 400.0, 300.0, monospace);
		assert_eq!(placed.len(), 1);
		assert_eq!(placed[0].text, "tiny@mail.com");
	}

	#[test]
	fn layout_is_deterministic() {
		let words: Vec<WordWeight> = (0..12)
			.map(|i| word(&format!("person{}@mail.com", i), 12.0 + i as f64))
			.collect();
		assert_eq!(
			layout_words(&words, 960.0, 550.0, monospace),
			layout_words(&words, 960.0, 550.0, monospace)
		);
	}
}
