use crate::{Error, Result};

/// Finds the shortest span of `source` that contains the entire `pattern`
/// as a subsequence, returned as `[start, end)` byte offsets.
///
/// The producer of `pattern` may drop incidental characters (typically inner
/// whitespace), so:
/// - missing characters *are* allowed
/// - extra characters *are not* allowed
/// - reorders *are not* allowed
///
/// An exact substring always wins, since it yields the shortest possible span.
/// Ties on span length go to the lowest start index.
pub fn match_range(source: &str, pattern: &str) -> Result<(usize, usize)> {
	let pat: Vec<char> = pattern.chars().collect();
	let Some(&first_char) = pat.first() else {
		// Empty pattern has no meaningful placement.
		return Err(Error::no_match(pattern));
	};

	let src: Vec<(usize, char)> = source.char_indices().collect();
	// (start_byte, end_byte, span_len_in_chars)
	let mut best: Option<(usize, usize, usize)> = None;

	for (ci, &(start, c)) in src.iter().enumerate() {
		if c != first_char {
			continue;
		}

		let mut si = ci;
		let mut pi = 0;

		while si < src.len() && pi < pat.len() {
			if src[si].1 == pat[pi] {
				pi += 1;
			}
			si += 1;
		}

		if pi == pat.len() {
			let end = if si < src.len() { src[si].0 } else { source.len() };
			// Span length is measured in chars, not bytes, so multibyte
			// content cannot tip a tie toward a later placement.
			let char_len = si - ci;
			if best.is_none_or(|(_, _, best_len)| char_len < best_len) {
				best = Some((start, end, char_len));
			}
		}
	}

	best.map(|(start, end, _)| (start, end))
		.ok_or_else(|| Error::no_match(pattern))
}

// region:    --- Tests


// endregion: --- Tests
