//! Weather condition -> emoji mapping.

/// Symbol used when no keyword matches.
pub const FALLBACK_SYMBOL: &str = "\u{1f321}\u{fe0f}"; // 🌡️

/// Condition keywords in match priority. A keyword that is contained in
/// another one ("cloudy" in "partly cloudy") must come after it; otherwise
/// earlier entries win for conditions naming two kinds of weather.
const CONDITION_SYMBOLS: &[(&str, &str)] = &[
	("partly sunny", "\u{1f324}\u{fe0f}"),  // 🌤️
	("mostly sunny", "\u{1f324}\u{fe0f}"),  // 🌤️
	("sunny", "\u{2600}\u{fe0f}"),          // ☀️
	("clear", "\u{2600}\u{fe0f}"),          // ☀️
	("mostly cloudy", "\u{2601}\u{fe0f}"),  // ☁️
	("partly cloudy", "\u{26c5}"),          // ⛅
	("cloudy", "\u{2601}\u{fe0f}"),         // ☁️
	("rainy", "\u{1f327}\u{fe0f}"),         // 🌧️
	("rain", "\u{1f327}\u{fe0f}"),          // 🌧️
	("showers", "\u{1f326}\u{fe0f}"),       // 🌦️
	("shower", "\u{1f326}\u{fe0f}"),        // 🌦️
	("thunderstorm", "\u{26c8}\u{fe0f}"),   // ⛈️
	("storm", "\u{26c8}\u{fe0f}"),          // ⛈️
	("foggy", "\u{1f32b}\u{fe0f}"),         // 🌫️
	("fog", "\u{1f32b}\u{fe0f}"),           // 🌫️
	("snowy", "\u{2744}\u{fe0f}"),          // ❄️
	("snow", "\u{2744}\u{fe0f}"),           // ❄️
	("windy", "\u{1f4a8}"),                 // 💨
	("drizzle", "\u{1f326}\u{fe0f}"),       // 🌦️
	("mist", "\u{1f32b}\u{fe0f}"),          // 🌫️
	("haze", "\u{1f32b}\u{fe0f}"),          // 🌫️
	("overcast", "\u{2601}\u{fe0f}"),       // ☁️
];

/// Picks the symbol for a free-text condition such as "Partly Cloudy".
/// Matching is a case-insensitive substring test; the first keyword in
/// priority order wins.
pub fn weather_symbol(condition: &str) -> &'static str {
	let condition = condition.to_lowercase();
	CONDITION_SYMBOLS
		.iter()
		.find(|(keyword, _)| condition.contains(keyword))
		.map_or(FALLBACK_SYMBOL, |(_, symbol)| symbol)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn specific_phrases_win_over_contained_keywords() {
		assert_eq!(weather_symbol("Partly Cloudy"), "⛅");
		assert_eq!(weather_symbol("Mostly Sunny"), "🌤️");
		assert_eq!(weather_symbol("Thunderstorm"), "⛈️");
		assert_eq!(weather_symbol("Light Showers"), "🌦️");
	}

	#[test]
	fn case_insensitive_substring() {
		assert_eq!(weather_symbol("CLOUDY"), "☁️");
		assert_eq!(weather_symbol("heavy rain"), "🌧️");
		assert_eq!(weather_symbol("Clear Sky"), "☀️");
		assert_eq!(weather_symbol("Windy"), "💨");
		assert_eq!(weather_symbol("Sandstorm"), "⛈️");
	}

	#[test]
	fn first_keyword_wins_for_mixed_conditions() {
		assert_eq!(weather_symbol("Cloudy with Rain"), "☁️");
		assert_eq!(weather_symbol("Sunny and Windy"), "☀️");
		assert_eq!(weather_symbol("Clear and Windy"), "☀️");
		assert_eq!(weather_symbol("Foggy with Drizzle"), "🌫️");
		assert_eq!(weather_symbol("Cloudy and Snow"), "☁️");
		assert_eq!(weather_symbol("Thunderstorm with Rain"), "🌧️");
	}

	#[test]
	fn unknown_condition_uses_fallback() {
		assert_eq!(weather_symbol("Hail"), FALLBACK_SYMBOL);
		assert_eq!(weather_symbol(""), FALLBACK_SYMBOL);
	}

	#[test]
	fn keywords_are_not_shadowed_by_earlier_entries() {
		for (i, (later, _)) in CONDITION_SYMBOLS.iter().enumerate() {
			for (earlier, _) in &CONDITION_SYMBOLS[..i] {
				assert!(!later.contains(earlier), "'{earlier}' shadows '{later}'");
			}
		}
	}
}
