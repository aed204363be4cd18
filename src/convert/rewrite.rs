//! In-place substitutions applied to a note body.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::{Captures, Regex};

use super::{extract::MAP_LINK_RE, weather::weather_symbol, Weather};

/// `![](data/<file>)`
static ATTACHMENT_EMBED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[\]\(data/([^)]+)\)").unwrap());

/// Rewrites the body for Obsidian: geo links, flat attachment embeds and,
/// when a reading was extracted, the weather emoji.
pub fn rewrite_body(body: &str, weather: Option<&Weather>) -> Result<String> {
	let body = rewrite_map_links(body);
	let body = rewrite_attachment_embeds(&body);
	match weather {
		Some(weather) => replace_weather(&body, weather),
		None => Ok(body),
	}
}

/// `[Cafe](diarly://map/52.5,13.4)` -> `[Cafe](geo:52.5,13.4)`
pub fn rewrite_map_links(body: &str) -> String {
	MAP_LINK_RE.replace_all(body, "[${1}](geo:${2},${3})").into_owned()
}

/// `![](data/photo.jpg)` -> `![[photo.jpg]]`
pub fn rewrite_attachment_embeds(body: &str) -> String {
	ATTACHMENT_EMBED_RE.replace_all(body, "![[${1}]]").into_owned()
}

/// Replaces `<temp> ˚C <condition>,` in front of a place link with
/// `<temp>°C <emoji>`. The pattern is built from the extracted values so only
/// the reading that was put into the frontmatter gets rewritten.
pub fn replace_weather(body: &str, weather: &Weather) -> Result<String> {
	let pattern = format!(
		r"(^|\D){}\s*˚C\s+{}\s*,(\s*\[[^\]]+\]\([^)]+\))",
		regex::escape(&weather.temperature),
		regex::escape(&weather.condition),
	);
	let reading = Regex::new(&pattern).context("Failed to build weather pattern")?;
	let symbol = weather_symbol(&weather.condition);

	Ok(reading
		.replace_all(body, |caps: &Captures| format!("{}{}°C {}{}", &caps[1], weather.temperature, symbol, &caps[2]))
		.into_owned())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn weather(temperature: &str, condition: &str) -> Weather {
		Weather { temperature: temperature.to_string(), condition: condition.to_string() }
	}

	#[test]
	fn map_links_become_geo_uris() {
		let body = "Met at [Cafe](diarly://map/52.5,13.4) and [Home](diarly://map/-1.5,2)";
		assert_eq!(rewrite_map_links(body), "Met at [Cafe](geo:52.5,13.4) and [Home](geo:-1.5,2)");
	}

	#[test]
	fn other_links_are_untouched() {
		let body = "[Docs](https://example.com) and ![](images/a.png)";
		assert_eq!(rewrite_body(body, None).unwrap(), body);
	}

	#[test]
	fn attachment_embeds_drop_data_prefix() {
		let body = "![](data/photo.jpg)\ntext\n![](data/IMG 0001.heic)";
		assert_eq!(rewrite_attachment_embeds(body), "![[photo.jpg]]\ntext\n![[IMG 0001.heic]]");
	}

	#[test]
	fn weather_reading_gets_emoji() {
		let body = "22 ˚C Partly Cloudy, [Berlin](diarly://map/52.5,13.4)";
		let rewritten = rewrite_body(body, Some(&weather("22", "Partly Cloudy"))).unwrap();
		assert_eq!(rewritten, "22°C ⛅ [Berlin](geo:52.5,13.4)");
	}

	#[test]
	fn weather_keeps_surrounding_text() {
		let body = "Morning\n\n18˚C  Rain,  [Hamburg](diarly://map/53.5,10.0)\nafter";
		let rewritten = rewrite_body(body, Some(&weather("18", "Rain"))).unwrap();
		assert_eq!(rewritten, "Morning\n\n18°C 🌧️  [Hamburg](geo:53.5,10.0)\nafter");
	}

	#[test]
	fn weather_does_not_match_longer_temperature() {
		let body = "122 ˚C Sunny, [Oven](x)\n22 ˚C Sunny, [Berlin](y)";
		let rewritten = replace_weather(body, &weather("22", "Sunny")).unwrap();
		assert_eq!(rewritten, "122 ˚C Sunny, [Oven](x)\n22°C ☀️ [Berlin](y)");
	}

	#[test]
	fn weather_condition_with_regex_characters() {
		let body = "3 ˚C Snow (light), [Oslo](z)";
		let rewritten = replace_weather(body, &weather("3", "Snow (light)")).unwrap();
		assert_eq!(rewritten, "3°C ❄️ [Oslo](z)");
	}

	#[test]
	fn weather_without_link_target_is_left_alone() {
		let body = "22 ˚C Sunny, [Berlin]";
		assert_eq!(replace_weather(body, &weather("22", "Sunny")).unwrap(), body);
	}
}
