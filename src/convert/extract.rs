//! Pulls the metadata Diarly embeds in note bodies: the map link of the
//! entry's place, the inline weather reading and `#hashtags`.

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

/// `[Place](diarly://map/<lat>,<lon>)`
pub(super) static MAP_LINK_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(diarly://map/([0-9.-]+),([0-9.-]+)\)").unwrap());

/// `22 ˚C Partly Cloudy, [Place]` (the degree sign is U+02DA)
static WEATHER_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(\d+)\s*˚C\s+([^,]+),\s*\[([^\]]+)\]").unwrap());

static HASHTAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#(\w+)").unwrap());

/// Place referenced by a Diarly map link. Coordinates are kept as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
	pub name:      String,
	pub latitude:  String,
	pub longitude: String,
}

impl Location {
	/// `<lat>,<lon>` as written to the frontmatter.
	pub fn coordinates(&self) -> String { format!("{},{}", self.latitude, self.longitude) }
}

/// Weather reading as Diarly writes it next to the place link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weather {
	pub temperature: String,
	pub condition:   String,
}

/// Everything extracted from one note body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryMetadata {
	pub location: Option<Location>,
	pub weather:  Option<Weather>,
	/// Unique hashtags without the leading `#`, in first-seen order
	pub hashtags: Vec<String>,
}

/// Runs all extractors over a note body. None of them fail: a missing
/// pattern simply leaves the field empty.
pub fn extract_metadata(body: &str) -> EntryMetadata {
	EntryMetadata {
		location: extract_location(body),
		weather:  extract_weather(body),
		hashtags: extract_hashtags(body),
	}
}

/// First map link in the body.
pub fn extract_location(body: &str) -> Option<Location> {
	let caps = MAP_LINK_RE.captures(body)?;
	Some(Location {
		name:      caps[1].to_string(),
		latitude:  caps[2].to_string(),
		longitude: caps[3].to_string(),
	})
}

/// First weather reading in the body.
pub fn extract_weather(body: &str) -> Option<Weather> {
	let caps = WEATHER_RE.captures(body)?;
	let condition = caps[2].trim();
	if condition.is_empty() {
		return None;
	}
	Some(Weather { temperature: caps[1].to_string(), condition: condition.to_string() })
}

/// All distinct hashtags of the body.
pub fn extract_hashtags(body: &str) -> Vec<String> {
	let mut seen = HashSet::new();
	HASHTAG_RE
		.captures_iter(body)
		.map(|caps| caps[1].to_string())
		.filter(|tag| seen.insert(tag.clone()))
		.collect()
}
