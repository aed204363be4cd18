//! Conversion of a single Diarly entry into an Obsidian daily note.
//!
//! Everything in here is pure: text and path context in, frontmatter and
//! rewritten body out. File system access lives in [`crate::migrate`].

mod entry;
mod extract;
mod frontmatter;
mod rewrite;
mod weather;

use anyhow::Result;
pub use entry::{EntryPath, journal_tag, parse_entry_path};
pub use extract::{Location, Weather, extract_metadata};
pub use frontmatter::{Frontmatter, build_tags};
pub use rewrite::rewrite_body;

use crate::config::Config;

/// A converted entry, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedEntry {
	pub frontmatter: Frontmatter,
	pub body:        String,
}

impl ConvertedEntry {
	/// Frontmatter, a blank line, then the body.
	pub fn to_markdown(&self) -> String { format!("{}\n{}", self.frontmatter.render(), self.body) }
}

/// Converts one note body. The metadata is read from the original body, the
/// rewrites are applied afterwards.
pub fn convert_entry(body: &str, entry: &EntryPath, config: &Config) -> Result<ConvertedEntry> {
	let metadata = extract_metadata(body);
	let journal_tag = journal_tag(&entry.journal, &config.journals);
	if let Some(location) = &metadata.location {
		tracing::debug!(date = %entry.date(), place = %location.name, "found location");
	}

	let frontmatter = Frontmatter {
		date:     entry.date(),
		location: metadata.location.as_ref().map(Location::coordinates),
		tags:     build_tags(&config.output.base_tag, &journal_tag, &metadata.hashtags),
		weather:  metadata.weather.clone(),
	};
	let body = rewrite_body(body, metadata.weather.as_ref())?;

	Ok(ConvertedEntry { frontmatter, body })
}

#[cfg(test)]
mod tests {
	use super::*;

	fn entry(journal: &str) -> EntryPath {
		EntryPath {
			journal: journal.to_string(),
			year:    "2023".to_string(),
			month:   "03".to_string(),
			day:     "15".to_string(),
		}
	}

	#[test]
	fn plain_note() {
		let converted = convert_entry("Just text.\n", &entry("Personal"), &Config::default()).unwrap();
		assert_eq!(converted.to_markdown(), "---\ndate: 2023-03-15\ntags: [daily-note, personal]\n---\n\nJust text.\n");
	}

	#[test]
	fn full_entry() {
		let body = "# Trip\n\n\
		            22 ˚C Partly Cloudy, [Berlin](diarly://map/52.5,13.4)\n\n\
		            Coffee at [Cafe](diarly://map/52.51,13.41) #travel #food\n\
		            ![](data/photo.jpg)\n\
		            More #travel and #food.\n";
		let converted = convert_entry(body, &entry("Side Projects"), &Config::default()).unwrap();

		assert_eq!(
			converted.to_markdown(),
			"---\n\
			 date: 2023-03-15\n\
			 location: 52.5,13.4\n\
			 weather:\n  temperature: 22\n  condition: Partly Cloudy\n\
			 tags: [daily-note, side-projects, travel, food]\n\
			 ---\n\
			 \n\
			 # Trip\n\n\
			 22°C ⛅ [Berlin](geo:52.5,13.4)\n\n\
			 Coffee at [Cafe](geo:52.51,13.41) #travel #food\n\
			 ![[photo.jpg]]\n\
			 More #travel and #food.\n"
		);
	}

	#[test]
	fn only_first_weather_reading_is_used() {
		let body = "5 ˚C Rain, [A](diarly://map/1,2)\n9 ˚C Snow, [B](diarly://map/3,4)\n";
		let converted = convert_entry(body, &entry("Personal"), &Config::default()).unwrap();

		let weather = converted.frontmatter.weather.as_ref().unwrap();
		assert_eq!(weather.temperature, "5");
		assert_eq!(weather.condition, "Rain");
		assert!(converted.frontmatter.render().contains("  temperature: 5\n  condition: Rain\n"));
		assert_eq!(converted.body, "5°C 🌧️ [A](geo:1,2)\n9 ˚C Snow, [B](geo:3,4)\n");
	}

	#[test]
	fn journal_mapping_is_injectable() {
		let mut config = Config::default();
		config.journals.tags.insert("Side Projects".to_string(), "side".to_string());
		config.output.base_tag = "journal".to_string();

		let converted = convert_entry("", &entry("Side Projects"), &config).unwrap();
		assert_eq!(converted.frontmatter.tags, vec!["journal", "side"]);
	}

	#[test]
	fn conversion_is_deterministic() {
		let body = "#b #a #c #a 5 ˚C Fog, [X](diarly://map/1,2)";
		let first = convert_entry(body, &entry("Personal"), &Config::default()).unwrap();
		let second = convert_entry(body, &entry("Personal"), &Config::default()).unwrap();
		assert_eq!(first.to_markdown(), second.to_markdown());
		assert_eq!(first.frontmatter.tags, vec!["daily-note", "personal", "b", "a", "c"]);
	}
}
