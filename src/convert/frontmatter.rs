//! YAML frontmatter for converted daily notes.
//!
//! Hand-rolled rather than serialized: the key order and the inline
//! `tags: [a, b]` list are fixed.

use super::Weather;

/// Frontmatter of one daily note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter {
	/// `YYYY-MM-DD`
	pub date:     String,
	/// `<lat>,<lon>`
	pub location: Option<String>,
	pub weather:  Option<Weather>,
	pub tags:     Vec<String>,
}

impl Frontmatter {
	/// Renders the `---` delimited block, ending with a newline.
	pub fn render(&self) -> String {
		let mut lines = Vec::with_capacity(8);
		lines.push("---".to_string());
		lines.push(format!("date: {}", self.date));
		if let Some(location) = &self.location {
			lines.push(format!("location: {location}"));
		}
		if let Some(weather) = &self.weather {
			lines.push("weather:".to_string());
			lines.push(format!("  temperature: {}", weather.temperature));
			lines.push(format!("  condition: {}", weather.condition));
		}
		lines.push(format!("tags: [{}]", self.tags.join(", ")));
		lines.push("---".to_string());

		let mut block = lines.join("\n");
		block.push('\n');
		block
	}
}

/// Builds the tag list: the base tag, the journal tag unless empty, then
/// every hashtag. Hashtags are expected to be unique already.
pub fn build_tags(base_tag: &str, journal_tag: &str, hashtags: &[String]) -> Vec<String> {
	let mut tags = Vec::with_capacity(hashtags.len() + 2);
	tags.push(base_tag.to_string());
	if !journal_tag.is_empty() {
		tags.push(journal_tag.to_string());
	}
	tags.extend(hashtags.iter().cloned());
	tags
}
