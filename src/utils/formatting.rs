//! String and date formatting utilities.

/// Date format constants for consistent formatting across the application.
pub mod date_formats {
	/// Daily note date: "2024-01-15"
	pub const DATE_ONLY: &str = "%Y-%m-%d";
}

/// Turns a free-form name into a tag-safe slug.
///
/// Lowercases, drops everything that is not a word character, whitespace or
/// hyphen, turns whitespace runs into a hyphen, collapses repeated hyphens
/// and trims hyphens from both ends.
///
/// # Examples
/// ```
/// assert_eq!(slugify("Side Projects"), "side-projects");
/// assert_eq!(slugify("Travel -- 2023!"), "travel-2023");
/// ```
pub fn slugify(name: &str) -> String {
	let mut slug = String::with_capacity(name.len());
	for c in name.to_lowercase().chars() {
		let c = if c.is_whitespace() { '-' } else { c };
		if !(c.is_alphanumeric() || c == '_' || c == '-') {
			continue;
		}
		if c == '-' && slug.ends_with('-') {
			continue;
		}
		slug.push(c);
	}
	slug.trim_matches('-').to_string()
}
