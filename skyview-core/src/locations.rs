use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Menu entry that lets the user type a location not in the list.
pub const OTHER_LOCATION: &str = "Other";

/// Parse a newline-delimited location list and append [`OTHER_LOCATION`].
pub fn parse_locations(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .chain(std::iter::once(OTHER_LOCATION.to_string()))
        .collect()
}

pub fn load_locations(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read locations file: {}", path.display()))?;
    Ok(parse_locations(&contents))
}
