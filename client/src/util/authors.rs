//! Author-list splitting with name highlighting.

#[cfg(test)]
#[path = "authors_test.rs"]
mod authors_test;

/// One author of a comma-separated author list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthorEntry<'a> {
    /// Author name as printed, including equal-contribution markers.
    pub name: &'a str,
    pub highlighted: bool,
    /// Whether `", "` follows this entry when rendered.
    pub separated: bool,
}

/// Split `authors` on commas and mark every entry that contains `highlight`.
///
/// Blank fragments (from trailing or doubled commas) are dropped.
pub fn split_authors<'a>(authors: &'a str, highlight: &str) -> Vec<AuthorEntry<'a>> {
    let names: Vec<&str> = authors.split(',').map(str::trim).filter(|name| !name.is_empty()).collect();
    let last = names.len().saturating_sub(1);
    names
        .into_iter()
        .enumerate()
        .map(|(index, name)| AuthorEntry {
            name,
            highlighted: !highlight.is_empty() && name.contains(highlight),
            separated: index < last,
        })
        .collect()
}
