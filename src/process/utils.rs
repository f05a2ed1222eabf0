/// Marker that, anywhere in a row, tells the loader to ignore that row.
pub const SKIP_MARKER: &str = "#SKIPROW";

/// Trim whitespace, then trailing periods, then trailing commas.
/// Returns `None` when nothing is left.
pub fn clean_cell(raw: &str) -> Option<String> {
    let cleaned = raw.trim().trim_end_matches('.').trim_end_matches(',');
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// All cells concatenated with whitespace removed.
pub fn squashed_row_text<'a, I>(cells: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    cells
        .into_iter()
        .flat_map(str::chars)
        .filter(|c| !c.is_whitespace())
        .collect()
}
