//! Text helpers for inspecting generated feature documents.

/// Strips one layer of matching single or double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    if let Some(stripped) = trimmed.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        return stripped;
    }
    if let Some(stripped) = trimmed
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
    {
        return stripped;
    }
    trimmed
}

/// Numbers of every `Scenario: <n>` header, in document order.
///
/// Headers whose number does not parse are skipped.
#[must_use]
pub fn scenario_numbers(document: &str) -> Vec<u64> {
    document
        .lines()
        .filter_map(|line| line.strip_prefix("Scenario: "))
        .filter_map(|number| number.trim().parse().ok())
        .collect()
}

/// Cells of the table declared by `the following "<fixture>" exist:`.
///
/// The header row is included. Returns an empty list when the fixture is not
/// declared.
#[must_use]
pub fn fixture_rows(document: &str, fixture: &str) -> Vec<Vec<String>> {
    let marker = format!("the following \"{fixture}\" exist:");
    let mut lines = document.lines().skip_while(|line| !line.ends_with(&marker));
    if lines.next().is_none() {
        return Vec::new();
    }
    lines
        .map(str::trim)
        .take_while(|line| line.starts_with('|'))
        .map(|line| {
            line.trim_matches('|')
                .split('|')
                .map(str::to_owned)
                .collect()
        })
        .collect()
}

/// Number of lines that equal `line` once surrounding whitespace is removed.
#[must_use]
pub fn count_lines(document: &str, line: &str) -> usize {
    document.lines().filter(|candidate| candidate.trim() == line).count()
}
