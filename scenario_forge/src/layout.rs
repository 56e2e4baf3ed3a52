//! Indentation and line-break primitives shared by every renderer.
//!
//! Documents indent with four spaces per level; the downstream runner is
//! whitespace-sensitive, so all renderers build their padding here.

/// One level of indentation.
pub const INDENT_UNIT: &str = "    ";

/// Returns `count` newline characters.
///
/// ```
/// use scenario_forge::layout::newlines;
/// assert_eq!(newlines(2), "\n\n");
/// assert_eq!(newlines(0), "");
/// ```
#[must_use]
pub fn newlines(count: usize) -> String {
    "\n".repeat(count)
}

/// Returns `level` indentation units.
#[must_use]
pub fn indent(level: usize) -> String {
    INDENT_UNIT.repeat(level)
}

/// Renders `cells` as a fixture table row, `|a|b|c|`.
#[must_use]
pub fn table_row<S: AsRef<str>>(cells: &[S]) -> String {
    let joined: Vec<&str> = cells.iter().map(AsRef::as_ref).collect();
    format!("|{}|", joined.join("|"))
}

#[cfg(test)]
mod tests {
    use super::{indent, newlines, table_row};
    use rstest::rstest;

    #[rstest]
    #[case(0, "")]
    #[case(1, "    ")]
    #[case(3, "            ")]
    fn indent_uses_four_spaces(#[case] level: usize, #[case] expected: &str) {
        assert_eq!(indent(level), expected);
    }

    #[test]
    fn newlines_repeats() {
        assert_eq!(newlines(1), "\n");
        assert_eq!(newlines(3), "\n\n\n");
    }

    #[test]
    fn table_row_wraps_every_cell() {
        assert_eq!(table_row(&["user", "group"]), "|user|group|");
        assert_eq!(table_row::<&str>(&[]), "||");
    }
}
