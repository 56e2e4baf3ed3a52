//! Step-line builders.
//!
//! Every builder returns one or more complete lines, each terminated by a
//! newline. Keyword and indentation are always supplied by the caller; the
//! builders never infer them.

use std::fmt;

use crate::layout::{indent, newlines, table_row};

/// Keyword opening a step line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepPrefix {
    /// `Given`
    Given,
    /// `And`
    And,
    /// `Then`
    Then,
}

impl StepPrefix {
    /// Keyword text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::And => "And",
            Self::Then => "Then",
        }
    }
}

impl fmt::Display for StepPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn line(level: usize, prefix: StepPrefix, body: &str) -> String {
    format!("{}{prefix} {body}{}", indent(level), newlines(1))
}

const fn negation(negated: bool) -> &'static str {
    if negated { " not" } else { "" }
}

/// `<prefix> I log in as "<username>"`
#[must_use]
pub fn log_in_as(username: &str, prefix: StepPrefix, level: usize) -> String {
    line(level, prefix, &format!("I log in as \"{username}\""))
}

/// `<prefix> I follow "<link>"`
#[must_use]
pub fn follow(link: &str, prefix: StepPrefix, level: usize) -> String {
    line(level, prefix, &format!("I follow \"{link}\""))
}

/// `And I log out`, followed by a blank line closing the user's block.
#[must_use]
pub fn log_out(level: usize) -> String {
    format!("{}{} I log out{}", indent(level), StepPrefix::And, newlines(2))
}

/// A fixture declaration at level 1 followed by its rows at level 2.
///
/// ```
/// use scenario_forge::steps::the_following_exist;
/// use scenario_forge::StepPrefix;
///
/// let block = the_following_exist("groups", &[vec!["name", "course"]], StepPrefix::And);
/// assert_eq!(block, "    And the following \"groups\" exist:\n        |name|course|\n");
/// ```
#[must_use]
pub fn the_following_exist<S: AsRef<str>>(what: &str, rows: &[Vec<S>], prefix: StepPrefix) -> String {
    let mut block = line(1, prefix, &format!("the following \"{what}\" exist:"));
    for row in rows {
        block.push_str(&indent(2));
        block.push_str(&table_row(row));
        block.push_str(&newlines(1));
    }
    block
}

/// `<prefix> I press "<button>"`
#[must_use]
pub fn press(button: &str, prefix: StepPrefix, level: usize) -> String {
    line(level, prefix, &format!("I press \"{button}\""))
}

/// Presses the form's "Save changes" button.
#[must_use]
pub fn save_changes(prefix: StepPrefix, level: usize) -> String {
    press("Save changes", prefix, level)
}

/// `<prefix> I click on "<what>" "<what_type>" in the "<where>" "<where_type>"`
#[must_use]
pub fn click_on(
    what: &str,
    what_type: &str,
    within: &str,
    within_type: &str,
    prefix: StepPrefix,
    level: usize,
) -> String {
    line(
        level,
        prefix,
        &format!("I click on \"{what}\" \"{what_type}\" in the \"{within}\" \"{within_type}\""),
    )
}

/// `<prefix> I turn editing mode on`
#[must_use]
pub fn turn_editing_on(prefix: StepPrefix, level: usize) -> String {
    line(level, prefix, "I turn editing mode on")
}

/// `<prefix> I should[ not] see "<what>" in the "<where>" "<where_type>"`
#[must_use]
pub fn should_see_in(
    what: &str,
    within: &str,
    within_type: &str,
    negated: bool,
    prefix: StepPrefix,
    level: usize,
) -> String {
    line(
        level,
        prefix,
        &format!(
            "I should{} see \"{what}\" in the \"{within}\" \"{within_type}\"",
            negation(negated)
        ),
    )
}

/// `<prefix> I should[ not] see "<what>"`
#[must_use]
pub fn should_see(what: &str, negated: bool, prefix: StepPrefix, level: usize) -> String {
    line(
        level,
        prefix,
        &format!("I should{} see \"{what}\"", negation(negated)),
    )
}

/// `<prefix> I add the "<block>" block`
#[must_use]
pub fn add_block(block: &str, prefix: StepPrefix, level: usize) -> String {
    line(level, prefix, &format!("I add the \"{block}\" block"))
}

/// A form-filling step followed by its field rows one level deeper.
///
/// `admin` selects the administration-settings phrasing.
#[must_use]
pub fn set_fields<S: AsRef<str>>(
    rows: &[Vec<S>],
    admin: bool,
    prefix: StepPrefix,
    level: usize,
) -> String {
    let command = if admin {
        "I set the following administration settings values:"
    } else {
        "I set the following fields to these values:"
    };
    let mut block = line(level, prefix, command);
    for row in rows {
        block.push_str(&indent(level + 1));
        block.push_str(&table_row(row));
        block.push_str(&newlines(1));
    }
    block
}

/// `# <text>`
#[must_use]
pub fn comment(text: &str, level: usize) -> String {
    format!("{}# {text}{}", indent(level), newlines(1))
}
