//! Declarative "group → {username → role}" input for the fixture graph.

use super::{NOT_IN_A_GROUP, Role};

/// Ordered group declarations used to populate a [`super::FixtureGraph`].
///
/// ```
/// use scenario_forge::{Role, Roster};
///
/// let roster = Roster::new()
///     .group("group1", [("t1", Role::Teacher), ("s1", Role::Student)])
///     .group("group2", [("s2", Role::Student)]);
/// assert_eq!(roster.groups().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    groups: Vec<(String, Vec<(String, Role)>)>,
}

impl Roster {
    /// An empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Append a group and its members.
    #[must_use]
    pub fn group<N, I, U>(mut self, name: N, members: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (U, Role)>,
        U: Into<String>,
    {
        let members = members
            .into_iter()
            .map(|(username, role)| (username.into(), role))
            .collect();
        self.groups.push((name.into(), members));
        self
    }

    /// Declared groups in order.
    #[must_use]
    pub fn groups(&self) -> &[(String, Vec<(String, Role)>)] {
        &self.groups
    }

    /// Whether no group was declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The roster used when a feature does not declare its own: three
    /// groups, an editing teacher spanning two of them, a teacher in two
    /// groups, and one ungrouped teacher and student.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .group(
                "group1",
                [
                    ("t1", Role::Teacher),
                    ("t4", Role::EditingTeacher),
                    ("s1", Role::Student),
                    ("s4", Role::Student),
                ],
            )
            .group(
                "group2",
                [
                    ("t2", Role::Teacher),
                    ("t4", Role::EditingTeacher),
                    ("s2", Role::Student),
                    ("s4", Role::Student),
                ],
            )
            .group(
                "group3",
                [
                    ("t3", Role::Teacher),
                    ("t4", Role::Teacher),
                    ("s3", Role::Student),
                ],
            )
            .group(
                NOT_IN_A_GROUP,
                [("t5", Role::Teacher), ("s5", Role::Student)],
            )
    }
}
