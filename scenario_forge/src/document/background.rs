//! The `Background:` block declaring a feature's fixtures.

use crate::fixture::FixtureGraph;
use crate::layout::newlines;
use crate::steps::the_following_exist;
use crate::StepPrefix;

/// Renders the fixture tables of a feature.
///
/// The background holds no state of its own; everything it prints comes from
/// the [`FixtureGraph`] it is rendered against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Background;

impl Background {
    /// The whole block: header, courses, users, enrolments, groups, and
    /// group members.
    #[must_use]
    pub fn render(self, fixtures: &FixtureGraph) -> String {
        let mut block = self.header();
        block.push_str(&self.courses(fixtures));
        block.push_str(&self.users(fixtures));
        block.push_str(&self.enrolments(fixtures));
        block.push_str(&self.groups(fixtures));
        block.push_str(&self.group_membership(fixtures));
        block
    }

    /// `Background:` line.
    #[must_use]
    pub fn header(self) -> String {
        format!("Background:{}", newlines(1))
    }

    /// `courses` table, opened with `Given`.
    #[must_use]
    pub fn courses(self, fixtures: &FixtureGraph) -> String {
        let mut rows = vec![vec![
            String::from("fullname"),
            String::from("shortname"),
            String::from("category"),
        ]];
        rows.extend(fixtures.courses().iter().map(|course| {
            vec![
                course.fullname.clone(),
                course.shortname.clone(),
                String::from("0"),
            ]
        }));
        the_following_exist("courses", &rows, StepPrefix::Given)
    }

    /// `users` table.
    #[must_use]
    pub fn users(self, fixtures: &FixtureGraph) -> String {
        let mut rows = vec![vec!["username", "firstname", "lastname"]];
        rows.extend(
            fixtures
                .users()
                .iter()
                .map(|user| vec![user.username(), user.firstname(), user.lastname()]),
        );
        the_following_exist("users", &rows, StepPrefix::And)
    }

    /// `course enrolments` table: every user in every course.
    #[must_use]
    pub fn enrolments(self, fixtures: &FixtureGraph) -> String {
        let mut rows = vec![vec!["user", "course", "role"]];
        for user in fixtures.users() {
            for course in fixtures.courses() {
                rows.push(vec![
                    user.username(),
                    course.shortname.as_str(),
                    user.role().name(),
                ]);
            }
        }
        the_following_exist("course enrolments", &rows, StepPrefix::And)
    }

    /// `groups` table: every real group in every course.
    #[must_use]
    pub fn groups(self, fixtures: &FixtureGraph) -> String {
        let mut rows = vec![vec!["name", "course", "idnumber"]];
        for group in fixtures.groups().iter().filter(|group| !group.is_sentinel()) {
            for course in fixtures.courses() {
                rows.push(vec![group.name(), course.shortname.as_str(), group.name()]);
            }
        }
        the_following_exist("groups", &rows, StepPrefix::And)
    }

    /// `group members` table, skipping the ungrouped sentinel.
    #[must_use]
    pub fn group_membership(self, fixtures: &FixtureGraph) -> String {
        let mut rows = vec![vec!["user", "group"]];
        for user in fixtures.users() {
            for group in user.group_names() {
                if group == crate::NOT_IN_A_GROUP {
                    continue;
                }
                rows.push(vec![user.username(), group.as_str()]);
            }
        }
        the_following_exist("group members", &rows, StepPrefix::And)
    }
}
