//! Owner of users, groups, and courses and of their membership links.

use std::borrow::Cow;

use tracing::{debug, warn};

use super::{Course, Group, Role, Roster, User};
use crate::{ForgeError, ForgeResult};

/// Users, groups, and courses of one feature.
///
/// Users, groups, and courses keep insertion order, which is also the order
/// their fixture tables are rendered in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureGraph {
    users: Vec<User>,
    groups: Vec<Group>,
    courses: Vec<Course>,
}

impl FixtureGraph {
    /// An empty graph.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            users: Vec::new(),
            groups: Vec::new(),
            courses: Vec::new(),
        }
    }

    /// Users in creation order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Groups in creation order, including the ungrouped sentinel.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Courses in insertion order.
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Look a user up by username.
    #[must_use]
    pub fn user(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|user| user.username() == username)
    }

    /// Look a group up by name.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.name() == name)
    }

    /// Whether users or groups have already been created.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        !self.users.is_empty() || !self.groups.is_empty()
    }

    /// Add `course` unless a course with the same short name exists.
    ///
    /// Returns `true` when the course was added.
    pub fn add_course(&mut self, course: Course) -> bool {
        if self.courses.iter().any(|c| c.shortname == course.shortname) {
            return false;
        }
        self.courses.push(course);
        true
    }

    /// Populate users and groups from `roster`.
    ///
    /// An empty roster falls back to [`Roster::standard`]. A username seen
    /// again keeps the role it was first created with.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::MembershipLocked`] when the graph is already
    /// populated and [`ForgeError::DuplicateGroup`] when `roster` repeats a
    /// group name. The graph is unchanged on error.
    pub fn init_groups_users(&mut self, roster: &Roster) -> ForgeResult<()> {
        if self.is_populated() {
            return Err(ForgeError::MembershipLocked);
        }
        let roster = if roster.is_empty() {
            Cow::Owned(Roster::standard())
        } else {
            Cow::Borrowed(roster)
        };

        let mut staged = Self::new();
        for (group_name, members) in roster.groups() {
            if staged.group(group_name).is_some() {
                return Err(ForgeError::duplicate_group(group_name.as_str()));
            }
            staged.groups.push(Group::new(group_name.as_str()));
            for (username, role) in members {
                staged.ensure_user(username, *role);
                staged.add_user_to_group(username, group_name)?;
            }
        }
        debug!(
            users = staged.users.len(),
            groups = staged.groups.len(),
            "initialised group membership"
        );
        self.users = staged.users;
        self.groups = staged.groups;
        Ok(())
    }

    fn ensure_user(&mut self, username: &str, role: Role) {
        if let Some(existing) = self.user(username) {
            if existing.role() != role {
                warn!(
                    username,
                    kept = %existing.role(),
                    ignored = %role,
                    "user declared with conflicting roles; keeping the first"
                );
            }
            return;
        }
        self.users.push(User::new(username, role));
    }

    /// Link `username` and `group`, updating both sides.
    ///
    /// Adding an existing membership again is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::UnknownUser`] or [`ForgeError::UnknownGroup`]
    /// when either end does not exist.
    pub fn add_user_to_group(&mut self, username: &str, group: &str) -> ForgeResult<()> {
        let user = self
            .users
            .iter_mut()
            .find(|user| user.username() == username)
            .ok_or_else(|| ForgeError::unknown_user(username))?;
        let target = self
            .groups
            .iter_mut()
            .find(|candidate| candidate.name() == group)
            .ok_or_else(|| ForgeError::unknown_group(group))?;
        target.admit(user);
        user.join(group);
        Ok(())
    }

    /// Groups `username` can see.
    ///
    /// Editing teachers see every group of the feature; everyone else sees
    /// the groups they were explicitly added to. The result is derived on
    /// every call, so it always reflects the current membership.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::UnknownUser`] for unknown usernames.
    pub fn effective_groups(&self, username: &str) -> ForgeResult<Vec<&Group>> {
        let user = self
            .user(username)
            .ok_or_else(|| ForgeError::unknown_user(username))?;
        if user.role() == Role::EditingTeacher {
            return Ok(self.groups.iter().collect());
        }
        Ok(user
            .group_names()
            .iter()
            .filter_map(|name| self.group(name))
            .collect())
    }

    /// Display string for `username`: full name followed by the effective
    /// group names in parentheses when the user belongs to any group.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::UnknownUser`] for unknown usernames.
    pub fn describe_user(&self, username: &str) -> ForgeResult<String> {
        let user = self
            .user(username)
            .ok_or_else(|| ForgeError::unknown_user(username))?;
        let mut description = user.full_name();
        if !user.group_names().is_empty() {
            let names: Vec<&str> = self
                .effective_groups(username)?
                .into_iter()
                .map(Group::name)
                .collect();
            description.push_str(&format!(" ({})", names.join(",")));
        }
        Ok(description)
    }
}
