//! Users, groups, and courses seeding a feature's starting state.
//!
//! The [`FixtureGraph`] owns every entity and is the only place membership
//! links are created, so a user's group names and a group's member list never
//! disagree.

mod graph;
mod roster;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ForgeError, ForgeResult};

pub use graph::FixtureGraph;
pub use roster::Roster;

/// Group name meaning "enrolled but not grouped".
///
/// Users in this group appear in the user and enrolment tables but the group
/// itself is never rendered.
pub const NOT_IN_A_GROUP: &str = "Not in a group";

/// Course role a user is enrolled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Teacher allowed to edit; sees every group.
    #[serde(alias = "editing-teacher", alias = "editing_teacher")]
    EditingTeacher,
    /// Non-editing teacher.
    Teacher,
    /// Student.
    Student,
}

impl Role {
    /// Role short name as used by the host application.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::EditingTeacher => "editingteacher",
            Self::Teacher => "teacher",
            Self::Student => "student",
        }
    }

    /// Numeric role code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::EditingTeacher => 1,
            Self::Teacher => 3,
            Self::Student => 0,
        }
    }

    /// Inverse of [`Role::code`].
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::EditingTeacher),
            3 => Some(Self::Teacher),
            0 => Some(Self::Student),
            _ => None,
        }
    }

    /// Whether the role is one of the teacher roles.
    #[must_use]
    pub const fn is_teacher(self) -> bool {
        matches!(self, Self::EditingTeacher | Self::Teacher)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = ForgeError;

    fn from_str(s: &str) -> ForgeResult<Self> {
        match s.trim() {
            "editingteacher" => Ok(Self::EditingTeacher),
            "teacher" => Ok(Self::Teacher),
            "student" => Ok(Self::Student),
            other => Err(ForgeError::unknown_role(other)),
        }
    }
}

/// An enrolled user.
///
/// `firstname` mirrors the username and `lastname` the role name, which
/// keeps generated display names predictable in step assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    username: String,
    firstname: String,
    lastname: String,
    role: Role,
    groups: Vec<String>,
}

impl User {
    /// Create a user with no group memberships.
    #[must_use]
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        let username = username.into();
        Self {
            firstname: username.clone(),
            lastname: role.name().to_owned(),
            username,
            role,
            groups: Vec::new(),
        }
    }

    /// Unique username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// First name (equal to the username).
    #[must_use]
    pub fn firstname(&self) -> &str {
        &self.firstname
    }

    /// Last name (equal to the role name).
    #[must_use]
    pub fn lastname(&self) -> &str {
        &self.lastname
    }

    /// `"<firstname> <lastname>"`, as the application displays the user.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }

    /// Enrolment role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Shortcut for [`Role::is_teacher`].
    #[must_use]
    pub const fn is_teacher(&self) -> bool {
        self.role.is_teacher()
    }

    /// Names of the groups this user was explicitly added to, in order.
    #[must_use]
    pub fn group_names(&self) -> &[String] {
        &self.groups
    }

    /// Whether the user was explicitly added to `group`.
    #[must_use]
    pub fn in_group(&self, group: &str) -> bool {
        self.groups.iter().any(|name| name == group)
    }

    pub(crate) fn join(&mut self, group: &str) {
        if !self.in_group(group) {
            self.groups.push(group.to_owned());
        }
    }
}

/// A course group and its members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    name: String,
    members: Vec<String>,
}

impl Group {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Group name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member usernames in the order they joined.
    #[must_use]
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Whether `username` is a member.
    #[must_use]
    pub fn has_member(&self, username: &str) -> bool {
        self.members.iter().any(|member| member == username)
    }

    /// Whether this is the [`NOT_IN_A_GROUP`] sentinel.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.name == NOT_IN_A_GROUP
    }

    pub(crate) fn admit(&mut self, user: &User) {
        if !self.has_member(user.username()) {
            self.members.push(user.username().to_owned());
        }
    }
}

/// A course every user is enrolled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Full course name.
    pub fullname: String,
    /// Short name; identifies the course.
    pub shortname: String,
}

impl Course {
    /// Create a course.
    #[must_use]
    pub fn new(fullname: impl Into<String>, shortname: impl Into<String>) -> Self {
        Self {
            fullname: fullname.into(),
            shortname: shortname.into(),
        }
    }
}
