//! Permissive parameter bags accepted at the construction boundary.
//!
//! Builders inside the crate take typed arguments. Callers holding loosely
//! structured input (JSON, TOML tables, environment maps) translate it here:
//! recognised fields are copied, unknown keys are ignored rather than
//! rejected.

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::fixture::{Course, Role, Roster};
use crate::{ForgeError, ForgeResult};

/// A key → value bag.
pub type ParamBag = Map<String, Value>;

/// Recognised fields for a [`Course`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseParams {
    /// Full course name.
    #[serde(alias = "name")]
    pub fullname: String,
    /// Course short name; identifies the course.
    pub shortname: String,
}

impl From<CourseParams> for Course {
    fn from(params: CourseParams) -> Self {
        Self::new(params.fullname, params.shortname)
    }
}

/// Recognised fields for a [`crate::Feature`].
///
/// `tags` is deliberately absent: tags are only added through
/// [`crate::Feature::add_tag`] so they are normalised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureParams {
    /// Feature title.
    pub title: String,
    /// Free-text comment rendered below the title.
    #[serde(alias = "headerComment")]
    pub header_comment: String,
    /// File name the document is meant to be written to.
    pub file: Option<String>,
}

/// One member entry of a [`GroupParams`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberParams {
    /// Username of the member.
    pub username: String,
    /// Role the user is enrolled with.
    pub role: Role,
}

/// One group entry of a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupParams {
    /// Group name.
    pub name: String,
    /// Members in declaration order.
    #[serde(default)]
    pub members: Vec<MemberParams>,
}

/// Build a [`Roster`] from group parameters, preserving order.
#[must_use]
pub fn roster_from_params(groups: &[GroupParams]) -> Roster {
    groups.iter().fold(Roster::new(), |roster, group| {
        roster.group(
            group.name.as_str(),
            group
                .members
                .iter()
                .map(|member| (member.username.as_str(), member.role)),
        )
    })
}

/// Deserialise the recognised fields of `bag` into `T`.
///
/// # Errors
///
/// Returns [`ForgeError::Params`] when a recognised field has the wrong
/// type.
pub fn from_bag<T: DeserializeOwned>(target: &'static str, bag: &ParamBag) -> ForgeResult<T> {
    serde_json::from_value(Value::Object(bag.clone())).map_err(|err| ForgeError::params(target, err))
}

#[cfg(test)]
mod tests {
    use super::{CourseParams, FeatureParams, GroupParams, ParamBag, from_bag, roster_from_params};
    use crate::{ForgeError, Role};
    use serde_json::json;

    fn bag(value: serde_json::Value) -> ParamBag {
        serde_json::from_value(value).expect("object bag")
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let params: CourseParams = from_bag(
            "course",
            &bag(json!({"name": "Course 1", "shortname": "C1", "visible": true})),
        )
        .expect("recognised fields deserialise");
        assert_eq!(params.fullname, "Course 1");
        assert_eq!(params.shortname, "C1");
    }

    #[test]
    fn feature_params_drop_tags() {
        let params: FeatureParams = from_bag(
            "feature",
            &bag(json!({"title": "FERPA", "tags": ["@x"], "headerComment": "hi"})),
        )
        .expect("recognised fields deserialise");
        assert_eq!(params.title, "FERPA");
        assert_eq!(params.header_comment, "hi");
        assert!(params.file.is_none());
    }

    #[test]
    fn wrong_types_are_reported() {
        let err = from_bag::<CourseParams>("course", &bag(json!({"shortname": 4})))
            .expect_err("number is not a string");
        assert!(matches!(err, ForgeError::Params { target: "course", .. }));
    }

    #[test]
    fn roster_keeps_declaration_order() {
        let groups: Vec<GroupParams> = serde_json::from_value(json!([
            {"name": "b", "members": [{"username": "t1", "role": "teacher"}]},
            {"name": "a", "members": [{"username": "s1", "role": "student"}]}
        ]))
        .expect("group list");
        let roster = roster_from_params(&groups);
        let names: Vec<&str> = roster.groups().iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
        assert_eq!(roster.groups().first().map(|(_, m)| m.clone()), Some(vec![(String::from("t1"), Role::Teacher)]));
    }
}
