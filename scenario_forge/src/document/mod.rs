//! Feature documents: tags, title, background, and numbered scenarios.
//!
//! [`Feature::serialize`] is the single entry point producing the text handed
//! to the external test runner. Its layout is whitespace-sensitive:
//!
//! ```text
//! <tags>
//! Feature: <title>
//!
//!
//! <header comment>
//!
//! Background:
//!     Given the following "courses" exist:
//!         |fullname|shortname|category|
//! ...
//! Scenario: <n>
//!     # <setting>: <option>
//!
//!         <steps>
//! ```

mod background;
mod scenario;

use tracing::debug;

use crate::fixture::{Course, FixtureGraph, Roster, User};
use crate::layout::newlines;
use crate::params::{FeatureParams, ParamBag, from_bag};
use crate::{ForgeResult, Group};

pub use background::Background;
pub use scenario::{GenerationContext, NumberedScenario, Scenario, ScenarioCounter};

/// Aggregate root of one generated document.
#[derive(Debug, Default)]
pub struct Feature {
    file: Option<String>,
    tags: Vec<String>,
    title: String,
    header_comment: String,
    fixtures: FixtureGraph,
    background: Option<Background>,
    scenarios: Vec<NumberedScenario>,
}

impl Feature {
    /// An empty feature titled `title`.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Build a feature from the recognised keys of `bag` (`title`,
    /// `header_comment`, `file`). Unknown keys and `tags` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ForgeError::Params`] when a recognised key has the
    /// wrong type.
    pub fn from_params(bag: &ParamBag) -> ForgeResult<Self> {
        let params: FeatureParams = from_bag("feature", bag)?;
        Ok(Self {
            file: params.file,
            title: params.title,
            header_comment: params.header_comment,
            ..Self::default()
        })
    }

    /// Set the file name the document should be written to.
    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// File name the document should be written to, if any.
    #[must_use]
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// Feature title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Add `@<tag>` (trimmed) unless it is already present.
    pub fn add_tag(&mut self, tag: &str) {
        let tag = format!("@{}", tag.trim());
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Tags in insertion order, each with its `@` prefix.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Append a paragraph to the header comment.
    ///
    /// Each paragraph is preceded by a blank line.
    pub fn append_comment(&mut self, comment: &str) {
        self.header_comment.push_str(&newlines(2));
        self.header_comment.push_str(comment);
    }

    /// Accumulated header comment.
    #[must_use]
    pub fn header_comment(&self) -> &str {
        &self.header_comment
    }

    /// The fixture graph.
    #[must_use]
    pub const fn fixtures(&self) -> &FixtureGraph {
        &self.fixtures
    }

    /// Look a user up by username.
    #[must_use]
    pub fn user(&self, username: &str) -> Option<&User> {
        self.fixtures.user(username)
    }

    /// Look a group up by name.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.fixtures.group(name)
    }

    /// See [`FixtureGraph::add_course`].
    pub fn add_course(&mut self, course: Course) -> bool {
        self.fixtures.add_course(course)
    }

    /// See [`FixtureGraph::init_groups_users`].
    ///
    /// # Errors
    ///
    /// Fails when membership was already initialised or the roster repeats a
    /// group name.
    pub fn init_groups_users(&mut self, roster: &Roster) -> ForgeResult<()> {
        self.fixtures.init_groups_users(roster)
    }

    /// See [`FixtureGraph::add_user_to_group`].
    ///
    /// # Errors
    ///
    /// Fails when the user or the group does not exist.
    pub fn add_user_to_group(&mut self, username: &str, group: &str) -> ForgeResult<()> {
        self.fixtures.add_user_to_group(username, group)
    }

    /// Attach the background block.
    pub fn set_background(&mut self, background: Background) {
        self.background = Some(background);
    }

    /// The background, when one is attached.
    #[must_use]
    pub const fn background(&self) -> Option<Background> {
        self.background
    }

    /// Append `scenario`, numbering it from `context`.
    ///
    /// Returns the assigned number. Numbers follow creation order, so they
    /// also increase down the document.
    pub fn add_scenario<S>(&mut self, context: &GenerationContext, scenario: S) -> u64
    where
        S: Scenario + 'static,
    {
        let number = context.next_scenario_number();
        self.scenarios
            .push(NumberedScenario::new(number, Box::new(scenario)));
        number
    }

    /// Scenarios in creation order.
    #[must_use]
    pub fn scenarios(&self) -> &[NumberedScenario] {
        &self.scenarios
    }

    /// `<tags joined by spaces>\n`
    #[must_use]
    pub fn tags_line(&self) -> String {
        format!("{}{}", self.tags.join(" "), newlines(1))
    }

    /// `Feature: <title>\n`
    #[must_use]
    pub fn title_line(&self) -> String {
        format!("Feature: {}{}", self.title, newlines(1))
    }

    /// Render one scenario block.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`Scenario::steps`].
    pub fn render_scenario(&self, entry: &NumberedScenario) -> ForgeResult<String> {
        let scenario = entry.scenario();
        let mut block = scenario.header_comment(self);
        block.push_str(&format!("Scenario: {}{}", entry.number(), newlines(1)));
        block.push_str(&format!("{}{}", scenario.config(), newlines(1)));
        block.push_str(&scenario.steps(self)?);
        Ok(block)
    }

    /// The complete document.
    ///
    /// Rendering does not mutate the feature, so repeated calls return
    /// identical text.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`Scenario::steps`].
    pub fn serialize(&self) -> ForgeResult<String> {
        let mut document = self.tags_line();
        document.push_str(&self.title_line());
        document.push_str(&newlines(2));
        document.push_str(&self.header_comment);
        document.push_str(&newlines(2));
        if let Some(background) = self.background {
            document.push_str(&background.render(&self.fixtures));
        }
        for entry in &self.scenarios {
            document.push_str(&self.render_scenario(entry)?);
        }
        debug!(
            title = %self.title,
            scenarios = self.scenarios.len(),
            bytes = document.len(),
            "serialised feature"
        );
        Ok(document)
    }
}
