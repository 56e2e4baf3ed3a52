//! Cartesian enumeration of a configuration shape.

use tracing::debug;

use super::{ConfigShape, Configuration};
use crate::ForgeResult;

/// One full binding of setting keys to option keys, in declaration order.
pub type Assignment = Vec<(String, String)>;

/// Enumerates every point of a [`ConfigShape`] and keeps the valid ones.
///
/// The product is built breadth-first: settings in declaration order form
/// the outer loop, options in declaration order the inner one, so the first
/// declared setting varies slowest and the output order is stable.
///
/// Settings with no options are skipped. Such an axis stays unset in every
/// configuration instead of reducing the product to nothing.
pub struct ConfigurationEnumerator<'a, S: ConfigShape + ?Sized> {
    shape: &'a S,
}

impl<'a, S: ConfigShape + ?Sized> ConfigurationEnumerator<'a, S> {
    /// Create an enumerator over `shape`.
    #[must_use]
    pub const fn new(shape: &'a S) -> Self {
        Self { shape }
    }

    /// Every combination of one option per non-empty setting.
    #[must_use]
    pub fn assignments(&self) -> Vec<Assignment> {
        let mut partials: Vec<Assignment> = vec![Vec::new()];
        for setting in self.shape.axes() {
            if setting.options().is_empty() {
                debug!(setting = setting.key(), "skipping setting without options");
                continue;
            }
            let mut extended = Vec::with_capacity(partials.len() * setting.options().len());
            for partial in &partials {
                for option in setting.options() {
                    let mut next = partial.clone();
                    next.push((setting.key().to_owned(), option.key.clone()));
                    extended.push(next);
                }
            }
            partials = extended;
        }
        partials
    }

    /// Materialise every assignment without applying the validity predicate.
    ///
    /// # Errors
    ///
    /// Propagates the first error raised by the guarded setter.
    pub fn enumerate_unfiltered(&self) -> ForgeResult<Vec<Configuration>> {
        self.assignments()
            .iter()
            .map(|assignment| self.materialise(assignment))
            .collect()
    }

    /// Materialise every assignment and keep those the shape accepts.
    ///
    /// # Errors
    ///
    /// Propagates the first error raised by the guarded setter.
    pub fn enumerate(&self) -> ForgeResult<Vec<Configuration>> {
        let all = self.enumerate_unfiltered()?;
        let total = all.len();
        let valid: Vec<Configuration> = all
            .into_iter()
            .filter(|config| self.shape.is_valid(config))
            .collect();
        debug!(total, retained = valid.len(), "enumerated configuration space");
        Ok(valid)
    }

    fn materialise(&self, assignment: &Assignment) -> ForgeResult<Configuration> {
        let mut config = Configuration::from_shape(self.shape);
        for (key, option) in assignment {
            config.set(key, option)?;
        }
        Ok(config)
    }
}
