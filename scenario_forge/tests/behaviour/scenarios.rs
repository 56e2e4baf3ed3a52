//! Binds the feature files to the shared fixtures.

use crate::fixtures::{DocumentState, EnumerationState, document, enumeration};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/enumeration.feature",
    fixtures = [enumeration: EnumerationState]
);
scenarios!(
    "tests/features/document.feature",
    fixtures = [document: DocumentState]
);
