//! Step definitions grouped by concern.

mod document_steps;
mod enumeration_steps;
