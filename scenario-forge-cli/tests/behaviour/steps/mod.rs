//! Step definitions grouped by concern.

mod generate_steps;
mod settings_steps;
