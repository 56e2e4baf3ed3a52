//! Library interface for the `scenario-forge` command.
//!
//! The binary loads [`settings::GeneratorSettings`], builds one
//! [`Feature`] covering every valid point of the
//! [`quickmail::QuickmailFerpa`] matrix, and writes the serialised document.

pub mod cli;
pub mod error;
pub mod output;
pub mod quickmail;
pub mod settings;

use std::io::Write;

use camino::Utf8PathBuf;
use scenario_forge::params::roster_from_params;
use scenario_forge::{
    Background, ConfigurationEnumerator, Course, Feature, ForgeResult, GenerationContext,
};
use tracing::info;

use crate::cli::{Args, OutputMode};
use crate::error::{Result, ScenarioForgeError};
use crate::quickmail::{FerpaScenario, QuickmailFerpa};
use crate::settings::GeneratorSettings;

/// Assemble the Quickmail feature described by `settings`.
///
/// Scenario numbers are drawn from `context`.
///
/// # Errors
///
/// Fails when the roster repeats a group or the matrix cannot be
/// enumerated.
pub fn build_feature(
    settings: &GeneratorSettings,
    context: &GenerationContext,
) -> ForgeResult<Feature> {
    let mut feature = Feature::new(settings.title.as_str()).with_file(settings.file_name.as_str());
    for tag in &settings.tags {
        feature.add_tag(tag);
    }
    for comment in &settings.comments {
        feature.append_comment(&format!("# {comment}"));
    }
    for course in &settings.courses {
        feature.add_course(Course::from(course.clone()));
    }
    feature.init_groups_users(&roster_from_params(&settings.roster))?;
    feature.set_background(Background);
    for config in ConfigurationEnumerator::new(&QuickmailFerpa).enumerate()? {
        feature.add_scenario(context, FerpaScenario::new(config));
    }
    Ok(feature)
}

/// Run the generator for `args`.
///
/// Returns the written path in file mode; in stdout mode the document goes
/// to `stdout` and `None` is returned.
///
/// # Errors
///
/// Propagates settings, generation, and I/O failures.
pub fn run<W: Write>(args: &Args, stdout: &mut W) -> Result<Option<Utf8PathBuf>> {
    let settings = settings::load(args.config.as_deref(), &args.overrides())?;
    let context = GenerationContext::starting_at(args.first_scenario);
    let feature = build_feature(&settings, &context)?;
    let document = feature.serialize()?;
    info!(
        scenarios = feature.scenarios().len(),
        next = context.counter().peek(),
        "generated feature"
    );
    match args.output {
        OutputMode::File => {
            let path = output::write_feature(&settings.out_dir, &settings.file_name, &document)?;
            info!(path = %path, "wrote feature file");
            Ok(Some(path))
        }
        OutputMode::Stdout => {
            stdout
                .write_all(document.as_bytes())
                .map_err(|io_err| ScenarioForgeError::Io {
                    path: Utf8PathBuf::from("<stdout>"),
                    source: io_err,
                })?;
            Ok(None)
        }
    }
}
