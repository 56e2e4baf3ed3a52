//! Steps covering the settings layers.

use crate::fixtures::SettingsState;
use anyhow::{Result, anyhow, ensure};
use clap::Parser;
use rstest_bdd_macros::{given, then, when};
use scenario_forge_cli::cli::Args;
use scenario_forge_cli::settings::{self, DEFAULT_SETTINGS_FILE};
use test_helpers::figment::with_jail;
use test_helpers::text::unquote;

#[given("a settings file titled {title}")]
fn settings_file(layering: &SettingsState, title: String) {
    layering.file_title.set(unquote(&title).to_owned());
}

#[given("the environment sets the title to {title}")]
fn env_title(layering: &SettingsState, title: String) {
    layering.env_title.set(unquote(&title).to_owned());
}

#[given("the title flag is {title}")]
fn flag_title(layering: &SettingsState, title: String) {
    layering.flag_title.set(unquote(&title).to_owned());
}

#[when("the settings are loaded")]
fn load_settings(layering: &SettingsState) -> Result<()> {
    let file_title = layering.file_title.take();
    let env_title = layering.env_title.take();
    let mut argv = vec![String::from("scenario-forge")];
    if let Some(title) = layering.flag_title.take() {
        argv.extend([String::from("--title"), title]);
    }
    let loaded = with_jail(|jail| {
        if let Some(title) = file_title.as_ref() {
            jail.create_file(DEFAULT_SETTINGS_FILE, &format!("title = \"{title}\""))?;
        }
        if let Some(title) = env_title.as_ref() {
            jail.set_env("SCENARIO_FORGE_TITLE", title);
        }
        let args = Args::try_parse_from(&argv).map_err(|err| figment::Error::from(err.to_string()))?;
        settings::load(args.config.as_deref(), &args.overrides())
            .map_err(|err| figment::Error::from(err.to_string()))
    })?;
    layering.loaded.set(loaded);
    Ok(())
}

#[then("the title is {title}")]
fn title_is(layering: &SettingsState, title: String) -> Result<()> {
    let actual = layering
        .loaded
        .with_ref(|loaded| loaded.title.clone())
        .ok_or_else(|| anyhow!("settings were not loaded"))?;
    ensure!(actual == unquote(&title), "title was {actual}");
    Ok(())
}
