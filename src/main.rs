use std::path::PathBuf;

use anyhow::{bail, Context};
use polyedit::{init_logging, run_script, ReplayScript, BUILD_DATE, VERSION};
use polyedit_settings::{default_config_path, EditorConfig};

const USAGE: &str = "usage: polyedit <script.json> [--config <file.toml|file.json>]";

/// Parsed command line.
#[derive(Debug)]
struct CliArgs {
    script: PathBuf,
    config: Option<PathBuf>,
}

impl CliArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut script = None;
        let mut config = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => match args.next() {
                    Some(path) => config = Some(PathBuf::from(path)),
                    None => bail!("--config needs a file\n{USAGE}"),
                },
                "--help" | "-h" => bail!("{USAGE}"),
                other if other.starts_with('-') => bail!("unknown option {other}\n{USAGE}"),
                other if script.is_none() => script = Some(PathBuf::from(other)),
                other => bail!("unexpected argument {other}\n{USAGE}"),
            }
        }

        match script {
            Some(script) => Ok(Self { script, config }),
            None => bail!("{USAGE}"),
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<EditorConfig> {
    if let Some(path) = path {
        return EditorConfig::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()));
    }

    match default_config_path() {
        Ok(path) => EditorConfig::load_or_default(&path)
            .with_context(|| format!("loading config {}", path.display())),
        Err(e) => {
            tracing::warn!("{}, using default settings", e);
            Ok(EditorConfig::default())
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    let args = CliArgs::parse(std::env::args().skip(1))?;
    tracing::info!("polyedit {} (built {})", VERSION, BUILD_DATE);

    let config = load_config(args.config.as_ref())?;
    let script = ReplayScript::from_file(&args.script)
        .with_context(|| format!("reading script {}", args.script.display()))?;

    let outcome = run_script(&script, &config);
    tracing::info!(
        "Replayed {} steps, {} notifications, final state {}",
        script.steps.len(),
        outcome.events.len(),
        outcome.state
    );

    println!("{}", serde_json::to_string_pretty(&outcome.polygons)?);
    Ok(())
}
