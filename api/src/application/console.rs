use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, bail};
use base64::{Engine, engine::general_purpose::STANDARD};
use healthflow_core::{
    domain::{
        common::entities::app_errors::CoreError,
        planner::{
            ports::{Clipboard, PlannerApi, Printer},
            view::{PlannerView, SubmitOutcome},
            view_config::ViewConfig,
        },
        preferences::ports::KeyValueStore,
    },
    infrastructure::{key_value::FileKeyValueStore, planner::HttpPlannerApi},
};
use tracing::info;

use crate::args::PlanArgs;

/// Terminal clipboard using the OSC 52 escape sequence.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleClipboard;

pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

impl Clipboard for ConsoleClipboard {
    fn write_text(&self, text: &str) -> Result<(), CoreError> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(osc52_sequence(text).as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| CoreError::ExternalServiceError(format!("clipboard write failed: {e}")))
    }
}

/// Writes the printable plan to a file.
#[derive(Debug, Clone)]
pub struct FilePrinter {
    pub path: PathBuf,
}

impl Printer for FilePrinter {
    fn print(&self, document: &str) -> Result<(), CoreError> {
        fs::write(&self.path, document).map_err(|e| CoreError::StorageError(e.to_string()))
    }
}

pub async fn run(args: PlanArgs) -> Result<(), anyhow::Error> {
    let config = if args.quick {
        ViewConfig::quick()
    } else {
        ViewConfig::full()
    };

    let api = HttpPlannerApi::new(args.server_url.as_str());
    let store = FileKeyValueStore::new(&args.store_path);
    let mut view = PlannerView::new(config, api, store);

    let output = drive(&mut view, &args).await?;
    if !output.is_empty() {
        println!("{output}");
    }

    if args.copy_shopping {
        if view.copy_shopping_list(&ConsoleClipboard)? {
            info!("Shopping list copied to clipboard");
        } else {
            info!("No shopping list to copy");
        }
    }

    if let Some(path) = &args.print {
        let printer = FilePrinter { path: path.clone() };
        if view.print_plan(&printer)? {
            info!(path = %path.display(), "Plan written");
        }
    }

    Ok(())
}

/// Applies the command line to the view and returns the text to show.
async fn drive<A, S>(view: &mut PlannerView<A, S>, args: &PlanArgs) -> Result<String, anyhow::Error>
where
    A: PlannerApi,
    S: KeyValueStore,
{
    view.mount();

    if let Some(diet) = &args.diet {
        view.set_diet(diet)?;
    }
    if let Some(low_upf) = args.low_upf {
        view.set_low_upf(low_upf);
    }
    if let Some(time) = &args.time {
        view.set_time(time)?;
    }

    let mut lines = Vec::new();

    for key in &args.toggle_favourites {
        let saved = view
            .toggle_favourite_key(key)
            .with_context(|| format!("could not toggle favourite {key}"))?;
        lines.push(format!("{} {key}", if saved { "Saved" } else { "Removed" }));
    }

    if args.list_favourites {
        if view.state().favourites.is_empty() {
            lines.push("No favourites yet".to_string());
        }
        for favourite in &view.state().favourites {
            lines.push(format!("* {favourite}"));
        }
    }

    if let Some(text) = &args.text {
        view.set_text(text.as_str());

        match view.submit().await {
            SubmitOutcome::Skipped => bail!("Notes need at least three characters"),
            SubmitOutcome::Failed => {
                let message = view.state().error.clone().unwrap_or_default();
                bail!(message)
            }
            SubmitOutcome::Planned => {
                if let Some(rendered) = view.rendered_plan() {
                    lines.push(rendered);
                }
            }
        }
    }

    Ok(lines.join("\n"))
}
