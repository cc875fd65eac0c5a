//! TabTitle Preview
//!
//! Lays out each preview scene at a narrow and a wide width, switches tab
//! and steps the transition to completion.
//!
//! Usage: `tabtitle-preview [CONFIG] [--json]`

mod render;
mod scenes;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tabtitle_core::{Config, MonospaceMeasure, Selection, TabTitleBar};

const WIDTHS: [f32; 2] = [320.0, 1024.0];
const FRAME: Duration = Duration::from_millis(16);

/// Print the tab title bar preview scenes
#[derive(Parser, Debug)]
#[command(name = "tabtitle-preview", version, about)]
struct Cli {
    /// JSON configuration file
    config: Option<PathBuf>,

    /// Print layouts as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tabtitle_core::init_logging();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    let measure = MonospaceMeasure::default();

    for scene in scenes::all() {
        let selection = Selection::new(0);
        let mut bar = TabTitleBar::new(selection, scene.items, &config)?;
        if let Some((label, symbol)) = scene.change_tab {
            bar = bar.with_change_tab(label, symbol);
        }

        println!("== {}", scene.name);
        for width in WIDTHS {
            let layout = bar.layout(width, &measure);
            println!("-- width {}", width);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&layout)?);
            } else {
                print!("{}", render::render(&layout));
            }
        }

        let last = bar.items().last().map(|item| item.index()).unwrap_or(0);
        bar.select_tab(last);

        let mut frames = 0;
        while bar.is_animating() {
            bar.advance(FRAME);
            frames += 1;
        }
        tracing::info!(scene = scene.name, selected = last, frames, "Transition settled");

        println!("-- after selecting {} (width {})", last, WIDTHS[1]);
        print!("{}", render::render(&bar.layout(WIDTHS[1], &measure)));
        println!();
    }

    Ok(())
}
