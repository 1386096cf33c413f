use anyhow::Result;
use noteboard::data::WorkspaceSnapshot;
use noteboard::view::render_text;
use noteboard::widgets::registry_with_defaults;
use noteboard::{Dashboard, DashboardContext, WidgetStore};
use std::path::PathBuf;

/// Compose the dashboard from the local data directory and print every tile.
/// `NOTEBOARD_DIR` overrides the directory, the first argument picks the
/// workspace (default "default").
fn main() -> Result<()> {
    noteboard::logging::init(cfg!(debug_assertions));

    let dir = data_dir();
    let workspace = std::env::args().nth(1).unwrap_or_else(|| "default".into());

    let store = WidgetStore::open_in(&dir)?;
    let snapshot = WorkspaceSnapshot::load(dir.join("workspace.json"))?;
    let dashboard = Dashboard::new(registry_with_defaults(), store);

    let ctx = DashboardContext::new(&snapshot);
    let tiles = dashboard.compose(&workspace, None, &ctx);
    if tiles.is_empty() {
        println!("no widgets in workspace '{workspace}'");
        println!(
            "available widget types: {}",
            dashboard.registry().kinds().join(", ")
        );
        return Ok(());
    }

    for tile in tiles {
        println!(
            "=== {} [{}] at ({}, {}) {}x{}",
            tile.title,
            tile.kind,
            tile.position.x,
            tile.position.y,
            tile.position.width,
            tile.position.height
        );
        print!("{}", render_text(&tile.fragment));
        println!();
    }
    Ok(())
}

fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("NOTEBOARD_DIR") {
        return PathBuf::from(dir);
    }
    dirs_next::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("noteboard")
}
