// src/main.rs
//
// Headless demo: renders composited frames (glow + sharp) of an element
// model or a molecule geometry to PNG files.
//
//   chemlab            render oxygen, 1 frame
//   chemlab Fe 24      render iron, 24 frames
//   chemlab water      render the built-in water geometry
//   chemlab mol:ammonia  fetch geometry from the reasoning API
//                        (requires CHEMLAB_API_KEY)

use chemlab::rendering::{export_png, render_composite};
use chemlab::services::{QueryGuard, ReasoningClient};
use chemlab::utils::logger;
use chemlab::{AnimationDriver, MolecularGeometry, RenderStyle, TickHandle};
use log::{error, info};

const SIZE: i32 = 600;

async fn resolve_geometry(query: &str) -> Result<MolecularGeometry, String> {
    let api_key = std::env::var("CHEMLAB_API_KEY")
        .map_err(|_| "set CHEMLAB_API_KEY to use 'mol:' queries".to_string())?;
    let client = ReasoningClient::new(api_key);

    let mut guard = QueryGuard::new();
    let token = guard.begin();
    let geometry = client
        .molecular_geometry(query)
        .await
        .map_err(|e| format!("{} (check network and API key, then retry)", e))?;
    if !guard.is_current(token) {
        return Err("geometry lookup superseded by a newer selection".to_string());
    }
    info!("resolved '{}' to {} ({} atoms)", query, geometry.name, geometry.atoms.len());
    Ok(geometry)
}

async fn run() -> Result<(), String> {
    let args: Vec<String> = std::env::args().collect();
    let target = args.get(1).map(String::as_str).unwrap_or("O");
    let frames: usize = args
        .get(2)
        .map(|s| s.parse().map_err(|_| format!("bad frame count '{}'", s)))
        .transpose()?
        .unwrap_or(1);

    let mut driver = AnimationDriver::new();
    if target == "water" {
        driver.select_molecule(MolecularGeometry::water())?;
    } else if let Some(query) = target.strip_prefix("mol:") {
        driver.select_molecule(resolve_geometry(query).await?)?;
    } else {
        driver.select_element(target)?;
    }

    let style = RenderStyle::default();
    let handle = TickHandle::new();
    let mut failure: Option<String> = None;
    let stopper = handle.clone();

    let mut index = 0usize;
    let produced = driver.run(&handle, frames, |frame_target, params| {
        let path = format!("chemlab_{:03}.png", index);
        index += 1;
        let result = render_composite(Some(frame_target), &params, SIZE, SIZE, &style)
            .and_then(|surface| export_png(&surface, &path));
        if let Err(e) = result {
            failure = Some(e);
            stopper.cancel();
        }
    });

    if let Some(e) = failure {
        return Err(e);
    }
    info!("wrote {} frame(s) for '{}'", produced, target);
    Ok(())
}

#[tokio::main]
async fn main() {
    let _ = logger::init();
    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}
