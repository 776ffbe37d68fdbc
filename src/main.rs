use camera_mouse::engine::{Engine, EngineEvent, NullEngine};
use camera_mouse::gui::CameraMouseApp;
use camera_mouse::params::AllParams;
use camera_mouse::store::AppStore;

use eframe::egui;
use std::sync::atomic::AtomicBool;
use std::sync::{mpsc, Arc};

fn main() -> anyhow::Result<()> {
    camera_mouse::logging::init(cfg!(debug_assertions), None);

    // The real engine attaches here; the null engine keeps the front-end
    // runnable standalone.
    let engine: Arc<dyn Engine> = Arc::new(NullEngine::new());

    let params = match engine.get_parameters() {
        Ok(params) => params,
        Err(err) => {
            tracing::warn!("failed to load parameters, using defaults: {err:#}");
            AllParams::default()
        }
    };
    let store = Arc::new(AppStore::new(params));
    let recenter_requested = Arc::new(AtomicBool::new(false));

    // Transport attach point: an engine transport sends events into `tx`.
    let (tx, rx) = mpsc::channel::<EngineEvent>();
    let _transport_tx = tx;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 600.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Camera Mouse",
        native_options,
        Box::new(move |cc| {
            camera_mouse::events::spawn_pump(
                rx,
                store.clone(),
                recenter_requested.clone(),
                cc.egui_ctx.clone(),
            );
            Box::new(CameraMouseApp::new(store, engine, recenter_requested))
        }),
    )
    .map_err(|err| anyhow::anyhow!("failed to run UI: {err}"))?;

    Ok(())
}
