use std::path::Path;
use std::sync::mpsc;

use anyhow::Context;
use tracing::info;

use framepoint_core::io::probe::probe_bytes;
use framepoint_core::io::sidecar::{load_position, save_position};
use framepoint_core::metrics::ImageMetrics;
use framepoint_core::options::FramingOptions;
use framepoint_core::position::FramePosition;

use crate::convert::to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("framepoint-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadImage { path, options } => {
                match load_image(&path, &options) {
                    Ok((metrics, pixels, stored)) => {
                        info!(path = %path.display(), width = metrics.width(), height = metrics.height(), "image loaded");
                        send(
                            &result_tx,
                            &ctx,
                            WorkerResult::ImageLoaded {
                                path,
                                metrics,
                                pixels,
                                stored,
                            },
                        );
                    }
                    Err(err) => {
                        send(
                            &result_tx,
                            &ctx,
                            WorkerResult::LoadFailed {
                                path,
                                message: format!("{err:#}"),
                            },
                        );
                    }
                }
            }

            WorkerCommand::SavePosition {
                image_path,
                position,
            } => match save_position(&image_path, &position) {
                Ok(sidecar) => {
                    send(
                        &result_tx,
                        &ctx,
                        WorkerResult::PositionSaved { position, sidecar },
                    );
                }
                Err(err) => {
                    send(
                        &result_tx,
                        &ctx,
                        WorkerResult::Error {
                            message: format!("Save failed: {err}"),
                        },
                    );
                }
            },

            WorkerCommand::ImportOptions { path } => match import_options(&path) {
                Ok(options) => {
                    send(
                        &result_tx,
                        &ctx,
                        WorkerResult::OptionsImported { path, options },
                    );
                }
                Err(err) => {
                    send(
                        &result_tx,
                        &ctx,
                        WorkerResult::Error {
                            message: format!("Import failed: {err:#}"),
                        },
                    );
                }
            },

            WorkerCommand::ExportOptions { path, options } => {
                match export_options(&path, &options) {
                    Ok(()) => {
                        send(
                            &result_tx,
                            &ctx,
                            WorkerResult::Log {
                                message: format!("Options exported to {}", path.display()),
                            },
                        );
                    }
                    Err(err) => {
                        send(
                            &result_tx,
                            &ctx,
                            WorkerResult::Error {
                                message: format!("Export failed: {err:#}"),
                            },
                        );
                    }
                }
            }
        }
    }
}

/// Read the file once: the same bytes feed the dimension probe and the
/// texture decode. The stored position, if any, is healed against the
/// freshly probed metrics. A broken sidecar must not block viewing the
/// image, so it only logs.
fn load_image(
    path: &Path,
    options: &FramingOptions,
) -> anyhow::Result<(ImageMetrics, egui::ColorImage, Option<FramePosition>)> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let metrics = probe_bytes(&bytes)?;
    let decoded = image::load_from_memory(&bytes)
        .with_context(|| format!("Failed to decode {}", path.display()))?;

    let stored = match load_position(path, &metrics, options) {
        Ok(stored) => stored,
        Err(err) => {
            tracing::warn!(path = %path.display(), "unreadable position sidecar: {err}");
            None
        }
    };

    Ok((metrics, to_color_image(&decoded), stored))
}

fn import_options(path: &Path) -> anyhow::Result<FramingOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(toml::from_str(&text)?)
}

fn export_options(path: &Path, options: &FramingOptions) -> anyhow::Result<()> {
    let text = toml::to_string_pretty(options)?;
    std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
