//! Frame rendering as a detached background job.
//!
//! # Responsibilities
//! - Validate render inputs synchronously, with distinct stable errors
//! - Run the render itself on a detached task
//! - Store completed outputs in the shared single-slot cell

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use thiserror::Error;

use crate::service::Value;

/// Single-slot storage for the most recent completed render.
///
/// Holds at most one output; a completing job overwrites whatever is
/// there, whether or not another job is still running.
#[derive(Debug, Clone, Default)]
pub struct RenderSlot {
    inner: Arc<Mutex<Option<PathBuf>>>,
}

impl RenderSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a completed output. Last writer wins.
    pub fn store(&self, output: PathBuf) {
        *self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(output);
    }

    /// The most recent completed output, if any.
    pub fn current(&self) -> Option<PathBuf> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

/// Validation failures for render inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidateError {
    #[error("Input is not a file.")]
    NotAFile,
    #[error("File {} does not exist.", .0.display())]
    Missing(PathBuf),
    #[error("File {} is not a .blend file.", .0.display())]
    NotBlend(PathBuf),
}

/// Check that the input references an existing `.blend` file.
pub fn check_blend_file(input: &Value) -> Result<PathBuf, ValidateError> {
    let Value::File(path) = input else {
        return Err(ValidateError::NotAFile);
    };

    if !path.exists() {
        return Err(ValidateError::Missing(path.clone()));
    }

    let is_blend = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(".blend"));
    if !is_blend {
        return Err(ValidateError::NotBlend(path.clone()));
    }

    Ok(path.clone())
}

/// Render a frame of a blend file.
///
/// Validates synchronously; on failure nothing is started and the error
/// is only logged. On success the render runs on a detached task whose
/// result lands in `slot`. The call itself always returns `Null`
/// immediately, so callers discover the output by polling the slot.
pub fn render_frame(input: &Value, slot: &RenderSlot) -> Value {
    match check_blend_file(input) {
        Ok(blend) => {
            let slot = slot.clone();
            tokio::spawn(async move {
                tracing::info!(file = %blend.display(), "Rendering frame");
                match run_render_process(&blend).await {
                    Some(image) => slot.store(image),
                    None => {
                        tracing::error!(
                            file = %blend.display(),
                            "Error while rendering frame"
                        );
                    }
                }
            });
        }
        Err(e) => tracing::error!(error = %e, "Render input rejected"),
    }

    Value::Null
}

/// The (slow) external render.
///
/// TODO: drive a real blender process via `tokio::process::Command`
/// instead of sleeping and deriving the output name.
async fn run_render_process(blend: &Path) -> Option<PathBuf> {
    tokio::time::sleep(Duration::from_secs(5)).await;
    Some(blend.with_extension("png"))
}
