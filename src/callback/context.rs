//! Typed event records passed to callback hooks
//!
//! One record per event kind, with public fields and `Default` so the
//! owning trainer can grow call sites over time with struct-update syntax.

use serde::{Deserialize, Serialize};

/// Context for `on_train_begin` / `on_train_end`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TrainContext {
    /// Total epochs planned
    pub max_epochs: usize,
    /// Epochs completed so far (0 at train begin)
    pub epochs_run: usize,
    /// Best loss seen so far, if any
    pub best_loss: Option<f32>,
    /// Training duration in seconds
    pub elapsed_secs: f64,
}

/// Context for `on_epoch_begin` / `on_epoch_end`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EpochContext {
    /// Current epoch (0-indexed)
    pub epoch: usize,
    /// Total epochs planned
    pub max_epochs: usize,
    /// Mean training loss of the epoch (0.0 at epoch begin)
    pub loss: f32,
    /// Validation loss, when a validation pass ran
    pub val_loss: Option<f32>,
    /// Current learning rate
    pub lr: f32,
    /// Training duration in seconds
    pub elapsed_secs: f64,
}

/// Context for `on_batch_begin` / `on_batch_end` / `on_grad_computed`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BatchContext {
    /// Current epoch (0-indexed)
    pub epoch: usize,
    /// Current batch within the epoch (0-indexed)
    pub batch: usize,
    /// Total batches per epoch
    pub batches_per_epoch: usize,
    /// Global batch count across epochs
    pub global_step: usize,
    /// Loss of the current batch
    pub loss: f32,
    /// Current learning rate
    pub lr: f32,
}

/// One model parameter's gradient, as handed to `on_grad_computed`.
///
/// The trainer builds one entry per gradient-bearing parameter after the
/// backward pass; callbacks may inspect or rewrite `grad` in place before
/// the optimizer step consumes it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NamedGradient {
    /// Parameter name (e.g. `layers.0.weight`)
    pub name: String,
    /// Gradient values
    pub grad: Vec<f32>,
}

impl NamedGradient {
    /// Create a named gradient entry
    pub fn new(name: impl Into<String>, grad: Vec<f32>) -> Self {
        Self {
            name: name.into(),
            grad,
        }
    }

    /// L2 norm of this gradient
    pub fn norm(&self) -> f32 {
        self.grad.iter().map(|g| g * g).sum::<f32>().sqrt()
    }
}
