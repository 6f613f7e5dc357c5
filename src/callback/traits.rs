//! Core callback trait
//!
//! [`Callback`] is the extension point of the training loop: implement the
//! hooks you care about, leave the rest as no-ops. The trainer invokes hooks
//! at fixed lifecycle points and never depends on any of them being
//! overridden.

use super::context::{BatchContext, EpochContext, NamedGradient, TrainContext};
use crate::params::Configurable;

/// Trait for training lifecycle callbacks.
///
/// All hooks default to no-ops with zero side effects, so implementors only
/// override the events they care about. Hooks may read the context and
/// mutate callback-owned state; they must not assume any ordering relative
/// to other callbacks beyond the sequence order chosen by the trainer.
///
/// Every callback is also [`Configurable`], so its declared configuration is
/// visible to the enclosing framework's parameter tree.
///
/// # Example
///
/// ```rust
/// use gancho::callback::{Callback, EpochContext};
/// use gancho::params::Configurable;
///
/// struct LossTrace {
///     seen: Vec<f32>,
/// }
///
/// impl Configurable for LossTrace {}
///
/// impl Callback for LossTrace {
///     fn on_epoch_end(&mut self, ctx: &EpochContext) {
///         self.seen.push(ctx.loss);
///     }
///
///     fn name(&self) -> &'static str {
///         "LossTrace"
///     }
/// }
/// ```
pub trait Callback: Configurable + Send {
    /// Restore runtime state to its baseline.
    ///
    /// Called by the owning trainer on every (re)initialization; may run
    /// multiple times over the callback's life. Configuration is untouched.
    fn reset(&mut self) {}

    /// Reset runtime state and return the callback itself, so configuration
    /// calls can be chained after (re)initialization.
    fn initialize(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self.reset();
        self
    }

    /// Called once at the beginning of training
    fn on_train_begin(&mut self, _ctx: &TrainContext) {}

    /// Called once at the end of training
    fn on_train_end(&mut self, _ctx: &TrainContext) {}

    /// Called at the beginning of each epoch
    fn on_epoch_begin(&mut self, _ctx: &EpochContext) {}

    /// Called at the end of each epoch
    fn on_epoch_end(&mut self, _ctx: &EpochContext) {}

    /// Called at the beginning of each batch
    fn on_batch_begin(&mut self, _ctx: &BatchContext) {}

    /// Called at the end of each batch
    fn on_batch_end(&mut self, _ctx: &BatchContext) {}

    /// Called once per batch, after gradients are computed and strictly
    /// before the optimizer applies any parameter update. Gradients may be
    /// rewritten in place (e.g. clipped).
    fn on_grad_computed(&mut self, _ctx: &BatchContext, _grads: &mut [NamedGradient]) {}

    /// Whether this callback asks the trainer to halt gracefully.
    ///
    /// Polled by the trainer after dispatch; hooks themselves return nothing.
    fn requests_stop(&self) -> bool {
        false
    }

    /// Callback name, used for logging and nested parameter routing
    fn name(&self) -> &'static str {
        "Callback"
    }
}
