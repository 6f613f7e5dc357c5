//! Callback manager for dispatching events to multiple callbacks

use super::context::{BatchContext, EpochContext, NamedGradient, TrainContext};
use super::traits::Callback;
use crate::params::Configurable;

/// Holds an ordered sequence of callbacks and dispatches lifecycle events.
///
/// Callbacks fire in insertion order for every event. The manager is itself
/// [`Configurable`]: each callback appears as a child keyed by its `name()`,
/// so nested configuration is reachable with dotted names such as
/// `EarlyStopping.patience`. When two callbacks share a name, a dotted name
/// reaches the first one registered that declares the parameter.
pub struct CallbackManager {
    callbacks: Vec<Box<dyn Callback>>,
}

impl CallbackManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    /// Append a callback to the dispatch order
    pub fn add<C: Callback + 'static>(&mut self, callback: C) {
        self.callbacks.push(Box::new(callback));
    }

    /// Check if no callbacks are registered
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Get number of callbacks
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Reset every callback's runtime state and return the manager for
    /// chaining. Called by the trainer on every (re)initialization.
    pub fn initialize(&mut self) -> &mut Self {
        for cb in &mut self.callbacks {
            cb.reset();
        }
        self
    }

    /// Whether any callback asks the trainer to halt
    pub fn requests_stop(&self) -> bool {
        self.callbacks.iter().any(|cb| cb.requests_stop())
    }

    /// Fire train begin event
    pub fn on_train_begin(&mut self, ctx: &TrainContext) {
        for cb in &mut self.callbacks {
            cb.on_train_begin(ctx);
        }
    }

    /// Fire train end event
    pub fn on_train_end(&mut self, ctx: &TrainContext) {
        for cb in &mut self.callbacks {
            cb.on_train_end(ctx);
        }
    }

    /// Fire epoch begin event
    pub fn on_epoch_begin(&mut self, ctx: &EpochContext) {
        for cb in &mut self.callbacks {
            cb.on_epoch_begin(ctx);
        }
    }

    /// Fire epoch end event
    pub fn on_epoch_end(&mut self, ctx: &EpochContext) {
        for cb in &mut self.callbacks {
            cb.on_epoch_end(ctx);
        }
    }

    /// Fire batch begin event
    pub fn on_batch_begin(&mut self, ctx: &BatchContext) {
        for cb in &mut self.callbacks {
            cb.on_batch_begin(ctx);
        }
    }

    /// Fire batch end event
    pub fn on_batch_end(&mut self, ctx: &BatchContext) {
        for cb in &mut self.callbacks {
            cb.on_batch_end(ctx);
        }
    }

    /// Fire post-gradient event. Each callback sees the gradients as left
    /// by the callbacks before it in the sequence.
    pub fn on_grad_computed(&mut self, ctx: &BatchContext, grads: &mut [NamedGradient]) {
        for cb in &mut self.callbacks {
            cb.on_grad_computed(ctx, grads);
        }
    }
}

impl Default for CallbackManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Configurable for CallbackManager {
    fn children(&self) -> Vec<(String, &dyn Configurable)> {
        self.callbacks
            .iter()
            .map(|cb| {
                let cfg: &dyn Configurable = cb.as_ref();
                (cb.name().to_string(), cfg)
            })
            .collect()
    }

    fn children_mut(&mut self) -> Vec<(String, &mut dyn Configurable)> {
        self.callbacks
            .iter_mut()
            .map(|cb| {
                let name = cb.name().to_string();
                let cfg: &mut dyn Configurable = cb.as_mut();
                (name, cfg)
            })
            .collect()
    }
}
