//! Callback system for training lifecycle events
//!
//! Provides extensible hooks for training loop events:
//! - `on_train_begin` / `on_train_end`
//! - `on_epoch_begin` / `on_epoch_end`
//! - `on_batch_begin` / `on_batch_end`
//! - `on_grad_computed` (after backward, before the optimizer step)
//!
//! Each hook receives a typed context record for its event kind. Callbacks
//! are held in an ordered [`CallbackManager`] and reset via `initialize()`
//! whenever the owning trainer (re)initializes.
//!
//! # Example
//!
//! ```rust
//! use gancho::callback::{Callback, CallbackManager, EpochContext};
//! use gancho::params::Configurable;
//!
//! struct PrintLoss;
//!
//! impl Configurable for PrintLoss {}
//!
//! impl Callback for PrintLoss {
//!     fn on_epoch_end(&mut self, ctx: &EpochContext) {
//!         println!("Epoch {} finished with loss {:.4}", ctx.epoch, ctx.loss);
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "PrintLoss"
//!     }
//! }
//!
//! let mut manager = CallbackManager::new();
//! manager.add(PrintLoss);
//! manager.initialize();
//! manager.on_epoch_end(&EpochContext {
//!     epoch: 0,
//!     loss: 0.5,
//!     ..Default::default()
//! });
//! ```

#![allow(clippy::field_reassign_with_default)]

mod checkpoint;
mod context;
mod early_stopping;
mod epoch_timer;
mod grad_clip;
mod manager;
mod progress;
mod traits;

// Re-export all public types
pub use checkpoint::{Checkpoint, CheckpointMeta};
pub use context::{BatchContext, EpochContext, NamedGradient, TrainContext};
pub use early_stopping::EarlyStopping;
pub use epoch_timer::EpochTimer;
pub use grad_clip::{global_norm, GradientNormClipping};
pub use manager::CallbackManager;
pub use progress::ProgressLog;
pub use traits::Callback;
