//! gancho — training-loop callback toolkit
//!
//! An extension-point contract for model-training loops: a [`Callback`]
//! trait whose implementors observe and react to lifecycle events without
//! owning the loop itself, plus a uniform [`Configurable`] surface so an
//! enclosing estimator framework can enumerate and mutate nested callback
//! configuration.
//!
//! The trainer is deliberately out of scope; it consumes this crate as an
//! ordered [`CallbackManager`], dispatches the seven lifecycle hooks, calls
//! `initialize()` on every (re)start, and polls `requests_stop()`.
//!
//! # Example
//!
//! ```rust
//! use gancho::{CallbackManager, EarlyStopping, EpochContext};
//!
//! let mut callbacks = CallbackManager::new();
//! callbacks.add(EarlyStopping::new(2, 0.001));
//! callbacks.initialize();
//!
//! // The trainer drives epochs; loss stops improving here
//! for epoch in 0..5 {
//!     callbacks.on_epoch_end(&EpochContext {
//!         epoch,
//!         loss: 1.0,
//!         ..Default::default()
//!     });
//!     if callbacks.requests_stop() {
//!         break;
//!     }
//! }
//! assert!(callbacks.requests_stop());
//! ```

pub mod callback;
pub mod params;

pub use callback::{
    global_norm, BatchContext, Callback, CallbackManager, Checkpoint, CheckpointMeta,
    EarlyStopping, EpochContext, EpochTimer, GradientNormClipping, NamedGradient, ProgressLog,
    TrainContext,
};
pub use params::{Configurable, ParamError, ParamMap, ParamValue};
