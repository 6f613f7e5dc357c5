//! Progress logging callback

use super::context::{BatchContext, EpochContext};
use super::traits::Callback;
use crate::params::{Configurable, ParamError, ParamValue};

/// Prints training progress to stdout.
///
/// Logs an epoch summary at every epoch boundary and a loss line every
/// `log_every` batches.
#[derive(Clone, Debug)]
pub struct ProgressLog {
    /// Log every N batches
    log_every: usize,
}

impl ProgressLog {
    /// Create a progress logger with the given batch interval
    pub fn new(log_every: usize) -> Self {
        Self { log_every }
    }
}

impl Default for ProgressLog {
    fn default() -> Self {
        Self { log_every: 10 }
    }
}

impl Configurable for ProgressLog {
    fn param_names(&self) -> &'static [&'static str] {
        &["log_every"]
    }

    fn get_param(&self, name: &str) -> Option<ParamValue> {
        match name {
            "log_every" => Some(ParamValue::from(self.log_every)),
            _ => None,
        }
    }

    fn set_param(&mut self, name: &str, value: ParamValue) -> Result<(), ParamError> {
        match name {
            "log_every" => {
                self.log_every = value
                    .as_usize()
                    .ok_or_else(|| ParamError::mismatch(name, "usize", value))?;
            }
            _ => return Err(ParamError::unknown(name, self.param_names())),
        }
        Ok(())
    }
}

impl Callback for ProgressLog {
    fn on_epoch_begin(&mut self, ctx: &EpochContext) {
        println!(
            "Epoch {}/{} starting (lr: {:.2e})",
            ctx.epoch + 1,
            ctx.max_epochs,
            ctx.lr
        );
    }

    fn on_epoch_end(&mut self, ctx: &EpochContext) {
        let val_str = ctx
            .val_loss
            .map(|v| format!(", val_loss: {v:.4}"))
            .unwrap_or_default();

        println!(
            "Epoch {}/{}: loss: {:.4}{} ({:.1}s)",
            ctx.epoch + 1,
            ctx.max_epochs,
            ctx.loss,
            val_str,
            ctx.elapsed_secs
        );
    }

    fn on_batch_end(&mut self, ctx: &BatchContext) {
        if ctx.batch > 0 && ctx.batch.is_multiple_of(self.log_every) {
            println!(
                "  Batch {}/{}: loss: {:.4}",
                ctx.batch, ctx.batches_per_epoch, ctx.loss
            );
        }
    }

    fn name(&self) -> &'static str {
        "ProgressLog"
    }
}
