//! Early stopping callback to halt training when loss plateaus

use super::context::EpochContext;
use super::traits::Callback;
use crate::params::{Configurable, ParamError, ParamValue};

/// Early stopping callback to halt training when loss plateaus.
///
/// Monitors a loss and raises its stop flag if no improvement of at least
/// `min_delta` is seen for `patience` epochs; the trainer observes the flag
/// through `requests_stop()` after epoch dispatch.
///
/// # Example
///
/// ```rust
/// use gancho::callback::{Callback, EarlyStopping};
///
/// // Stop if no improvement for 5 epochs, min improvement 0.001
/// let early_stop = EarlyStopping::new(5, 0.001);
/// assert!(!early_stop.requests_stop());
/// ```
#[derive(Clone, Debug)]
pub struct EarlyStopping {
    /// Number of epochs to wait for improvement
    patience: usize,
    /// Minimum improvement to reset patience
    min_delta: f32,
    /// Monitor validation loss instead of training loss
    monitor_valid: bool,
    state: EarlyStopState,
}

/// Runtime state, rebuilt from scratch on every reset
#[derive(Clone, Debug, Default)]
struct EarlyStopState {
    best_loss: Option<f32>,
    epochs_without_improvement: usize,
    stop_requested: bool,
}

impl EarlyStopping {
    /// Create new early stopping callback
    pub fn new(patience: usize, min_delta: f32) -> Self {
        Self {
            patience,
            min_delta,
            monitor_valid: false,
            state: EarlyStopState::default(),
        }
    }

    /// Configure to monitor validation loss (requires validation data).
    ///
    /// When enabled, early stopping considers validation loss only. If
    /// validation loss is not available, training loss is used as fallback.
    pub fn monitor_validation(mut self) -> Self {
        self.monitor_valid = true;
        self
    }

    /// Best loss observed since the last reset
    pub fn best_loss(&self) -> Option<f32> {
        self.state.best_loss
    }

    /// Consecutive epochs without improvement
    pub fn epochs_without_improvement(&self) -> usize {
        self.state.epochs_without_improvement
    }

    /// Check if loss improved. Non-finite losses (diverged runs) never count
    /// as improvements and never become the best loss.
    fn check_improvement(&mut self, loss: f32) -> bool {
        if !loss.is_finite() {
            self.state.epochs_without_improvement += 1;
            return false;
        }
        match self.state.best_loss {
            Some(best) if loss >= best - self.min_delta => {
                self.state.epochs_without_improvement += 1;
                false
            }
            _ => {
                self.state.best_loss = Some(loss);
                self.state.epochs_without_improvement = 0;
                true
            }
        }
    }
}

impl Configurable for EarlyStopping {
    fn param_names(&self) -> &'static [&'static str] {
        &["patience", "min_delta", "monitor_valid"]
    }

    fn get_param(&self, name: &str) -> Option<ParamValue> {
        match name {
            "patience" => Some(ParamValue::from(self.patience)),
            "min_delta" => Some(ParamValue::from(self.min_delta)),
            "monitor_valid" => Some(ParamValue::from(self.monitor_valid)),
            _ => None,
        }
    }

    fn set_param(&mut self, name: &str, value: ParamValue) -> Result<(), ParamError> {
        match name {
            "patience" => {
                self.patience = value
                    .as_usize()
                    .ok_or_else(|| ParamError::mismatch(name, "usize", value))?;
            }
            "min_delta" => {
                self.min_delta = value
                    .as_f32()
                    .ok_or_else(|| ParamError::mismatch(name, "float", value))?;
            }
            "monitor_valid" => {
                self.monitor_valid = value
                    .as_bool()
                    .ok_or_else(|| ParamError::mismatch(name, "bool", value))?;
            }
            _ => return Err(ParamError::unknown(name, self.param_names())),
        }
        Ok(())
    }
}

impl Callback for EarlyStopping {
    fn reset(&mut self) {
        self.state = EarlyStopState::default();
    }

    fn on_epoch_end(&mut self, ctx: &EpochContext) {
        // Use val_loss when monitoring validation (with fallback), otherwise training loss
        let loss = if self.monitor_valid {
            ctx.val_loss.unwrap_or(ctx.loss)
        } else {
            ctx.loss
        };
        self.check_improvement(loss);

        if self.state.epochs_without_improvement >= self.patience {
            eprintln!(
                "EarlyStopping: no improvement for {} epochs (best loss: {:.4})",
                self.patience,
                self.state.best_loss.unwrap_or(f32::INFINITY)
            );
            self.state.stop_requested = true;
        }
    }

    fn requests_stop(&self) -> bool {
        self.state.stop_requested
    }

    fn name(&self) -> &'static str {
        "EarlyStopping"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamMap;

    #[test]
    fn test_early_stopping_patience() {
        let mut es = EarlyStopping::new(3, 0.001);
        let mut ctx = EpochContext::default();

        // First epoch - establishes baseline
        ctx.loss = 1.0;
        es.on_epoch_end(&ctx);
        assert!(!es.requests_stop());

        // Improvement
        ctx.loss = 0.9;
        ctx.epoch = 1;
        es.on_epoch_end(&ctx);
        assert!(!es.requests_stop());

        // No improvement (within delta)
        ctx.loss = 0.899;
        ctx.epoch = 2;
        es.on_epoch_end(&ctx);
        assert!(!es.requests_stop());

        // Still no improvement
        ctx.loss = 0.899;
        ctx.epoch = 3;
        es.on_epoch_end(&ctx);
        assert!(!es.requests_stop());

        // Patience of 3 exhausted
        ctx.loss = 0.899;
        ctx.epoch = 4;
        es.on_epoch_end(&ctx);
        assert!(es.requests_stop());
    }

    #[test]
    fn test_early_stopping_improvement_resets() {
        let mut es = EarlyStopping::new(2, 0.01);
        let mut ctx = EpochContext::default();

        ctx.loss = 1.0;
        es.on_epoch_end(&ctx);

        ctx.loss = 1.0;
        ctx.epoch = 1;
        es.on_epoch_end(&ctx);
        assert_eq!(es.epochs_without_improvement(), 1);

        // Improvement resets counter
        ctx.loss = 0.5;
        ctx.epoch = 2;
        es.on_epoch_end(&ctx);
        assert_eq!(es.epochs_without_improvement(), 0);
        assert!(!es.requests_stop());
    }

    #[test]
    fn test_early_stopping_monitor_validation() {
        let mut es = EarlyStopping::new(3, 0.001).monitor_validation();

        let mut ctx = EpochContext::default();
        ctx.loss = 1.0;
        ctx.val_loss = Some(0.5);
        es.on_epoch_end(&ctx);
        assert_eq!(es.best_loss(), Some(0.5));

        // Fallback to training loss without validation
        let mut es = EarlyStopping::new(3, 0.001).monitor_validation();
        ctx.val_loss = None;
        es.on_epoch_end(&ctx);
        assert_eq!(es.best_loss(), Some(1.0));
    }

    #[test]
    fn test_early_stopping_reset_clears_runtime_state() {
        let mut es = EarlyStopping::new(1, 0.001);
        let mut ctx = EpochContext::default();
        ctx.loss = 0.5;
        es.on_epoch_end(&ctx);
        ctx.epoch = 1;
        es.on_epoch_end(&ctx);
        assert!(es.requests_stop());

        es.reset();
        assert!(!es.requests_stop());
        assert_eq!(es.best_loss(), None);
        assert_eq!(es.epochs_without_improvement(), 0);
    }

    #[test]
    fn test_initialize_chains_into_configuration() {
        let mut es = EarlyStopping::new(5, 0.001);
        es.initialize()
            .set_params(ParamMap::from([(
                "patience".to_string(),
                ParamValue::Int(10),
            )]))
            .unwrap();
        assert_eq!(es.get_params(false)["patience"], ParamValue::Int(10));
    }

    #[test]
    fn test_get_params_hides_runtime_state() {
        let mut es = EarlyStopping::new(5, 0.001);
        let mut ctx = EpochContext::default();
        ctx.loss = 0.3;
        es.on_epoch_end(&ctx);

        let params = es.get_params(true);
        assert_eq!(params["patience"], ParamValue::Int(5));
        assert_eq!(params.len(), 3);
        assert!(!params.contains_key("best_loss"));
        assert!(!params.contains_key("epochs_without_improvement"));
    }

    #[test]
    fn test_set_params_updates_only_named_param() {
        let mut es = EarlyStopping::new(5, 0.001);
        es.set_params(ParamMap::from([(
            "patience".to_string(),
            ParamValue::Int(10),
        )]))
        .unwrap();

        let params = es.get_params(false);
        assert_eq!(params["patience"], ParamValue::Int(10));
        assert!((params["min_delta"].as_f32().unwrap() - 0.001).abs() < 1e-6);
        assert_eq!(params["monitor_valid"], ParamValue::Bool(false));
    }

    #[test]
    fn test_set_params_unknown_name_fails_unchanged() {
        let mut es = EarlyStopping::new(5, 0.001);
        let err = es
            .set_params(ParamMap::from([(
                "unknown_field".to_string(),
                ParamValue::Int(1),
            )]))
            .unwrap_err();
        assert!(matches!(err, ParamError::UnknownParameter { .. }));
        assert_eq!(es.get_params(false)["patience"], ParamValue::Int(5));
    }

    #[test]
    fn test_set_params_type_mismatch() {
        let mut es = EarlyStopping::new(5, 0.001);
        let err = es
            .set_params(ParamMap::from([(
                "patience".to_string(),
                ParamValue::Str("five".into()),
            )]))
            .unwrap_err();
        assert!(matches!(err, ParamError::TypeMismatch { .. }));
    }

    #[test]
    fn test_instances_do_not_share_state() {
        let mut a = EarlyStopping::new(5, 0.001);
        let b = EarlyStopping::new(5, 0.001);

        a.set_params(ParamMap::from([(
            "patience".to_string(),
            ParamValue::Int(10),
        )]))
        .unwrap();
        let mut ctx = EpochContext::default();
        ctx.loss = 0.5;
        a.on_epoch_end(&ctx);

        assert_eq!(b.get_params(false)["patience"], ParamValue::Int(5));
        assert_eq!(b.best_loss(), None);
    }

    #[test]
    fn test_nan_loss_never_becomes_best_and_trips_patience() {
        let mut es = EarlyStopping::new(2, 0.001);
        let mut ctx = EpochContext::default();

        // A run that diverges immediately: NaN every epoch
        for epoch in 0..2 {
            ctx.epoch = epoch;
            ctx.loss = f32::NAN;
            es.on_epoch_end(&ctx);
        }
        assert!(es.requests_stop());
        assert_eq!(es.best_loss(), None);
    }

    #[test]
    fn test_non_finite_loss_counts_as_no_improvement() {
        let mut es = EarlyStopping::new(3, 0.001);
        let mut ctx = EpochContext::default();

        ctx.loss = 1.0;
        es.on_epoch_end(&ctx);
        assert_eq!(es.best_loss(), Some(1.0));

        // Divergence after a healthy start
        ctx.epoch = 1;
        ctx.loss = f32::INFINITY;
        es.on_epoch_end(&ctx);
        assert_eq!(es.epochs_without_improvement(), 1);

        ctx.epoch = 2;
        ctx.loss = f32::NAN;
        es.on_epoch_end(&ctx);
        assert_eq!(es.epochs_without_improvement(), 2);
        assert_eq!(es.best_loss(), Some(1.0));

        ctx.epoch = 3;
        ctx.loss = f32::NAN;
        es.on_epoch_end(&ctx);
        assert!(es.requests_stop());
    }

    #[test]
    fn test_early_stopping_name() {
        let es = EarlyStopping::new(3, 0.001);
        assert_eq!(es.name(), "EarlyStopping");
    }

    #[test]
    fn test_early_stopping_clone() {
        let es = EarlyStopping::new(5, 0.01);
        let cloned = es.clone();
        assert_eq!(cloned.get_params(false)["patience"], ParamValue::Int(5));
    }
}
