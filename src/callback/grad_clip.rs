//! Gradient norm clipping callback

use super::context::{BatchContext, NamedGradient};
use super::traits::Callback;
use crate::params::{Configurable, ParamError, ParamValue};

/// Global L2 norm over all named gradients
pub fn global_norm(grads: &[NamedGradient]) -> f32 {
    grads
        .iter()
        .flat_map(|p| p.grad.iter())
        .map(|g| g * g)
        .sum::<f32>()
        .sqrt()
}

/// Clips gradients so their global L2 norm never exceeds `max_norm`.
///
/// Runs in `on_grad_computed`, after the backward pass and before the
/// optimizer step. All gradients are rescaled by the same factor, so the
/// update direction is preserved.
#[derive(Clone, Debug)]
pub struct GradientNormClipping {
    /// Maximum allowed global L2 norm
    max_norm: f32,
}

impl GradientNormClipping {
    /// Create a clipping callback with the given norm bound
    pub fn new(max_norm: f32) -> Self {
        Self { max_norm }
    }
}

impl Configurable for GradientNormClipping {
    fn param_names(&self) -> &'static [&'static str] {
        &["max_norm"]
    }

    fn get_param(&self, name: &str) -> Option<ParamValue> {
        match name {
            "max_norm" => Some(ParamValue::from(self.max_norm)),
            _ => None,
        }
    }

    fn set_param(&mut self, name: &str, value: ParamValue) -> Result<(), ParamError> {
        match name {
            "max_norm" => {
                self.max_norm = value
                    .as_f32()
                    .ok_or_else(|| ParamError::mismatch(name, "float", value))?;
            }
            _ => return Err(ParamError::unknown(name, self.param_names())),
        }
        Ok(())
    }
}

impl Callback for GradientNormClipping {
    fn on_grad_computed(&mut self, _ctx: &BatchContext, grads: &mut [NamedGradient]) {
        let norm = global_norm(grads);
        if norm > self.max_norm && norm > 0.0 {
            let scale = self.max_norm / norm;
            for param in grads.iter_mut() {
                for g in &mut param.grad {
                    *g *= scale;
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "GradientNormClipping"
    }
}
