//! Checkpoint callback writing per-save metadata

use super::context::EpochContext;
use super::traits::Callback;
use crate::params::{Configurable, ParamError, ParamValue};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Marks checkpoints every N epochs and/or when a new best loss is reached.
///
/// Writes a small JSON metadata file per save; the trainer owns weight
/// serialization and can watch `last_saved_epoch()` to know when to persist.
/// Validation loss is monitored when present, training loss otherwise.
///
/// `save_every` of 0 disables periodic saves.
#[derive(Clone, Debug)]
pub struct Checkpoint {
    /// Directory to write metadata into
    dir: PathBuf,
    /// Save every N epochs (0 = only save best)
    save_every: usize,
    /// Save when the monitored loss improves
    save_best: bool,
    state: CheckpointState,
}

#[derive(Clone, Debug, Default)]
struct CheckpointState {
    best_loss: Option<f32>,
    last_saved_epoch: Option<usize>,
}

/// Metadata written alongside each checkpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckpointMeta {
    pub epoch: usize,
    pub loss: f32,
    pub is_best: bool,
    pub unix_secs: u64,
}

impl Checkpoint {
    /// Create a checkpoint callback saving best-loss markers to `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            save_every: 0,
            save_best: true,
            state: CheckpointState::default(),
        }
    }

    /// Configure to also save every N epochs
    pub fn save_every(mut self, epochs: usize) -> Self {
        self.save_every = epochs;
        self
    }

    /// Configure whether best-loss saves happen
    pub fn save_best(mut self, save: bool) -> Self {
        self.save_best = save;
        self
    }

    /// Metadata path for a periodic save
    pub fn epoch_path(&self, epoch: usize) -> PathBuf {
        self.dir.join(format!("checkpoint_epoch_{epoch}.json"))
    }

    /// Metadata path for the best save
    pub fn best_path(&self) -> PathBuf {
        self.dir.join("checkpoint_best.json")
    }

    /// Epoch of the most recent save since the last reset
    pub fn last_saved_epoch(&self) -> Option<usize> {
        self.state.last_saved_epoch
    }

    fn save(&mut self, epoch: usize, loss: f32, is_best: bool) {
        if let Err(err) = fs::create_dir_all(&self.dir) {
            eprintln!("Checkpoint: cannot create {}: {err}", self.dir.display());
            return;
        }

        let meta = CheckpointMeta {
            epoch,
            loss,
            is_best,
            unix_secs: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
        };
        let path = if is_best {
            self.best_path()
        } else {
            self.epoch_path(epoch)
        };

        match serde_json::to_string_pretty(&meta) {
            Ok(json) => {
                if let Err(err) = fs::write(&path, json) {
                    eprintln!("Checkpoint: cannot write {}: {err}", path.display());
                    return;
                }
                self.state.last_saved_epoch = Some(epoch);
            }
            Err(err) => eprintln!("Checkpoint: cannot serialize metadata: {err}"),
        }
    }
}

impl Configurable for Checkpoint {
    fn param_names(&self) -> &'static [&'static str] {
        &["dir", "save_every", "save_best"]
    }

    fn get_param(&self, name: &str) -> Option<ParamValue> {
        match name {
            "dir" => Some(ParamValue::from(self.dir.display().to_string())),
            "save_every" => Some(ParamValue::from(self.save_every)),
            "save_best" => Some(ParamValue::from(self.save_best)),
            _ => None,
        }
    }

    fn set_param(&mut self, name: &str, value: ParamValue) -> Result<(), ParamError> {
        match name {
            "dir" => {
                self.dir = PathBuf::from(
                    value
                        .as_str()
                        .ok_or_else(|| ParamError::mismatch(name, "str", value.clone()))?,
                );
            }
            "save_every" => {
                self.save_every = value
                    .as_usize()
                    .ok_or_else(|| ParamError::mismatch(name, "usize", value))?;
            }
            "save_best" => {
                self.save_best = value
                    .as_bool()
                    .ok_or_else(|| ParamError::mismatch(name, "bool", value))?;
            }
            _ => return Err(ParamError::unknown(name, self.param_names())),
        }
        Ok(())
    }
}

impl Callback for Checkpoint {
    fn reset(&mut self) {
        self.state = CheckpointState::default();
    }

    fn on_epoch_end(&mut self, ctx: &EpochContext) {
        let loss = ctx.val_loss.unwrap_or(ctx.loss);

        let periodic = self.save_every > 0 && (ctx.epoch + 1).is_multiple_of(self.save_every);
        let improved = self
            .state
            .best_loss
            .map(|best| loss < best)
            .unwrap_or(true);

        if improved {
            self.state.best_loss = Some(loss);
        }
        if self.save_best && improved {
            self.save(ctx.epoch, loss, true);
        }
        if periodic {
            self.save(ctx.epoch, loss, false);
        }
    }

    fn name(&self) -> &'static str {
        "Checkpoint"
    }
}
