//! Uniform parameter introspection and mutation
//!
//! Every configurable component declares its public parameters once via
//! [`Configurable::param_names`], keeping configuration structurally separate
//! from runtime state. `get_params` / `set_params` then work uniformly across
//! components, and nested components are reached with dotted names
//! (`child.param`), so an enclosing framework can enumerate and reconfigure a
//! whole component tree.
//!
//! # Example
//!
//! ```rust
//! use gancho::callback::EarlyStopping;
//! use gancho::params::{Configurable, ParamMap, ParamValue};
//!
//! let mut es = EarlyStopping::new(5, 0.001);
//! assert_eq!(es.get_params(false)["patience"], ParamValue::Int(5));
//!
//! es.set_params(ParamMap::from([(
//!     "patience".to_string(),
//!     ParamValue::Int(10),
//! )]))
//! .unwrap();
//! assert_eq!(es.get_params(false)["patience"], ParamValue::Int(10));
//! ```

mod error;
mod value;

pub use error::{ParamError, Result};
pub use value::ParamValue;

use std::collections::BTreeMap;

/// Map from parameter name to value, ordered for stable iteration
pub type ParamMap = BTreeMap<String, ParamValue>;

/// Contract for components exposing declared configuration parameters.
///
/// Implementors override the three declaration methods (`param_names`,
/// `get_param`, `set_param`) and, when they own nested configurable
/// components, `children` / `children_mut`. Components without configuration
/// take the defaults and expose an empty parameter set.
pub trait Configurable {
    /// Declared public parameter names. Runtime state is never listed here.
    fn param_names(&self) -> &'static [&'static str] {
        &[]
    }

    /// Current value of a single declared parameter
    fn get_param(&self, _name: &str) -> Option<ParamValue> {
        None
    }

    /// Assign a single declared parameter
    fn set_param(&mut self, name: &str, _value: ParamValue) -> Result<()> {
        Err(ParamError::unknown(name, self.param_names()))
    }

    /// Nested configurable components, keyed by name
    fn children(&self) -> Vec<(String, &dyn Configurable)> {
        Vec::new()
    }

    /// Nested configurable components, keyed by name (mutable)
    fn children_mut(&mut self) -> Vec<(String, &mut dyn Configurable)> {
        Vec::new()
    }

    /// Whether `name` (possibly dotted) resolves to a declared parameter
    fn has_param(&self, name: &str) -> bool {
        match name.split_once('.') {
            Some((head, rest)) => self
                .children()
                .into_iter()
                .any(|(child_name, child)| child_name == head && child.has_param(rest)),
            None => self.param_names().contains(&name),
        }
    }

    /// All resolvable parameter names, nested ones dotted
    fn valid_names(&self) -> Vec<String> {
        let mut valid: Vec<String> = self.param_names().iter().map(|s| (*s).to_string()).collect();
        for (prefix, child) in self.children() {
            for name in child.valid_names() {
                valid.push(format!("{prefix}.{name}"));
            }
        }
        valid
    }

    /// Map of declared parameter name to current value.
    ///
    /// With `deep`, nested components are expanded under dotted names.
    fn get_params(&self, deep: bool) -> ParamMap {
        let mut out = ParamMap::new();
        for &name in self.param_names() {
            if let Some(value) = self.get_param(name) {
                out.insert(name.to_string(), value);
            }
        }
        if deep {
            for (prefix, child) in self.children() {
                for (name, value) in child.get_params(true) {
                    out.insert(format!("{prefix}.{name}"), value);
                }
            }
        }
        out
    }

    /// Assign the given parameters, routing dotted names to children.
    ///
    /// A dotted name goes to the first child that matches its prefix **and**
    /// declares the remaining path, the same resolution `has_param` uses, so
    /// children sharing a name stay individually reachable. Every name is
    /// validated before anything is assigned, so an unknown name fails with
    /// [`ParamError::UnknownParameter`] and leaves the component unchanged.
    fn set_params(&mut self, params: ParamMap) -> Result<()> {
        for name in params.keys() {
            if !self.has_param(name) {
                return Err(ParamError::UnknownParameter {
                    name: name.clone(),
                    valid: self.valid_names(),
                });
            }
        }
        for (name, value) in params {
            match name.split_once('.') {
                Some((head, rest)) => {
                    if let Some((_, child)) = self
                        .children_mut()
                        .into_iter()
                        .find(|(child_name, child)| {
                            child_name.as_str() == head && child.has_param(rest)
                        })
                    {
                        child.set_params(ParamMap::from([(rest.to_string(), value)]))?;
                    }
                }
                None => self.set_param(&name, value)?,
            }
        }
        Ok(())
    }
}
