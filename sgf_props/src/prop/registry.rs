use std::collections::HashMap;
use std::sync::OnceLock;

use super::{Converter, CONVERTERS};
use crate::RegistryError;

/// Looks up the [`Converter`] for a property code.
///
/// Immutable once built, so it can be shared between threads freely.
#[derive(Debug)]
pub struct Registry {
    converters: &'static [Converter],
    /// Index into `converters` for every property code.
    by_prop: HashMap<&'static str, usize>,
}

impl Registry {
    /// Builds the lookup table, rejecting property codes claimed by more than
    /// one converter.
    pub fn new(converters: &'static [Converter]) -> Result<Self, RegistryError> {
        let mut by_prop = HashMap::new();
        for (idx, converter) in converters.iter().enumerate() {
            for &prop in converter.props {
                if by_prop.insert(prop, idx).is_some() {
                    return Err(RegistryError::DuplicateProperty(prop));
                }
            }
        }
        Ok(Self {
            converters,
            by_prop,
        })
    }

    /// Returns `None` for properties without a converter.
    pub fn lookup(&self, prop: &str) -> Option<&'static Converter> {
        let converters = self.converters;
        self.by_prop.get(prop).map(|&idx| &converters[idx])
    }

    /// All converters, in registration order.
    pub fn converters(&self) -> &'static [Converter] {
        self.converters
    }
}

static REGISTRY: OnceLock<Result<Registry, RegistryError>> = OnceLock::new();

/// The registry of all known converters, built on first use.
///
/// Calling this repeatedly is cheap and always returns the same registry.
pub fn registry() -> Result<&'static Registry, RegistryError> {
    REGISTRY
        .get_or_init(|| Registry::new(&CONVERTERS))
        .as_ref()
        .map_err(Clone::clone)
}
