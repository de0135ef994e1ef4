//! Per-library registry of recognized configure options.

use super::spec::{normalize_token, OptionDef, OptionSpec};
use crate::error::{FfdepsError, Result};
use std::collections::HashMap;

/// Recognized options of one build script.
///
/// Registration happens while a build profile is set up; lookups are
/// read-only afterwards. Each registry is owned by the profile that built it.
#[derive(Debug, Clone, Default)]
pub struct OptionRegistry {
    specs: Vec<OptionSpec>,
    tokens: HashMap<String, usize>,
}

impl OptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a list of declarations.
    pub fn from_defs<I>(defs: I) -> Result<Self>
    where
        I: IntoIterator<Item = OptionDef>,
    {
        let mut registry = Self::new();
        for def in defs {
            registry.add_option(def)?;
        }
        Ok(registry)
    }

    /// Register a new option.
    ///
    /// Fails with `DuplicateOption` if the name or any alias is already taken;
    /// nothing is registered in that case.
    pub fn add_option(&mut self, def: OptionDef) -> Result<()> {
        let spec = def.into_spec();

        let mut seen: Vec<&str> = Vec::new();
        for token in spec.tokens() {
            if token.is_empty() || self.tokens.contains_key(token) || seen.contains(&token) {
                return Err(FfdepsError::DuplicateOption {
                    name: token.to_string(),
                });
            }
            seen.push(token);
        }

        let index = self.specs.len();
        for token in spec.tokens() {
            self.tokens.insert(token.to_string(), index);
        }
        tracing::trace!(option = %spec.name, "registered configure option");
        self.specs.push(spec);
        Ok(())
    }

    /// Resolve a canonical name or alias, ignoring leading dashes/underscores.
    pub fn resolve(&self, token: &str) -> Option<&OptionSpec> {
        self.tokens
            .get(normalize_token(token))
            .map(|&i| &self.specs[i])
    }

    /// Whether `token` names an option usable without a value.
    pub fn is_plain_argument(&self, token: &str) -> bool {
        self.resolve(token).is_some_and(OptionSpec::accepts_bare)
    }

    /// Whether `token` names an option that carries a value.
    pub fn is_keyword_argument(&self, token: &str) -> bool {
        self.resolve(token).is_some_and(|spec| spec.is_keyword)
    }

    /// Strict lookup for bare use.
    pub fn get_plain_argument(&self, token: &str) -> Result<&OptionSpec> {
        let spec = self.resolve_strict(token)?;
        if spec.accepts_bare() {
            Ok(spec)
        } else {
            Err(FfdepsError::InvalidArgumentUsage {
                token: token.to_string(),
                expected: "plain".to_string(),
            })
        }
    }

    /// Strict lookup for `name=value` use.
    pub fn get_keyword_argument(&self, token: &str) -> Result<&OptionSpec> {
        let spec = self.resolve_strict(token)?;
        if spec.is_keyword {
            Ok(spec)
        } else {
            Err(FfdepsError::InvalidArgumentUsage {
                token: token.to_string(),
                expected: "keyword".to_string(),
            })
        }
    }

    fn resolve_strict(&self, token: &str) -> Result<&OptionSpec> {
        self.resolve(token).ok_or_else(|| FfdepsError::UnknownOption {
            token: token.to_string(),
        })
    }

    /// Registered specs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
