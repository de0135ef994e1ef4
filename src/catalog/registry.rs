//! Ordered, case-insensitive registry of library descriptors.

use super::library::{describe_gaps, Category, LibraryDescriptor};
use crate::error::{FfdepsError, Result};
use std::collections::HashMap;

/// Mapping from canonical uppercase name to descriptor.
///
/// Insertion order is preserved for presentation. It says nothing about
/// build order.
#[derive(Debug, Clone, Default)]
pub struct DescriptorRegistry {
    entries: Vec<(String, LibraryDescriptor)>,
    index: HashMap<String, usize>,
}

/// Normalize a dependency name to its registry key.
pub fn canonical_name(name: &str) -> String {
    name.trim().to_uppercase()
}

impl DescriptorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor under `name`.
    ///
    /// Fails with `DuplicateDependency` if the canonical name is taken.
    pub fn insert(&mut self, name: &str, descriptor: LibraryDescriptor) -> Result<()> {
        let key = canonical_name(name);
        if self.index.contains_key(&key) {
            return Err(FfdepsError::DuplicateDependency { name: key });
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, descriptor));
        Ok(())
    }

    /// Look up a descriptor by name, ignoring case.
    pub fn lookup(&self, name: &str) -> Result<&LibraryDescriptor> {
        let key = canonical_name(name);
        self.index
            .get(&key)
            .map(|&i| &self.entries[i].1)
            .ok_or(FfdepsError::UnknownDependency { name: key })
    }

    /// Look up a descriptor and require it to be usable.
    ///
    /// Fails with `UnknownDependency` or `UnusableDescriptor`.
    pub fn lookup_usable(&self, name: &str) -> Result<&LibraryDescriptor> {
        let descriptor = self.lookup(name)?;
        let gaps = descriptor.usability_gaps();
        if gaps.is_empty() {
            Ok(descriptor)
        } else {
            Err(FfdepsError::UnusableDescriptor {
                name: canonical_name(name),
                reason: describe_gaps(&gaps),
            })
        }
    }

    /// Whether a descriptor can be fetched and built.
    pub fn is_usable(descriptor: &LibraryDescriptor) -> bool {
        descriptor.is_usable()
    }

    /// All canonical names in insertion order.
    pub fn all_names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Iterate over `(name, descriptor)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LibraryDescriptor)> {
        self.entries.iter().map(|(n, d)| (n.as_str(), d))
    }

    /// Usable entries in insertion order.
    pub fn usable(&self) -> impl Iterator<Item = (&str, &LibraryDescriptor)> {
        self.iter().filter(|(_, d)| d.is_usable())
    }

    /// Entries of one category in insertion order.
    pub fn by_category(
        &self,
        category: Category,
    ) -> impl Iterator<Item = (&str, &LibraryDescriptor)> {
        self.iter().filter(move |(_, d)| d.category == category)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&canonical_name(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
