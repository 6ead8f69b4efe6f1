//! Ordered option registry
//!
//! Built once from the fixed option table, filtered by [`Features`]. The order
//! of registration is kept for parsing and for the help text.

use super::descriptor::{OptionDescriptor, option_table};
use super::key::{Features, OptionKey};

/// Ordered collection of the options registered for one feature set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRegistry {
    features: Features,
    descriptors: Vec<OptionDescriptor>,
}

impl OptionRegistry {
    /// Register every option whose group is enabled by `features`
    pub fn build(features: Features) -> Self {
        let descriptors: Vec<OptionDescriptor> = option_table()
            .into_iter()
            .filter(|descriptor| features.includes(descriptor.group()))
            .collect();

        debug_assert!(names_are_unique(&descriptors), "duplicate option spelling");

        tracing::trace!(
            "Registered {} options (gpu: {})",
            descriptors.len(),
            features.gpu
        );

        Self {
            features,
            descriptors,
        }
    }

    pub fn features(&self) -> Features {
        self.features
    }

    /// Descriptors in registration order
    pub fn iter(&self) -> impl Iterator<Item = &OptionDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Descriptor registered for `key`, if its group is enabled
    pub fn descriptor(&self, key: OptionKey) -> Option<&OptionDescriptor> {
        self.descriptors.iter().find(|descriptor| descriptor.key() == key)
    }

    /// Find the descriptor spelled exactly `token` (short or long form)
    pub fn lookup(&self, token: &str) -> Option<&OptionDescriptor> {
        self.position(token).map(|index| self.descriptor_at(index))
    }

    pub(crate) fn position(&self, token: &str) -> Option<usize> {
        self.descriptors
            .iter()
            .position(|descriptor| descriptor.matches(token))
    }

    pub(crate) fn descriptor_at(&self, index: usize) -> &OptionDescriptor {
        &self.descriptors[index]
    }

    pub(crate) fn descriptor_mut(&mut self, index: usize) -> &mut OptionDescriptor {
        &mut self.descriptors[index]
    }
}

fn names_are_unique(descriptors: &[OptionDescriptor]) -> bool {
    let mut seen = std::collections::HashSet::new();
    descriptors
        .iter()
        .flat_map(|descriptor| descriptor.short_name().into_iter().chain([descriptor.long_name()]))
        .all(|name| seen.insert(name))
}
