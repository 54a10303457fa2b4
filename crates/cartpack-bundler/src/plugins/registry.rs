//! Plugin registry with execution phases.
//!
//! Steps are kept ordered by phase so that output cleaning always precedes
//! style extraction, which always precedes static mirroring, regardless of
//! the order in which they are added.

use serde::Serialize;

use super::PluginStep;

/// Plugin execution phases
///
/// Steps run in phase order (lower numbers first). Steps sharing a phase keep
/// insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PluginPhase {
    /// Output directory cleanup (always first)
    Clean = 0,

    /// Style extraction and removal of the engine's script stubs
    Extract = 10,

    /// Verbatim copies that bypass the processing pipeline (always last)
    Mirror = 20,
}

/// Ordered list of plugin steps for one descriptor.
///
/// Serializes as a plain sequence of steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PluginRegistry {
    steps: Vec<PluginStep>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Add a step after every step of the same or an earlier phase.
    pub fn add(&mut self, step: PluginStep) {
        let phase = step.phase();
        let position = self
            .steps
            .iter()
            .position(|existing| existing.phase() > phase)
            .unwrap_or(self.steps.len());
        self.steps.insert(position, step);
    }

    pub fn steps(&self) -> &[PluginStep] {
        &self.steps
    }

    /// Step names in execution order.
    pub fn names(&self) -> Vec<&'static str> {
        self.steps.iter().map(PluginStep::name).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.steps.iter().any(|step| step.name() == name)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn mirror() -> PluginStep {
        PluginStep::Mirror {
            from: PathBuf::from("/a/client/default/lib/css"),
            to: PathBuf::from("/a/static/default/css"),
        }
    }

    #[test]
    fn keeps_phase_order_regardless_of_insertion() {
        let mut registry = PluginRegistry::new();
        registry.add(mirror());
        registry.add(PluginStep::ExtractCss);
        registry.add(PluginStep::clean_output(&PathBuf::from("/a/static/css")));
        registry.add(PluginStep::extract_cleanup());

        assert_eq!(
            registry.names(),
            ["clean", "extract-css", "extract-cleanup", "mirror"]
        );
    }

    #[test]
    fn same_phase_keeps_insertion_order() {
        let mut registry = PluginRegistry::new();
        registry.add(PluginStep::extract_cleanup());
        registry.add(PluginStep::ExtractCss);
        assert_eq!(registry.names(), ["extract-cleanup", "extract-css"]);
    }

    #[test]
    fn serializes_as_sequence() {
        let mut registry = PluginRegistry::new();
        registry.add(PluginStep::ExtractCss);
        let value = serde_json::to_value(&registry).unwrap();
        assert_eq!(value, serde_json::json!([{ "plugin": "extract-css" }]));
    }
}
