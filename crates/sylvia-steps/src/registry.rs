//! Fixed-order registry of the SRL steps.

use serde::Serialize;

use sylvia_core::LearningPathEntry;

use crate::step::Step;
use crate::steps::{
    FeedbackStep, GoalsStep, ReflectionStep, ResourcesStep, StrategiesStep, TaskAnalysisStep,
    TimePlanStep, TutorialStep,
};

/// Navigation entry for the left panel
#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub description: String,
}

/// Ordered collection of steps, iterated in registration order
pub struct StepRegistry {
    steps: Vec<Box<dyn Step>>,
}

impl StepRegistry {
    /// Registry with the standard SRL workflow order
    pub fn with_default_steps() -> Self {
        Self {
            steps: vec![
                Box::new(TutorialStep),
                Box::new(GoalsStep),
                Box::new(TaskAnalysisStep),
                Box::new(StrategiesStep),
                Box::new(TimePlanStep),
                Box::new(ResourcesStep),
                Box::new(ReflectionStep),
                Box::new(FeedbackStep),
            ],
        }
    }

    /// Look up a step by id
    pub fn get(&self, step_id: &str) -> Option<&dyn Step> {
        self.steps
            .iter()
            .find(|s| s.id() == step_id)
            .map(Box::as_ref)
    }

    /// Look up a step, falling back to the first registered one
    pub fn get_or_first(&self, step_id: &str) -> &dyn Step {
        self.get(step_id)
            .unwrap_or_else(|| self.steps[0].as_ref())
    }

    /// Steps in registration order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Step> {
        self.steps.iter().map(Box::as_ref)
    }

    /// Navigation items in registration order
    pub fn nav_items(&self) -> Vec<NavItem> {
        self.iter()
            .map(|s| NavItem {
                id: s.id().to_string(),
                label: s.label().to_string(),
                icon: s.icon().to_string(),
                description: s.description().to_string(),
            })
            .collect()
    }

    /// Seed a learning path, one entry per step in order
    pub fn learning_path(&self) -> Vec<LearningPathEntry> {
        self.iter()
            .map(|s| LearningPathEntry::new(s.id(), s.label(), s.description()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Default for StepRegistry {
    fn default() -> Self {
        Self::with_default_steps()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_keeps_registration_order() {
        let registry = StepRegistry::with_default_steps();
        let ids: Vec<&str> = registry.iter().map(|s| s.id()).collect();
        assert_eq!(
            ids,
            vec![
                "tutorial",
                "goals",
                "task_analysis",
                "strategies",
                "time_plan",
                "resources",
                "reflection",
                "feedback"
            ]
        );
    }

    #[test]
    fn unknown_id_falls_back_to_first_step() {
        let registry = StepRegistry::with_default_steps();
        assert_eq!(registry.get_or_first("nope").id(), "tutorial");
        assert_eq!(registry.get_or_first("resources").id(), "resources");
    }

    #[test]
    fn learning_path_mirrors_the_registry() {
        let registry = StepRegistry::with_default_steps();
        let path = registry.learning_path();
        assert_eq!(path.len(), registry.len());
        assert!(path.iter().all(|e| !e.completed));
        assert_eq!(path[5].id, "resources");
    }
}
