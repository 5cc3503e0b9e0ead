pub mod feedback;
pub mod goals;
pub mod reflection;
pub mod resources;
pub mod strategies;
pub mod task_analysis;
pub mod time_plan;
pub mod tutorial;

pub use feedback::FeedbackStep;
pub use goals::GoalsStep;
pub use reflection::ReflectionStep;
pub use resources::ResourcesStep;
pub use strategies::StrategiesStep;
pub use task_analysis::TaskAnalysisStep;
pub use time_plan::TimePlanStep;
pub use tutorial::TutorialStep;
