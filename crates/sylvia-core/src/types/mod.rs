pub mod message;
pub mod resource;
pub mod session;
pub mod snapshot;

pub use message::{Message, Role};
pub use resource::{Resource, UploadedFile};
pub use session::{LearningPathEntry, Reflections, Session, TimerState};
pub use snapshot::SessionSnapshot;
