use petcare_model::Personalization;

use super::task::Task;

/// Events a domain broadcasts to the rest of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrossDomainEvent {
    /// A branding document was loaded; carries the active theme key.
    BrandingLoaded { active_theme: String },
    /// New personalization values were persisted and applied to the theme.
    PersonalizationApplied(Personalization),
}

/// Result of a domain update: the follow-up task plus events to broadcast.
#[derive(Debug)]
pub struct DomainUpdateResult<M> {
    /// The task to execute (may produce more messages)
    pub task: Task<M>,
    /// Events to broadcast to other domains immediately
    pub events: Vec<CrossDomainEvent>,
}

impl<M: Send + 'static> DomainUpdateResult<M> {
    pub fn none() -> Self {
        Self::task(Task::none())
    }

    /// Create a result with just a task
    pub fn task(task: Task<M>) -> Self {
        Self {
            task,
            events: Vec::new(),
        }
    }

    /// Add an event to this result
    pub fn add_event(mut self, event: CrossDomainEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Re-tag the task's message, keeping events.
    pub fn map<N: Send + 'static>(
        self,
        f: impl FnOnce(M) -> N + Send + 'static,
    ) -> DomainUpdateResult<N> {
        DomainUpdateResult {
            task: self.task.map(f),
            events: self.events,
        }
    }
}
