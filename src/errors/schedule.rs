#[derive(thiserror::Error, Debug)]
pub enum ScheduleError {
    #[error("Event title is empty")]
    EmptyTitle,
    #[error("Event ends before it starts")]
    EndBeforeStart,
    #[error("Invalid event color: {0}")]
    InvalidColor(String),
    #[error("Cannot {action} from {mode} mode")]
    InvalidTransition {
        mode: &'static str,
        action: &'static str,
    },
}
