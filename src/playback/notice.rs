//! Status messages emitted by the coordinator and the sink they go to.

use std::fmt;

use super::MusicError;

/// A user-visible status transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Playing { title: String },
    Queued { title: String, position: usize },
    Skipping { title: String },
    Stopping { title: String },
    Paused { title: Option<String> },
    Resumed { title: Option<String> },
    Failed(MusicError),
}

impl Notice {
    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Failed(_))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Playing { title } => write!(f, "Playing {}", title),
            Notice::Queued { title, .. } => write!(f, "Added {} to queue", title),
            Notice::Skipping { title } => write!(f, "Skipping {}", title),
            Notice::Stopping { title } => write!(f, "Stopping {} and clearing queue", title),
            Notice::Paused { title: Some(title) } => write!(f, "Paused {}", title),
            Notice::Paused { title: None } => write!(f, "Paused"),
            Notice::Resumed { title: Some(title) } => write!(f, "Resumed {}", title),
            Notice::Resumed { title: None } => write!(f, "Resumed"),
            Notice::Failed(err) => write!(f, "{}", err),
        }
    }
}

impl From<MusicError> for Notice {
    fn from(err: MusicError) -> Self {
        Notice::Failed(err)
    }
}

/// Where status transitions are reported. Fire-and-forget: implementations
/// must not block the caller.
pub trait Notifier: Send + Sync {
    fn report(&self, notice: Notice);
}
