use alloc::collections::VecDeque;

use super::{Command, InputProvider};

/// Input source with no commands.
#[derive(Default, Debug, Clone, Copy)]
pub struct MockInput;

impl MockInput {
    pub const fn new() -> Self {
        Self
    }
}

impl InputProvider for MockInput {
    type Error = core::convert::Infallible;

    fn poll_command(&mut self) -> Result<Option<Command>, Self::Error> {
        Ok(None)
    }
}

/// Queue of commands delivered one per poll, in order.
#[derive(Default, Debug, Clone)]
pub struct QueuedInput {
    pending: VecDeque<Command>,
}

impl QueuedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl FromIterator<Command> for QueuedInput {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Self {
            pending: iter.into_iter().collect(),
        }
    }
}

impl InputProvider for QueuedInput {
    type Error = core::convert::Infallible;

    fn poll_command(&mut self) -> Result<Option<Command>, Self::Error> {
        Ok(self.pending.pop_front())
    }
}
