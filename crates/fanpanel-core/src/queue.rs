//! Bounded command queue between input handling and menu navigation.

use heapless::Deque;
use log::trace;

/// Default queue depth.
pub const EVENT_QUEUE_CAPACITY: usize = 8;

/// Navigation intent consumed by the menu walker.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Up,
    Down,
    Enter,
    Back,
}

/// Fixed-capacity FIFO that never blocks the producer.
///
/// When full, the newest command is dropped; accepted commands come out in
/// push order exactly once.
#[derive(Debug)]
pub struct EventQueue<const N: usize = EVENT_QUEUE_CAPACITY> {
    commands: Deque<Command, N>,
    dropped: u32,
}

impl<const N: usize> Default for EventQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> EventQueue<N> {
    pub const fn new() -> Self {
        Self {
            commands: Deque::new(),
            dropped: 0,
        }
    }

    /// Returns `false` when the command was dropped because the queue is full.
    pub fn push(&mut self, command: Command) -> bool {
        match self.commands.push_back(command) {
            Ok(()) => true,
            Err(command) => {
                self.dropped = self.dropped.saturating_add(1);
                trace!("queue: full, dropped command={:?}", command);
                false
            }
        }
    }

    pub fn pop(&mut self) -> Option<Command> {
        self.commands.pop_front()
    }

    pub fn flush(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.commands.is_full()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Commands dropped on overflow since construction.
    pub const fn dropped(&self) -> u32 {
        self.dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATTERN: [Command; 4] = [Command::Up, Command::Down, Command::Enter, Command::Back];

    #[test]
    fn overflow_drops_newest_and_keeps_order() {
        let mut queue = EventQueue::<8>::new();
        let mut accepted = Vec::new();

        for (i, cmd) in PATTERN.iter().cycle().take(20).enumerate() {
            if queue.push(*cmd) {
                accepted.push(*cmd);
            }
            assert!(queue.len() <= queue.capacity());
            if i % 5 == 4 {
                let popped = queue.pop();
                assert_eq!(popped, Some(accepted.remove(0)));
            }
        }

        let mut drained = Vec::new();
        while let Some(cmd) = queue.pop() {
            drained.push(cmd);
        }
        assert_eq!(drained, accepted);
        assert!(queue.dropped() > 0);
    }

    #[test]
    fn flush_discards_pending_commands() {
        let mut queue = EventQueue::<EVENT_QUEUE_CAPACITY>::new();
        assert!(queue.push(Command::Enter));
        assert!(queue.push(Command::Down));
        queue.flush();
        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);
    }
}
