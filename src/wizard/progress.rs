#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationTask {
    pub label: &'static str,
    pub duration_ms: u64,
}

pub const ACTIVATION_TASKS: [ActivationTask; 5] = [
    ActivationTask {
        label: "Connecting to job board API...",
        duration_ms: 2000,
    },
    ActivationTask {
        label: "Analyzing post structures...",
        duration_ms: 1500,
    },
    ActivationTask {
        label: "Configuring delivery bot...",
        duration_ms: 2000,
    },
    ActivationTask {
        label: "Setting up notification scheduler...",
        duration_ms: 1500,
    },
    ActivationTask {
        label: "Finalizing activation...",
        duration_ms: 1000,
    },
];

pub const ACTIVATION_FINAL_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerEvent {
    TaskCompleted(usize),
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Waiting,
    Running,
    Completed,
}

/// Deterministic timer chain over a fixed task list. Deadlines are chained
/// from the previous deadline, so a late tick still lands on the exact
/// cumulative schedule.
#[derive(Debug, Clone)]
pub struct ActivationSequencer {
    tasks: Vec<ActivationTask>,
    final_delay_ms: u64,
    current_index: usize,
    completed: Vec<bool>,
    next_deadline: Option<u64>,
    started: bool,
    finished: bool,
}

impl ActivationSequencer {
    pub fn new(tasks: Vec<ActivationTask>, final_delay_ms: u64) -> Self {
        let completed = vec![false; tasks.len()];
        Self {
            tasks,
            final_delay_ms,
            current_index: 0,
            completed,
            next_deadline: None,
            started: false,
            finished: false,
        }
    }

    pub fn standard() -> Self {
        Self::new(ACTIVATION_TASKS.to_vec(), ACTIVATION_FINAL_DELAY_MS)
    }

    pub fn tasks(&self) -> &[ActivationTask] {
        &self.tasks
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn completed(&self) -> &[bool] {
        &self.completed
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.next_deadline
    }

    pub fn total_duration_ms(&self) -> u64 {
        self.tasks
            .iter()
            .map(|task| task.duration_ms)
            .sum::<u64>()
            + self.final_delay_ms
    }

    pub fn task_state(&self, index: usize) -> TaskState {
        if self.completed.get(index).copied().unwrap_or(false) {
            TaskState::Completed
        } else if self.started && index == self.current_index {
            TaskState::Running
        } else {
            TaskState::Waiting
        }
    }

    /// Starting twice is a no-op.
    pub fn start(&mut self, now_ms: u64) {
        if self.started {
            return;
        }
        self.started = true;
        self.next_deadline = Some(now_ms.saturating_add(self.delay_after(0)));
    }

    pub fn tick(&mut self, now_ms: u64) -> Vec<SequencerEvent> {
        let mut events = Vec::new();
        while let Some(deadline) = self.next_deadline {
            if now_ms < deadline {
                break;
            }
            if self.current_index < self.tasks.len() {
                self.completed[self.current_index] = true;
                events.push(SequencerEvent::TaskCompleted(self.current_index));
                self.current_index += 1;
                self.next_deadline =
                    Some(deadline.saturating_add(self.delay_after(self.current_index)));
            } else {
                self.next_deadline = None;
                self.finished = true;
                events.push(SequencerEvent::Finished);
            }
        }
        events
    }

    fn delay_after(&self, index: usize) -> u64 {
        self.tasks
            .get(index)
            .map(|task| task.duration_ms)
            .unwrap_or(self.final_delay_ms)
    }
}

impl Default for ActivationSequencer {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_happens_before_start() {
        let mut sequencer = ActivationSequencer::standard();
        assert!(sequencer.tick(1_000_000).is_empty());
        assert_eq!(sequencer.task_state(0), TaskState::Waiting);
    }

    #[test]
    fn late_tick_catches_up_in_order() {
        let mut sequencer = ActivationSequencer::standard();
        sequencer.start(0);
        assert_eq!(sequencer.task_state(0), TaskState::Running);
        let events = sequencer.tick(sequencer.total_duration_ms());
        assert_eq!(
            events,
            vec![
                SequencerEvent::TaskCompleted(0),
                SequencerEvent::TaskCompleted(1),
                SequencerEvent::TaskCompleted(2),
                SequencerEvent::TaskCompleted(3),
                SequencerEvent::TaskCompleted(4),
                SequencerEvent::Finished,
            ]
        );
        assert!(sequencer.is_finished());
        assert!(sequencer.tick(u64::MAX).is_empty());
    }

    #[test]
    fn empty_task_list_only_waits_final_delay() {
        let mut sequencer = ActivationSequencer::new(Vec::new(), 500);
        sequencer.start(100);
        assert!(sequencer.tick(599).is_empty());
        assert_eq!(sequencer.tick(600), vec![SequencerEvent::Finished]);
    }
}
