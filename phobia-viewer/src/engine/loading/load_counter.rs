/// Result of feeding one completion into a [`LoadCounter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateSignal {
    /// Still waiting on more completions.
    Pending { completed: usize, required: usize },
    /// This completion was the last one required. Reported exactly once.
    Opened,
    /// The gate opened earlier; the completion was ignored.
    AlreadyOpen,
}

/// Progress gate over a fixed number of asynchronous loads.
///
/// `completed` never exceeds `required`, and the gate reports
/// [`GateSignal::Opened`] exactly once no matter how many extra signals
/// arrive afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadCounter {
    completed: usize,
    required: usize,
    opened: bool,
}

impl LoadCounter {
    /// A gate over `required` loads. A requirement of zero is raised to one
    /// so the gate always waits for at least one signal.
    pub fn new(required: usize) -> Self {
        Self {
            completed: 0,
            required: required.max(1),
            opened: false,
        }
    }

    pub fn record_completion(&mut self) -> GateSignal {
        if self.opened {
            return GateSignal::AlreadyOpen;
        }

        self.completed = (self.completed + 1).min(self.required);

        if self.completed >= self.required {
            self.opened = true;
            GateSignal::Opened
        } else {
            GateSignal::Pending {
                completed: self.completed,
                required: self.required,
            }
        }
    }

    pub fn is_open(&self) -> bool {
        self.opened
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn required(&self) -> usize {
        self.required
    }
}
