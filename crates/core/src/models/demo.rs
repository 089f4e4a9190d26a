use std::time::Duration;

/// Fixed tick period of the demo playback timer.
pub const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Number of steps in the demo cycle.
pub const STEP_COUNT: usize = 4;

/// One stage of the scripted marketing demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoStep {
    pub title: &'static str,
    pub description: &'static str,
    /// Total display time for this step
    pub duration: Duration,
}

/// The scripted demo's step cycle as an explicit finite-state machine.
///
/// The player holds no timer of its own: the embedding UI runs a single
/// repeating task with period [`TICK_PERIOD`] and calls [`DemoPlayer::tick`]
/// on each firing, cancelling and restarting that task when playback is
/// toggled. Progress runs 0..100 per step; once it reaches 100 the next
/// tick advances to `(step + 1) % 4` and resets progress.
#[derive(Debug, Clone)]
pub struct DemoPlayer {
    steps: [DemoStep; STEP_COUNT],
    step: usize,
    progress: f64,
    playing: bool,
}

impl DemoPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            steps: [
                DemoStep {
                    title: "AI Trip Planning",
                    description: "Watch our multi-agent AI system create a personalized itinerary",
                    duration: Duration::from_millis(3000),
                },
                DemoStep {
                    title: "Real-Time Optimization",
                    description: "See how AI adapts to weather and crowd conditions",
                    duration: Duration::from_millis(2500),
                },
                DemoStep {
                    title: "Conversational AI",
                    description: "Experience natural language travel assistance",
                    duration: Duration::from_millis(3500),
                },
                DemoStep {
                    title: "Predictive Analytics",
                    description: "View market intelligence and demand forecasting",
                    duration: Duration::from_millis(2000),
                },
            ],
            step: 0,
            progress: 0.0,
            playing: false,
        }
    }

    /// Advance playback by one timer tick. No-op while paused.
    ///
    /// Each tick adds `100 / (duration / tick_period)` percent; a tick that
    /// finds progress already at or past 100 advances the step instead and
    /// resets progress to 0.
    pub fn tick(&mut self) {
        if !self.playing {
            return;
        }
        if self.progress >= 100.0 {
            self.step = (self.step + 1) % STEP_COUNT;
            self.progress = 0.0;
            return;
        }
        let duration_ms = self.steps[self.step].duration.as_millis() as f64;
        let tick_ms = TICK_PERIOD.as_millis() as f64;
        self.progress += 100.0 / (duration_ms / tick_ms);
    }

    /// Jump straight to a step. Resets progress; playback state is kept.
    pub fn go_to(&mut self, step: usize) {
        self.step = step % STEP_COUNT;
        self.progress = 0.0;
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Toggle play/pause, returning the new playing state.
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub fn step(&self) -> usize {
        self.step
    }

    /// Progress through the current step, 0..100.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[must_use]
    pub fn current_step(&self) -> &DemoStep {
        &self.steps[self.step]
    }

    #[must_use]
    pub fn steps(&self) -> &[DemoStep] {
        &self.steps
    }
}

impl Default for DemoPlayer {
    fn default() -> Self {
        Self::new()
    }
}
