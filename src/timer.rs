use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;
use thiserror::Error;

/// Errors raised at timer construction
#[derive(Debug, Error)]
pub enum TimerError {
    #[error("session durations must be at least one minute (work={work}, break={break_})")]
    InvalidDuration { work: u64, break_: u64 },
}

/// Phase of a Pomodoro session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Work,
    Break,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Break => "Break",
        }
    }
}

/// Event emitted by the countdown thread, drained by the UI event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// Remaining time changed; payload is the `MM:SS` display string
    Tick(String),
    /// A phase's countdown reached zero; payload is `"Work"` or `"Break"`
    PhaseComplete(String),
}

/// Notification hook invoked with a display string or phase label
pub type Hook = Box<dyn Fn(&str) + Send + Sync>;

/// Completion and tick hooks, injected at construction
#[derive(Default)]
pub struct TimerHooks {
    pub on_tick: Option<Hook>,
    pub on_complete: Option<Hook>,
}

impl TimerHooks {
    /// Hooks that forward both notifications as `TimerEvent`s over a channel.
    /// Send failures are ignored; a dropped receiver just means nobody is
    /// listening anymore.
    pub fn channel(tx: Sender<TimerEvent>) -> Self {
        let tick_tx = tx.clone();
        Self {
            on_tick: Some(Box::new(move |display| {
                let _ = tick_tx.send(TimerEvent::Tick(display.to_string()));
            })),
            on_complete: Some(Box::new(move |label| {
                let _ = tx.send(TimerEvent::PhaseComplete(label.to_string()));
            })),
        }
    }
}

/// Countdown state shared between control calls and the countdown thread
struct TimerState {
    remaining_seconds: u64,
    running: bool,
    paused: bool,
    phase: Phase,
    /// Bumped by every `start`/`stop`; a countdown thread that wakes up and
    /// finds a different generation has been superseded and must exit.
    generation: u64,
}

/// Two-phase (Work then Break) Pomodoro countdown.
///
/// `start` launches one background thread that decrements once per second
/// and fires the tick hook with the remaining time as `MM:SS`. When the
/// work phase hits zero the same thread chains into exactly one break
/// phase after a short delay, then the timer returns to idle. It does not
/// loop back into a second work session; the owner restarts it explicitly.
pub struct SessionTimer {
    work_seconds: u64,
    break_seconds: u64,
    state: Arc<Mutex<TimerState>>,
    hooks: Arc<TimerHooks>,
    tick_interval: Duration,
    chain_delay: Duration,
}

impl SessionTimer {
    /// Create a timer from work/break durations in minutes.
    /// Zero-length durations are rejected: a timer that can never complete
    /// a phase is a caller bug.
    pub fn new(work_minutes: u64, break_minutes: u64, hooks: TimerHooks) -> Result<Self, TimerError> {
        Self::with_cadence(
            work_minutes.saturating_mul(60),
            break_minutes.saturating_mul(60),
            hooks,
            Duration::from_secs(1),
            Duration::from_secs(2),
        )
        .map_err(|_| TimerError::InvalidDuration {
            work: work_minutes,
            break_: break_minutes,
        })
    }

    /// Construct from raw second counts and custom pacing. Tests use this
    /// to run whole sessions in milliseconds without changing the observable
    /// tick sequence.
    fn with_cadence(
        work_seconds: u64,
        break_seconds: u64,
        hooks: TimerHooks,
        tick_interval: Duration,
        chain_delay: Duration,
    ) -> Result<Self, TimerError> {
        if work_seconds == 0 || break_seconds == 0 {
            return Err(TimerError::InvalidDuration {
                work: work_seconds,
                break_: break_seconds,
            });
        }
        Ok(Self {
            work_seconds,
            break_seconds,
            state: Arc::new(Mutex::new(TimerState {
                remaining_seconds: work_seconds,
                running: false,
                paused: false,
                phase: Phase::Work,
                generation: 0,
            })),
            hooks: Arc::new(hooks),
            tick_interval,
            chain_delay,
        })
    }

    /// Start the countdown on a background thread. No-op if already running,
    /// so at most one countdown thread is alive per timer.
    pub fn start(&self) {
        let generation = {
            let mut st = lock_state(&self.state);
            if st.running {
                return;
            }
            st.running = true;
            st.paused = false;
            st.phase = Phase::Work;
            st.remaining_seconds = self.work_seconds;
            st.generation += 1;
            st.generation
        };

        let state = Arc::clone(&self.state);
        let hooks = Arc::clone(&self.hooks);
        let break_seconds = self.break_seconds;
        let tick_interval = self.tick_interval;
        let chain_delay = self.chain_delay;
        thread::spawn(move || {
            run_countdown(state, hooks, generation, break_seconds, tick_interval, chain_delay);
        });
    }

    /// Stop and reset to a full work phase. The reset display is delivered
    /// through the tick hook synchronously, from the calling thread, so the
    /// UI updates even though the countdown thread is being torn down.
    /// Idempotent.
    pub fn stop(&self) {
        let display = {
            let mut st = lock_state(&self.state);
            st.running = false;
            st.paused = false;
            st.phase = Phase::Work;
            st.remaining_seconds = self.work_seconds;
            st.generation += 1;
            format_clock(st.remaining_seconds)
        };
        call_hook(&self.hooks.on_tick, &display);
    }

    /// Suspend decrementing. The countdown thread keeps sleeping on its
    /// one-second cadence but skips the decrement and the tick hook while
    /// paused. Only meaningful while running.
    pub fn pause(&self) {
        let mut st = lock_state(&self.state);
        if st.running {
            st.paused = true;
        }
    }

    /// Resume a paused countdown from the exact value it held at pause time.
    pub fn resume(&self) {
        lock_state(&self.state).paused = false;
    }

    pub fn is_running(&self) -> bool {
        lock_state(&self.state).running
    }

    pub fn is_paused(&self) -> bool {
        lock_state(&self.state).paused
    }

    pub fn phase(&self) -> Phase {
        lock_state(&self.state).phase
    }

    /// Current remaining time as `MM:SS`, for the initial render before any
    /// tick has been delivered.
    pub fn display(&self) -> String {
        format_clock(lock_state(&self.state).remaining_seconds)
    }
}

/// What the countdown loop does after releasing the lock for one wake-up
enum Step {
    Continue,
    /// Work just ended; sleep the transition delay before the break phase
    ChainDelay,
    /// Stopped, superseded by a newer start, or finished the break phase
    Exit,
}

/// One-second loop for a single work+break session.
///
/// Hooks are invoked while the state lock is held. That makes an in-flight
/// tick and a concurrent `stop()` strictly ordered: once `stop` has
/// returned, nothing more can arrive from the thread it tore down. Hooks
/// must therefore never call back into the timer (the shipped hooks are
/// plain channel sends).
fn run_countdown(
    state: Arc<Mutex<TimerState>>,
    hooks: Arc<TimerHooks>,
    generation: u64,
    break_seconds: u64,
    tick_interval: Duration,
    chain_delay: Duration,
) {
    loop {
        thread::sleep(tick_interval);

        let step = {
            let mut st = lock_state(&state);
            if st.generation != generation || !st.running {
                Step::Exit
            } else if st.paused {
                Step::Continue
            } else {
                st.remaining_seconds -= 1;
                let display = format_clock(st.remaining_seconds);
                if st.remaining_seconds > 0 {
                    call_hook(&hooks.on_tick, &display);
                    Step::Continue
                } else {
                    match st.phase {
                        Phase::Work => {
                            st.phase = Phase::Break;
                            st.remaining_seconds = break_seconds;
                            call_hook(&hooks.on_tick, &display);
                            call_hook(&hooks.on_complete, Phase::Work.label());
                            Step::ChainDelay
                        }
                        Phase::Break => {
                            st.running = false;
                            st.paused = false;
                            call_hook(&hooks.on_tick, &display);
                            call_hook(&hooks.on_complete, Phase::Break.label());
                            Step::Exit
                        }
                    }
                }
            }
        };

        match step {
            Step::Exit => return,
            Step::Continue => continue,
            Step::ChainDelay => {
                // Transition breather between work and break; a stop() that
                // lands during the delay aborts the chain
                thread::sleep(chain_delay);
                let st = lock_state(&state);
                if st.generation != generation || !st.running {
                    return;
                }
            }
        }
    }
}

/// Invoke a hook, swallowing any panic it raises. A failing callback is a
/// caller bug and must not take the countdown thread down with it.
fn call_hook(hook: &Option<Hook>, arg: &str) {
    if let Some(f) = hook {
        let _ = catch_unwind(AssertUnwindSafe(|| f(arg)));
    }
}

/// Hook panics are caught before they can unwind past a held guard, so a
/// poisoned mutex still contains consistent state and can be recovered.
fn lock_state(state: &Mutex<TimerState>) -> MutexGuard<'_, TimerState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Format a second count as zero-padded `MM:SS`
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};

    const TICK: Duration = Duration::from_millis(10);
    const CHAIN: Duration = Duration::from_millis(30);
    const EVENT_WAIT: Duration = Duration::from_millis(500);
    const QUIET_WAIT: Duration = Duration::from_millis(150);

    fn fast_timer(work_seconds: u64, break_seconds: u64) -> (SessionTimer, Receiver<TimerEvent>) {
        let (tx, rx) = channel();
        let timer = SessionTimer::with_cadence(
            work_seconds,
            break_seconds,
            TimerHooks::channel(tx),
            TICK,
            CHAIN,
        )
        .unwrap();
        (timer, rx)
    }

    /// Collect the next `n` events, failing if they don't arrive promptly
    fn collect(rx: &Receiver<TimerEvent>, n: usize) -> Vec<TimerEvent> {
        (0..n)
            .map(|i| {
                rx.recv_timeout(EVENT_WAIT)
                    .unwrap_or_else(|_| panic!("timed out waiting for event {}", i))
            })
            .collect()
    }

    fn ticks(from: u64, to: u64) -> Vec<TimerEvent> {
        (to..from)
            .rev()
            .map(|s| TimerEvent::Tick(format_clock(s)))
            .collect()
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(1500), "25:00");
    }

    #[test]
    fn test_rejects_zero_durations() {
        assert!(SessionTimer::new(0, 5, TimerHooks::default()).is_err());
        assert!(SessionTimer::new(25, 0, TimerHooks::default()).is_err());
        assert!(SessionTimer::new(25, 5, TimerHooks::default()).is_ok());
    }

    #[test]
    fn test_initial_display_is_full_work_duration() {
        let (timer, _rx) = fast_timer(90, 30);
        assert_eq!(timer.display(), "01:30");
        assert!(!timer.is_running());
        assert!(!timer.is_paused());
    }

    #[test]
    fn test_full_cycle_tick_sequence() {
        let (timer, rx) = fast_timer(3, 2);
        timer.start();

        // Work phase: 02, 01, 00 then completion
        let mut expected = ticks(3, 0);
        expected.push(TimerEvent::PhaseComplete("Work".to_string()));
        assert_eq!(collect(&rx, 4), expected);

        // Break phase: 01, 00 then completion
        let mut expected = ticks(2, 0);
        expected.push(TimerEvent::PhaseComplete("Break".to_string()));
        assert_eq!(collect(&rx, 3), expected);

        // Give the countdown thread a moment to clear the running flag
        assert_eq!(rx.recv_timeout(QUIET_WAIT), Err(RecvTimeoutError::Timeout));
        assert!(!timer.is_running());
        assert_eq!(timer.display(), "00:00");
    }

    #[test]
    fn test_start_twice_produces_single_tick_stream() {
        let (timer, rx) = fast_timer(30, 5);
        timer.start();
        timer.start();

        // If a second countdown thread were alive we'd see duplicate values
        let events = collect(&rx, 5);
        assert_eq!(events, ticks(30, 25));
        timer.stop();
    }

    #[test]
    fn test_stop_resets_and_suppresses_further_events() {
        let (timer, rx) = fast_timer(60, 5);
        timer.start();
        let _ = collect(&rx, 3);

        timer.stop();
        assert!(!timer.is_running());
        assert_eq!(timer.display(), "01:00");

        // Drain until quiet, then verify the last delivery was the
        // synchronous reset tick and nothing follows it
        let mut last = None;
        while let Ok(event) = rx.recv_timeout(QUIET_WAIT) {
            last = Some(event);
        }
        assert_eq!(last, Some(TimerEvent::Tick("01:00".to_string())));
    }

    #[test]
    fn test_stop_is_idempotent_when_idle() {
        let (timer, rx) = fast_timer(60, 5);
        timer.stop();
        timer.stop();

        assert_eq!(collect(&rx, 2), vec![
            TimerEvent::Tick("01:00".to_string()),
            TimerEvent::Tick("01:00".to_string()),
        ]);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_stop_during_chain_delay_aborts_break_phase() {
        let (timer, rx) = fast_timer(2, 30);
        timer.start();

        let mut expected = ticks(2, 0);
        expected.push(TimerEvent::PhaseComplete("Work".to_string()));
        assert_eq!(collect(&rx, 3), expected);

        // The thread is now inside the work->break transition delay
        timer.stop();
        let mut events = Vec::new();
        while let Ok(event) = rx.recv_timeout(QUIET_WAIT) {
            events.push(event);
        }
        assert_eq!(events, vec![TimerEvent::Tick("00:02".to_string())]);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_pause_freezes_and_resume_continues() {
        let (timer, rx) = fast_timer(60, 5);
        timer.start();
        let _ = collect(&rx, 2);

        timer.pause();
        assert!(timer.is_paused());
        // One tick may already be in flight at the instant of the pause;
        // after it lands the stream must go quiet
        let mut held = 58u64;
        if let Ok(TimerEvent::Tick(display)) = rx.recv_timeout(QUIET_WAIT) {
            assert_eq!(display, format_clock(57));
            held = 57;
        }
        assert_eq!(rx.recv_timeout(QUIET_WAIT), Err(RecvTimeoutError::Timeout));

        timer.resume();
        assert!(!timer.is_paused());
        // Counting resumes from the exact held value
        assert_eq!(
            collect(&rx, 1),
            vec![TimerEvent::Tick(format_clock(held - 1))]
        );
        timer.stop();
    }

    #[test]
    fn test_pause_while_idle_has_no_effect() {
        let (timer, _rx) = fast_timer(60, 5);
        timer.pause();
        assert!(!timer.is_paused());
    }

    #[test]
    fn test_panicking_hook_does_not_kill_countdown() {
        let (tx, rx) = channel();
        let mut hooks = TimerHooks::channel(tx);
        hooks.on_tick = Some(Box::new(|_| panic!("listener bug")));
        let timer = SessionTimer::with_cadence(2, 1, hooks, TICK, CHAIN).unwrap();

        timer.start();
        // Every tick panics, yet both phase completions still arrive
        assert_eq!(
            collect(&rx, 2),
            vec![
                TimerEvent::PhaseComplete("Work".to_string()),
                TimerEvent::PhaseComplete("Break".to_string()),
            ]
        );
    }

    #[test]
    fn test_restart_after_full_cycle() {
        let (timer, rx) = fast_timer(2, 1);
        timer.start();
        let _ = collect(&rx, 5);
        assert_eq!(rx.recv_timeout(QUIET_WAIT), Err(RecvTimeoutError::Timeout));
        assert!(!timer.is_running());

        // A fresh start re-runs the work phase from the top
        timer.start();
        assert!(timer.is_running());
        assert_eq!(collect(&rx, 1), vec![TimerEvent::Tick("00:01".to_string())]);
        timer.stop();
    }
}
