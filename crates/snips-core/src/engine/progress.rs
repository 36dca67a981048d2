use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use std::time::Duration;

const SPINNER_TICK_MS: u64 = 80;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    PhaseStart { name: String },
    PhaseFinish,

    TaskStart { total: u64 },
    TaskIncrement { amount: u64 },
    TaskFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

/// Renders [`Progress`] events as a terminal progress bar.
///
/// Phases show as a spinner with the phase name; tasks switch the bar to a counter with
/// an ETA. Cloning shares the underlying bar.
#[derive(Clone)]
pub struct ProgressBarHandler {
    pb: ProgressBar,
}

impl ProgressBarHandler {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    pub fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::new(0)
            .with_style(Self::spinner_style())
            .with_message("Initializing...");
        pb.set_draw_target(target);
        pb.finish_and_clear();
        Self { pb }
    }

    pub fn reporter(&self) -> ProgressReporter<'static> {
        ProgressReporter::with_callback(self.callback())
    }

    pub fn callback(&self) -> ProgressCallback<'static> {
        let pb = self.pb.clone();

        Box::new(move |progress: Progress| match progress {
            Progress::PhaseStart { name } => {
                pb.reset();
                pb.set_length(0);
                pb.set_style(Self::spinner_style());
                pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                pb.set_message(name);
            }
            Progress::PhaseFinish => {
                pb.disable_steady_tick();
                pb.finish_with_message(format!("✓ {}", pb.message()));
            }
            Progress::TaskStart { total } => {
                pb.disable_steady_tick();
                pb.set_length(total);
                pb.set_position(0);
                pb.set_style(Self::bar_style());
            }
            Progress::TaskIncrement { amount } => {
                pb.inc(amount);
            }
            Progress::TaskFinish => {
                let length = pb.length().unwrap_or(0);
                if pb.position() < length {
                    pb.set_position(length);
                }
            }
            Progress::Message(msg) => {
                if pb.is_finished() {
                    pb.set_message(msg);
                } else {
                    pb.println(format!("  {}", msg));
                }
            }
        })
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<40} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .with_key(
                "eta",
                |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                    let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
                },
            )
            .progress_chars("##-")
    }
}

impl Default for ProgressBarHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::thread;

    fn hidden_handler() -> ProgressBarHandler {
        ProgressBarHandler::with_draw_target(ProgressDrawTarget::hidden())
    }

    #[test]
    fn reporter_without_callback_ignores_events() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::TaskStart { total: 3 });
        reporter.report(Progress::TaskIncrement { amount: 1 });
    }

    #[test]
    fn reporter_forwards_events_to_callback() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let reporter =
            ProgressReporter::with_callback(Box::new(move |p| sink.lock().unwrap().push(p)));

        reporter.report(Progress::PhaseStart {
            name: "Build kernel".to_string(),
        });
        reporter.report(Progress::PhaseFinish);

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                Progress::PhaseStart {
                    name: "Build kernel".to_string()
                },
                Progress::PhaseFinish
            ]
        );
    }

    #[test]
    fn handler_initializes_in_a_clean_state() {
        let handler = hidden_handler();
        assert_eq!(handler.pb.length(), Some(0));
        assert!(handler.pb.is_finished());
    }

    #[test]
    fn callback_updates_progress_bar_state() {
        let handler = hidden_handler();
        let callback = handler.callback();

        callback(Progress::PhaseStart {
            name: "Test Phase".to_string(),
        });
        assert_eq!(handler.pb.message(), "Test Phase");
        assert!(!handler.pb.is_finished());

        callback(Progress::TaskStart { total: 100 });
        assert_eq!(handler.pb.length(), Some(100));
        assert_eq!(handler.pb.position(), 0);

        callback(Progress::TaskIncrement { amount: 3 });
        assert_eq!(handler.pb.position(), 3);

        callback(Progress::TaskFinish);
        assert_eq!(handler.pb.position(), 100);

        callback(Progress::PhaseFinish);
        assert!(handler.pb.is_finished());
        assert_eq!(handler.pb.message(), "✓ Test Phase");
    }

    #[test]
    fn callback_is_thread_safe() {
        let handler = hidden_handler();
        let callback = handler.callback();

        thread::spawn(move || {
            callback(Progress::PhaseStart {
                name: "Thread Test".to_string(),
            });
            callback(Progress::TaskStart { total: 2 });
            callback(Progress::TaskIncrement { amount: 2 });
            callback(Progress::PhaseFinish);
        })
        .join()
        .unwrap();

        assert!(handler.pb.is_finished());
        assert_eq!(handler.pb.position(), 2);
    }
}
