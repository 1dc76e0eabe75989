use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use periodica::engine::progress::{Progress, ProgressCallback};
use std::fmt::Write;

/// Renders sweep progress on stderr. Cloning shares the same bar.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: ProgressBar,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    pub fn hidden() -> Self {
        Self::with_target(ProgressDrawTarget::hidden())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::with_draw_target(Some(0), target).with_style(Self::bar_style());
        Self { pb }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb = self.pb.clone();
        Box::new(move |progress: Progress| match progress {
            Progress::SweepStart { total } => {
                pb.reset();
                pb.set_length(total);
                pb.set_position(0);
                pb.set_message("Resolving");
            }
            Progress::ElementResolved { atomic_number } => {
                pb.inc(1);
                pb.set_message(format!("Z = {atomic_number}"));
            }
            Progress::SweepFinish { resolved } => {
                pb.set_position(resolved as u64);
                pb.finish_with_message("✓ Done");
            }
            Progress::Message(msg) => {
                if pb.is_finished() {
                    pb.set_message(msg);
                } else {
                    pb.println(format!("  {msg}"));
                }
            }
        })
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<12} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .with_key("eta", |state: &ProgressState, w: &mut dyn Write| {
                let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
            })
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
