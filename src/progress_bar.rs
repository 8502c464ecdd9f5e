pub use crate::traits::Progress;

enum Bar {
    /// Interactive terminal
    Interactive(indicatif::ProgressBar),
    /// Non-interactive output
    Log(logbar::ProgressBar),
    /// No progress indicator
    Quiet,
}

/// The default progress bar
///
/// The exact format is decided at run time depending on whether we
/// are writing to an interactive terminal or a non-interactive
/// output.
pub struct ProgressBar {
    bar: Bar,
    logging_disabled: bool,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self {
            bar: Bar::Quiet,
            logging_disabled: false,
        }
    }
}

impl Progress for ProgressBar {
    fn inc(&self, i: u64) {
        match &self.bar {
            Bar::Interactive(bar) => bar.inc(i),
            Bar::Log(bar) => bar.inc(i as usize),
            Bar::Quiet => {}
        }
    }

    fn finish(&self) {
        match &self.bar {
            Bar::Interactive(bar) => bar.finish(),
            Bar::Log(bar) => bar.finish(),
            Bar::Quiet => {}
        }
        if self.logging_disabled {
            // restore logging
            log::set_max_level(log::LevelFilter::Info);
        }
    }
}

impl ProgressBar {
    /// A new progress bar with the given maximum progress and message
    pub fn new(len: u64, message: &str) -> Self {
        if log::max_level().to_level() != Some(log::Level::Info) {
            ProgressBar::default()
        } else if console::Term::stderr().features().is_attended() {
            ProgressBar::indicatif(len, message)
        } else {
            ProgressBar::logbar(len, message)
        }
    }

    fn indicatif(len: u64, message: &str) -> Self {
        let bar = indicatif::ProgressBar::new(len);
        bar.set_style(
            indicatif::ProgressStyle::default_bar()
                .template("{bar:60.cyan/cyan} {msg} {pos}/{len} [{elapsed}]")
                .unwrap(),
        );
        bar.set_message(message.to_owned());
        // temporarily disable logging to not overwrite the bar
        log::set_max_level(log::LevelFilter::Off);
        ProgressBar {
            bar: Bar::Interactive(bar),
            logging_disabled: true,
        }
    }

    fn logbar(len: u64, message: &str) -> Self {
        let style = logbar::Style::new().indicator('█');
        eprintln!("{}", message);
        let bar = logbar::ProgressBar::with_style(len as usize, style);
        // temporarily disable logging to not overwrite the bar
        log::set_max_level(log::LevelFilter::Off);
        ProgressBar {
            bar: Bar::Log(bar),
            logging_disabled: true,
        }
    }
}
