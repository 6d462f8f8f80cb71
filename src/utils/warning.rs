//! Boundary capability for presenting warnings to the user

use log::warn;

use crate::utils::logger::Logger;

/// Title used when none is given
pub const DEFAULT_WARNING_TITLE: &str = "Warning";
/// Message used when none is given
pub const DEFAULT_WARNING_MESSAGE: &str = "Something went wrong...";

/// Something that can show a warning to the user
pub trait WarningPresenter {
    /// Present a warning; missing parts fall back to the defaults
    fn present_warning(&self, title: Option<&str>, msg: Option<&str>);
}

/// Presents warnings through the log facade and an injected logger
pub struct LogWarningPresenter<'a> {
    logger: &'a Logger,
}

impl<'a> LogWarningPresenter<'a> {
    pub fn new(logger: &'a Logger) -> Self {
        LogWarningPresenter { logger }
    }
}

/// Format a warning as a single line
pub fn format_warning(title: Option<&str>, msg: Option<&str>) -> String {
    format!(
        "⚠️ {}: {}",
        title.unwrap_or(DEFAULT_WARNING_TITLE),
        msg.unwrap_or(DEFAULT_WARNING_MESSAGE)
    )
}

impl<'a> WarningPresenter for LogWarningPresenter<'a> {
    fn present_warning(&self, title: Option<&str>, msg: Option<&str>) {
        let line = format_warning(title, msg);
        warn!("{}", line);
        let _ = self.logger.log(&line);
    }
}
