use crate::utils::logger::Logger;
use crate::utils::warning::{format_warning, LogWarningPresenter, WarningPresenter};

#[test]
fn test_defaults_fill_missing_parts() {
    assert_eq!(format_warning(None, None), "⚠️ Warning: Something went wrong...");
    assert_eq!(format_warning(Some("Bad ROI"), Some("No id")), "⚠️ Bad ROI: No id");
}

#[test]
fn test_presenter_records_warning() {
    let logger = Logger::in_memory();
    let presenter = LogWarningPresenter::new(&logger);
    presenter.present_warning(Some("Download"), None);
    assert!(logger.contains("Download: Something went wrong..."));
}
