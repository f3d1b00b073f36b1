// Web-side tuning for the parallax front-end.

// Console log level installed by the start hook
pub const LOG_LEVEL: log::Level = log::Level::Info;

// Event the controller subscribes to, dispatched on the document
pub const SCROLL_EVENT: &str = "scroll";
