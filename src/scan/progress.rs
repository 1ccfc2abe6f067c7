//! Scan progress reporting

use crossbeam_channel::Sender;
use tracing::{debug, info};

/// Engine status that carries recognition progress
const RECOGNIZING_STATUS: &str = "recognizing text";

/// Progress of a document scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanProgress {
    /// Scan accepted, no page started yet
    Preparing,
    /// Recognition of a page has begun
    PageStarted { page: u32 },
    /// Engine-reported recognition progress for a page
    Recognizing { page: u32, percent: u8 },
    /// Page recognized and mapped
    PageComplete { page: u32 },
    /// All pages done
    Finished { pages: u32 },
}

impl ScanProgress {
    /// Status line text for the event
    pub fn message(&self) -> String {
        match self {
            ScanProgress::Preparing => "Preparing Document for OCR".to_string(),
            ScanProgress::PageStarted { page } | ScanProgress::PageComplete { page } => {
                format!("Running OCR on Page: {page}")
            }
            ScanProgress::Recognizing { page, percent } => {
                format!("Running OCR on Page: {page} Progress: {percent}%")
            }
            ScanProgress::Finished { pages } => format!("OCR complete: {pages} page(s)"),
        }
    }
}

/// Receives scan progress events
pub trait ProgressListener {
    fn on_progress(&self, event: ScanProgress);
}

/// Percentage to report for an engine log event.
///
/// Only recognition events strictly between start and finish are relayed;
/// loading and initialization chatter is dropped.
pub fn recognition_percent(status: &str, progress: f64) -> Option<u8> {
    if status != RECOGNIZING_STATUS || !(progress > 0.0 && progress < 1.0) {
        return None;
    }
    Some((progress * 100.0).round() as u8)
}

/// Logs progress through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressListener for LogProgress {
    fn on_progress(&self, event: ScanProgress) {
        match event {
            ScanProgress::Recognizing { .. } => debug!("{}", event.message()),
            _ => info!("{}", event.message()),
        }
    }
}

/// Forwards progress to another thread
#[derive(Debug, Clone)]
pub struct ChannelProgress {
    sender: Sender<ScanProgress>,
}

impl ChannelProgress {
    pub fn new(sender: Sender<ScanProgress>) -> Self {
        Self { sender }
    }
}

impl ProgressListener for ChannelProgress {
    fn on_progress(&self, event: ScanProgress) {
        // Receiver gone means nobody is watching
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn test_recognition_percent_filters_status() {
        assert_eq!(recognition_percent("recognizing text", 0.424), Some(42));
        assert_eq!(recognition_percent("recognizing text", 0.996), Some(100));
        assert_eq!(recognition_percent("loading language traineddata", 0.5), None);
        assert_eq!(recognition_percent("initializing api", 0.5), None);
    }

    #[test]
    fn test_recognition_percent_skips_endpoints() {
        assert_eq!(recognition_percent("recognizing text", 0.0), None);
        assert_eq!(recognition_percent("recognizing text", 1.0), None);
        assert_eq!(recognition_percent("recognizing text", f64::NAN), None);
    }

    #[test]
    fn test_messages() {
        assert_eq!(ScanProgress::Preparing.message(), "Preparing Document for OCR");
        assert_eq!(
            ScanProgress::PageStarted { page: 4 }.message(),
            "Running OCR on Page: 4"
        );
        assert_eq!(
            ScanProgress::Recognizing { page: 2, percent: 37 }.message(),
            "Running OCR on Page: 2 Progress: 37%"
        );
    }

    #[test]
    fn test_channel_progress_forwards_events() {
        let (tx, rx) = unbounded();
        let listener = ChannelProgress::new(tx);

        listener.on_progress(ScanProgress::Preparing);
        listener.on_progress(ScanProgress::PageStarted { page: 1 });

        assert_eq!(rx.try_recv().unwrap(), ScanProgress::Preparing);
        assert_eq!(rx.try_recv().unwrap(), ScanProgress::PageStarted { page: 1 });
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_channel_progress_ignores_closed_receiver() {
        let (tx, rx) = unbounded();
        drop(rx);
        ChannelProgress::new(tx).on_progress(ScanProgress::Finished { pages: 1 });
    }
}
