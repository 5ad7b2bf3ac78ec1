//! Capture device interface.
//!
//! The lifecycle is explicit: `initialize` reports readiness and the
//! available scanners, `set_capabilities` configures the next
//! acquisition, `capture` runs one (possibly multi-page) scan and
//! reports which preview indices it produced, and `fetch_preview`
//! retrieves one decoded raster per index. Devices are injected as
//! constructor-provided dependencies, never reached through ambient
//! globals.

use async_trait::async_trait;
use scandeck_core::{CaptureError, PixelSource};
use serde::{Deserialize, Serialize};

/// Pixel interpretation requested from the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    BlackAndWhite,
    Grayscale,
    #[default]
    Rgb,
}

/// Physical page size requested from the device feeder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    #[default]
    A4,
    Letter,
    Legal,
}

/// Acquisition parameters sent to the device before a scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanCapabilities {
    /// Scan resolution in dots per inch.
    pub resolution_dpi: u32,
    /// Requested pixel interpretation.
    pub color_mode: ColorMode,
    /// Requested page size.
    pub paper_size: PaperSize,
    /// Scan both sides of each sheet.
    pub duplex: bool,
}

impl Default for ScanCapabilities {
    fn default() -> Self {
        Self {
            resolution_dpi: 200,
            color_mode: ColorMode::Rgb,
            paper_size: PaperSize::A4,
            duplex: false,
        }
    }
}

/// Result of device initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerReadiness {
    /// Names of the scanners the device layer can drive.
    pub scanners: Vec<String>,
    /// Index into `scanners` of the device's preferred scanner.
    pub default_index: usize,
}

impl ScannerReadiness {
    /// The name of the preferred scanner, if any are available.
    pub fn default_scanner(&self) -> Option<&str> {
        self.scanners.get(self.default_index).map(String::as_str)
    }
}

/// Result of one scan run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureOutcome {
    /// Pages produced by this run.
    pub scanned_count: usize,
    /// First preview index belonging to this run.
    pub start_index: usize,
    /// Total preview indices held by the device after this run.
    pub total_count: usize,
}

impl CaptureOutcome {
    /// The preview indices this run produced.
    pub fn indices(&self) -> std::ops::Range<usize> {
        self.start_index..self.total_count
    }
}

/// A scanner the document flow can acquire pages from.
#[async_trait]
pub trait CaptureDevice: Send + Sync {
    /// Discovers scanners and reports readiness.
    ///
    /// Fails with [`CaptureError::NoScanners`] when the device layer
    /// is up but no scanner is attached.
    async fn initialize(&self) -> Result<ScannerReadiness, CaptureError>;

    /// Configures the next acquisition.
    async fn set_capabilities(&self, capabilities: ScanCapabilities) -> Result<(), CaptureError>;

    /// Runs one scan on the named scanner. `interactive` shows the
    /// device's own acquisition UI where it has one.
    async fn capture(
        &self,
        scanner: &str,
        interactive: bool,
    ) -> Result<CaptureOutcome, CaptureError>;

    /// Retrieves the decoded raster for one preview index from the
    /// last capture.
    async fn fetch_preview(&self, index: usize) -> Result<PixelSource, CaptureError>;
}
