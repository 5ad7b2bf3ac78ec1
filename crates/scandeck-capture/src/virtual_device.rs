//! A virtual in-memory scanner.
//!
//! Serves queued rasters as scan batches, so the full scan flow can
//! run without hardware. Failure switches let tests exercise every
//! error path of the device boundary.

use crate::device::{CaptureDevice, CaptureOutcome, ScanCapabilities, ScannerReadiness};
use async_trait::async_trait;
use parking_lot::Mutex;
use scandeck_core::{CaptureError, PixelSource};
use std::collections::HashSet;
use std::collections::VecDeque;

#[derive(Debug, Default)]
struct VirtualState {
    queued_batches: VecDeque<Vec<PixelSource>>,
    previews: Vec<PixelSource>,
    capabilities: Option<ScanCapabilities>,
    fail_next_capture: Option<String>,
    failing_previews: HashSet<usize>,
}

/// An in-memory [`CaptureDevice`].
///
/// Each call to `capture` consumes one queued batch; its pages are
/// appended to the device's preview store, mirroring how a real
/// device accumulates acquired pages across runs within a session.
#[derive(Debug)]
pub struct VirtualScanner {
    scanners: Vec<String>,
    default_index: usize,
    state: Mutex<VirtualState>,
}

impl VirtualScanner {
    /// A device exposing one scanner named "Virtual Scanner".
    pub fn new() -> Self {
        Self::with_scanners(vec!["Virtual Scanner".to_string()], 0)
    }

    /// A device exposing the given scanner names.
    pub fn with_scanners(scanners: Vec<String>, default_index: usize) -> Self {
        Self {
            scanners,
            default_index,
            state: Mutex::new(VirtualState::default()),
        }
    }

    /// A device whose initialization reports no attached scanners.
    pub fn without_scanners() -> Self {
        Self::with_scanners(Vec::new(), 0)
    }

    /// Queues one batch of rasters for the next capture.
    pub fn queue_batch(&self, pages: Vec<PixelSource>) {
        self.state.lock().queued_batches.push_back(pages);
    }

    /// Makes the next capture fail with the given reason.
    pub fn fail_next_capture(&self, reason: impl Into<String>) {
        self.state.lock().fail_next_capture = Some(reason.into());
    }

    /// Makes preview fetches for `index` fail.
    pub fn fail_preview(&self, index: usize) {
        self.state.lock().failing_previews.insert(index);
    }

    /// The capabilities most recently configured, if any.
    pub fn last_capabilities(&self) -> Option<ScanCapabilities> {
        self.state.lock().capabilities.clone()
    }
}

impl Default for VirtualScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CaptureDevice for VirtualScanner {
    async fn initialize(&self) -> Result<ScannerReadiness, CaptureError> {
        if self.scanners.is_empty() {
            return Err(CaptureError::NoScanners);
        }
        Ok(ScannerReadiness {
            scanners: self.scanners.clone(),
            default_index: self.default_index,
        })
    }

    async fn set_capabilities(&self, capabilities: ScanCapabilities) -> Result<(), CaptureError> {
        self.state.lock().capabilities = Some(capabilities);
        Ok(())
    }

    async fn capture(
        &self,
        scanner: &str,
        _interactive: bool,
    ) -> Result<CaptureOutcome, CaptureError> {
        if !self.scanners.iter().any(|s| s == scanner) {
            return Err(CaptureError::DeviceUnavailable {
                device: scanner.to_string(),
            });
        }

        let mut state = self.state.lock();
        if let Some(reason) = state.fail_next_capture.take() {
            return Err(CaptureError::CaptureFailed { reason });
        }

        let batch = state.queued_batches.pop_front().unwrap_or_default();
        let start_index = state.previews.len();
        let scanned_count = batch.len();
        state.previews.extend(batch);

        tracing::debug!(scanner, scanned_count, "virtual capture complete");
        Ok(CaptureOutcome {
            scanned_count,
            start_index,
            total_count: state.previews.len(),
        })
    }

    async fn fetch_preview(&self, index: usize) -> Result<PixelSource, CaptureError> {
        let state = self.state.lock();
        if state.failing_previews.contains(&index) {
            return Err(CaptureError::PreviewFailed {
                index: index as u32,
                reason: "preview fetch forced to fail".to_string(),
            });
        }
        state
            .previews
            .get(index)
            .cloned()
            .ok_or(CaptureError::PreviewFailed {
                index: index as u32,
                reason: "no preview at this index".to_string(),
            })
    }
}
