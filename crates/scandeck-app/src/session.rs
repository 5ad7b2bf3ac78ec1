//! The application session.
//!
//! Serializes the exclusive operations (scan, PDF save, print, mail)
//! behind a busy flag: the stores themselves are single-writer and the
//! UI event loop must not re-enter them with two in-flight operations.
//!
//! Capture completions carry a [`CaptureToken`]: resetting or
//! restoring the document invalidates outstanding tokens, so a scan
//! that finishes after its document was discarded is dropped instead
//! of resurrecting pages into the new one.

use scandeck_capture::{CaptureDevice, ScanCapabilities, ScannerReadiness};
use scandeck_core::events::{
    CaptureEvent, DeckEvent, DocumentEvent, ErrorEvent, EventCategory, ExportEvent, StorageEvent,
};
use scandeck_core::{CaptureError, Error, EventBus, Page, PageId, PixelSource, Result};
use scandeck_document::DocumentState;
use scandeck_editor::EditSession;
use scandeck_export::{
    default_file_name, MailTransport, OutgoingMail, PdfBackend, PdfLayout, PrintJob, PrintTarget,
};
use scandeck_settings::{Config, DocumentArchive};
use std::sync::Arc;

/// Identifies the document incarnation a capture was started against.
///
/// Obtained when an acquisition begins; commit of its results is
/// refused once the document has been reset or restored since.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureToken(u64);

/// The stateful heart of the application.
pub struct ScanSession {
    document: DocumentState,
    device: Arc<dyn CaptureDevice>,
    archive: Option<DocumentArchive>,
    events: EventBus,
    config: Config,
    busy: bool,
    generation: u64,
    readiness: Option<ScannerReadiness>,
}

impl ScanSession {
    /// Creates a session around a capture device.
    pub fn new(device: Arc<dyn CaptureDevice>, config: Config) -> Self {
        Self {
            document: DocumentState::new(),
            device,
            archive: None,
            events: EventBus::new(),
            config,
            busy: false,
            generation: 0,
            readiness: None,
        }
    }

    /// Attaches an on-disk archive for restore and autosave.
    pub fn with_archive(mut self, archive: DocumentArchive) -> Self {
        self.archive = Some(archive);
        self
    }

    /// The document store.
    pub fn document(&self) -> &DocumentState {
        &self.document
    }

    /// The session event bus.
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Whether an exclusive operation is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// The token capture completions must present to commit.
    pub fn capture_token(&self) -> CaptureToken {
        CaptureToken(self.generation)
    }

    // ---- device lifecycle ----

    /// Discovers scanners and publishes readiness.
    pub async fn initialize_device(&mut self) -> Result<&ScannerReadiness> {
        let readiness = self.device.initialize().await?;
        self.events.publish(DeckEvent::Capture(CaptureEvent::DeviceReady {
            scanner: readiness.default_scanner().map(str::to_string),
        }));
        Ok(self.readiness.insert(readiness))
    }

    fn choose_scanner(&self) -> Result<String> {
        let readiness = self
            .readiness
            .as_ref()
            .ok_or(CaptureError::NoScanners)?;
        if let Some(preferred) = &self.config.scan.preferred_scanner {
            if readiness.scanners.iter().any(|s| s == preferred) {
                return Ok(preferred.clone());
            }
            tracing::warn!("preferred scanner {preferred} not attached, using default");
        }
        readiness
            .default_scanner()
            .map(str::to_string)
            .ok_or_else(|| CaptureError::NoScanners.into())
    }

    // ---- capture ----

    /// Runs one scan and commits the acquired pages.
    ///
    /// Returns the number of pages added. Fails with [`Error::Busy`]
    /// while another exclusive operation is in flight.
    pub async fn scan(&mut self) -> Result<usize> {
        if self.busy {
            return Err(Error::Busy);
        }
        self.busy = true;
        let result = self.scan_inner().await;
        self.busy = false;
        if let Err(e) = &result {
            self.publish_error(EventCategory::Capture, e);
        }
        result
    }

    async fn scan_inner(&mut self) -> Result<usize> {
        let token = self.capture_token();

        if self.readiness.is_none() {
            self.initialize_device().await?;
        }
        let scanner = self.choose_scanner()?;

        self.device
            .set_capabilities(ScanCapabilities {
                resolution_dpi: self.config.scan.resolution_dpi,
                color_mode: self.config.scan.color_mode,
                paper_size: self.config.scan.paper_size,
                duplex: self.config.scan.duplex,
            })
            .await?;

        self.events.publish(DeckEvent::Capture(CaptureEvent::ScanStarted {
            scanner: scanner.clone(),
        }));
        let outcome = self
            .device
            .capture(&scanner, self.config.scan.interactive_ui)
            .await?;
        if outcome.scanned_count == 0 {
            return Err(CaptureError::CaptureFailed {
                reason: "no pages were scanned".to_string(),
            }
            .into());
        }

        // Fetch previews page by page; one bad preview loses that page
        // but not the batch.
        let mut rasters = Vec::with_capacity(outcome.scanned_count);
        for index in outcome.indices() {
            match self.device.fetch_preview(index).await {
                Ok(pixels) => rasters.push(pixels),
                Err(e) => tracing::warn!(index, "skipping scanned page: {e}"),
            }
        }
        if rasters.is_empty() {
            return Err(CaptureError::CaptureFailed {
                reason: "scan completed but no pages could be previewed".to_string(),
            }
            .into());
        }

        self.commit_capture(token, rasters)
    }

    /// Commits capture results against the document incarnation the
    /// acquisition was started on.
    ///
    /// A stale token means the document was reset or restored while
    /// the capture was in flight; the pages are dropped and `Ok(0)` is
    /// returned.
    pub fn commit_capture(
        &mut self,
        token: CaptureToken,
        rasters: Vec<PixelSource>,
    ) -> Result<usize> {
        if token != self.capture_token() {
            tracing::warn!(
                pages = rasters.len(),
                "discarding capture that completed for a discarded document"
            );
            self.events.publish(DeckEvent::Capture(CaptureEvent::ScanDiscarded {
                pages: rasters.len(),
            }));
            return Ok(0);
        }

        let pages: Vec<Page> = rasters
            .into_iter()
            .map(|pixels| Page::new(PageId::scanned(), pixels))
            .collect();
        let count = pages.len();
        self.document.add_pages(pages, "Pages scanned")?;
        self.events
            .publish(DeckEvent::Document(DocumentEvent::PagesAdded {
                count,
                label: "Pages scanned".to_string(),
            }));
        self.events
            .publish(DeckEvent::Capture(CaptureEvent::ScanCompleted { pages: count }));
        self.autosave();
        Ok(count)
    }

    /// Adds externally sourced rasters (file picker, clipboard) as
    /// imported pages.
    pub fn import_pages(&mut self, rasters: Vec<PixelSource>) -> Result<usize> {
        let pages: Vec<Page> = rasters
            .into_iter()
            .map(|pixels| Page::new(PageId::imported(), pixels))
            .collect();
        let count = pages.len();
        self.document.add_pages(pages, "Pages imported")?;
        if count > 0 {
            self.events
                .publish(DeckEvent::Document(DocumentEvent::PagesAdded {
                    count,
                    label: "Pages imported".to_string(),
                }));
            self.autosave();
        }
        Ok(count)
    }

    // ---- document operations ----

    /// Resets to an empty document, invalidating outstanding capture
    /// tokens.
    pub fn new_document(&mut self) {
        self.generation += 1;
        self.document.create_new_document();
        self.events
            .publish(DeckEvent::Document(DocumentEvent::NewDocument));
        self.autosave();
    }

    /// Deletes a page. Missing ids are a benign no-op.
    pub fn delete_page(&mut self, id: &PageId) -> bool {
        let deleted = self.document.delete_page(id);
        if deleted {
            self.events
                .publish(DeckEvent::Document(DocumentEvent::PageDeleted {
                    id: id.clone(),
                }));
            self.autosave();
        }
        deleted
    }

    /// Flips a page's bulk-selection membership.
    pub fn toggle_selection(&mut self, id: &PageId) -> Result<bool> {
        let selected = self.document.toggle_bulk_selection(id)?;
        self.events
            .publish(DeckEvent::Document(DocumentEvent::SelectionToggled {
                id: id.clone(),
                selected,
            }));
        self.autosave();
        Ok(selected)
    }

    /// Sets (or toggles off) the active page.
    pub fn set_active_page(&mut self, id: Option<PageId>) -> Result<Option<PageId>> {
        let active = self.document.set_active_page(id)?;
        self.events
            .publish(DeckEvent::Document(DocumentEvent::ActivePageChanged {
                id: active.clone(),
            }));
        self.autosave();
        Ok(active)
    }

    /// Routes one click on a page thumbnail: toggles bulk selection
    /// and the active page together, as one undoable step.
    pub fn handle_page_click(&mut self, id: &PageId) -> Result<()> {
        self.document.handle_page_click(id)?;
        self.events
            .publish(DeckEvent::Document(DocumentEvent::SelectionToggled {
                id: id.clone(),
                selected: self.document.is_selected(id),
            }));
        self.events
            .publish(DeckEvent::Document(DocumentEvent::ActivePageChanged {
                id: self.document.active_page().map(|p| p.id.clone()),
            }));
        self.autosave();
        Ok(())
    }

    /// Moves one step back in document history.
    pub fn undo(&mut self) -> bool {
        let undone = self.document.undo();
        if undone {
            self.events.publish(DeckEvent::Document(DocumentEvent::Undone));
            self.autosave();
        }
        undone
    }

    /// Moves one step forward in document history.
    pub fn redo(&mut self) -> bool {
        let redone = self.document.redo();
        if redone {
            self.events.publish(DeckEvent::Document(DocumentEvent::Redone));
            self.autosave();
        }
        redone
    }

    // ---- editing ----

    /// Opens an edit session on the active page, if any.
    pub fn open_editor(&self) -> Option<EditSession> {
        self.document
            .active_page()
            .cloned()
            .map(EditSession::new)
    }

    /// Commits a finished edit session back into the document as a
    /// normal page update.
    pub fn commit_edit(&mut self, editor: &EditSession) -> Result<()> {
        let replacement = editor.save()?;
        let id = replacement.id.clone();
        self.document.update_page(replacement)?;
        self.events
            .publish(DeckEvent::Document(DocumentEvent::PageUpdated { id }));
        self.autosave();
        Ok(())
    }

    // ---- export ----

    /// Renders the bulk-operation pages to a PDF via `backend`.
    pub async fn save_pdf(
        &mut self,
        backend: &dyn PdfBackend,
        file_name: Option<&str>,
    ) -> Result<usize> {
        if self.busy {
            return Err(Error::Busy);
        }
        self.busy = true;
        let result = self.save_pdf_inner(backend, file_name).await;
        self.busy = false;
        if let Err(e) = &result {
            self.publish_error(EventCategory::Export, e);
        }
        result
    }

    async fn save_pdf_inner(
        &mut self,
        backend: &dyn PdfBackend,
        file_name: Option<&str>,
    ) -> Result<usize> {
        let targets = self.document.pages_for_bulk_operation();
        let layout = PdfLayout::plan(&targets)?;
        let pages: Vec<Page> = targets.into_iter().cloned().collect();

        let name = file_name
            .map(str::to_string)
            .unwrap_or_else(default_file_name);
        backend.save_pdf(&name, &pages, &layout).await?;

        self.events
            .publish(DeckEvent::Export(ExportEvent::PdfSaved { pages: pages.len() }));
        Ok(pages.len())
    }

    /// Prints the bulk-operation pages via `target`.
    pub async fn print(&mut self, target: &dyn PrintTarget) -> Result<usize> {
        if self.busy {
            return Err(Error::Busy);
        }
        self.busy = true;
        let result = self.print_inner(target).await;
        self.busy = false;
        if let Err(e) = &result {
            self.publish_error(EventCategory::Export, e);
        }
        result
    }

    async fn print_inner(&mut self, target: &dyn PrintTarget) -> Result<usize> {
        let targets = self.document.pages_for_bulk_operation();
        let job = PrintJob::assemble(&targets)?;
        let pages: Vec<Page> = targets.into_iter().cloned().collect();

        target.submit(&job, &pages).await?;
        self.events
            .publish(DeckEvent::Export(ExportEvent::PrintSubmitted {
                pages: job.sheet_count(),
            }));
        Ok(job.sheet_count())
    }

    /// Mails the bulk-operation pages via `transport`.
    pub async fn send_mail(
        &mut self,
        transport: &dyn MailTransport,
        mail: &OutgoingMail,
    ) -> Result<usize> {
        if self.busy {
            return Err(Error::Busy);
        }
        self.busy = true;
        let result = self.send_mail_inner(transport, mail).await;
        self.busy = false;
        if let Err(e) = &result {
            self.publish_error(EventCategory::Export, e);
        }
        result
    }

    async fn send_mail_inner(
        &mut self,
        transport: &dyn MailTransport,
        mail: &OutgoingMail,
    ) -> Result<usize> {
        mail.validate()?;
        let pages: Vec<Page> = self
            .document
            .pages_for_bulk_operation()
            .into_iter()
            .cloned()
            .collect();

        transport.send(mail, &pages).await?;
        self.events
            .publish(DeckEvent::Export(ExportEvent::MailSent { pages: pages.len() }));
        Ok(pages.len())
    }

    // ---- persistence ----

    /// Restores the archived document, if the archive holds one.
    ///
    /// Replaces the present document without recording history and
    /// invalidates outstanding capture tokens.
    pub fn restore_from_archive(&mut self) -> Result<bool> {
        let Some(archive) = &self.archive else {
            return Ok(false);
        };
        let Some(restored) = archive.load()? else {
            return Ok(false);
        };

        let pages = restored.snapshot.page_count();
        self.generation += 1;
        self.document.restore(restored.snapshot);
        self.events
            .publish(DeckEvent::Storage(StorageEvent::SnapshotRestored {
                pages,
                from_backup: restored.from_backup,
            }));
        Ok(true)
    }

    /// Persists the present document after a successful mutation.
    ///
    /// Autosave failures are surfaced as events, never as operation
    /// failures: the in-memory document is already consistent.
    fn autosave(&mut self) {
        if !self.config.storage.autosave {
            return;
        }
        let Some(archive) = &self.archive else {
            return;
        };
        match archive.save(self.document.present()) {
            Ok(()) => {
                self.events
                    .publish(DeckEvent::Storage(StorageEvent::SnapshotSaved {
                        pages: self.document.present().page_count(),
                    }));
            }
            Err(e) => {
                tracing::warn!("autosave failed: {e}");
                self.events.publish(DeckEvent::Error(ErrorEvent {
                    source: EventCategory::Storage,
                    message: e.to_string(),
                }));
            }
        }
    }

    fn publish_error(&self, source: EventCategory, error: &Error) {
        self.events.publish(DeckEvent::Error(ErrorEvent {
            source,
            message: error.to_string(),
        }));
    }
}
