//! Submission of the two selected templates to the comparison endpoint.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use common::{comparison::{ComparisonResult, UploadResponse}, document_slot::DocumentSlot};
use tracing::{debug, info, warn};

use crate::{
    error::{SelectionError, UploadError},
    selection::{FileSelections, SelectedFile},
};

/// Transport to the comparison server.
#[allow(async_fn_in_trait)]
pub trait ComparisonClient {
    /// Sends both files in one request and returns the decoded body, whatever its `success` flag.
    async fn submit(&self, old: &SelectedFile, new: &SelectedFile) -> Result<UploadResponse, UploadError>;
}

/// Only one submission may be outstanding at a time.
#[derive(Debug, Default, Clone)]
pub struct SingleFlight(Rc<Cell<bool>>);

impl SingleFlight {
    pub fn try_begin(&self) -> Option<FlightGuard> {
        if self.0.replace(true) {
            return None;
        }
        Some(FlightGuard(self.0.clone()))
    }

    pub fn is_in_flight(&self) -> bool {
        self.0.get()
    }
}

/// Clears the in-flight flag when dropped, on every exit path.
#[derive(Debug)]
pub struct FlightGuard(Rc<Cell<bool>>);

impl Drop for FlightGuard {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// A successful comparison together with the two files that were sent for it.
#[derive(Debug, Clone)]
pub struct SubmittedComparison {
    pub result: ComparisonResult,
    pub old: SelectedFile,
    pub new: SelectedFile,
}

pub struct UploadCoordinator<C> {
    client: C,
    selections: RefCell<FileSelections>,
    flight: SingleFlight,
}

impl<C: ComparisonClient> UploadCoordinator<C> {
    pub fn new(client: C) -> Self {
        Self { client, selections: RefCell::new(FileSelections::default()), flight: SingleFlight::default() }
    }

    pub fn select_file(&self, slot: DocumentSlot, candidate: SelectedFile) -> Result<(), SelectionError> {
        let result = self.selections.borrow_mut().select_file(slot, candidate);
        match &result {
            Ok(()) => info!("Selected {slot} template"),
            Err(e) => warn!("Rejected {slot} template: {e}"),
        }
        result
    }

    pub fn selected(&self, slot: DocumentSlot) -> Option<SelectedFile> {
        self.selections.borrow().get(slot).cloned()
    }

    pub fn both_selected(&self) -> bool {
        self.selections.borrow().both_selected()
    }

    pub fn is_in_flight(&self) -> bool {
        self.flight.is_in_flight()
    }

    /// Gate for the compare action.
    pub fn can_submit(&self) -> bool {
        self.both_selected() && !self.is_in_flight()
    }

    /// Posts both selections. `Ok(None)` means another submission is still outstanding and
    /// this call did nothing.
    pub async fn submit_comparison(&self) -> Result<Option<SubmittedComparison>, UploadError> {
        let Some((old, new)) = self.selections.borrow().pair() else {
            return Err(UploadError::MissingSelection);
        };
        let Some(_guard) = self.flight.try_begin() else {
            debug!("Comparison already in flight, ignoring submission");
            return Ok(None);
        };

        info!("Submitting comparison: old={} new={}", old.name(), new.name());
        let response = self.client.submit(&old, &new).await.inspect_err(|e| warn!("Comparison request failed: {e}"))?;
        let result = response.into_result().map_err(|message| {
            warn!("Comparison rejected by server: {message}");
            UploadError::Rejected(message)
        })?;
        info!("Comparison finished, output file: {:?}", result.output_file);

        Ok(Some(SubmittedComparison { result, old, new }))
    }
}

#[cfg(test)]
mod tests {
    use std::pin::pin;

    use futures::{FutureExt, executor::block_on};

    use super::*;
    use crate::testing::{FakeClient, pdf_file};

    fn coordinator_with_both(client: FakeClient) -> UploadCoordinator<FakeClient> {
        let coordinator = UploadCoordinator::new(client);
        coordinator.select_file(DocumentSlot::Old, pdf_file("old", 3)).unwrap();
        coordinator.select_file(DocumentSlot::New, pdf_file("new", 3)).unwrap();
        coordinator
    }

    #[test]
    fn submission_requires_both_files() {
        let coordinator = UploadCoordinator::new(FakeClient::succeeding("cmp.pdf"));
        coordinator.select_file(DocumentSlot::Old, pdf_file("old", 1)).unwrap();
        assert!(!coordinator.can_submit());
        assert_eq!(block_on(coordinator.submit_comparison()).unwrap_err(), UploadError::MissingSelection);
        assert_eq!(coordinator.client.calls(), 0);
    }

    #[test]
    fn success_returns_result_and_sent_files() {
        let coordinator = coordinator_with_both(FakeClient::succeeding("cmp_123.pdf"));
        assert!(coordinator.can_submit());

        let submitted = block_on(coordinator.submit_comparison()).unwrap().unwrap();

        assert_eq!(submitted.result.output_file.as_deref(), Some("cmp_123.pdf"));
        assert_eq!(submitted.old.name(), "old.pdf");
        assert_eq!(submitted.new.name(), "new.pdf");
        assert!(!coordinator.is_in_flight());
        assert_eq!(coordinator.client.calls(), 1);
        assert_eq!(coordinator.client.last_sent(), Some(("old.pdf".to_string(), "new.pdf".to_string())));
    }

    #[test]
    fn rejection_and_transport_failure_clear_the_flag() {
        let coordinator = coordinator_with_both(FakeClient::rejecting(Some("Only PDF files allowed")));
        assert_eq!(
            block_on(coordinator.submit_comparison()).unwrap_err(),
            UploadError::Rejected("Only PDF files allowed".into())
        );
        assert!(coordinator.can_submit());

        let coordinator = coordinator_with_both(FakeClient::failing("connection refused"));
        assert_eq!(
            block_on(coordinator.submit_comparison()).unwrap_err(),
            UploadError::TransportFailure("connection refused".into())
        );
        assert!(coordinator.can_submit());
    }

    #[test]
    fn second_submission_while_in_flight_is_ignored() {
        let client = FakeClient::succeeding("cmp.pdf");
        let release = client.hold_next();
        let coordinator = coordinator_with_both(client);

        let mut first = pin!(coordinator.submit_comparison());
        assert!(first.as_mut().now_or_never().is_none());
        assert!(coordinator.is_in_flight());
        assert!(!coordinator.can_submit());

        assert!(matches!(block_on(coordinator.submit_comparison()), Ok(None)));
        assert_eq!(coordinator.client.calls(), 1);

        release.send(()).unwrap();
        assert!(block_on(first).unwrap().is_some());
        assert!(!coordinator.is_in_flight());
    }

    #[test]
    fn dropping_a_pending_submission_releases_the_flag() {
        let client = FakeClient::succeeding("cmp.pdf");
        let _release = client.hold_next();
        let coordinator = coordinator_with_both(client);
        {
            let mut pending = pin!(coordinator.submit_comparison());
            assert!(pending.as_mut().now_or_never().is_none());
            assert!(coordinator.is_in_flight());
        }
        assert!(!coordinator.is_in_flight());
    }
}
