/* src/guard.rs */

//!
//! Run-once check whose outcome is cached for the lifetime of the owner.

use std::future::Future;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::Mutex;

#[derive(Debug)]
enum CheckState {
	Unchecked,
	Ready,
	Failed(Arc<io::Error>),
}

/// Three-state guard: unchecked, checked-ok, checked-failed.
///
/// Callers that arrive while the check runs wait on the mutex and then see
/// the stored outcome. The check never runs again once it has completed,
/// whatever the outcome was.
#[derive(Debug)]
pub(crate) struct RootCheck {
	state: Mutex<CheckState>,
	runs: AtomicUsize,
}

impl RootCheck {
	pub(crate) fn new() -> Self {
		Self {
			state: Mutex::new(CheckState::Unchecked),
			runs: AtomicUsize::new(0),
		}
	}

	/// Runs `check` if no outcome is stored yet, then returns the stored outcome.
	pub(crate) async fn ensure<F, Fut>(&self, check: F) -> Result<(), Arc<io::Error>>
	where
		F: FnOnce() -> Fut,
		Fut: Future<Output = io::Result<()>>,
	{
		let mut state = self.state.lock().await;
		match &*state {
			CheckState::Ready => return Ok(()),
			CheckState::Failed(e) => return Err(Arc::clone(e)),
			CheckState::Unchecked => {}
		}

		self.runs.fetch_add(1, Ordering::SeqCst);
		let outcome = check().await.map_err(Arc::new);
		*state = match &outcome {
			Ok(()) => CheckState::Ready,
			Err(e) => CheckState::Failed(Arc::clone(e)),
		};
		outcome
	}

	/// Number of times the check has actually executed.
	pub(crate) fn runs(&self) -> usize {
		self.runs.load(Ordering::SeqCst)
	}
}
