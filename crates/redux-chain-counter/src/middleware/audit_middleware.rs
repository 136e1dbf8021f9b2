//! Audit Middleware
//!
//! Counts dispatched actions and logs the counter value before and after
//! each one reaches the reducer.

use crate::state::RootState;
use redux_chain::{Action, AnyAction, DispatchError, Middleware, Next, StoreApi};
use std::sync::atomic::{AtomicU64, Ordering};

/// Audit middleware - numbers every dispatch and reports the state change
pub struct AuditMiddleware {
    dispatched: AtomicU64,
}

impl AuditMiddleware {
    pub fn new() -> Self {
        Self {
            dispatched: AtomicU64::new(0),
        }
    }

    /// Number of actions seen so far, including ones that failed further in
    #[cfg(test)]
    pub fn dispatched(&self) -> u64 {
        self.dispatched.load(Ordering::Relaxed)
    }
}

impl Default for AuditMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware<RootState, AnyAction> for AuditMiddleware {
    fn name(&self) -> &str {
        "audit"
    }

    fn handle(
        &self,
        api: &StoreApi<RootState, AnyAction>,
        action: AnyAction,
        next: Next<AnyAction>,
    ) -> Result<AnyAction, DispatchError> {
        let seq = self.dispatched.fetch_add(1, Ordering::Relaxed) + 1;
        let before = api.get_state().counter.value;
        let action_type = action.action_type().to_string();

        let result = next.run(action)?;

        let after = api.get_state().counter.value;
        log::debug!(
            "AuditMiddleware: #{} {} value {} -> {}",
            seq,
            action_type,
            before,
            after
        );
        Ok(result)
    }
}
