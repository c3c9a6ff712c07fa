use std::sync::{Mutex, PoisonError};

use crate::{lifecycle::LifecycleController, token_estimate::CostEstimate};

#[derive(Debug, serde::Serialize)]
pub(crate) struct BridgeResult {
    pub(crate) ok: bool,
    pub(crate) reason: Option<String>,
}

impl BridgeResult {
    pub(crate) fn ok() -> Self {
        Self {
            ok: true,
            reason: None,
        }
    }

    pub(crate) fn failed(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            reason: Some(reason.into()),
        }
    }
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct CostEstimateResult {
    pub(crate) ok: bool,
    pub(crate) reason: Option<String>,
    pub(crate) estimate: Option<CostEstimate>,
}

impl CostEstimateResult {
    pub(crate) fn estimated(estimate: CostEstimate) -> Self {
        Self {
            ok: true,
            reason: None,
            estimate: Some(estimate),
        }
    }

    pub(crate) fn failed(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            reason: Some(reason.into()),
            estimate: None,
        }
    }
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct ChunkSplitResult {
    pub(crate) ok: bool,
    pub(crate) reason: Option<String>,
    pub(crate) chunks: Vec<String>,
}

impl ChunkSplitResult {
    pub(crate) fn split(chunks: Vec<String>) -> Self {
        Self {
            ok: true,
            reason: None,
            chunks,
        }
    }

    pub(crate) fn failed(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            reason: Some(reason.into()),
            chunks: Vec::new(),
        }
    }
}

/// Managed wrapper around the lifecycle controller. Host callbacks lock it
/// only long enough to compute a decision; commands run after the lock drops.
#[derive(Debug)]
pub(crate) struct LifecycleState {
    controller: Mutex<LifecycleController>,
}

impl LifecycleState {
    pub(crate) fn new(controller: LifecycleController) -> Self {
        Self {
            controller: Mutex::new(controller),
        }
    }

    pub(crate) fn with_controller<T, F>(&self, f: F) -> T
    where
        F: FnOnce(&mut LifecycleController) -> T,
    {
        let mut guard = self
            .controller
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}
