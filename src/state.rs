use parking_lot::RwLock;
use std::sync::Arc;

use crate::config::{Config, FeatureWeights};
use crate::scoring::signals::{SignalProvider, StubSignalProvider};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Runtime-tunable copy of the category weights
    pub weights: Arc<RwLock<FeatureWeights>>,
    pub signals: Arc<dyn SignalProvider>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        config.weights.validate()?;
        let weights = config.weights;

        Ok(Self {
            config,
            weights: Arc::new(RwLock::new(weights)),
            signals: Arc::new(StubSignalProvider),
        })
    }

    /// Swap in a different signal provider (a data-backed implementation,
    /// or a failing one in tests).
    pub fn with_signals(mut self, signals: Arc<dyn SignalProvider>) -> Self {
        self.signals = signals;
        self
    }
}
