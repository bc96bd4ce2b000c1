//! Debounced calculator handle

use crate::config::{
    CalculatorConfig, LevelCurveConfig, PlacementDistribution, PlayerProfile, PointsConfig,
    ScheduleConfig,
};
use crate::error::{CalculatorError, Result};
use crate::simulator::{SimulationEngine, YearReport};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Quiet period before a coefficient edit is applied
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(300);

struct Inner {
    /// Committed configuration; also serialises recomputes
    config: Mutex<CalculatorConfig>,
    /// Bumped by every coefficient edit; a timer only commits its own generation
    generation: AtomicU64,
    calculating: AtomicBool,
    updates: watch::Sender<Arc<YearReport>>,
    quiet_period: Duration,
}

impl Inner {
    /// Validate, simulate and publish `config`. Caller holds the config lock.
    fn recompute(&self, slot: &mut CalculatorConfig, config: CalculatorConfig) -> Result<()> {
        let engine = SimulationEngine::new(config)?;
        let report = Arc::new(engine.simulate());
        *slot = config;
        self.updates.send_replace(report);
        Ok(())
    }

    fn commit_curve(&self, generation: u64, curve: LevelCurveConfig) {
        let mut slot = self.config.lock();
        if self.generation.load(Ordering::SeqCst) != generation {
            log::trace!("Coefficient edit {} superseded", generation);
            return;
        }

        let candidate = CalculatorConfig { curve, ..*slot };
        if let Err(e) = self.recompute(&mut slot, candidate) {
            log::warn!("Debounced recalculation failed: {}", e);
        }
        self.calculating.store(false, Ordering::SeqCst);
    }
}

/// Cloneable handle holding the current configuration and latest report
#[derive(Clone)]
pub struct LiveCalculator {
    inner: Arc<Inner>,
}

impl LiveCalculator {
    pub fn new(config: CalculatorConfig) -> Result<Self> {
        Self::with_quiet_period(config, DEFAULT_QUIET_PERIOD)
    }

    pub fn with_quiet_period(config: CalculatorConfig, quiet_period: Duration) -> Result<Self> {
        let engine = SimulationEngine::new(config)?;
        let (updates, _) = watch::channel(Arc::new(engine.simulate()));

        Ok(Self {
            inner: Arc::new(Inner {
                config: Mutex::new(config),
                generation: AtomicU64::new(0),
                calculating: AtomicBool::new(false),
                updates,
                quiet_period,
            }),
        })
    }

    /// Receiver notified whenever a new report is published
    pub fn subscribe(&self) -> watch::Receiver<Arc<YearReport>> {
        self.inner.updates.subscribe()
    }

    /// Latest published report
    pub fn report(&self) -> Arc<YearReport> {
        self.inner.updates.borrow().clone()
    }

    /// Committed configuration; excludes coefficient edits still pending
    pub fn config(&self) -> CalculatorConfig {
        *self.inner.config.lock()
    }

    /// True while a coefficient edit waits for its quiet period
    pub fn is_calculating(&self) -> bool {
        self.inner.calculating.load(Ordering::SeqCst)
    }

    pub fn set_profile(&self, profile: PlayerProfile) -> Result<()> {
        self.apply(|config| config.profile = profile)
    }

    /// Replace the distribution override; `None` falls back to the profile
    pub fn set_distribution(&self, distribution: Option<PlacementDistribution>) -> Result<()> {
        self.apply(|config| config.distribution = distribution)
    }

    pub fn set_schedule(&self, schedule: ScheduleConfig) -> Result<()> {
        self.apply(|config| config.schedule = schedule)
    }

    pub fn set_points(&self, points: PointsConfig) -> Result<()> {
        self.apply(|config| config.points = points)
    }

    /// Queue a coefficient edit.
    ///
    /// Invalid coefficients are rejected here and nothing is queued. Must be
    /// called from within a tokio runtime.
    pub fn set_curve(&self, curve: LevelCurveConfig) -> Result<()> {
        curve.validate().inspect_err(|e| {
            log::warn!("Rejected coefficient edit: {}", e);
        })?;
        let handle = tokio::runtime::Handle::try_current()
            .map_err(|e| CalculatorError::Simulation(format!("no async runtime: {}", e)))?;

        let generation = {
            let _guard = self.inner.config.lock();
            self.inner.calculating.store(true, Ordering::SeqCst);
            self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1
        };

        let inner = Arc::clone(&self.inner);
        handle.spawn(async move {
            tokio::time::sleep(inner.quiet_period).await;
            inner.commit_curve(generation, curve);
        });

        Ok(())
    }

    fn apply(&self, edit: impl FnOnce(&mut CalculatorConfig)) -> Result<()> {
        let mut slot = self.inner.config.lock();
        let mut candidate = *slot;
        edit(&mut candidate);
        self.inner.recompute(&mut slot, candidate).inspect_err(|e| {
            log::warn!("Rejected configuration edit: {}", e);
        })
    }
}
