//! Counters for registration and dispatch activity.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Activity counters aggregated across all cores.
///
/// Counters are lock-free and cheap enough to leave always on. A fresh
/// instance can be created for isolated measurement; the registries report
/// into the shared instance from [`crate::observability::metrics`].
#[derive(Debug, Default)]
pub struct CoreMetrics {
    proxies_registered: AtomicU64,
    mediators_registered: AtomicU64,
    commands_executed: AtomicU64,
    notifications_dispatched: AtomicU64,
    observers_notified: AtomicU64,
}

impl CoreMetrics {
    /// Create a zeroed metrics instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a proxy registration.
    pub fn record_proxy_registered(&self) {
        self.proxies_registered.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a mediator registration.
    pub fn record_mediator_registered(&self) {
        self.mediators_registered.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a command execution.
    pub fn record_command_executed(&self) {
        self.commands_executed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one dispatched notification that reached `observer_count`
    /// observers.
    pub fn record_notification_dispatched(&self, observer_count: usize) {
        self.notifications_dispatched.fetch_add(1, Ordering::Relaxed);
        self.observers_notified
            .fetch_add(observer_count as u64, Ordering::Relaxed);
    }

    /// Total proxies registered.
    pub fn proxies_registered(&self) -> u64 {
        self.proxies_registered.load(Ordering::Relaxed)
    }

    /// Total mediators registered.
    pub fn mediators_registered(&self) -> u64 {
        self.mediators_registered.load(Ordering::Relaxed)
    }

    /// Total commands executed.
    pub fn commands_executed(&self) -> u64 {
        self.commands_executed.load(Ordering::Relaxed)
    }

    /// Total notifications dispatched.
    pub fn notifications_dispatched(&self) -> u64 {
        self.notifications_dispatched.load(Ordering::Relaxed)
    }

    /// Total observer callbacks invoked.
    pub fn observers_notified(&self) -> u64 {
        self.observers_notified.load(Ordering::Relaxed)
    }

    /// Average observers reached per dispatched notification.
    pub fn observers_per_notification(&self) -> f64 {
        let dispatched = self.notifications_dispatched() as f64;
        if dispatched == 0.0 {
            0.0
        } else {
            self.observers_notified() as f64 / dispatched
        }
    }

    /// Reset every counter to zero.
    pub fn reset(&self) {
        self.proxies_registered.store(0, Ordering::Relaxed);
        self.mediators_registered.store(0, Ordering::Relaxed);
        self.commands_executed.store(0, Ordering::Relaxed);
        self.notifications_dispatched.store(0, Ordering::Relaxed);
        self.observers_notified.store(0, Ordering::Relaxed);
    }

    /// Snapshot the counters.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            proxies_registered: self.proxies_registered(),
            mediators_registered: self.mediators_registered(),
            commands_executed: self.commands_executed(),
            notifications_dispatched: self.notifications_dispatched(),
            observers_notified: self.observers_notified(),
        }
    }
}

/// A point-in-time snapshot of [`CoreMetrics`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSummary {
    pub proxies_registered: u64,
    pub mediators_registered: u64,
    pub commands_executed: u64,
    pub notifications_dispatched: u64,
    pub observers_notified: u64,
}

impl MetricsSummary {
    /// Render the snapshot as JSON for log shipping or debugging.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
