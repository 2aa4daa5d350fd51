use std::time::Instant;

use sysinfo::{
    MINIMUM_CPU_UPDATE_INTERVAL, Networks, ProcessRefreshKind, ProcessesToUpdate, System,
};
use thiserror::Error;

use super::gpu::{GpuProbe, percent_of};
use super::network::read_counters;
use super::process::ProcessRecord;
use super::snapshot::SystemSnapshot;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SampleError {
    #[error("CPU usage unavailable: no CPUs reported")]
    CpuUnavailable,

    #[error("memory usage unavailable: total memory reported as 0")]
    MemoryUnavailable,

    #[error("network counters unavailable: no interfaces reported")]
    NetworkUnavailable,
}

/// Source of host metrics and the process list.
pub trait MetricsProvider {
    fn sample(&mut self) -> Result<SystemSnapshot, SampleError>;
    fn list_processes(&mut self) -> Vec<ProcessRecord>;
}

/// `MetricsProvider` backed by sysinfo and NVML. All OS handles are created
/// once and refreshed in place.
pub struct Collector {
    sys: System,
    networks: Networks,
    gpu: GpuProbe,
    /// Set until the first read; CPU usage is a delta between two refreshes.
    cpu_baseline: Option<Instant>,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu_usage();
        sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_memory().with_cpu(),
        );
        Collector {
            sys,
            networks: Networks::new_with_refreshed_list(),
            gpu: GpuProbe::new(),
            cpu_baseline: Some(Instant::now()),
        }
    }

    pub fn gpu_available(&self) -> bool {
        self.gpu.is_available()
    }

    /// Blocks once, until sysinfo's minimum interval has passed since the
    /// construction-time refresh. Later calls return immediately.
    fn settle_cpu_baseline(&mut self) {
        if let Some(start) = self.cpu_baseline.take() {
            let remaining = MINIMUM_CPU_UPDATE_INTERVAL.saturating_sub(start.elapsed());
            if !remaining.is_zero() {
                tracing::debug!(
                    wait_ms = remaining.as_millis() as u64,
                    "waiting for CPU baseline"
                );
                std::thread::sleep(remaining);
            }
        }
    }
}

impl MetricsProvider for Collector {
    fn sample(&mut self) -> Result<SystemSnapshot, SampleError> {
        let _span = tracing::debug_span!("collector.sample").entered();
        self.settle_cpu_baseline();

        self.sys.refresh_memory();
        self.sys.refresh_cpu_usage();
        self.networks.refresh(true);

        if self.sys.cpus().is_empty() {
            return Err(SampleError::CpuUnavailable);
        }
        let memory_total = self.sys.total_memory();
        if memory_total == 0 {
            return Err(SampleError::MemoryUnavailable);
        }
        let network = read_counters(&self.networks).ok_or(SampleError::NetworkUnavailable)?;
        let memory_used = self.sys.used_memory();

        Ok(SystemSnapshot {
            cpu_percent: self.sys.global_cpu_usage().clamp(0.0, 100.0),
            memory_percent: percent_of(memory_used, memory_total),
            memory_used,
            memory_total,
            gpu: self.gpu.read(),
            network,
        })
    }

    fn list_processes(&mut self) -> Vec<ProcessRecord> {
        let _span = tracing::debug_span!("collector.list_processes").entered();
        self.settle_cpu_baseline();

        self.sys.refresh_memory();
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_memory().with_cpu(),
        );
        let total_memory = self.sys.total_memory();

        let mut records: Vec<ProcessRecord> = self
            .sys
            .processes()
            .iter()
            .map(|(pid, process)| ProcessRecord {
                pid: pid.as_u32(),
                name: process.name().to_string_lossy().to_string(),
                cpu_percent: process.cpu_usage().max(0.0),
                memory_percent: percent_of(process.memory(), total_memory),
            })
            .collect();
        records.sort_by_key(|r| r.pid);
        tracing::debug!(count = records.len(), "enumerated processes");
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_sample_is_within_bounds() {
        let mut collector = Collector::new();
        if let Ok(snapshot) = collector.sample() {
            assert!((0.0..=100.0).contains(&snapshot.cpu_percent));
            assert!((0.0..=100.0).contains(&snapshot.memory_percent));
            assert!(snapshot.memory_total > 0);
        }
    }

    #[test]
    fn first_read_waits_for_cpu_baseline() {
        let start = Instant::now();
        let mut collector = Collector::new();
        let _ = collector.sample();
        assert!(start.elapsed() >= MINIMUM_CPU_UPDATE_INTERVAL);
        assert!(collector.cpu_baseline.is_none());
    }

    #[test]
    fn gpu_absent_means_no_gpu_metrics() {
        let mut collector = Collector::new();
        if !collector.gpu_available()
            && let Ok(snapshot) = collector.sample()
        {
            assert_eq!(snapshot.gpu, None);
        }
    }

    #[cfg(not(feature = "gpu"))]
    #[test]
    fn gpu_unavailable_without_feature() {
        assert!(!Collector::new().gpu_available());
    }

    #[test]
    fn live_listing_contains_current_process() {
        let mut collector = Collector::new();
        let records = collector.list_processes();
        let me = std::process::id();
        assert!(records.iter().any(|r| r.pid == me));
        assert!(records.windows(2).all(|w| w[0].pid < w[1].pid));
    }
}
