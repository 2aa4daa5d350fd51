//! GPU metrics via NVML. A host without an NVIDIA driver simply has no GPU
//! readings; nothing here is ever reported as an error to the caller.

use super::snapshot::GpuMetrics;

#[cfg(feature = "gpu")]
use nvml_wrapper::Nvml;
#[cfg(feature = "gpu")]
use nvml_wrapper::enum_wrappers::device::TemperatureSensor;

pub struct GpuProbe {
    #[cfg(feature = "gpu")]
    nvml: Option<Nvml>,
}

impl Default for GpuProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl GpuProbe {
    #[cfg(feature = "gpu")]
    pub fn new() -> Self {
        let nvml = match Nvml::init() {
            Ok(nvml) => Some(nvml),
            Err(err) => {
                tracing::debug!(error = %err, "NVML unavailable, GPU metrics disabled");
                None
            }
        };
        GpuProbe { nvml }
    }

    #[cfg(not(feature = "gpu"))]
    pub fn new() -> Self {
        GpuProbe {}
    }

    pub fn is_available(&self) -> bool {
        #[cfg(feature = "gpu")]
        {
            self.nvml.is_some()
        }
        #[cfg(not(feature = "gpu"))]
        {
            false
        }
    }

    /// Reads the first device. `None` when no GPU is present or the query fails.
    #[cfg(feature = "gpu")]
    pub fn read(&self) -> Option<GpuMetrics> {
        let nvml = self.nvml.as_ref()?;
        let device = match nvml.device_by_index(0) {
            Ok(device) => device,
            Err(err) => {
                tracing::debug!(error = %err, "no GPU device at index 0");
                return None;
            }
        };

        let utilization = match device.utilization_rates() {
            Ok(u) => u,
            Err(err) => {
                tracing::debug!(error = %err, "GPU utilization query failed");
                return None;
            }
        };
        let memory_percent = match device.memory_info() {
            Ok(info) => percent_of(info.used, info.total),
            Err(err) => {
                tracing::debug!(error = %err, "GPU memory query failed");
                return None;
            }
        };
        let temperature_celsius = device
            .temperature(TemperatureSensor::Gpu)
            .ok()
            .map(|t| t as f32);

        Some(GpuMetrics {
            load_percent: (utilization.gpu as f32).clamp(0.0, 100.0),
            memory_percent,
            temperature_celsius,
        })
    }

    #[cfg(not(feature = "gpu"))]
    pub fn read(&self) -> Option<GpuMetrics> {
        None
    }
}

pub(crate) fn percent_of(part: u64, total: u64) -> f32 {
    if total == 0 {
        return 0.0;
    }
    ((part as f64 / total as f64) * 100.0).clamp(0.0, 100.0) as f32
}
