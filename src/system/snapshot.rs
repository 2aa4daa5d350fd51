use super::network::NetworkCounters;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GpuMetrics {
    pub load_percent: f32,
    pub memory_percent: f32,
    pub temperature_celsius: Option<f32>,
}

/// One point-in-time read of host metrics. Built fresh every tick.
#[derive(Clone, Debug, PartialEq)]
pub struct SystemSnapshot {
    pub cpu_percent: f32,
    pub memory_percent: f32,
    pub memory_used: u64,
    pub memory_total: u64,
    pub gpu: Option<GpuMetrics>,
    pub network: NetworkCounters,
}

impl SystemSnapshot {
    pub fn gpu_percent(&self) -> Option<f32> {
        self.gpu.map(|g| g.load_percent)
    }

    pub fn gpu_memory_percent(&self) -> Option<f32> {
        self.gpu.map(|g| g.memory_percent)
    }

    pub fn gpu_temperature_celsius(&self) -> Option<f32> {
        self.gpu.and_then(|g| g.temperature_celsius)
    }
}
