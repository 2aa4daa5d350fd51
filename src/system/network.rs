use std::time::Instant;

use sysinfo::Networks;

use crate::format::format_bytes;

/// Cumulative byte counters summed over every interface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NetworkCounters {
    pub bytes_sent_total: u64,
    pub bytes_received_total: u64,
}

/// Returns `None` when the platform reports no interfaces at all.
pub fn read_counters(networks: &Networks) -> Option<NetworkCounters> {
    if networks.list().is_empty() {
        return None;
    }
    let mut counters = NetworkCounters::default();
    for data in networks.list().values() {
        counters.bytes_sent_total = counters
            .bytes_sent_total
            .saturating_add(data.total_transmitted());
        counters.bytes_received_total = counters
            .bytes_received_total
            .saturating_add(data.total_received());
    }
    Some(counters)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Throughput {
    pub up_bytes_per_sec: f64,
    pub down_bytes_per_sec: f64,
}

impl Throughput {
    pub fn up_label(&self) -> String {
        format_rate(self.up_bytes_per_sec)
    }

    pub fn down_label(&self) -> String {
        format_rate(self.down_bytes_per_sec)
    }
}

/// Turns successive counter readings into per-second rates.
#[derive(Debug, Default)]
pub struct NetworkRate {
    previous: Option<(NetworkCounters, Instant)>,
}

impl NetworkRate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, counters: NetworkCounters, now: Instant) -> Throughput {
        let rate = match self.previous {
            Some((prev, at)) => {
                let elapsed = now.saturating_duration_since(at).as_secs_f64();
                bytes_per_second(prev, counters, elapsed)
            }
            None => Throughput::default(),
        };
        self.previous = Some((counters, now));
        rate
    }
}

pub fn bytes_per_second(
    prev: NetworkCounters,
    curr: NetworkCounters,
    elapsed_secs: f64,
) -> Throughput {
    if elapsed_secs <= 0.0 {
        return Throughput::default();
    }
    // Counters can go backwards when an interface disappears.
    let sent = curr.bytes_sent_total.saturating_sub(prev.bytes_sent_total);
    let received = curr
        .bytes_received_total
        .saturating_sub(prev.bytes_received_total);
    Throughput {
        up_bytes_per_sec: sent as f64 / elapsed_secs,
        down_bytes_per_sec: received as f64 / elapsed_secs,
    }
}

pub fn format_rate(bytes_per_sec: f64) -> String {
    let bytes = if bytes_per_sec.is_finite() && bytes_per_sec > 0.0 {
        bytes_per_sec.round() as u64
    } else {
        0
    };
    format!("{}/s", format_bytes(bytes))
}
