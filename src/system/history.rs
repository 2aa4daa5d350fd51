use std::collections::VecDeque;

pub const DEFAULT_CAPACITY: usize = 20;

/// Fixed-capacity FIFO of samples; the oldest sample is dropped first.
#[derive(Debug, Clone)]
pub struct RollingSeries {
    values: VecDeque<f32>,
    capacity: usize,
}

impl RollingSeries {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, value: f32) {
        self.values.push_back(value);
        if self.values.len() > self.capacity {
            self.values.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<f32> {
        self.values.back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.values.iter().copied()
    }

    /// `(index, value)` pairs, oldest first, ready for a line chart.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64, *v as f64))
            .collect()
    }
}

/// The samples recorded for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSample {
    pub cpu: f32,
    pub memory: f32,
    pub gpu: Option<f32>,
}

/// CPU, memory and GPU series kept index-aligned: every tick appends to all
/// three or to none.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    cpu: RollingSeries,
    memory: RollingSeries,
    gpu: RollingSeries,
}

impl HistoryBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            cpu: RollingSeries::new(capacity),
            memory: RollingSeries::new(capacity),
            gpu: RollingSeries::new(capacity),
        }
    }

    pub fn push_tick(&mut self, sample: TickSample) {
        self.cpu.push(sample.cpu);
        self.memory.push(sample.memory);
        // Absent GPU still advances the series so indices line up.
        self.gpu.push(sample.gpu.unwrap_or(0.0));
    }

    pub fn capacity(&self) -> usize {
        self.cpu.capacity()
    }

    pub fn len(&self) -> usize {
        self.cpu.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cpu.is_empty()
    }

    pub fn cpu(&self) -> &RollingSeries {
        &self.cpu
    }

    pub fn memory(&self) -> &RollingSeries {
        &self.memory
    }

    pub fn gpu(&self) -> &RollingSeries {
        &self.gpu
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn sample(cpu: f32, memory: f32, gpu: Option<f32>) -> TickSample {
        TickSample { cpu, memory, gpu }
    }

    #[test]
    fn series_caps_at_capacity() {
        let mut series = RollingSeries::new(5);
        for i in 0..10 {
            series.push(i as f32);
        }
        assert_eq!(series.len(), 5);
        assert_eq!(series.iter().collect::<Vec<_>>(), vec![5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(series.latest(), Some(9.0));
    }

    #[test]
    fn zero_capacity_is_clamped_to_one() {
        let mut series = RollingSeries::new(0);
        series.push(1.0);
        series.push(2.0);
        assert_eq!(series.capacity(), 1);
        assert_eq!(series.iter().collect::<Vec<_>>(), vec![2.0]);
    }

    #[test]
    fn absent_gpu_pushes_placeholder() {
        let mut history = HistoryBuffer::new(3);
        history.push_tick(sample(10.0, 20.0, Some(30.0)));
        history.push_tick(sample(11.0, 21.0, None));
        assert_eq!(history.gpu().iter().collect::<Vec<_>>(), vec![30.0, 0.0]);
        assert_eq!(history.cpu().len(), history.gpu().len());
        assert_eq!(history.memory().len(), history.gpu().len());
    }

    #[test]
    fn points_are_indexed_oldest_first() {
        let mut series = RollingSeries::new(2);
        series.push(1.0);
        series.push(2.0);
        series.push(3.0);
        assert_eq!(series.points(), vec![(0.0, 2.0), (1.0, 3.0)]);
    }

    proptest! {
        #[test]
        fn series_keeps_last_n_in_order(
            capacity in 1usize..64,
            values in proptest::collection::vec(-1000.0f32..1000.0, 0..200),
        ) {
            let mut series = RollingSeries::new(capacity);
            for (pushed, v) in values.iter().enumerate() {
                series.push(*v);
                prop_assert!(series.len() <= capacity);
                prop_assert_eq!(series.len(), (pushed + 1).min(capacity));
            }
            let expected: Vec<f32> = values
                .iter()
                .copied()
                .skip(values.len().saturating_sub(capacity))
                .collect();
            prop_assert_eq!(series.iter().collect::<Vec<_>>(), expected);
        }

        #[test]
        fn ticks_keep_series_aligned(
            capacity in 1usize..40,
            ticks in proptest::collection::vec(
                (0.0f32..100.0, 0.0f32..100.0, proptest::option::of(0.0f32..100.0)),
                0..120,
            ),
        ) {
            let mut history = HistoryBuffer::new(capacity);
            for (cpu, memory, gpu) in ticks {
                history.push_tick(sample(cpu, memory, gpu));
                prop_assert_eq!(history.cpu().len(), history.memory().len());
                prop_assert_eq!(history.cpu().len(), history.gpu().len());
                prop_assert!(history.len() <= capacity);
            }
        }
    }
}
