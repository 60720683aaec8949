use crate::calculation::CalculationResult;
use std::collections::VecDeque;

/// Number of results a history keeps
pub const HISTORY_CAPACITY: usize = 10;

/// Where a caller keeps finished calculations
///
/// Append and clear only: an entry cannot be removed on its own or edited.
pub trait HistoryRepository {
    /// Store a result as the most recent entry
    fn record(&mut self, result: CalculationResult);

    /// Entries, most recent first
    fn entries(&self) -> Vec<CalculationResult>;

    fn clear(&mut self);
}

/// Bounded, most-recent-first calculation history
#[derive(Debug, Clone, Default)]
pub struct CalculationHistory {
    entries: VecDeque<CalculationResult>,
}

impl CalculationHistory {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Prepend a result, dropping the oldest beyond capacity
    pub fn record(&mut self, result: CalculationResult) {
        self.entries.push_front(result);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            tracing::info!(dropped = self.entries.len(), "cleared calculation history");
        }
        self.entries.clear();
    }

    pub fn latest(&self) -> Option<&CalculationResult> {
        self.entries.front()
    }

    /// Iterate most recent first
    pub fn iter(&self) -> impl Iterator<Item = &CalculationResult> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HistoryRepository for CalculationHistory {
    fn record(&mut self, result: CalculationResult) {
        CalculationHistory::record(self, result);
    }

    fn entries(&self) -> Vec<CalculationResult> {
        self.entries.iter().cloned().collect()
    }

    fn clear(&mut self) {
        CalculationHistory::clear(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{evaluate_at, CalculationRequest, CalculationType};
    use crate::equipment::{CraneSpecification, CraneType};
    use crate::load::{LoadConfiguration, LoadDimensions};
    use crate::policy::LoadPolicy;
    use crate::types::*;
    use chrono::{TimeZone, Utc};

    fn result_for(weight_t: f64, second: u32) -> CalculationResult {
        let crane = CraneSpecification::new(
            CraneType::Gantry,
            Mass::new::<metric_ton>(100.0),
            Length::new::<meter>(5.0),
        );
        let load = LoadConfiguration::new(
            Mass::new::<metric_ton>(weight_t),
            Mass::new::<metric_ton>(0.0),
            LoadDimensions::new(
                Length::new::<meter>(1.0),
                Length::new::<meter>(1.0),
                Length::new::<meter>(1.0),
            ),
        );
        let stamp = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, second).unwrap();
        evaluate_at(
            &CalculationRequest::new(crane, load, CalculationType::Static),
            &LoadPolicy::default(),
            stamp,
        )
        .unwrap()
    }

    #[test]
    fn test_most_recent_first() {
        let mut history = CalculationHistory::new();
        history.record(result_for(1.0, 0));
        history.record(result_for(2.0, 1));

        let weights: Vec<f64> = history.iter().map(|r| tonnes(r.effective_load)).collect();
        assert_eq!(weights, vec![2.0, 1.0]);
        assert_eq!(tonnes(history.latest().unwrap().effective_load), 2.0);
    }

    #[test]
    fn test_capped_at_ten() {
        let mut history = CalculationHistory::new();
        for i in 0..15u32 {
            history.record(result_for(i as f64 + 1.0, i));
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        // Newest is 15 t, oldest kept is 6 t
        assert_eq!(tonnes(history.latest().unwrap().effective_load), 15.0);
        assert_eq!(tonnes(history.iter().last().unwrap().effective_load), 6.0);
    }

    #[test]
    fn test_clear() {
        let mut history = CalculationHistory::new();
        history.record(result_for(1.0, 0));
        history.clear();

        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }

    #[test]
    fn test_through_repository_trait() {
        let mut repo: Box<dyn HistoryRepository> = Box::new(CalculationHistory::new());
        repo.record(result_for(3.0, 0));
        repo.record(result_for(4.0, 1));

        let entries = repo.entries();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].timestamp > entries[1].timestamp);

        repo.clear();
        assert!(repo.entries().is_empty());
    }
}
