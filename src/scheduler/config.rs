//! Generator configuration.

use serde::{Deserialize, Serialize};

use crate::models::{SlotSet, TimeSlot};
use crate::solver::{SolverConfig, VariableOrder};

/// Settings for one [`ScheduleGenerator`](super::ScheduleGenerator).
///
/// Plain data; callers may load it from JSON. Missing fields take their
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Slots the generator may assign. Default: the whole week.
    /// Order and duplicates are irrelevant; the search always uses
    /// canonical `(weekday, period)` order.
    pub available_slots: Vec<TimeSlot>,
    /// Variable branching order.
    pub variable_order: VariableOrder,
    /// Wall-clock search limit (ms). `None` = unlimited.
    pub time_limit_ms: Option<u64>,
    /// Reject up front when one professor or classroom has more requests
    /// than available slots.
    pub capacity_precheck: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            available_slots: TimeSlot::all().collect(),
            variable_order: VariableOrder::InputOrder,
            time_limit_ms: None,
            capacity_precheck: true,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the slot domain.
    pub fn with_available_slots(mut self, slots: impl IntoIterator<Item = TimeSlot>) -> Self {
        self.available_slots = slots.into_iter().collect();
        self
    }

    /// Sets the variable branching order.
    pub fn with_variable_order(mut self, order: VariableOrder) -> Self {
        self.variable_order = order;
        self
    }

    /// Sets the wall-clock limit.
    pub fn with_time_limit_ms(mut self, limit_ms: u64) -> Self {
        self.time_limit_ms = Some(limit_ms);
        self
    }

    /// Enables or disables the per-resource capacity pre-check.
    pub fn with_capacity_precheck(mut self, enabled: bool) -> Self {
        self.capacity_precheck = enabled;
        self
    }

    /// Available slots, sorted and de-duplicated.
    pub fn canonical_slots(&self) -> Vec<TimeSlot> {
        self.available_slots
            .iter()
            .copied()
            .collect::<SlotSet>()
            .to_vec()
    }

    pub(crate) fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            variable_order: self.variable_order,
            time_limit_ms: self.time_limit_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_covers_week() {
        let config = GeneratorConfig::default();
        assert_eq!(config.canonical_slots().len(), 60);
        assert_eq!(config.variable_order, VariableOrder::InputOrder);
        assert!(config.capacity_precheck);
        assert_eq!(config.time_limit_ms, None);
    }

    #[test]
    fn test_canonical_slots_sorted_and_deduplicated() {
        let fri = TimeSlot::new(5, 1).unwrap();
        let mon = TimeSlot::new(1, 2).unwrap();
        let config = GeneratorConfig::new().with_available_slots([fri, mon, fri]);
        assert_eq!(config.canonical_slots(), vec![mon, fri]);
    }

    #[test]
    fn test_load_from_json() {
        let config: GeneratorConfig = serde_json::from_str(
            r#"{
                "available_slots": [{"weekday": 1, "period": 1}, {"weekday": 2, "period": 1}],
                "variable_order": "smallest_domain_first",
                "time_limit_ms": 500
            }"#,
        )
        .unwrap();

        assert_eq!(config.canonical_slots().len(), 2);
        assert_eq!(config.variable_order, VariableOrder::SmallestDomainFirst);
        assert_eq!(config.time_limit_ms, Some(500));
        // Omitted field keeps its default
        assert!(config.capacity_precheck);
    }

    #[test]
    fn test_empty_json_is_default() {
        let config: GeneratorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_invalid_slot_in_json_rejected() {
        let result = serde_json::from_str::<GeneratorConfig>(
            r#"{"available_slots": [{"weekday": 7, "period": 1}]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_solver_config() {
        let config = GeneratorConfig::new()
            .with_variable_order(VariableOrder::SmallestDomainFirst)
            .with_time_limit_ms(100);
        let solver = config.solver_config();
        assert_eq!(solver.variable_order, VariableOrder::SmallestDomainFirst);
        assert_eq!(solver.time_limit_ms, Some(100));
    }
}
