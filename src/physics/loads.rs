use crate::calculation::CalculationType;
use crate::load::LoadConfiguration;
use crate::types::*;
use serde::{Deserialize, Serialize};

/// Loads derived from a load configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadDerivation {
    /// Net load plus rigging
    pub total_static_load: Mass,

    /// Multiplier taken from the calculation type (1.0 when none applies)
    pub amplification: f64,

    /// Static load after amplification
    pub effective_load: Mass,
}

/// Multiplier applied to the static load for a calculation type
///
/// The load's dynamic factor only counts for dynamic calculations; static and
/// multi-crane calculations ignore it even when it is set. A multi-crane
/// coordination factor counts only when the setup opts in.
pub fn amplification_factor(load: &LoadConfiguration, calculation_type: &CalculationType) -> f64 {
    match calculation_type {
        CalculationType::Static => 1.0,
        CalculationType::Dynamic => load.dynamic_factor,
        CalculationType::MultiCrane(setup) => setup.applied_coordination_factor(),
    }
}

pub fn derive_loads(
    load: &LoadConfiguration,
    calculation_type: &CalculationType,
) -> LoadDerivation {
    let total_static_load = load.weight + load.rigging_weight;
    let amplification = amplification_factor(load, calculation_type);

    LoadDerivation {
        total_static_load,
        amplification,
        effective_load: total_static_load * amplification,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::tandem::MultiCraneSetup;
    use crate::load::LoadDimensions;
    use approx::assert_relative_eq;

    fn load(weight_t: f64, rigging_t: f64) -> LoadConfiguration {
        LoadConfiguration::new(
            Mass::new::<metric_ton>(weight_t),
            Mass::new::<metric_ton>(rigging_t),
            LoadDimensions::new(
                Length::new::<meter>(3.0),
                Length::new::<meter>(2.0),
                Length::new::<meter>(1.0),
            ),
        )
    }

    #[test]
    fn test_static_total_includes_rigging() {
        let derived = derive_loads(&load(10.0, 0.5), &CalculationType::Static);

        assert_relative_eq!(tonnes(derived.total_static_load), 10.5, epsilon = 1e-9);
        assert_relative_eq!(tonnes(derived.effective_load), 10.5, epsilon = 1e-9);
        assert_eq!(derived.amplification, 1.0);
    }

    #[test]
    fn test_dynamic_applies_factor_once() {
        let derived = derive_loads(
            &load(5.0, 0.0).with_dynamic_factor(1.15),
            &CalculationType::Dynamic,
        );

        assert_relative_eq!(tonnes(derived.total_static_load), 5.0, epsilon = 1e-9);
        assert_relative_eq!(tonnes(derived.effective_load), 5.75, epsilon = 1e-9);
    }

    #[test]
    fn test_static_ignores_dynamic_factor() {
        let derived = derive_loads(
            &load(5.0, 0.0).with_dynamic_factor(1.8),
            &CalculationType::Static,
        );
        assert_eq!(derived.effective_load, derived.total_static_load);
    }

    #[test]
    fn test_dynamic_factor_one_matches_static() {
        let cfg = load(7.3, 0.45).with_dynamic_factor(1.0);
        let stat = derive_loads(&cfg, &CalculationType::Static);
        let dynamic = derive_loads(&cfg, &CalculationType::Dynamic);

        assert_eq!(
            stat.effective_load.get::<kilogram>().to_bits(),
            dynamic.effective_load.get::<kilogram>().to_bits()
        );
    }

    #[test]
    fn test_multi_crane_coordination_is_opt_in() {
        let cfg = load(10.0, 0.0).with_dynamic_factor(1.5);

        let plain = derive_loads(&cfg, &CalculationType::MultiCrane(MultiCraneSetup::default()));
        assert_relative_eq!(tonnes(plain.effective_load), 10.0, epsilon = 1e-9);

        let applied = derive_loads(
            &cfg,
            &CalculationType::MultiCrane(MultiCraneSetup::default().applying_coordination_factor()),
        );
        assert_relative_eq!(tonnes(applied.effective_load), 12.5, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_weight_is_rigging_only() {
        let derived = derive_loads(&load(0.0, 0.25), &CalculationType::Static);
        assert_relative_eq!(tonnes(derived.effective_load), 0.25, epsilon = 1e-9);
    }
}
