use asc_optimize::{simulate, ConvergenceSimulator, StepPolicy};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_trace_is_monotone_and_bounded(initial in 0.0f64..=1.0, target in 0.0f64..=1.0) {
        let trace = simulate(initial, target);
        prop_assert_eq!(trace.initial(), initial);
        prop_assert!(trace.iterations() <= 10);
        for pair in trace.values().windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        if initial < target {
            prop_assert!(trace.values().iter().all(|&v| v <= target));
        } else {
            prop_assert_eq!(trace.values().len(), 1);
        }
    }

    #[test]
    fn prop_default_policy_converges_from_baselines(
        initial in 0.6f64..0.7,
        target in 0.85f64..0.9
    ) {
        let trace = simulate(initial, target);
        prop_assert!(trace.converged());
        prop_assert!(trace.final_value() >= target * 0.95);
    }

    #[test]
    fn prop_cap_is_respected(
        initial in 0.0f64..0.5,
        target in 0.5f64..=1.0,
        cap in 0usize..20,
        rate in 0.0f64..0.3
    ) {
        let sim = ConvergenceSimulator::new(StepPolicy { rate, ..StepPolicy::default() })
            .with_max_iterations(cap);
        let trace = sim.simulate(initial, target);
        prop_assert!(trace.iterations() <= cap);
    }
}
