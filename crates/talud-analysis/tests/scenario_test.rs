//! Paired-scenario tests: the design paradox the engine exists to expose.

use talud_analysis::{Scenario, ShapeMode, SlopeGeometry, StabilityEstimator};

fn short_slope() -> SlopeGeometry {
    SlopeGeometry::new(12.0, 19.0, 0.181)
}

// A stronger but poorly known soil must fail more often than a weaker,
// well-characterized one: (65 kPa, CoV 0.20) vs (55 kPa, CoV 0.10).
#[test]
fn higher_mean_with_higher_uncertainty_fails_more_often() {
    let uncertain = Scenario::new(65.0, 0.20, ShapeMode::Symmetric, short_slope());
    let confident = Scenario::new(55.0, 0.10, ShapeMode::Symmetric, short_slope());

    let estimator = StabilityEstimator::new(10_000).with_seed(42);
    let comparison = estimator.compare(&uncertain, &confident).expect("compare");

    let pf_uncertain = comparison.first.failure.probability_of_failure;
    let pf_confident = comparison.second.failure.probability_of_failure;
    assert!(
        pf_uncertain > pf_confident,
        "expected the uncertain scenario to fail more often: {pf_uncertain} vs {pf_confident}"
    );
    // The uncertain slope also has the higher nominal safety factor —
    // that inversion is the point.
    assert!(comparison.first.nominal_safety_factor > comparison.second.nominal_safety_factor);
}

#[test]
fn probability_ratio_quantifies_the_gap() {
    let uncertain = Scenario::new(65.0, 0.20, ShapeMode::Symmetric, short_slope());
    let confident = Scenario::new(55.0, 0.10, ShapeMode::Symmetric, short_slope());

    let comparison = StabilityEstimator::new(10_000)
        .with_seed(7)
        .compare(&uncertain, &confident)
        .expect("compare");

    match comparison.probability_ratio {
        Some(ratio) => assert!(
            ratio > 1.0,
            "ratio should exceed 1 for the paradox pair, got {ratio}"
        ),
        // A zero denominator is possible at this sample count, and is
        // an even stronger version of the same ordering.
        None => assert_eq!(comparison.second.failure.failing_count, 0),
    }
}

// Holding everything else fixed, widening the strength distribution can
// only push more mass below the failure threshold.
#[test]
fn probability_of_failure_is_monotone_in_cov() {
    let geometry = short_slope();
    let covs = [0.05, 0.10, 0.15, 0.20, 0.25, 0.30];

    let mut previous = -1.0;
    for &cov in &covs {
        let scenario = Scenario::new(65.0, cov, ShapeMode::Pert, geometry);
        let estimate = StabilityEstimator::new(10_000)
            .with_seed(1234)
            .estimate(&scenario)
            .expect("estimate");
        let pf = estimate.failure.probability_of_failure;
        assert!(
            pf >= previous,
            "Pf decreased from {previous} to {pf} at CoV {cov}"
        );
        previous = pf;
    }
}

// Two unseeded runs agree in distribution even though samples differ.
#[test]
fn unseeded_comparison_is_stable_in_distribution() {
    let uncertain = Scenario::new(65.0, 0.20, ShapeMode::Symmetric, short_slope());
    let confident = Scenario::new(55.0, 0.10, ShapeMode::Symmetric, short_slope());
    let estimator = StabilityEstimator::new(10_000);

    let first = estimator.compare(&uncertain, &confident).expect("compare");
    let second = estimator.compare(&uncertain, &confident).expect("compare");

    let delta = (first.first.failure.probability_of_failure
        - second.first.failure.probability_of_failure)
        .abs();
    assert!(
        delta <= 0.01,
        "independent runs of the same scenario diverged by {delta}"
    );
    assert!(
        first.first.failure.probability_of_failure
            > first.second.failure.probability_of_failure
    );
}
