//! End-to-end appraisal scenarios over the public API.

use approx::assert_relative_eq;

use appraise_analytics::prelude::*;
use appraise_core::prelude::*;

/// The reference project: 750 + 600 + 400 outlay, 8 years, 700 benefit,
/// 100 upkeep, 10% rate.
fn reference_project() -> ProjectParameters {
    ProjectParameters::new(750.0, 600.0, 400.0, 8, 700.0, 100.0, 0.10)
}

#[test]
fn test_reference_project_full_indicator_set() {
    let result = evaluate(&reference_project()).unwrap();

    assert_relative_eq!(result.npv, 1450.9557, epsilon = 1e-3);
    assert_relative_eq!(result.benefit_cost_ratio, 7.0, epsilon = 1e-9);
    assert_relative_eq!(
        result.simple_payback.unwrap(),
        2.0 + 550.0 / 600.0,
        epsilon = 1e-9
    );

    let irr = result.irr.unwrap();
    assert!(irr > 0.29 && irr < 0.31);
    assert!(result.discounted_payback.unwrap() > result.simple_payback.unwrap());

    // EAV discounted back over the lifetime reproduces the NPV
    let pv = npv(0.0, &[result.equivalent_annual_value; 8], 0.10);
    assert_relative_eq!(pv, result.npv, epsilon = 1e-6);
}

#[test]
fn test_verdict_helpers() {
    let result = evaluate(&reference_project()).unwrap();
    assert!(result.viable());
    assert_eq!(result.meets_hurdle(0.10), Some(true));
    assert_eq!(result.meets_hurdle(0.50), Some(false));
}

#[test]
fn test_marginal_project_flips_with_the_rate() {
    // Thin margins: 1750 outlay, 250/year over 8 years
    let params = ProjectParameters::new(750.0, 600.0, 400.0, 8, 350.0, 100.0, 0.03);
    let low_rate = evaluate(&params).unwrap();
    assert!(low_rate.viable());

    let high_rate = evaluate(&params.with_discount_rate(0.08)).unwrap();
    assert!(!high_rate.viable());

    // The break-even rate sits between the two
    let curve = npv_rate_sweep(&params, 0.0, 0.2, 400).unwrap();
    let breakeven = break_even_rate(&curve).unwrap();
    assert!(breakeven > 0.03 && breakeven < 0.08);
}

#[test]
fn test_scenario_triple_brackets_the_base_case() {
    let params = reference_project();
    let results = run_scenarios(&params, &Scenario::standard_set(0.20, 0.20)).unwrap();
    let base = evaluate(&params).unwrap();

    assert!(results[0].indicators.npv > base.npv);
    assert_eq!(results[1].indicators, base);
    assert!(results[2].indicators.npv < base.npv);

    // Even -20% leaves the reference project viable
    assert!(results[2].indicators.viable());
}

#[test]
fn test_rate_sweep_brackets_the_break_even_rate() {
    let params = reference_project();
    let points = npv_rate_sweep(&params, 0.0, 0.5, 100).unwrap();
    let breakeven = break_even_rate(&points).unwrap();

    let before = points.iter().filter(|p| p.rate < breakeven).last().unwrap();
    let after = points.iter().find(|p| p.rate > breakeven).unwrap();
    assert!(before.npv > 0.0);
    assert!(after.npv < 0.0);
}

#[test]
fn test_break_even_agrees_with_irr() {
    // The interpolated zero crossing of the sampled curve and the
    // solver's root must coincide to within the grid resolution
    let params = reference_project();
    let points = npv_rate_sweep(&params, 0.0, 1.0, 400).unwrap();
    let breakeven = break_even_rate(&points).unwrap();
    let result = evaluate(&params).unwrap();
    assert_relative_eq!(breakeven, result.irr.unwrap(), epsilon = 1e-3);
}

#[test]
fn test_multicriteria_comparison_end_to_end() {
    let alternatives = vec![
        Alternative::new("System A")
            .with_rating(Criterion::Cost, 9)
            .with_rating(Criterion::Capacity, 7)
            .with_rating(Criterion::PowerConsumption, 9)
            .with_rating(Criterion::Durability, 8)
            .with_rating(Criterion::Maintenance, 9),
        Alternative::new("System B")
            .with_rating(Criterion::Cost, 7)
            .with_rating(Criterion::Capacity, 10)
            .with_rating(Criterion::PowerConsumption, 8)
            .with_rating(Criterion::Durability, 10)
            .with_rating(Criterion::Maintenance, 7),
    ];

    let outcome = rank(&alternatives, &CriteriaWeights::standard()).unwrap();
    assert_relative_eq!(outcome.cards[0].total, 8.35, epsilon = 1e-9);
    assert_relative_eq!(outcome.cards[1].total, 8.40, epsilon = 1e-9);
    match outcome.ranking {
        Ranking::Winner { ref name, margin } => {
            assert_eq!(name, "System B");
            assert_relative_eq!(margin, 0.05, epsilon = 1e-9);
        }
        Ranking::Tie { .. } => panic!("expected a winner"),
    }
}

#[test]
fn test_results_serialize_for_reporting() {
    let result = evaluate(&reference_project()).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let back: IndicatorResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result, back);
}
