//! Property-based tests for the analytics engines.

use proptest::prelude::*;

use appraise_analytics::prelude::*;
use appraise_core::prelude::*;

fn arb_params() -> impl Strategy<Value = ProjectParameters> {
    (
        100.0f64..2000.0,
        50.0f64..1500.0,
        0.0f64..800.0,
        1u32..=30,
        200.0f64..2000.0,
        0.0f64..180.0,
        0.0f64..0.5,
    )
        .prop_map(|(tank, pump, install, years, benefit, upkeep, rate)| {
            ProjectParameters::new(tank, pump, install, years, benefit, upkeep, rate)
        })
}

proptest! {
    #[test]
    fn prop_npv_decreases_as_rate_rises(params in arb_params(), bump in 0.01f64..0.4) {
        // Conventional projects (positive net flows) lose value under a
        // higher discount rate
        prop_assume!(params.net_annual_flow() > 0.0);
        let flows = vec![params.net_annual_flow(); params.lifetime_years as usize];
        let low = npv(params.total_outlay(), &flows, params.discount_rate);
        let high = npv(params.total_outlay(), &flows, params.discount_rate + bump);
        prop_assert!(high < low);
    }

    #[test]
    fn prop_npv_at_irr_is_zero(params in arb_params()) {
        let result = evaluate(&params).unwrap();
        if let Some(rate) = result.irr {
            let flows = vec![params.net_annual_flow(); params.lifetime_years as usize];
            let residual = npv(params.total_outlay(), &flows, rate);
            // Tolerance scales with the outlay; near-vertical NPV curves
            // leave a larger absolute residual at the solver tolerance
            let bound = 1e-6 * (1.0 + params.total_outlay());
            prop_assert!(residual.abs() < bound, "residual {residual} at irr {rate}");
        }
    }

    #[test]
    fn prop_discounted_payback_never_shorter(params in arb_params()) {
        let result = evaluate(&params).unwrap();
        if let (Some(simple), Some(discounted)) =
            (result.simple_payback, result.discounted_payback)
        {
            prop_assert!(discounted >= simple - 1e-9);
        }
    }

    #[test]
    fn prop_simple_payback_within_horizon(params in arb_params()) {
        let result = evaluate(&params).unwrap();
        if let Some(periods) = result.simple_payback {
            prop_assert!(periods >= 0.0);
            prop_assert!(periods <= f64::from(params.lifetime_years));
        }
    }

    #[test]
    fn prop_scenario_npv_follows_adjustment(
        params in arb_params(),
        pct in 0.01f64..0.9,
    ) {
        let results = run_scenarios(&params, &Scenario::standard_set(pct, pct)).unwrap();
        prop_assert!(results[0].indicators.npv >= results[1].indicators.npv);
        prop_assert!(results[1].indicators.npv >= results[2].indicators.npv);
    }

    #[test]
    fn prop_eav_reproduces_npv(params in arb_params()) {
        let result = evaluate(&params).unwrap();
        let annuity = vec![result.equivalent_annual_value; params.lifetime_years as usize];
        let pv = npv(0.0, &annuity, params.discount_rate);
        prop_assert!((pv - result.npv).abs() < 1e-6 * (1.0 + result.npv.abs()));
    }

    #[test]
    fn prop_break_even_rate_lies_on_the_sampled_grid(params in arb_params()) {
        let points = npv_rate_sweep(&params, 0.0, 1.0, 200).unwrap();
        if let Some(rate) = break_even_rate(&points) {
            prop_assert!(rate >= 0.0);
            prop_assert!(rate <= 1.0);
            // The curve straddles zero around the crossing
            let flows = vec![params.net_annual_flow(); params.lifetime_years as usize];
            let just_below = npv(params.total_outlay(), &flows, (rate - 0.01).max(0.0));
            let just_above = npv(params.total_outlay(), &flows, (rate + 0.01).min(1.0));
            prop_assert!(just_below >= just_above);
        }
    }

    #[test]
    fn prop_unbalanced_weights_are_refused(
        w in 0.0f64..1.0,
        rating in 1u8..=10,
    ) {
        // Any single-criterion weight off 1.0 by more than the
        // tolerance must refuse to score
        prop_assume!((w - 1.0).abs() > 0.011);
        let weights = CriteriaWeights::new().with_weight(Criterion::Cost, w);
        let alt = Alternative::new("X").with_rating(Criterion::Cost, rating);
        prop_assert!(score(&alt, &weights).is_err());
    }

    #[test]
    fn prop_scoring_is_bounded_by_rating_scale(
        r1 in 1u8..=10, r2 in 1u8..=10, r3 in 1u8..=10, r4 in 1u8..=10, r5 in 1u8..=10,
    ) {
        let alt = Alternative::new("X")
            .with_rating(Criterion::Cost, r1)
            .with_rating(Criterion::Capacity, r2)
            .with_rating(Criterion::PowerConsumption, r3)
            .with_rating(Criterion::Durability, r4)
            .with_rating(Criterion::Maintenance, r5);
        let card = score(&alt, &CriteriaWeights::standard()).unwrap();
        prop_assert!(card.total >= 1.0 - 1e-9);
        prop_assert!(card.total <= 10.0 + 1e-9);
    }
}
