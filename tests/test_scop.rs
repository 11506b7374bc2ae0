use approx::assert_relative_eq;
use pretty_assertions::assert_eq;

use hpscop::{models::cop, *};

const ENV_TEMPS: [f64; 6] = [-0.5, -1.2, -2.8, -1.5, 1.0, 5.5];
const OUT_TEMPS: [f64; 6] = [42.0, 42.5, 43.0, 42.0, 41.0, 40.0];
const DAYS: [f64; 6] = [30.0, 31.0, 31.0, 28.0, 31.0, 30.0];

fn reference_season(sizing: &SizingInputs) -> SeasonResult {
    calculate_scop(&ENV_TEMPS, &OUT_TEMPS, &DAYS, sizing).unwrap()
}

/// Comprueba Q_total = Σ Qm, P_total = Σ Pm y SCOP = Q_total / P_total
fn check_totals(res: &SeasonResult) {
    let heat: f64 = res.monthly.iter().map(|m| m.heat_kwh).sum();
    let elec: f64 = res.monthly.iter().map(|m| m.elec_kwh).sum();
    assert_relative_eq!(res.heat_total_kwh, heat, max_relative = 1e-12);
    assert_relative_eq!(res.elec_total_kwh, elec, max_relative = 1e-12);
    assert_relative_eq!(
        res.scop,
        res.heat_total_kwh / res.elec_total_kwh,
        max_relative = 1e-12
    );
}

#[test]
fn scop_unit_count_reference_season() {
    let res = reference_season(&SizingInputs::units(10));
    check_totals(&res);

    assert_eq!(res.method, SizingMethod::UNITS);
    assert_relative_eq!(res.k, 88.634670529, epsilon = 1e-8);
    assert_relative_eq!(res.heat_total_kwh, 7_668_671.694, epsilon = 1e-2);
    assert_relative_eq!(res.elec_total_kwh, 2_299_205.376, epsilon = 1e-2);
    assert_relative_eq!(res.scop, 3.33536, epsilon = 1e-5);

    // SCOP is bounded by the monthly COP extremes
    let cop_min = res.monthly.iter().map(|m| m.cop).fold(f64::INFINITY, f64::min);
    let cop_max = res.monthly.iter().map(|m| m.cop).fold(f64::NEG_INFINITY, f64::max);
    assert!(cop_min < res.scop && res.scop < cop_max);
}

#[test]
fn scop_monthly_breakdown() {
    let res = reference_season(&SizingInputs::units(10));
    let months: Vec<Month> = res.monthly.iter().map(|m| m.month).collect();
    assert_eq!(
        months,
        vec![
            Month::NOV,
            Month::DIC,
            Month::ENE,
            Month::FEB,
            Month::MAR,
            Month::ABR
        ]
    );
    for (rec, (&t_env, (&t_out, &days))) in res
        .monthly
        .iter()
        .zip(ENV_TEMPS.iter().zip(OUT_TEMPS.iter().zip(DAYS.iter())))
    {
        assert_eq!((rec.t_env, rec.t_out, rec.days), (t_env, t_out, days));
        assert!(!rec.clamped);
        assert_relative_eq!(rec.cop, cop(t_env, t_out), max_relative = 1e-12);
        assert_relative_eq!(
            rec.heat_kwh,
            res.k * (20.0 - t_env) * days * HOURS_PER_DAY,
            max_relative = 1e-12
        );
    }
}

#[test]
fn scop_area_method() {
    let res = reference_season(&SizingInputs::area(1000.0, 25.0));
    check_totals(&res);
    assert_eq!(res.method, SizingMethod::AREA);
    assert_relative_eq!(res.k, 25.0 / 27.2, max_relative = 1e-12);
    // Same climate, same monthly COPs: SCOP doesn't depend on K
    let units = reference_season(&SizingInputs::units(10));
    assert_relative_eq!(res.scop, units.scop, max_relative = 1e-12);
    assert_relative_eq!(
        res.heat_total_kwh / units.heat_total_kwh,
        res.k / units.k,
        max_relative = 1e-12
    );
}

#[test]
fn scop_is_deterministic() {
    let sizing = SizingInputs::units_at(21, 45.0);
    let first = reference_season(&sizing);
    let second = reference_season(&sizing);
    assert_eq!(first, second);
    assert_eq!(first.scop.to_bits(), second.scop.to_bits());
}

#[test]
fn scop_clamps_below_design_temperature() {
    let cold = calculate_scop(&[-10.0, 2.0], &[45.0, 40.0], &[31.0, 30.0], &SizingInputs::units(5))
        .unwrap();
    let design = calculate_scop(&[-7.2, 2.0], &[45.0, 40.0], &[31.0, 30.0], &SizingInputs::units(5))
        .unwrap();
    assert!(cold.monthly[0].clamped);
    assert!(!cold.monthly[1].clamped);
    assert_eq!(cold.monthly[0].t_env, -10.0);
    assert_eq!(cold.monthly[0].heat_kwh, design.monthly[0].heat_kwh);
    assert_eq!(cold.monthly[0].cop, design.monthly[0].cop);
    assert_eq!(cold.scop, design.scop);
}

#[test]
fn scop_warm_months_have_no_demand() {
    let res = calculate_scop(
        &[2.0, 20.0, 24.0],
        &[40.0, 35.0, 35.0],
        &[30.0, 31.0, 31.0],
        &SizingInputs::units(2),
    )
    .unwrap();
    check_totals(&res);
    for rec in &res.monthly[1..] {
        assert_eq!(rec.heat_kwh, 0.0);
        assert_eq!(rec.elec_kwh, 0.0);
    }
    // Only one month with demand: SCOP is its COP
    assert_relative_eq!(res.scop, res.monthly[0].cop, max_relative = 1e-12);
}

#[test]
fn scop_mild_winter_is_undefined() {
    let err = calculate_scop(&[21.0, 22.0], &[35.0, 35.0], &[30.0, 31.0], &SizingInputs::units(2))
        .unwrap_err();
    assert!(err.is_computation());
    match err {
        ScopError::Computation(ComputationError::ZeroSeasonElectricity { q_total }) => {
            assert_eq!(q_total, 0.0)
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn scop_non_positive_cop_reports_month() {
    let err = calculate_scop(
        &[2.0, 0.0],
        &[40.0, 100.0],
        &[30.0, 31.0],
        &SizingInputs::units(2),
    )
    .unwrap_err();
    match err {
        ScopError::Computation(ComputationError::NonPositiveCop { month, t_out, .. }) => {
            assert_eq!(month, Month::DIC);
            assert_eq!(t_out, 100.0);
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn scop_sizing_errors() {
    let both = SizingInputs {
        n_units: Some(10),
        area: Some(1000.0),
        q_h: Some(25.0),
        t_out_design: None,
    };
    assert!(calculate_scop(&ENV_TEMPS, &OUT_TEMPS, &DAYS, &both)
        .unwrap_err()
        .is_configuration());
    assert!(
        calculate_scop(&ENV_TEMPS, &OUT_TEMPS, &DAYS, &SizingInputs::default())
            .unwrap_err()
            .is_configuration()
    );
    assert!(
        calculate_scop(&ENV_TEMPS, &OUT_TEMPS, &DAYS, &SizingInputs::area(1000.0, 0.0))
            .unwrap_err()
            .is_validation()
    );
    assert!(
        calculate_scop(&ENV_TEMPS, &OUT_TEMPS, &DAYS, &SizingInputs::units(0))
            .unwrap_err()
            .is_validation()
    );
}

#[test]
fn scop_series_errors() {
    let sizing = SizingInputs::units(10);
    assert!(calculate_scop(&ENV_TEMPS, &OUT_TEMPS, &DAYS[..5], &sizing)
        .unwrap_err()
        .is_configuration());
    assert!(calculate_scop(&ENV_TEMPS, &OUT_TEMPS[..4], &DAYS, &sizing)
        .unwrap_err()
        .is_configuration());
    assert!(calculate_scop(&[], &[], &[], &sizing)
        .unwrap_err()
        .is_configuration());
    let mut days = DAYS;
    days[2] = -3.0;
    assert!(calculate_scop(&ENV_TEMPS, &OUT_TEMPS, &days, &sizing)
        .unwrap_err()
        .is_validation());
}

#[test]
fn scop_custom_season_and_model() {
    let season = Season::new(&[3.0, 6.0], &[35.0, 35.0], &[31.0, 30.0]).starting(Month::MAR);
    let design = DesignConditions {
        t_design: -5.0,
        t_room: 21.0,
        t_out_design: 35.0,
    };
    let model = HeatPumpModel::default();
    let res = season_performance(&season, &SizingInputs::area(500.0, 40.0), &model, &design)
        .unwrap();
    check_totals(&res);
    assert_eq!(res.monthly[0].month, Month::MAR);
    assert_eq!(res.monthly[1].month, Month::ABR);
    assert_relative_eq!(res.k, 20.0 / 26.0, max_relative = 1e-12);
    assert_relative_eq!(
        res.monthly[0].heat_kwh,
        res.k * 18.0 * 31.0 * 24.0,
        max_relative = 1e-12
    );
}

#[test]
fn scop_result_serializes() {
    let res = reference_season(&SizingInputs::units(10));
    let json = serde_json::to_value(&res).unwrap();
    assert_eq!(json["method"], "UNITS");
    assert_eq!(json["monthly"][0]["month"], "NOV");
    assert_eq!(json["monthly"].as_array().unwrap().len(), 6);
    let back: SeasonResult = serde_json::from_value(json).unwrap();
    assert_eq!(back.monthly.len(), res.monthly.len());
}
