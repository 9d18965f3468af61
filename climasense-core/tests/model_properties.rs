//! Property tests for the numeric invariants of the model

use climasense_core::energy::{model, AcState, DailyAccumulator, HeatLoad};
use climasense_core::{elapsed_ms, EnergyConfig, ModelInputs};
use proptest::prelude::*;

fn inputs() -> impl Strategy<Value = ModelInputs> {
    (-20.0f32..50.0, 0.0f32..100.0, -30.0f32..55.0, 0.0f32..100.0).prop_map(
        |(indoor_temp_c, indoor_humidity_pct, outdoor_temp_c, outdoor_humidity_pct)| ModelInputs {
            indoor_temp_c,
            indoor_humidity_pct,
            outdoor_temp_c,
            outdoor_humidity_pct,
        },
    )
}

fn state() -> impl Strategy<Value = AcState> {
    prop_oneof![
        Just(AcState::Off),
        Just(AcState::Starting),
        Just(AcState::Running),
        Just(AcState::Idle),
    ]
}

proptest! {
    #[test]
    fn cop_stays_in_band(inputs in inputs()) {
        let config = EnergyConfig::default();
        let cop = model::estimate_cop(&config, &inputs);
        prop_assert!(cop >= config.min_cop && cop <= config.max_cop, "cop {}", cop);
    }

    #[test]
    fn power_stays_in_band(inputs in inputs(), state in state()) {
        let config = EnergyConfig::default();
        let load = HeatLoad::compute(&config, &inputs);
        let cop = model::estimate_cop(&config, &inputs);
        let base = model::base_power_watts(&config, &inputs, &load, cop);
        let power = model::power_for_state(&config, state, base);

        prop_assert!(power.is_finite());
        prop_assert!(power >= 0.0 && power <= config.max_power_watts, "power {}", power);
        prop_assert!(model::eer(load.btu_per_hr(), power).is_finite());
    }

    #[test]
    fn heat_load_non_negative(inputs in inputs()) {
        let load = HeatLoad::compute(&EnergyConfig::default(), &inputs);
        prop_assert!(load.sensible_watts >= 0.0);
        prop_assert!(load.latent_watts >= 0.0);
    }

    #[test]
    fn elapsed_survives_wrap(since in any::<u32>(), delta in any::<u32>()) {
        prop_assert_eq!(elapsed_ms(since, since.wrapping_add(delta)), delta);
    }

    #[test]
    fn duty_cycle_is_a_fraction(
        start in any::<u32>(),
        intervals in prop::collection::vec((1u32..600_000, 0.0f32..3500.0), 1..50),
    ) {
        let mut daily = DailyAccumulator::new(start);
        let mut now = start;
        for (interval, watts) in intervals {
            now = now.wrapping_add(interval);
            daily.roll_over_if_due(now);
            daily.accumulate(now, interval, watts);

            let duty = daily.duty_cycle(now);
            prop_assert!((0.0..=1.0).contains(&duty));
            prop_assert!(daily.projected_energy_kwh(now, watts) >= daily.energy_kwh());
        }
    }
}
