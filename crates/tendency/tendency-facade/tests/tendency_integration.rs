//! Integration tests for the tendency facade

use tendency_facade::{
    forecast, split_differences, DeviationDistribution, DistributionStrategy, ForecastBuilder,
    Forecaster, LinearisePolicy,
};

fn sample_data() -> Vec<f64> {
    vec![100.0, 102.0, 105.0, 103.0, 108.0, 110.0, 107.0, 112.0, 115.0, 113.0]
}

#[test]
fn test_probabilities_are_complete() {
    let split = split_differences(&sample_data()).unwrap();
    assert!((split.prob_positive + split.prob_negative - 1.0).abs() < 1e-12);
    assert_eq!(split.positive.len() + split.negative.len(), sample_data().len() - 1);
}

#[test]
fn test_forecast_is_sorted() {
    let result = forecast(&sample_data(), None, None).unwrap();
    assert!(result.lower_estimate <= result.expected);
    assert!(result.expected <= result.upper_estimate);
}

#[test]
fn test_forecast_is_deterministic() {
    let first = forecast(&sample_data(), None, None).unwrap();
    for _ in 0..5 {
        assert_eq!(forecast(&sample_data(), None, None).unwrap(), first);
    }
}

#[test]
fn test_builder_forecaster_matches_free_function() {
    let forecaster = ForecastBuilder::new().build_forecaster().unwrap();
    assert_eq!(
        forecaster.forecast(&sample_data(), None, None).unwrap(),
        forecast(&sample_data(), None, None).unwrap()
    );
}

#[test]
fn test_strategy_variants_stay_sorted() {
    let strategies = [
        DeviationDistribution::new(),
        DeviationDistribution::new().with_rms(true),
        DeviationDistribution::new().with_absolute(false),
        DeviationDistribution::new().with_linearize_first(false),
        DeviationDistribution::new().with_policy(LinearisePolicy::FixedLength),
    ];

    for strategy in strategies {
        let distribution = strategy.distribution(&sample_data()).unwrap();
        let [lower, center, upper] = distribution.bounds.as_array();
        assert!(lower <= center && center <= upper);

        let result = Forecaster::new(strategy)
            .forecast(&sample_data(), None, None)
            .unwrap();
        assert!(result.is_sorted(), "unsorted result for {:?}", strategy);
    }
}

#[test]
fn test_concurrent_forecasts_agree() {
    let data = sample_data();
    let expected = forecast(&data, None, None).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let data = data.clone();
            std::thread::spawn(move || forecast(&data, None, None))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), expected);
    }
}
