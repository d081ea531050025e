use errorrate::{
    config::ConfigEntity, init_with_config_file, ErrorRateEstimator, EstimatorTrait, ParseError,
};

#[test]
fn restore_after_restart() {
    let estimator = ErrorRateEstimator::new();
    for i in 0..5000 {
        estimator.record_outcome(i % 4 == 0);
    }
    let state = estimator.marshal_json().unwrap();
    drop(estimator);

    let restored = ErrorRateEstimator::new();
    restored.unmarshal_json(state.as_bytes()).unwrap();
    assert_eq!(restored.marshal_json().unwrap(), state);
}

#[test]
fn embedded_in_caller_state() {
    #[derive(serde::Serialize, serde::Deserialize)]
    struct Upstream {
        name: String,
        errors: ErrorRateEstimator,
    }

    let upstream = Upstream {
        name: "billing".into(),
        errors: ErrorRateEstimator::new(),
    };
    upstream.errors.set_probability(0.125);
    let text = serde_json::to_string(&upstream).unwrap();
    assert_eq!(
        text,
        "{\"name\":\"billing\",\"errors\":{\"error_probability\":0.125}}"
    );
    let decoded: Upstream = serde_json::from_str(&text).unwrap();
    assert_eq!(decoded.name, "billing");
    assert_eq!(decoded.errors.probability(), 0.125);
}

#[test]
fn garbage_is_rejected() {
    let estimator = ErrorRateEstimator::new();
    let before = estimator.probability();
    let err = estimator
        .unmarshal_json(b"{\"error_probability\":\"NaN-ish\"}")
        .unwrap_err();
    assert!(matches!(err, ParseError::InvalidNumber { .. }));
    assert_eq!(estimator.probability(), before);

    let err = estimator
        .unmarshal_json(b"{\"error_probability\":null}")
        .unwrap_err();
    assert!(matches!(err, ParseError::InvalidNumber { ref text, .. } if text == "null"));
    assert_eq!(estimator.probability(), before);

    let err = estimator.unmarshal_json(b"{\"error_probability\":").unwrap_err();
    assert!(matches!(err, ParseError::MalformedRecord(_)));
    assert_eq!(estimator.probability(), before);
}

#[test]
fn canonical_number_text() {
    let estimator = ErrorRateEstimator::new();
    estimator.set_probability(0.0000001);
    let state = estimator.marshal_json().unwrap();
    assert_eq!(state, "{\"error_probability\":0.0000001}");

    let restored = ErrorRateEstimator::new();
    restored.unmarshal_json(state.as_bytes()).unwrap();
    assert_eq!(restored.probability().to_bits(), 0.0000001f64.to_bits());
}

#[test]
fn estimator_from_config_file() {
    let config: ConfigEntity =
        init_with_config_file(&mut String::from("testdata/config/errorrate.yaml")).unwrap();
    let estimator = ErrorRateEstimator::with_config(&config.config.estimator);
    assert_eq!(estimator.probability(), 0.8);
    assert_eq!(estimator.threshold(), 0.8);
    estimator.record_outcome(true);
    assert_eq!(estimator.probability(), (0.8 * 500.0 + 1.0) / 501.0);
}
