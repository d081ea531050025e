use errorrate::{ErrorRateEstimator, EstimatorTrait};
use std::sync::Arc;

const EVENTS: usize = 100_000;

fn assert_high(estimator: &ErrorRateEstimator) {
    let probability = estimator.probability();
    assert!(probability.is_finite());
    assert!(probability > 0.5, "probability {} <= 0.5", probability);
    assert!(probability <= 1.0, "probability {} > 1", probability);
}

#[test]
fn threads_record_errors() {
    let estimator = Arc::new(ErrorRateEstimator::new());
    estimator.set_probability(0.0);
    let mut handlers = Vec::new();
    for _ in 0..100 {
        let estimator = Arc::clone(&estimator);
        handlers.push(std::thread::spawn(move || {
            for _ in 0..EVENTS / 100 {
                estimator.record_outcome(true);
                // readers race with the writers
                estimator.is_exceeded();
            }
        }));
    }
    for h in handlers {
        h.join().expect("Couldn't join on the associated thread");
    }
    assert_high(&estimator);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn tasks_record_errors() {
    let estimator = Arc::new(ErrorRateEstimator::new());
    estimator.set_probability(0.0);
    let mut handlers = Vec::with_capacity(EVENTS);
    for _ in 0..EVENTS {
        let estimator = Arc::clone(&estimator);
        handlers.push(tokio::spawn(async move {
            tokio::task::yield_now().await;
            estimator.record_outcome(true);
        }));
    }
    for h in handlers {
        h.await.unwrap();
    }
    assert_high(&estimator);

    // a long history without errors brings it back down
    let mut handlers = Vec::with_capacity(EVENTS);
    for _ in 0..EVENTS {
        let estimator = Arc::clone(&estimator);
        handlers.push(tokio::spawn(async move {
            tokio::task::yield_now().await;
            estimator.record_outcome(false);
        }));
    }
    for h in handlers {
        h.await.unwrap();
    }
    assert!(estimator.probability() <= 0.05);
    assert!(!estimator.is_exceeded());
}

#[test]
fn independent_estimators() {
    let noisy = ErrorRateEstimator::new();
    let quiet = ErrorRateEstimator::new();
    for _ in 0..10_000 {
        noisy.record_outcome(true);
        quiet.record_outcome(false);
    }
    assert!(noisy.probability() > 0.95);
    assert!(quiet.probability() < 0.05);
}
