use approx::assert_relative_eq;
use exo_hunter::data::{generate_sample, load_light_curve};
use exo_hunter::{SAMPLE, TransitDetector};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;

#[test]
fn quiet_sample_curve_yields_five_periodic_transits() {
    let config = exo_hunter::config::SampleCurveConfig { noise_sigma: 0.0005, ..SAMPLE };
    let curve = generate_sample(&config, &mut StdRng::seed_from_u64(3)).unwrap();

    let result = TransitDetector::default().detect(&curve);

    assert!(result.has_transit);
    assert_eq!(result.transit_count(), 5);
    assert_relative_eq!(result.period().unwrap(), 20.0, epsilon = 1e-9);
    for (k, event) in result.detected_transits.iter().enumerate() {
        assert_relative_eq!(event.start, 9.0 + 20.0 * k as f64, epsilon = 1e-9);
        assert_relative_eq!(event.duration, 2.0, epsilon = 1e-9);
    }
    assert!(result.probability_score.value() > 0.99);
}

#[test]
fn default_sample_curve_is_flagged() {
    let curve = generate_sample(&SAMPLE, &mut StdRng::seed_from_u64(11)).unwrap();
    let result = TransitDetector::default().detect(&curve);
    assert!(result.has_transit);
    assert!(!result.detected_transits.is_empty());
}

#[test]
fn sample_curve_survives_a_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.json");
    let curve = generate_sample(&SAMPLE, &mut StdRng::seed_from_u64(5)).unwrap();
    fs::write(&path, serde_json::to_string(&curve).unwrap()).unwrap();

    let loaded = load_light_curve(&path).unwrap();
    assert_eq!(loaded.len(), curve.len());
    assert_eq!(
        TransitDetector::default().find_transits(&loaded).1.len(),
        TransitDetector::default().find_transits(&curve).1.len()
    );
}

#[test]
fn csv_upload_is_detected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("upload.csv");
    let mut text = String::from("Time (days),Relative Flux\n");
    for i in 0..20 {
        let flux = if (8..12).contains(&i) { 0.9 } else { 1.0 };
        text.push_str(&format!("{i},{flux}\n"));
    }
    fs::write(&path, text).unwrap();

    let curve = load_light_curve(&path).unwrap();
    let result = TransitDetector::default().detect(&curve);
    assert_eq!(result.transit_count(), 1);
    assert_eq!(result.detected_transits[0].start, 8.0);
}

#[test]
fn oversized_upload_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("huge.csv");
    let file = fs::File::create(&path).unwrap();
    file.set_len(exo_hunter::config::constants::ingest::MAX_FILE_BYTES + 1).unwrap();

    let err = load_light_curve(&path).unwrap_err();
    assert!(err.to_string().contains("limited"));
}
