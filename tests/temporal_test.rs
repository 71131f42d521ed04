use research_explorer::map::{features_in_window, FeatureCollection};
use research_explorer::temporal::{
    filter_in_window, is_in_window, TemporalEntity, TemporalError, TimeWindow,
};

#[test]
fn test_point_in_time_semantics() {
    let born = TemporalEntity::new("x", Some(1250), None);
    assert!(is_in_window(&born, 1000, 1400));
    assert!(!is_in_window(&born, 1260, 1400));
}

#[test]
fn test_undated_excluded_from_full_domain() {
    let undated = TemporalEntity::new("x", None, None);
    assert!(!TimeWindow::full().includes(&undated));
}

#[test]
fn test_inclusive_bounds() {
    let span = TemporalEntity::new("x", Some(1135), Some(1204));
    assert!(is_in_window(&span, 1204, 1300));
    assert!(is_in_window(&span, 1000, 1135));
    assert!(!is_in_window(&span, 1205, 1300));
    assert!(!is_in_window(&span, 1000, 1134));
}

#[test]
fn test_window_validation() {
    assert_eq!(
        TimeWindow::new(1400, 1000),
        Err(TemporalError::InvertedWindow { min: 1400, max: 1000 })
    );
    assert!(matches!(TimeWindow::new(-1, 10), Err(TemporalError::OutOfDomain { .. })));
    assert!(matches!(TimeWindow::new(10, 2001), Err(TemporalError::OutOfDomain { .. })));
    assert_eq!(TimeWindow::default().to_string(), "1000 - 1400");
}

#[test]
fn test_filter_preserves_order() {
    let entities = vec![
        TemporalEntity::new("late", Some(1600), Some(1650)),
        TemporalEntity::new("mid", Some(1300), None),
        TemporalEntity::new("undated", None, None),
        TemporalEntity::new("early", None, Some(1010)),
    ];
    let kept: Vec<&str> = filter_in_window(&entities, &TimeWindow::DEFAULT)
        .iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(kept, vec!["mid", "early"]);
}

#[test]
fn test_geojson_window_query() {
    let json = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "geometry": {"type": "Point", "coordinates": [-3.7, 40.4]},
             "properties": {"person_id": "a", "person_label": "A", "place_label": "Toledo", "type": "City", "start": null, "end": null}},
            {"type": "Feature", "geometry": {"type": "Point", "coordinates": [-3.7, 40.4]},
             "properties": {"person_id": "b", "person_label": "B", "place_label": "Toledo", "type": "City", "start": 1075, "end": 1141}}
        ]
    }"#;
    let collection: FeatureCollection = serde_json::from_str(json).unwrap();
    let visible = features_in_window(&collection, &TimeWindow::DEFAULT);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].properties.person_id, "b");
    assert!(features_in_window(&collection, &TimeWindow::new(1200, 2000).unwrap()).is_empty());
}
