//! Static descriptors for the analytics surface — the list of available
//! fields and the display snapshot served by the gateway.

/// Available analytics fields and their types, grouped by projection.
/// Purely descriptive; no interaction with the store or the logs.
pub fn field_descriptor() -> serde_json::Value {
    serde_json::json!({
        "qualAnalytics": [
            {"name": "Activity access", "type": "boolean"},
            {"name": "Resource download", "type": "boolean"},
            {"name": "Document upload", "type": "boolean"},
            {"name": "Response quality report", "type": "text/plain"},
        ],
        "quantAnalytics": [
            {"name": "Access count", "type": "integer"},
            {"name": "Resource downloads", "type": "integer"},
            {"name": "Activity progress (%)", "type": "number"},
        ],
    })
}

/// Fixed sample snapshot returned by the analytics display endpoint.
/// Deliberately a placeholder, not a live aggregation of the sink logs.
pub fn sample_data() -> serde_json::Value {
    serde_json::json!([
        {
            "studentId": 1001,
            "qualAnalytics": [
                {"name": "Activity access", "value": true},
                {"name": "Resource download", "value": true},
                {"name": "Document upload", "value": true},
                {"name": "Response quality report", "value": "Sufficient"},
            ],
            "quantAnalytics": [
                {"name": "Access count", "value": 50},
                {"name": "Resource downloads", "value": 12},
                {"name": "Activity progress (%)", "value": 10.0},
            ],
        },
        {
            "studentId": 1002,
            "qualAnalytics": [
                {"name": "Activity access", "value": true},
                {"name": "Resource download", "value": true},
                {"name": "Document upload", "value": true},
                {"name": "Response quality report", "value": "Sufficient"},
            ],
            "quantAnalytics": [
                {"name": "Access count", "value": 60},
                {"name": "Resource downloads", "value": 16},
                {"name": "Activity progress (%)", "value": 40.0},
            ],
        },
    ])
}
