//! Test fixtures and data for tracker tests

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Storage keys
    pub const TEAM_KEY: &'static str = "teamNorth";
    pub const OTHER_KEY: &'static str = "teamSouth";

    /// Config documents
    pub const STRICT_CONFIG: &'static str =
        r#"{"okThreshold": 0.5, "warnThreshold": 1.0, "storageKey": "teamNorth"}"#;
    pub const LENIENT_CONFIG: &'static str = r#"{"okThreshold": 3.0, "warnThreshold": 6.0}"#;

    /// (label, orders, complaints) rows with known outcomes under default thresholds
    pub fn sample_rows() -> Vec<(&'static str, f64, f64)> {
        vec![
            ("Morning", 500.0, 5.0),    // 1.00% -> OK
            ("Afternoon", 420.0, 12.0), // 2.86% -> CRITICAL
            ("Night", 920.0, 17.0),     // 1.85% -> REVIEW
        ]
    }

    /// Stored collection written by an older build: Spanish field names and
    /// stale derived fields that must be recomputed
    pub fn legacy_document() -> String {
        r#"[
            {"etiqueta": "Turno A", "pedidos": 200, "reclamos": 1, "porcentaje": 99.0, "estado": "CRITICAL"},
            {"etiqueta": "Turno B", "pedidos": 0, "reclamos": 0},
            {"label": "Turno C", "orderCount": 100, "complaintCount": 10}
        ]"#
        .to_string()
    }
}
