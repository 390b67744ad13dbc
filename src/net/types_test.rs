use super::*;

// =============================================================================
// Identity
// =============================================================================

#[test]
fn identity_deserializes_admin() {
    let json = r#"{"role":"admin","email":"admin@city.io"}"#;
    let identity: Identity = serde_json::from_str(json).unwrap();
    assert_eq!(identity.role, Role::Admin);
    assert_eq!(identity.email, "admin@city.io");
}

#[test]
fn identity_deserializes_guest() {
    let json = r#"{"role":"guest","email":"g@city.io"}"#;
    let identity: Identity = serde_json::from_str(json).unwrap();
    assert_eq!(identity.role, Role::Guest);
}

#[test]
fn identity_rejects_unknown_role() {
    let json = r#"{"role":"superuser","email":"x@city.io"}"#;
    assert!(serde_json::from_str::<Identity>(json).is_err());
}

#[test]
fn identity_rejects_missing_email() {
    let json = r#"{"role":"admin"}"#;
    assert!(serde_json::from_str::<Identity>(json).is_err());
}

// =============================================================================
// ErrorBody
// =============================================================================

#[test]
fn error_body_with_detail() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail":"Invalid Firebase token"}"#).unwrap();
    assert_eq!(body.detail.as_deref(), Some("Invalid Firebase token"));
}

#[test]
fn error_body_without_detail() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert!(body.detail.is_none());
}

// =============================================================================
// AdminUser
// =============================================================================

#[test]
fn admin_user_list_deserializes() {
    let json = r#"[{"uid":"u1","email":"a@city.io","role":"admin"},
                   {"uid":"u2","email":"g@city.io","role":"guest"}]"#;
    let users: Vec<AdminUser> = serde_json::from_str(json).unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].role, Role::Admin);
    assert_eq!(users[1].uid, "u2");
}

// =============================================================================
// AirQualityHistory
// =============================================================================

#[test]
fn air_quality_history_deserializes() {
    let json = r#"{"location":"Krakow","history":[{"AQI":42.5,"last_update":"2025-06-01T12:00:00Z"}]}"#;
    let history: AirQualityHistory = serde_json::from_str(json).unwrap();
    assert_eq!(history.location, "Krakow");
    assert_eq!(history.history.len(), 1);
    assert!((history.history[0].aqi - 42.5).abs() < f64::EPSILON);
}

#[test]
fn air_quality_history_empty_list() {
    let json = r#"{"location":"Krakow","history":[]}"#;
    let history: AirQualityHistory = serde_json::from_str(json).unwrap();
    assert!(history.history.is_empty());
}
