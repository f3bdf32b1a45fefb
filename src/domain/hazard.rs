//! Per-risk-category scoring records attached to a TM. The backend computes
//! the scores; the client only mirrors the shapes.

use crate::utils::dates::{opt_date, opt_datetime_millis};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FireHazardDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    #[serde(with = "opt_datetime_millis", default, skip_serializing_if = "Option::is_none")]
    pub assessed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vegetation_density: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_to_fire_station_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_suppression_system: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloodHazardDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    #[serde(with = "opt_datetime_millis", default, skip_serializing_if = "Option::is_none")]
    pub assessed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_to_river_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flood_plain: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drainage_capacity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityHazardDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    #[serde(with = "opt_datetime_millis", default, skip_serializing_if = "Option::is_none")]
    pub assessed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perimeter_fencing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_coverage: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incident_count_last_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoiseHazardDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    #[serde(with = "opt_datetime_millis", default, skip_serializing_if = "Option::is_none")]
    pub assessed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_level_db: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub night_level_db: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nearest_residence_m: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvalancheHazardDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    #[serde(with = "opt_datetime_millis", default, skip_serializing_if = "Option::is_none")]
    pub assessed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slope_angle_deg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_snowfall_cm: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandslideHazardDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    #[serde(with = "opt_datetime_millis", default, skip_serializing_if = "Option::is_none")]
    pub assessed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slope_stability_index: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RockfallHazardDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    #[serde(with = "opt_datetime_millis", default, skip_serializing_if = "Option::is_none")]
    pub assessed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cliff_distance_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protective_barrier: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsunamiHazardDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
    #[serde(with = "opt_datetime_millis", default, skip_serializing_if = "Option::is_none")]
    pub assessed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_to_coast_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_above_sea_m: Option<f64>,
}

/// Aggregate assessment for one TM: one optional slot per category plus the
/// backend-computed overall score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HazardAssessmentDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fire: Option<FireHazardDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flood: Option<FloodHazardDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<SecurityHazardDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise: Option<NoiseHazardDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avalanche: Option<AvalancheHazardDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landslide: Option<LandslideHazardDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rockfall: Option<RockfallHazardDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tsunami: Option<TsunamiHazardDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_risk_level: Option<RiskLevel>,
    // Day granularity on the wire (no time component)
    #[serde(with = "opt_date", default, skip_serializing_if = "Option::is_none")]
    pub assessment_date: Option<NaiveDate>,
}
