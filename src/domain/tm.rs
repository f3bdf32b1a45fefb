//! TM (transformer station) models, the platform's central entity.

use crate::domain::building::BuildingDto;
use crate::domain::hazard::{
    AvalancheHazardDto, FireHazardDto, FloodHazardDto, HazardAssessmentDto, LandslideHazardDto,
    NoiseHazardDto, RiskLevel, RockfallHazardDto, SecurityHazardDto, TsunamiHazardDto,
};
use crate::domain::location::LocationDto;
use crate::utils::dates::{datetime_millis, opt_date, opt_datetime_millis};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum TmStatus {
    Planned,
    Active,
    UnderReview,
    Decommissioned,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TmDto {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub status: TmStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voltage_level_kv: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_mva: Option<f64>,
    #[serde(with = "opt_date", default, skip_serializing_if = "Option::is_none")]
    pub commissioned_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hazard_assessment: Option<HazardAssessmentDto>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buildings: Vec<BuildingDto>,
    #[serde(with = "datetime_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "opt_datetime_millis", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Trimmed shape used by listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TmSummaryDto {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub status: TmStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_risk_level: Option<RiskLevel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TmCreateDto {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voltage_level_kv: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_mva: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TmUpdateDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TmStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voltage_level_kv: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_mva: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationDto>,
}

/// Proposal for an alternative site for an existing TM. Carries the candidate
/// location together with per-category hazard observations collected in the
/// field, before the backend runs a full assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeTmCreateDto {
    pub tm_id: i64,
    pub location: LocationDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
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
}
