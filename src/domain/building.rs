use crate::utils::dates::opt_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A building on a TM site (control house, switchgear hall, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingDto {
    pub id: i64,
    pub tm_id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construction_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footprint_m2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structural_condition: Option<String>,
    #[serde(with = "opt_date", default, skip_serializing_if = "Option::is_none")]
    pub last_inspection_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingCreateDto {
    pub tm_id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construction_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footprint_m2: Option<f64>,
}
