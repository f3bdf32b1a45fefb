use serde::{Deserialize, Serialize};

/// Geographic and cadastral position of a TM site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parcel_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_m: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_become_none() {
        let dto: LocationDto = serde_json::from_str(r#"{"city": "Erzurum"}"#).unwrap();
        assert_eq!(dto.city.as_deref(), Some("Erzurum"));
        assert!(dto.latitude.is_none());
        assert!(dto.parcel_number.is_none());
    }

    #[test]
    fn test_none_fields_are_omitted_on_serialize() {
        let dto = LocationDto {
            latitude: Some(39.9),
            longitude: Some(41.27),
            address: None,
            city: None,
            district: None,
            parcel_number: None,
            elevation_m: None,
        };
        let json = serde_json::to_string(&dto).unwrap();
        assert_eq!(json, r#"{"latitude":39.9,"longitude":41.27}"#);
    }
}
