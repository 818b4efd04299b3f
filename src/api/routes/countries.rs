use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{CountryDetails, CountrySummary, GoldMedal};
use crate::sort::{CountrySortKey, MedalSortKey, SortDirection};

/// `sort_by` / `ascending` query parameters shared by the list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct SortParams {
    pub sort_by: Option<String>,
    pub ascending: Option<String>,
}

impl SortParams {
    pub fn direction(&self) -> SortDirection {
        SortDirection::from_flag(self.ascending.as_deref())
    }
}

#[derive(Debug, Serialize)]
pub struct CountriesResponse {
    pub countries: Vec<CountrySummary>,
}

#[derive(Debug, Serialize)]
pub struct CountryMedalsResponse {
    pub medals: Vec<GoldMedal>,
}

fn sort_params(
    params: Result<Query<SortParams>, QueryRejection>,
) -> Result<SortParams, ApiError> {
    params
        .map(|Query(p)| p)
        .map_err(|e| ApiError::BadRequest(e.body_text()))
}

pub async fn list_countries(
    State(state): State<AppState>,
    params: Result<Query<SortParams>, QueryRejection>,
) -> Result<Json<CountriesResponse>, ApiError> {
    let params = sort_params(params)?;
    let key = CountrySortKey::from_param(params.sort_by.as_deref());

    let countries = state
        .queries()
        .list_country_summaries(key, params.direction());

    Ok(Json(CountriesResponse { countries }))
}

pub async fn country_details(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> Json<CountryDetails> {
    Json(state.queries().get_country_details(&country))
}

pub async fn country_medals(
    State(state): State<AppState>,
    Path(country): Path<String>,
    params: Result<Query<SortParams>, QueryRejection>,
) -> Result<Json<CountryMedalsResponse>, ApiError> {
    let params = sort_params(params)?;
    let key = params.sort_by.as_deref().and_then(MedalSortKey::parse);

    let medals = state
        .queries()
        .list_country_medals(&country, key, params.direction());

    Ok(Json(CountryMedalsResponse { medals }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::build_router;
    use crate::models::{Country, Gender, Season};
    use crate::storage::InMemoryStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use std::sync::Arc;
    use tower::util::ServiceExt;

    fn setup_test_state() -> AppState {
        let store = InMemoryStore::new(
            vec![
                Country::new("United States", "USA")
                    .with_gdp(18_036_648.0)
                    .with_population(321_418_820),
                Country::new("Norway", "NOR")
                    .with_gdp(386_578.0)
                    .with_population(5_195_921),
                Country::new("Fiji", "FIJ"),
            ],
            vec![
                GoldMedal::new(1924, Season::Summer, "Paris", "United States", "Rugby", "Team", Gender::Men),
                GoldMedal::new(1932, Season::Summer, "Los Angeles", "United States", "80M Hurdles", "Didrikson", Gender::Women),
                GoldMedal::new(1924, Season::Winter, "Chamonix", "Norway", "Ski Jump", "Thams", Gender::Men),
            ],
        );
        AppState::new(Arc::new(store))
    }

    async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    fn field<'a>(items: &'a Value, name: &str) -> Vec<&'a Value> {
        items
            .as_array()
            .unwrap()
            .iter()
            .map(|item| &item[name])
            .collect()
    }

    #[test]
    fn test_sort_params_direction() {
        let params = SortParams {
            sort_by: None,
            ascending: Some("Y".to_string()),
        };
        assert_eq!(params.direction(), SortDirection::Ascending);
        assert_eq!(SortParams::default().direction(), SortDirection::Descending);
    }

    #[tokio::test]
    async fn test_list_countries_default_sort() {
        let app = build_router(setup_test_state(), "*");
        let (status, json) = get_json(app, "/countries").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            field(&json["countries"], "name"),
            vec!["United States", "Norway", "Fiji"]
        );
        assert_eq!(json["countries"][0]["medals"], 2);
        assert_eq!(json["countries"][0]["code"], "USA");
        assert!(json["countries"][2]["gdp"].is_null());
    }

    #[tokio::test]
    async fn test_list_countries_by_population_ascending() {
        let app = build_router(setup_test_state(), "*");
        let (status, json) = get_json(app, "/countries?sort_by=population&ascending=y").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            field(&json["countries"], "name"),
            vec!["Fiji", "Norway", "United States"]
        );
    }

    #[tokio::test]
    async fn test_list_countries_unknown_key_falls_back_to_medals() {
        let app = build_router(setup_test_state(), "*");
        let (status, json) = get_json(app, "/countries?sort_by=bogus&ascending=Y").await;

        assert_eq!(status, StatusCode::OK);
        let medals: Vec<u64> = field(&json["countries"], "medals")
            .iter()
            .filter_map(|m| m.as_u64())
            .collect();
        assert_eq!(medals, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_country_details_endpoint() {
        let app = build_router(setup_test_state(), "*");
        let (status, json) = get_json(app, "/countries/united%20states").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["name"], "United States");
        assert_eq!(json["medal_count"], 2);
        assert_eq!(json["summer"]["win_count"], 2);
        assert_eq!(json["summer"]["year_of_first_win"], 1924);
        assert_eq!(json["summer"]["percentage_of_season_events"], 1.0);
        assert!(json["winter"]["win_count"].is_null());
        assert_eq!(json["global_female_win_count"], 1);
        assert_eq!(json["global_male_win_count"], 2);
    }

    #[tokio::test]
    async fn test_country_details_unknown_country() {
        let app = build_router(setup_test_state(), "*");
        let (status, json) = get_json(app, "/countries/atlantis").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({ "name": "Atlantis" }));
    }

    #[tokio::test]
    async fn test_country_medals_sorted_by_city() {
        let app = build_router(setup_test_state(), "*");
        let (status, json) =
            get_json(app, "/countries/united%20states/medals?sort_by=city&ascending=y").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(field(&json["medals"], "city"), vec!["Los Angeles", "Paris"]);
        assert_eq!(json["medals"][0]["athlete_name"], "Didrikson");
    }

    #[tokio::test]
    async fn test_country_medals_unknown_key_is_empty() {
        let app = build_router(setup_test_state(), "*");
        let (status, json) =
            get_json(app, "/countries/norway/medals?sort_by=bogus_key&ascending=y").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["medals"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_unknown_route_not_found() {
        let app = build_router(setup_test_state(), "https://example.com");
        let (status, json) = get_json(app, "/olympics").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }
}
