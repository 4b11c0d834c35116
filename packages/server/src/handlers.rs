//! HTTP handler functions for the temperature map API.

use actix_web::{HttpResponse, web};
use temp_map_server_models::{ApiHealth, ApiReload, MapQueryParams, TrendQueryParams};

use crate::AppState;
use crate::views::{api_map_view, api_trend};

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/districts`
///
/// Lists the districts that have readings, for the trend selector.
pub async fn districts(state: web::Data<AppState>) -> HttpResponse {
    match state.dashboard.districts() {
        Ok(names) => HttpResponse::Ok().json(names),
        Err(e) => {
            log::error!("Failed to list districts: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to load readings"
            }))
        }
    }
}

/// `GET /api/map?date=YYYY-MM-DD`
///
/// Returns the choropleth for the requested day. A missing or malformed
/// date is rejected; it is never replaced by a default.
pub async fn map(
    state: web::Data<AppState>,
    params: web::Query<MapQueryParams>,
) -> HttpResponse {
    let Some(date) = params.date.as_deref() else {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Missing required 'date' parameter (YYYY-MM-DD)"
        }));
    };

    match state.dashboard.map_view_for(date) {
        Ok(view) => {
            for warning in &view.warnings {
                log::warn!("{}: {warning}", view.date);
            }
            HttpResponse::Ok().json(api_map_view(&view))
        }
        Err(e) if e.is_invalid_date() => HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string(),
            "date": date,
        })),
        Err(e) => {
            log::error!("Failed to build map for {date}: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to build map"
            }))
        }
    }
}

/// `GET /api/trend?district=NAME`
///
/// Returns the district's temperature series sorted by date.
pub async fn trend(
    state: web::Data<AppState>,
    params: web::Query<TrendQueryParams>,
) -> HttpResponse {
    let Some(district) = params.district.as_deref() else {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Missing required 'district' parameter"
        }));
    };

    match state.dashboard.trend(district) {
        Ok(trend) => HttpResponse::Ok().json(api_trend(trend)),
        Err(e) if e.is_unknown_region() => HttpResponse::NotFound().json(serde_json::json!({
            "error": e.to_string(),
            "district": district,
        })),
        Err(e) => {
            log::error!("Failed to build trend for {district}: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to build trend"
            }))
        }
    }
}

/// `POST /api/reload`
///
/// Drops the cached readings and loads them again, even if the file's
/// modification time has not changed.
pub async fn reload(state: web::Data<AppState>) -> HttpResponse {
    state.dashboard.reload_readings();

    match state.dashboard.districts() {
        Ok(names) => {
            log::info!("Reloaded readings: {} districts", names.len());
            HttpResponse::Ok().json(ApiReload {
                districts: names.len(),
            })
        }
        Err(e) => {
            log::error!("Failed to reload readings: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to reload readings"
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test, web};
    use temp_map_dashboard::{Dashboard, DashboardConfig};

    use crate::{AppState, configure};

    const GEOJSON: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "district": "Bengaluru Urban" },
                "geometry": { "type": "Polygon", "coordinates": [[[77.4, 12.8], [77.8, 12.8], [77.8, 13.2], [77.4, 13.2], [77.4, 12.8]]] }
            },
            {
                "type": "Feature",
                "properties": { "district": "Mysuru" },
                "geometry": { "type": "MultiPolygon", "coordinates": [[[[76.0, 11.8], [76.9, 11.8], [76.9, 12.6], [76.0, 11.8]]]] }
            }
        ]
    }"#;

    const CSV: &str = "district,date,temperature\n\
                       BENGALURU URBAN ,2024-06-01,34.2\n\
                       Mysuru,2024-06-03,32.5\n\
                       Mysuru,2024-06-02,31.0\n";

    fn fixture(name: &str) -> (PathBuf, web::Data<AppState>) {
        let tmp = std::env::temp_dir().join(format!("temp_map_server_{name}"));
        let _ = std::fs::remove_dir_all(&tmp);
        std::fs::create_dir_all(&tmp).unwrap();
        std::fs::write(tmp.join("districts.geojson"), GEOJSON).unwrap();
        std::fs::write(tmp.join("readings.csv"), CSV).unwrap();

        let dashboard = Dashboard::open(DashboardConfig {
            geometry_path: tmp.join("districts.geojson"),
            measurements_path: tmp.join("readings.csv"),
            ..DashboardConfig::default()
        })
        .unwrap();

        let state = web::Data::new(AppState {
            dashboard: Arc::new(dashboard),
        });
        (tmp, state)
    }

    #[actix_web::test]
    async fn map_returns_feature_collection() {
        let (tmp, state) = fixture("map");
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::get()
            .uri("/api/map?date=2024-06-01")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["date"], "2024-06-01");
        assert_eq!(body["hasData"], true);
        assert_eq!(
            body["range"],
            serde_json::json!({ "kind": "bounded", "min": 34.2, "max": 34.2 })
        );
        let center = body["center"].as_array().unwrap();
        assert!((center[0].as_f64().unwrap() - 76.9).abs() < 1e-9);
        assert!((center[1].as_f64().unwrap() - 12.5).abs() < 1e-9);

        let features = body["features"]["features"].as_array().unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0]["properties"]["district"], "Bengaluru Urban");
        assert_eq!(features[0]["properties"]["temperature"], 34.2);
        assert!(features[0]["properties"]["fillColor"].is_string());
        assert_eq!(features[0]["geometry"]["type"], "MultiPolygon");
        assert!(features[1]["properties"]["temperature"].is_null());
        assert!(features[1]["properties"]["fillColor"].is_null());

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[actix_web::test]
    async fn map_without_data_reports_empty_range() {
        let (tmp, state) = fixture("map_empty");
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::get()
            .uri("/api/map?date=1999-12-31")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["hasData"], false);
        assert_eq!(body["range"], serde_json::json!({ "kind": "empty" }));

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[actix_web::test]
    async fn map_rejects_bad_or_missing_date() {
        let (tmp, state) = fixture("map_bad_date");
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::get()
            .uri("/api/map?date=2024-13-01")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["date"], "2024-13-01");

        let req = test::TestRequest::get()
            .uri("/api/map?date=2024-6-1")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get().uri("/api/map").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[actix_web::test]
    async fn trend_is_sorted_and_unknown_is_not_found() {
        let (tmp, state) = fixture("trend");
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::get()
            .uri("/api/trend?district=mysuru")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body["points"],
            serde_json::json!([
                { "date": "2024-06-02", "temperature": 31.0 },
                { "date": "2024-06-03", "temperature": 32.5 }
            ])
        );

        let req = test::TestRequest::get()
            .uri("/api/trend?district=Atlantis")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["district"], "Atlantis");

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[actix_web::test]
    async fn lists_districts_and_health() {
        let (tmp, state) = fixture("districts");
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::get().uri("/api/districts").to_request();
        let body: Vec<String> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, ["BENGALURU URBAN", "Mysuru"]);

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["healthy"], true);

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[actix_web::test]
    async fn reload_picks_up_rewritten_readings() {
        let (tmp, state) = fixture("reload");
        let app = test::init_service(App::new().app_data(state).configure(configure)).await;

        let req = test::TestRequest::get().uri("/api/districts").to_request();
        let body: Vec<String> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.len(), 2);

        let path = tmp.join("readings.csv");
        let modified = std::fs::metadata(&path).unwrap().modified().unwrap();
        std::fs::write(&path, "district,date,temperature\nUdupi,2024-06-01,29.0\n").unwrap();
        std::fs::File::options()
            .write(true)
            .open(&path)
            .unwrap()
            .set_modified(modified)
            .unwrap();

        let req = test::TestRequest::post().uri("/api/reload").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["districts"], 1);

        let req = test::TestRequest::get().uri("/api/districts").to_request();
        let body: Vec<String> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, ["Udupi"]);

        let _ = std::fs::remove_dir_all(&tmp);
    }
}
