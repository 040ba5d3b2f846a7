//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080), DATA_DIR (season files, default `data`).

use actix_files::Files;
use actix_web::{
    error::{InternalError, QueryPayloadError},
    get,
    web::{self, Data, Path, Query, QueryConfig},
    App, HttpRequest, HttpResponse, HttpServer, Responder,
};
use club_stats_web::logic::{advanced, dashboard, market, performance, players};
use club_stats_web::{
    apply, position_options, season_options, DataConfig, DataSource, DatasetCache, LoadReport,
    Selection,
};
use serde::{Deserialize, Serialize};

/// Session dataset: loaded once, shared read-only by every request.
type AppState = Data<DatasetCache>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize)]
struct DatasetResponse<'a> {
    source: DataSource,
    rows: usize,
    columns: Vec<&'a str>,
    report: &'a LoadReport,
}

#[derive(Serialize)]
struct FiltersResponse {
    seasons: Vec<String>,
    positions: Vec<String>,
}

/// Sidebar selection (e.g. ?season=2022/23&position=Avant-centre). Missing or "Toutes" = all.
#[derive(Deserialize)]
struct FilterQuery {
    season: Option<String>,
    position: Option<String>,
}

impl FilterQuery {
    fn selection(&self) -> Selection {
        Selection::from_labels(self.season.as_deref(), self.position.as_deref())
    }
}

/// Two player names (e.g. /api/compare?a=...&b=...).
#[derive(Deserialize)]
struct CompareQuery {
    a: String,
    b: String,
}

/// Path segment: player name (e.g. /api/players/{name})
#[derive(Deserialize)]
struct PlayerPath {
    name: String,
}

fn not_found(message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": message }))
}

fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": message }))
}

/// Malformed or incomplete query strings answer 400 with the JSON error body.
fn query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
        let response = bad_request(&err.to_string());
        InternalError::from_response(err, response).into()
    })
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "club-stats-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Where the data came from, and the per-file load messages.
#[get("/api/dataset")]
async fn api_dataset(state: AppState) -> HttpResponse {
    let ds = state.get();
    HttpResponse::Ok().json(DatasetResponse {
        source: ds.source(),
        rows: ds.table().len(),
        columns: ds.table().column_names().collect(),
        report: ds.report(),
    })
}

/// Season and position selector options, "Toutes" first.
#[get("/api/filters")]
async fn api_filters(state: AppState) -> HttpResponse {
    let records = state.get().records();
    HttpResponse::Ok().json(FiltersResponse {
        seasons: season_options(records),
        positions: position_options(records),
    })
}

#[get("/api/dashboard")]
async fn api_dashboard(state: AppState, query: Query<FilterQuery>) -> HttpResponse {
    let records = state.get().records();
    let view = apply(records, &query.selection());
    HttpResponse::Ok().json(dashboard::dashboard(&view, records))
}

#[get("/api/performance")]
async fn api_performance(state: AppState, query: Query<FilterQuery>) -> HttpResponse {
    let selection = query.selection();
    let view = apply(state.get().records(), &selection);
    HttpResponse::Ok().json(performance::performance(&view, &selection))
}

#[get("/api/market")]
async fn api_market(state: AppState, query: Query<FilterQuery>) -> HttpResponse {
    let records = state.get().records();
    let view = apply(records, &query.selection());
    HttpResponse::Ok().json(market::market(&view, records))
}

/// All player names, sorted.
#[get("/api/players")]
async fn api_players(state: AppState) -> HttpResponse {
    HttpResponse::Ok().json(players::player_names(state.get().records()))
}

/// Career profile of one player over every season (404 if unknown).
#[get("/api/players/{name}")]
async fn api_player_profile(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    match players::player_profile(state.get().records(), &path.name) {
        Some(profile) => HttpResponse::Ok().json(profile),
        None => not_found("No such player"),
    }
}

#[get("/api/compare")]
async fn api_compare(state: AppState, query: Query<CompareQuery>) -> HttpResponse {
    if query.a.trim().is_empty() || query.b.trim().is_empty() {
        return bad_request("Two player names are required");
    }
    match players::compare_players(state.get().records(), &query.a, &query.b) {
        Some(comparison) => HttpResponse::Ok().json(comparison),
        None => not_found("No such player"),
    }
}

#[get("/api/advanced/efficiency")]
async fn api_efficiency(state: AppState, query: Query<FilterQuery>) -> HttpResponse {
    let view = apply(state.get().records(), &query.selection());
    HttpResponse::Ok().json(advanced::efficiency(&view))
}

#[get("/api/advanced/correlations")]
async fn api_correlations(state: AppState, query: Query<FilterQuery>) -> HttpResponse {
    let ds = state.get();
    let view = apply(ds.records(), &query.selection());
    HttpResponse::Ok().json(advanced::correlations(&view, ds.table()))
}

/// Club records, squad totals and category leaders (whole dataset; filters ignored).
#[get("/api/advanced/records")]
async fn api_records(state: AppState) -> HttpResponse {
    HttpResponse::Ok().json(advanced::records_report(state.get().records()))
}

#[get("/api/advanced/loyalty")]
async fn api_loyalty(state: AppState, query: Query<FilterQuery>) -> HttpResponse {
    let records = state.get().records();
    let view = apply(records, &query.selection());
    HttpResponse::Ok().json(advanced::loyalty(&view, records))
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);

    let state = Data::new(DatasetCache::new(DataConfig::from_env()));
    log::info!(
        "Reading season files from {}",
        state.config().data_dir.display()
    );

    // Build the dataset off the async runtime before accepting requests.
    let warm = state.clone();
    let (source, rows) = tokio::task::spawn_blocking(move || {
        let ds = warm.get();
        (ds.source(), ds.table().len())
    })
    .await
    .map_err(std::io::Error::other)?;
    if source == DataSource::Sample {
        log::warn!("Serving sample data ({} rows)", rows);
    } else {
        log::info!("Serving {} rows", rows);
    }

    log::info!("Starting server at http://{}:{}", bind.0, bind.1);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(query_config())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_dataset)
            .service(api_filters)
            .service(api_dashboard)
            .service(api_performance)
            .service(api_market)
            .service(api_players)
            .service(api_player_profile)
            .service(api_compare)
            .service(api_efficiency)
            .service(api_correlations)
            .service(api_records)
            .service(api_loyalty)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};

    fn sample_state() -> AppState {
        let dir = tempfile::tempdir().unwrap();
        let state = Data::new(DatasetCache::new(DataConfig::new(dir.path())));
        state.get();
        state
    }

    async fn get_compare(uri: &str) -> (StatusCode, serde_json::Value) {
        let app = test::init_service(
            App::new()
                .app_data(sample_state())
                .app_data(query_config())
                .service(api_compare),
        )
        .await;
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = resp.status();
        let body: serde_json::Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn compare_missing_a_name_is_a_json_bad_request() {
        let (status, body) = get_compare("/api/compare?a=Yahya%20Jabrane").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn compare_with_an_empty_name_is_a_json_bad_request() {
        let (status, body) = get_compare("/api/compare?a=Yahya%20Jabrane&b=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Two player names are required");
    }

    #[actix_web::test]
    async fn compare_unknown_player_is_not_found() {
        let (status, body) = get_compare("/api/compare?a=Yahya%20Jabrane&b=Nobody").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn compare_two_known_players() {
        let (status, body) =
            get_compare("/api/compare?a=Yahya%20Jabrane&b=Ayoub%20El%20Kaabi").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["first"]["name"], "Yahya Jabrane");
        assert_eq!(body["second"]["goals"], 225.0);
    }
}
