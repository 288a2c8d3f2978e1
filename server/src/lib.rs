use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use paperdex_core::{build_and_query, PdfSource, RankedHit};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub corpus_root: PathBuf,
}

/// The query form's fields. Defaults match the CLI's.
#[derive(Deserialize)]
pub struct QueryForm {
    pub query: String,
    #[serde(default = "default_max_size")]
    pub max_size: String,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_process_cnt")]
    pub process_cnt: usize,
}

fn default_max_size() -> String {
    "400K".to_string()
}
fn default_max_results() -> usize {
    10
}
fn default_process_cnt() -> usize {
    4
}

pub fn build_app(corpus_root: PathBuf) -> Router {
    let state = AppState { corpus_root };
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/", get(form_page))
        .route("/query", get(query_not_allowed).post(query_handler))
        .with_state(state)
        .layer(cors)
}

const FORM_PAGE: &str = r#"<!doctype html>
<html>
<head><title>paperdex</title></head>
<body>
<h1>paperdex</h1>
<form action="/query" method="post">
  <p><label>Query <input name="query" type="text" required></label></p>
  <p><label>Max document size <input name="max_size" type="text" value="400K"></label></p>
  <p><label>Max results <input name="max_results" type="number" value="10" min="0"></label></p>
  <p><label>Workers <input name="process_cnt" type="number" value="4" min="1"></label></p>
  <p><button type="submit">Search</button></p>
</form>
</body>
</html>
"#;

async fn form_page() -> Html<&'static str> {
    Html(FORM_PAGE)
}

async fn query_not_allowed() -> Html<&'static str> {
    Html("<p>GET request not allowed. Please go to / to enter your query.</p>")
}

/// Runs the full build-and-query pipeline for one form submission. The
/// pipeline is blocking (thread pool + filesystem), so it runs on the
/// blocking executor rather than a runtime worker.
async fn query_handler(
    State(state): State<AppState>,
    Form(form): Form<QueryForm>,
) -> Result<Html<String>, (StatusCode, String)> {
    let query = form.query.clone();
    let terms: Vec<String> = form.query.split_whitespace().map(str::to_string).collect();
    let root = state.corpus_root.clone();
    let started = Instant::now();

    let outcome = tokio::task::spawn_blocking(move || {
        build_and_query(
            &PdfSource,
            &root,
            &form.max_size,
            form.process_cnt,
            &terms,
            form.max_results,
        )
    })
    .await
    .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;

    let hits = outcome.map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?;
    tracing::info!(
        query = %query,
        hits = hits.len(),
        took_s = started.elapsed().as_secs_f64(),
        "query served"
    );
    Ok(Html(render_results(&query, &hits)))
}

fn render_results(query: &str, hits: &[RankedHit]) -> String {
    let mut rows = String::new();
    for hit in hits {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{:.4}</td></tr>\n",
            escape(&hit.name),
            hit.score
        ));
    }
    format!(
        "<!doctype html>\n<html>\n<head><title>paperdex results</title></head>\n<body>\n\
         <h1>Results for &quot;{}&quot;</h1>\n<p>{} results</p>\n\
         <table>\n<tr><th>document</th><th>score</th></tr>\n{}</table>\n\
         <p><a href=\"/\">New query</a></p>\n</body>\n</html>\n",
        escape(query),
        hits.len(),
        rows
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_in_names() {
        assert_eq!(escape("a<b>&c"), "a&lt;b&gt;&amp;c");
    }

    #[test]
    fn renders_scores_with_fixed_precision() {
        let hits = vec![RankedHit {
            name: "paper.pdf".into(),
            score: 0.346_573_590_3,
        }];
        let page = render_results("system", &hits);
        assert!(page.contains("<td>0.3466</td>"));
        assert!(page.contains("1 results"));
    }
}
