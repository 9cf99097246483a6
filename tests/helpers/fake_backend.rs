// Fake Rates Backend
//
// Real HTTP server (actix-test) that stands in for the upstream rates
// backend. State lives in memory; every request is counted so tests can
// check what the dashboard refetched.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpResponseBuilder};
use ratedesk::rates::models::{
    CreateRateLinkRequest, ParentRate, RateAssignment, RateDraft, RateLink, RatePatch, TutorRate,
};

pub use actix_test::TestServer;

#[derive(Default)]
pub struct FakeBackendState {
    pub tutor_rates: Mutex<Vec<TutorRate>>,
    pub parent_rates: Mutex<Vec<ParentRate>>,
    pub links: Mutex<Vec<RateLink>>,
    pub assignments: Mutex<Vec<RateAssignment>>,
    /// Every request answers with this status while set
    pub fail_with: Mutex<Option<u16>>,
    /// Bearer token the backend insists on, when set
    pub required_token: Mutex<Option<String>>,
    /// Successful writes are committed but answered with an empty body
    pub blank_success: Mutex<bool>,
    hits: Mutex<HashMap<String, usize>>,
    next_id: AtomicUsize,
}

impl FakeBackendState {
    /// Number of requests seen for e.g. "GET /tutor-rates"
    pub fn hits(&self, route: &str) -> usize {
        self.hits.lock().unwrap().get(route).copied().unwrap_or(0)
    }

    pub fn total_hits(&self) -> usize {
        self.hits.lock().unwrap().values().sum()
    }

    pub fn fail_with(&self, status: Option<u16>) {
        *self.fail_with.lock().unwrap() = status;
    }

    pub fn require_token(&self, token: &str) {
        *self.required_token.lock().unwrap() = Some(token.to_string());
    }

    pub fn blank_success(&self, blank: bool) {
        *self.blank_success.lock().unwrap() = blank;
    }

    fn reply<T: serde::Serialize>(&self, mut builder: HttpResponseBuilder, body: &T) -> HttpResponse {
        if *self.blank_success.lock().unwrap() {
            builder.finish()
        } else {
            builder.json(body)
        }
    }

    /// Generated ids ("t-1", "l-2") never clash with seeded ones ("t1")
    fn next_id(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Counts the request and returns the response it must get instead of
    /// the normal one, if any
    fn intercept(&self, req: &HttpRequest, route: &str) -> Option<HttpResponse> {
        *self
            .hits
            .lock()
            .unwrap()
            .entry(format!("{} {}", req.method(), route))
            .or_insert(0) += 1;

        if let Some(token) = self.required_token.lock().unwrap().as_ref() {
            let expected = format!("Bearer {}", token);
            let provided = req
                .headers()
                .get("Authorization")
                .and_then(|h| h.to_str().ok());
            if provided != Some(expected.as_str()) {
                return Some(HttpResponse::Unauthorized().json(serde_json::json!({
                    "message": "invalid token"
                })));
            }
        }

        let forced = *self.fail_with.lock().unwrap();
        forced.map(|status| {
            HttpResponse::build(actix_web::http::StatusCode::from_u16(status).unwrap())
                .json(serde_json::json!({"message": "forced failure"}))
        })
    }
}

/// Per-catalog plumbing so the rate handlers are written once
pub trait FakeCatalog: Sized + Clone + serde::Serialize + 'static {
    const ROUTE: &'static str;
    const ID_PREFIX: &'static str;

    fn store(state: &FakeBackendState) -> &Mutex<Vec<Self>>;
    fn from_draft(id: String, draft: RateDraft) -> Self;
    fn id(&self) -> &str;
    fn apply(&mut self, patch: RatePatch);
}

macro_rules! fake_catalog {
    ($ty:ty, $route:expr, $prefix:expr, $field:ident) => {
        impl FakeCatalog for $ty {
            const ROUTE: &'static str = $route;
            const ID_PREFIX: &'static str = $prefix;

            fn store(state: &FakeBackendState) -> &Mutex<Vec<Self>> {
                &state.$field
            }

            fn from_draft(id: String, draft: RateDraft) -> Self {
                Self {
                    id,
                    name: draft.name,
                    description: draft.description,
                    class_type: draft.class_type,
                    subject: draft.subject,
                    rate: draft.rate,
                    is_default: draft.is_default,
                    is_active: draft.is_active,
                }
            }

            fn id(&self) -> &str {
                &self.id
            }

            fn apply(&mut self, patch: RatePatch) {
                if let Some(name) = patch.name {
                    self.name = name;
                }
                if let Some(description) = patch.description {
                    self.description = description;
                }
                if let Some(class_type) = patch.class_type {
                    self.class_type = class_type;
                }
                if let Some(subject) = patch.subject {
                    self.subject = subject;
                }
                if let Some(rate) = patch.rate {
                    self.rate = rate;
                }
                if let Some(is_default) = patch.is_default {
                    self.is_default = is_default;
                }
                if let Some(is_active) = patch.is_active {
                    self.is_active = is_active;
                }
            }
        }
    };
}

fake_catalog!(TutorRate, "/tutor-rates", "t", tutor_rates);
fake_catalog!(ParentRate, "/parent-rates", "p", parent_rates);

async fn list_rates<R: FakeCatalog>(
    state: web::Data<FakeBackendState>,
    req: HttpRequest,
) -> HttpResponse {
    if let Some(resp) = state.intercept(&req, R::ROUTE) {
        return resp;
    }
    let rates = R::store(&state).lock().unwrap().clone();
    HttpResponse::Ok().json(rates)
}

async fn create_rate<R: FakeCatalog>(
    state: web::Data<FakeBackendState>,
    req: HttpRequest,
    draft: web::Json<RateDraft>,
) -> HttpResponse {
    if let Some(resp) = state.intercept(&req, R::ROUTE) {
        return resp;
    }
    let rate = R::from_draft(state.next_id(R::ID_PREFIX), draft.into_inner());
    R::store(&state).lock().unwrap().push(rate.clone());
    state.reply(HttpResponse::Created(), &rate)
}

async fn update_rate<R: FakeCatalog>(
    state: web::Data<FakeBackendState>,
    req: HttpRequest,
    path: web::Path<String>,
    patch: web::Json<RatePatch>,
) -> HttpResponse {
    if let Some(resp) = state.intercept(&req, &format!("{}/{{id}}", R::ROUTE)) {
        return resp;
    }
    let mut rates = R::store(&state).lock().unwrap();
    match rates.iter_mut().find(|r| r.id() == path.as_str()) {
        Some(rate) => {
            rate.apply(patch.into_inner());
            state.reply(HttpResponse::Ok(), &*rate)
        }
        None => HttpResponse::NotFound().finish(),
    }
}

async fn delete_rate<R: FakeCatalog>(
    state: web::Data<FakeBackendState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    if let Some(resp) = state.intercept(&req, &format!("{}/{{id}}", R::ROUTE)) {
        return resp;
    }
    // Links are deliberately left behind, like the real backend does
    let mut rates = R::store(&state).lock().unwrap();
    let before = rates.len();
    rates.retain(|r| r.id() != path.as_str());
    if rates.len() == before {
        HttpResponse::NotFound().finish()
    } else {
        HttpResponse::NoContent().finish()
    }
}

async fn list_assignments(
    state: web::Data<FakeBackendState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    if let Some(resp) = state.intercept(&req, "/tutor-rates/{id}/assignments") {
        return resp;
    }
    let assignments: Vec<RateAssignment> = state
        .assignments
        .lock()
        .unwrap()
        .iter()
        .filter(|a| a.tutor_rate_id == path.as_str())
        .cloned()
        .collect();
    HttpResponse::Ok().json(assignments)
}

async fn list_links(state: web::Data<FakeBackendState>, req: HttpRequest) -> HttpResponse {
    if let Some(resp) = state.intercept(&req, "/rate-links") {
        return resp;
    }
    let links = state.links.lock().unwrap().clone();
    HttpResponse::Ok().json(links)
}

async fn create_link(
    state: web::Data<FakeBackendState>,
    req: HttpRequest,
    body: web::Json<CreateRateLinkRequest>,
) -> HttpResponse {
    if let Some(resp) = state.intercept(&req, "/rate-links") {
        return resp;
    }
    let link = RateLink::new(
        state.next_id("l"),
        body.tutor_rate_id.clone(),
        body.parent_rate_id.clone(),
    );
    state.links.lock().unwrap().push(link.clone());
    state.reply(HttpResponse::Created(), &link)
}

async fn delete_link(
    state: web::Data<FakeBackendState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    if let Some(resp) = state.intercept(&req, "/rate-links/{id}") {
        return resp;
    }
    let mut links = state.links.lock().unwrap();
    let before = links.len();
    links.retain(|l| l.id != path.as_str());
    if links.len() == before {
        HttpResponse::NotFound().finish()
    } else {
        HttpResponse::NoContent().finish()
    }
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/tutor-rates", web::get().to(list_rates::<TutorRate>))
        .route("/tutor-rates", web::post().to(create_rate::<TutorRate>))
        .route(
            "/tutor-rates/{id}/assignments",
            web::get().to(list_assignments),
        )
        .route("/tutor-rates/{id}", web::patch().to(update_rate::<TutorRate>))
        .route("/tutor-rates/{id}", web::delete().to(delete_rate::<TutorRate>))
        .route("/parent-rates", web::get().to(list_rates::<ParentRate>))
        .route("/parent-rates", web::post().to(create_rate::<ParentRate>))
        .route("/parent-rates/{id}", web::patch().to(update_rate::<ParentRate>))
        .route("/parent-rates/{id}", web::delete().to(delete_rate::<ParentRate>))
        .route("/rate-links", web::get().to(list_links))
        .route("/rate-links", web::post().to(create_link))
        .route("/rate-links/{id}", web::delete().to(delete_link));
}

/// Spawn the fake backend on a random port
///
/// # Returns
/// The running server (stops when dropped) and a handle on its state for
/// seeding data and inspecting request counts
pub fn spawn_fake_backend() -> (TestServer, web::Data<FakeBackendState>) {
    let state = web::Data::new(FakeBackendState::default());
    let app_state = state.clone();

    let server = actix_test::start(move || {
        App::new()
            .app_data(app_state.clone())
            .configure(routes)
    });

    (server, state)
}

/// Base URL the dashboard's backend client should point at
pub fn base_url(server: &TestServer) -> String {
    format!("http://{}", server.addr())
}
