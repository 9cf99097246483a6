// Test Data Factory
//
// Seed records and dashboard state wired to a fake backend.

use ratedesk::config::BackendConfig;
use ratedesk::rates::models::{ClassType, ParentRate, RateLink, TutorRate};
use ratedesk::AppState;
use rust_decimal::Decimal;
use std::time::Duration;

use super::fake_backend::{base_url, FakeBackendState, TestServer};

pub struct TestDataFactory;

impl TestDataFactory {
    pub fn tutor_rate(id: &str, rate: Decimal) -> TutorRate {
        TutorRate {
            id: id.to_string(),
            name: format!("Tutor rate {}", id),
            description: None,
            class_type: ClassType::Individual,
            subject: None,
            rate,
            is_default: false,
            is_active: true,
        }
    }

    pub fn parent_rate(id: &str, rate: Decimal) -> ParentRate {
        ParentRate {
            id: id.to_string(),
            name: format!("Parent rate {}", id),
            description: None,
            class_type: ClassType::Individual,
            subject: None,
            rate,
            is_default: false,
            is_active: true,
        }
    }

    pub fn link(id: &str, tutor_rate_id: &str, parent_rate_id: &str) -> RateLink {
        RateLink::new(id, tutor_rate_id, parent_rate_id)
    }

    /// t1 = 18.00 linked to p1 = 30.00 through l1
    pub fn seed_single_pair(state: &FakeBackendState) {
        state
            .tutor_rates
            .lock()
            .unwrap()
            .push(Self::tutor_rate("t1", Decimal::new(1800, 2)));
        state
            .parent_rates
            .lock()
            .unwrap()
            .push(Self::parent_rate("p1", Decimal::new(3000, 2)));
        state.links.lock().unwrap().push(Self::link("l1", "t1", "p1"));
    }
}

/// Dashboard state whose backend client points at the fake backend
pub fn app_state(server: &TestServer) -> AppState {
    AppState::new(&BackendConfig::new(base_url(server))).expect("valid backend config")
}

/// Same as `app_state`, sending a bearer token on every backend call
pub fn app_state_with_token(server: &TestServer, token: &str) -> AppState {
    let mut config = BackendConfig::new(base_url(server));
    config.api_token = Some(token.to_string());
    AppState::new(&config).expect("valid backend config")
}

/// Same as `app_state`, with cached collections expiring after `ttl`
pub fn app_state_with_cache_ttl(server: &TestServer, ttl: Duration) -> AppState {
    let mut config = BackendConfig::new(base_url(server));
    config.cache_ttl_secs = ttl.as_secs();
    AppState::new(&config).expect("valid backend config")
}
