//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: config → listing page → concurrent detail
//! fetches → displayed state → view models

use pokedex_client::detail::{DetailTab, DetailView};
use pokedex_client::present::{DetailPanel, PageView, TabContent};
use pokedex_client::session::{Completion, Pokedex};
use pokedex_client::{Error, NavAction, PokedexConfig};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Fixtures
// ============================================================================

fn detail(id: u32, name: &str, types: &[&str], hp: u32) -> Value {
    let types: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(i, t)| json!({"slot": i + 1, "type": {"name": t}}))
        .collect();

    json!({
        "id": id,
        "name": name,
        "height": 4,
        "weight": 60,
        "types": types,
        "abilities": [{"ability": {"name": "static"}, "slot": 1}],
        "stats": [
            {"base_stat": hp, "stat": {"name": "hp"}},
            {"base_stat": 55, "stat": {"name": "attack"}}
        ],
        "sprites": {"other": {"dream_world": {"front_default": format!("https://img.example/{id}.svg")}}}
    })
}

fn listing(server: &MockServer, names: &[&str], next: Option<String>, previous: Option<String>) -> Value {
    let results: Vec<Value> = names
        .iter()
        .map(|n| json!({"name": n, "url": format!("{}/api/v2/pokemon/{n}/", server.uri())}))
        .collect();
    json!({"count": 4, "next": next, "previous": previous, "results": results})
}

async fn mount_detail(server: &MockServer, name: &str, body: Value, delay_ms: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v2/pokemon/{name}/")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(body)
                .set_delay(Duration::from_millis(delay_ms)),
        )
        .mount(server)
        .await;
}

/// Two pages: pichu, pikachu | raichu, sandshrew
async fn two_page_server() -> MockServer {
    let server = MockServer::start().await;
    let root = format!("{}/api/v2/pokemon", server.uri());
    let page_2 = format!("{root}?offset=2&limit=2");

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(
            &server,
            &["raichu", "sandshrew"],
            None,
            Some(root.clone()),
        )))
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(
            &server,
            &["pichu", "pikachu"],
            Some(page_2),
            None,
        )))
        .with_priority(2)
        .mount(&server)
        .await;

    mount_detail(&server, "pichu", detail(172, "pichu", &["electric"], 20), 80).await;
    mount_detail(&server, "pikachu", detail(25, "pikachu", &["electric"], 35), 0).await;
    mount_detail(&server, "raichu", detail(26, "raichu", &["electric"], 60), 0).await;
    mount_detail(&server, "sandshrew", detail(27, "sandshrew", &["ground"], 50), 0).await;

    server
}

fn pokedex_for(server: &MockServer) -> Pokedex {
    let config = PokedexConfig::default().with_base_url(format!("{}/api/v2/pokemon", server.uri()));
    Pokedex::from_config(&config).unwrap()
}

// ============================================================================
// End-to-end navigation
// ============================================================================

#[tokio::test]
async fn test_first_page_in_listing_order() {
    let server = two_page_server().await;
    let pokedex = pokedex_for(&server);
    let mut state = pokedex.new_state();

    let completion = pokedex.navigate(&mut state, NavAction::Initial).await.unwrap();

    assert_eq!(completion, Completion::Replaced { count: 2 });
    let ids: Vec<u32> = state.pokemon().iter().map(|p| p.id).collect();
    // pichu's detail is slowest but still comes first
    assert_eq!(ids, vec![172, 25]);
    assert_eq!(
        state.cursor().next(),
        Some(format!("{}/api/v2/pokemon?offset=2&limit=2", server.uri()).as_str())
    );
    assert_eq!(state.cursor().previous(), None);
}

#[tokio::test]
async fn test_walk_forward_and_back() {
    let server = two_page_server().await;
    let pokedex = pokedex_for(&server);
    let mut state = pokedex.new_state();

    pokedex.navigate(&mut state, NavAction::Initial).await.unwrap();
    pokedex.navigate(&mut state, NavAction::Next).await.unwrap();

    let view = PageView::from_state(&state);
    let names: Vec<&str> = view.cards.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Raichu", "Sandshrew"]);
    assert_eq!(view.cards[1].background, "#FAD2E1");
    assert!(!view.has_next);
    assert!(view.has_previous);

    let err = pokedex.navigate(&mut state, NavAction::Next).await.unwrap_err();
    assert!(matches!(err, Error::NoSuchPage { action: NavAction::Next }));

    pokedex.navigate(&mut state, NavAction::Previous).await.unwrap();
    assert_eq!(state.pokemon()[1].name, "pikachu");
    assert!(state.has_next());
}

#[tokio::test]
async fn test_failed_detail_keeps_previous_page() {
    let server = MockServer::start().await;
    let root = format!("{}/api/v2/pokemon", server.uri());
    let page_2 = format!("{root}?offset=2&limit=2");

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(
            &server,
            &["raichu", "sandshrew"],
            None,
            Some(root.clone()),
        )))
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(
            &server,
            &["pikachu"],
            Some(page_2),
            None,
        )))
        .with_priority(2)
        .mount(&server)
        .await;

    mount_detail(&server, "pikachu", detail(25, "pikachu", &["electric"], 35), 0).await;
    mount_detail(&server, "raichu", detail(26, "raichu", &["electric"], 60), 0).await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/sandshrew/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let pokedex = pokedex_for(&server);
    let mut state = pokedex.new_state();
    pokedex.navigate(&mut state, NavAction::Initial).await.unwrap();

    let err = pokedex.navigate(&mut state, NavAction::Next).await.unwrap_err();

    assert!(err.is_fetch_error());
    assert!(err.to_string().contains("sandshrew"));
    assert_eq!(state.pokemon().len(), 1);
    assert_eq!(state.pokemon()[0].name, "pikachu");
    assert!(state.has_next());
    assert!(!state.has_previous());
}

#[tokio::test]
async fn test_malformed_listing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"detail": "Not found."})))
        .mount(&server)
        .await;

    let pokedex = pokedex_for(&server);
    let mut state = pokedex.new_state();
    let err = pokedex.navigate(&mut state, NavAction::Initial).await.unwrap_err();

    assert!(err.is_fetch_error());
    assert!(err.to_string().contains("results"));
    assert!(state.is_empty());
    assert!(!state.has_next());
}

// ============================================================================
// Detail view
// ============================================================================

#[tokio::test]
async fn test_open_detail_from_page() {
    let server = two_page_server().await;
    let pokedex = pokedex_for(&server);
    let mut state = pokedex.new_state();
    pokedex.navigate(&mut state, NavAction::Initial).await.unwrap();

    let mut view = DetailView::new();
    view.toggle(&state.pokemon()[1]);

    let panel = DetailPanel::from_view(&view).unwrap();
    assert_eq!(panel.name, "Pikachu");
    assert_eq!(panel.height_label, "Height: 4 m");
    assert_eq!(panel.background, "#D8E2DC");
    match &panel.content {
        TabContent::Stats(bars) => {
            assert_eq!(bars[0].name, "hp");
            assert_eq!(bars[0].percent, 17.5);
        }
        other => panic!("expected stats, got {other:?}"),
    }

    view.select_tab(DetailTab::Abilities);
    let panel = DetailPanel::from_view(&view).unwrap();
    assert_eq!(panel.content, TabContent::Abilities(vec!["static".to_string()]));

    view.close();
    assert!(DetailPanel::from_view(&view).is_none());
}

#[tokio::test]
async fn test_lookup_single_pokemon() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(detail(25, "pikachu", &["electric"], 35)))
        .mount(&server)
        .await;

    let pokedex = pokedex_for(&server);
    let pikachu = pokedex.lookup("25").await.unwrap();

    assert_eq!(pikachu.name, "pikachu");
    assert_eq!(pikachu.image_ref.as_deref(), Some("https://img.example/25.svg"));
}
