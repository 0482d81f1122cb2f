//! End-to-end card flows against a scripted SIM Manager transport.
//!
//! Drives the card through the `SimakaCard` trait the way the host
//! authentication framework would, with the transport replaced by a
//! queue of canned responses.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use simaka_card::{CardConfig, CardPlugin};
use simaka_core::{
    AkaChallenge, CardError, Identification, SimakaCard, AKA_AUTS_LEN, AKA_RAND_LEN,
};
use simaka_fetch::{FetchError, FetchRequest, FetchResponse, FetchResult, Fetcher};

/// Transport double replaying a queue of responses
struct QueueFetcher {
    responses: Mutex<VecDeque<FetchResult<FetchResponse>>>,
    urls: Mutex<Vec<String>>,
}

impl QueueFetcher {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(VecDeque::new()),
            urls: Mutex::new(Vec::new()),
        })
    }

    fn push(&self, response: FetchResult<FetchResponse>) {
        self.responses.lock().unwrap().push_back(response);
    }

    fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for QueueFetcher {
    async fn fetch(&self, request: FetchRequest) -> FetchResult<FetchResponse> {
        assert_eq!(
            request.headers.get("Accept").map(String::as_str),
            Some("application/json")
        );
        self.urls.lock().unwrap().push(request.url.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected request to SIM Manager")
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn plugin_card(fetcher: Arc<QueueFetcher>) -> Arc<dyn SimakaCard> {
    let plugin = CardPlugin::with_fetcher(
        CardConfig::with_sim_url("http://sim-manager.example.org:8080"),
        fetcher,
    );
    plugin.card()
}

fn success_body(ck: &str, ik: &str, res: &str) -> String {
    format!(r#"{{"synchronization": true, "ck": "{ck}", "ik": "{ik}", "res": "{res}"}}"#)
}

fn sync_failure_body(auts: &str) -> String {
    format!(r#"{{"synchronization": false, "auts": "{auts}"}}"#)
}

#[tokio::test]
async fn successful_challenge_returns_quintuplet() {
    init_logging();
    let fetcher = QueueFetcher::new();
    fetcher.push(Ok(FetchResponse::with_status(200).with_body(success_body(
        &"00".repeat(16),
        &"11".repeat(16),
        &"aa".repeat(4),
    ))));
    let card = plugin_card(fetcher.clone());

    let id = Identification::new("0@example.org");
    let challenge = AkaChallenge::new([0xab; AKA_RAND_LEN], [0xcd; 16]);
    let quintuplet = card.get_quintuplet(&id, &challenge).await.unwrap();

    assert_eq!(quintuplet.ck, [0x00; 16]);
    assert_eq!(quintuplet.ik, [0x11; 16]);
    assert_eq!(quintuplet.res, vec![0xaa; 4]);
    assert_eq!(quintuplet.res_len(), 4);

    let urls = fetcher.urls();
    assert_eq!(
        urls,
        vec![format!(
            "http://sim-manager.example.org:8080/3g-authenticate?rand={}&autn={}",
            "AB".repeat(16),
            "CD".repeat(16)
        )]
    );
}

#[tokio::test]
async fn sync_failure_then_resync_dialogue() {
    init_logging();
    let fetcher = QueueFetcher::new();
    fetcher.push(Ok(FetchResponse::with_status(200)
        .with_body(sync_failure_body(&"cc".repeat(AKA_AUTS_LEN)))));
    let card = plugin_card(fetcher);

    let id = Identification::new("0@example.org");
    let rand = [0x77; AKA_RAND_LEN];
    let challenge = AkaChallenge::new(rand, [0x00; 16]);

    // Step one: the out-of-sequence challenge primes the resync slot
    let result = card.get_quintuplet(&id, &challenge).await;
    assert_eq!(result, Err(CardError::SyncRequired));

    // Step two: resync with the same RAND harvests the AUTS locally
    assert_eq!(card.resync(&id, &rand), Some([0xcc; AKA_AUTS_LEN]));

    // A different RAND must fail
    assert_eq!(card.resync(&id, &[0x78; AKA_RAND_LEN]), None);
}

#[tokio::test]
async fn newer_sync_failure_overwrites_slot() {
    init_logging();
    let fetcher = QueueFetcher::new();
    fetcher.push(Ok(FetchResponse::with_status(200)
        .with_body(sync_failure_body(&"11".repeat(AKA_AUTS_LEN)))));
    fetcher.push(Ok(FetchResponse::with_status(200)
        .with_body(sync_failure_body(&"22".repeat(AKA_AUTS_LEN)))));
    let card = plugin_card(fetcher);

    let id = Identification::new("0@example.org");
    let first_rand = [0x01; AKA_RAND_LEN];
    let second_rand = [0x02; AKA_RAND_LEN];

    let result = card
        .get_quintuplet(&id, &AkaChallenge::new(first_rand, [0; 16]))
        .await;
    assert_eq!(result, Err(CardError::SyncRequired));
    let result = card
        .get_quintuplet(&id, &AkaChallenge::new(second_rand, [0; 16]))
        .await;
    assert_eq!(result, Err(CardError::SyncRequired));

    // Only the newer entry survives
    assert_eq!(card.resync(&id, &first_rand), None);
    assert_eq!(card.resync(&id, &second_rand), Some([0x22; AKA_AUTS_LEN]));
}

#[tokio::test]
async fn resync_before_any_challenge_fails() {
    init_logging();
    let card = plugin_card(QueueFetcher::new());
    let id = Identification::new("0@example.org");
    assert_eq!(card.resync(&id, &[0x00; AKA_RAND_LEN]), None);
}

#[tokio::test]
async fn service_outcomes_map_to_typed_errors() {
    init_logging();
    let id = Identification::new("0@example.org");
    let challenge = AkaChallenge::new([0; AKA_RAND_LEN], [0; 16]);

    let cases: Vec<(FetchResult<FetchResponse>, CardError)> = vec![
        (Ok(FetchResponse::with_status(404)), CardError::NotFound),
        (Ok(FetchResponse::with_status(421)), CardError::NotFound),
        (
            Ok(FetchResponse::with_status(503)),
            CardError::TransportFailed,
        ),
        (
            Err(FetchError::ConnectionError("refused".into())),
            CardError::TransportFailed,
        ),
        (
            Ok(FetchResponse::with_status(200).with_body("not json")),
            CardError::ParseFailed,
        ),
    ];

    for (response, expected) in cases {
        let fetcher = QueueFetcher::new();
        fetcher.push(response);
        let card = plugin_card(fetcher);
        let result = card.get_quintuplet(&id, &challenge).await;
        assert_eq!(result, Err(expected));
    }
}

#[tokio::test]
async fn triplet_operation_is_never_supported() {
    init_logging();
    let card = plugin_card(QueueFetcher::new());
    let id = Identification::new("0@example.org");
    for rand in [[0x00; 16], [0xff; 16]] {
        let result = card.get_triplet(&id, &rand).await;
        assert_eq!(result, Err(CardError::NotSupported));
    }
}

#[tokio::test]
async fn cards_do_not_share_resync_state() {
    init_logging();
    let id = Identification::new("0@example.org");
    let rand = [0x55; AKA_RAND_LEN];

    let fetcher = QueueFetcher::new();
    fetcher.push(Ok(FetchResponse::with_status(200)
        .with_body(sync_failure_body(&"aa".repeat(AKA_AUTS_LEN)))));
    let first = plugin_card(fetcher);
    let second = plugin_card(QueueFetcher::new());

    let result = first
        .get_quintuplet(&id, &AkaChallenge::new(rand, [0; 16]))
        .await;
    assert_eq!(result, Err(CardError::SyncRequired));

    assert_eq!(first.resync(&id, &rand), Some([0xaa; AKA_AUTS_LEN]));
    assert_eq!(second.resync(&id, &rand), None);
}
