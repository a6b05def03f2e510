//! # HTTP Flows
//!
//! Request → dispatcher → ledger writer → store, observed from outside the
//! process boundary.
//!
//! ## Flows Tested:
//!
//! 1. **Static routes**: greeting and JSON message
//! 2. **Append**: `/addblock` persists exactly one row per accepted request
//! 3. **Validation**: missing/empty `data` never reaches the store
//! 4. **Concurrency**: parallel appends keep every payload with unique ids
//! 5. **Durability**: a file-backed node keeps its ledger across restarts

#[cfg(test)]
mod tests {
    use crate::integration::harness::TestNode;
    use block_ledger::BlockId;
    use futures::future::join_all;
    use node_runtime::NodeConfig;
    use std::collections::HashSet;

    async fn get(url: String) -> (u16, Option<String>, String) {
        let response = reqwest::get(url).await.unwrap();
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        (status, content_type, response.text().await.unwrap())
    }

    // =============================================================================
    // STATIC ROUTES
    // =============================================================================

    #[tokio::test]
    async fn test_greeting_over_http() {
        let node = TestNode::in_memory().await.unwrap();

        let (status, _, body) = get(node.url("/")).await;

        assert_eq!(status, 200);
        assert_eq!(body, "Hello, World!");
        node.stop().await.unwrap();
    }

    #[tokio::test]
    async fn test_api_message_over_http() {
        let node = TestNode::in_memory().await.unwrap();

        let (status, content_type, body) = get(node.url("/api")).await;

        assert_eq!(status, 200);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body, r#"{"text":"Hello from the API"}"#);
        node.stop().await.unwrap();
    }

    // =============================================================================
    // APPEND FLOW
    // =============================================================================

    #[tokio::test]
    async fn test_add_block_round_trip() {
        let node = TestNode::in_memory().await.unwrap();

        let (status, _, body) = get(node.url("/addblock?data=Test%20Block")).await;

        assert_eq!(status, 200);
        assert_eq!(body, "Block added successfully");
        let rows = node.store.find_by_data("Test Block").unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].id.get() > 0);
        node.stop().await.unwrap();
    }

    #[tokio::test]
    async fn test_add_block_without_data_is_rejected() {
        let node = TestNode::in_memory().await.unwrap();

        let (missing, _, _) = get(node.url("/addblock")).await;
        let (empty, _, _) = get(node.url("/addblock?data=")).await;

        assert_eq!(missing, 400);
        assert_eq!(empty, 400);
        assert_eq!(node.store.count().unwrap(), 0);
        node.stop().await.unwrap();
    }

    #[tokio::test]
    async fn test_duplicate_payloads_create_distinct_rows() {
        let node = TestNode::in_memory().await.unwrap();

        for _ in 0..2 {
            let (status, _, _) = get(node.url("/addblock?data=twice")).await;
            assert_eq!(status, 200);
        }

        let rows = node.store.find_by_data("twice").unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].id < rows[1].id);
        node.stop().await.unwrap();
    }

    #[tokio::test]
    async fn test_post_add_block_reads_query_string() {
        let node = TestNode::in_memory().await.unwrap();
        let client = reqwest::Client::new();

        let response = client.post(node.url("/addblock?data=posted")).send().await.unwrap();
        assert_eq!(response.status().as_u16(), 200);
        let unmatched = client.post(node.url("/elsewhere")).send().await.unwrap();
        assert_eq!(unmatched.status().as_u16(), 200);

        assert_eq!(node.store.find_by_data("posted").unwrap().len(), 1);
        node.stop().await.unwrap();
    }

    // =============================================================================
    // CONCURRENCY
    // =============================================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_are_all_persisted() {
        const REQUESTS: usize = 32;
        let node = TestNode::in_memory().await.unwrap();

        let statuses = join_all(
            (0..REQUESTS).map(|i| get(node.url(&format!("/addblock?data=payload-{i}")))),
        )
        .await;
        assert!(statuses.iter().all(|(status, _, _)| *status == 200));

        assert_eq!(node.store.count().unwrap(), REQUESTS as u64);
        let mut ids: HashSet<BlockId> = HashSet::new();
        for i in 0..REQUESTS {
            let rows = node.store.find_by_data(&format!("payload-{i}")).unwrap();
            assert_eq!(rows.len(), 1, "payload-{i} lost or duplicated");
            assert!(ids.insert(rows[0].id));
        }
        node.stop().await.unwrap();
    }

    // =============================================================================
    // DURABILITY
    // =============================================================================

    #[tokio::test]
    async fn test_file_backed_ledger_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = NodeConfig::default();
        config.storage.db_path = dir.path().join("ledger.db").to_string_lossy().into_owned();

        let node = TestNode::start(config.clone()).await.unwrap();
        let (status, _, _) = get(node.url("/addblock?data=before")).await;
        assert_eq!(status, 200);
        node.stop().await.unwrap();

        let node = TestNode::start(config).await.unwrap();
        let (status, _, _) = get(node.url("/addblock?data=after")).await;
        assert_eq!(status, 200);

        let before = node.store.find_by_data("before").unwrap();
        let after = node.store.find_by_data("after").unwrap();
        assert_eq!(before.len(), 1);
        assert!(after[0].id > before[0].id);
        node.stop().await.unwrap();
    }
}
