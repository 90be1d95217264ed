//! Round trips against a running Meilisearch server (`MEILI_HOST`, default
//! `http://localhost:7700`). Run with `cargo test -- --ignored`.

use anyhow::{Context, Result};
use meili_client::SearchRequest;

mod common;
use common::*;

#[tokio::test]
#[ignore = "requires a running Meilisearch server"]
async fn test_index_documents_and_search() -> Result<()> {
    let client = test_client();
    let uid = unique_index_uid("live_search");

    client.create_index(&uid, Some("id")).await?;
    let index = client.index(&uid);

    let update = index.add_documents(&movies(), None).await?;
    index
        .wait_for_pending_update(update.update_id, None, None)
        .await
        .context("documents were not indexed")?;

    let results = index
        .search::<Movie>(&SearchRequest::new("batman").with_limit(1))
        .await?;
    assert_eq!(results.hits.len(), 1);
    assert_eq!(results.hits[0].id, 1);

    client.delete_index(&uid).await?;
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running Meilisearch server"]
async fn test_delete_all_indexes_empties_server() -> Result<()> {
    let client = test_client();
    for prefix in ["live_cleanup_a", "live_cleanup_b"] {
        client.create_index(&unique_index_uid(prefix), None).await?;
    }

    delete_all_indexes(&client).await?;

    assert!(client.get_indexes().await?.is_empty());
    Ok(())
}
