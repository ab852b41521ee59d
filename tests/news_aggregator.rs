use std::time::Duration;

use mockito::Matcher;

use mirror_backend::news::NewsClient;

fn client(base_url: &str) -> NewsClient {
    NewsClient::new("test-key".to_string(), base_url.to_string(), Duration::from_secs(2)).unwrap()
}

fn articles_body(titles: &[&str]) -> String {
    let articles: Vec<_> = titles
        .iter()
        .map(|t| serde_json::json!({ "title": t }))
        .collect();
    serde_json::json!({ "status": "ok", "articles": articles }).to_string()
}

#[tokio::test]
async fn sports_threshold_short_circuits_group_but_tech_is_still_queried() {
    let mut server = mockito::Server::new_async().await;

    // First sports query alone reaches the 5-item threshold (duplicates
    // count towards it; dedup happens at the end).
    let sports_first = server
        .mock("GET", "/v2/everything")
        .match_query(Matcher::UrlEncoded("q".into(), "portugal football".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(articles_body(&["A", "B", "A", "C", "D"]))
        .create_async()
        .await;

    let sports_second = server
        .mock("GET", "/v2/everything")
        .match_query(Matcher::UrlEncoded("q".into(), "portugal soccer".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(articles_body(&["never fetched"]))
        .expect(0)
        .create_async()
        .await;

    let tech_first = server
        .mock("GET", "/v2/top-headlines")
        .match_query(Matcher::UrlEncoded("category".into(), "technology".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(articles_body(&["A", "E"]))
        .create_async()
        .await;

    let tech_second = server
        .mock("GET", "/v2/everything")
        .match_query(Matcher::UrlEncoded("q".into(), "technology ai programming".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(articles_body(&["F", "G"]))
        .create_async()
        .await;

    let tech_third = server
        .mock("GET", "/v2/everything")
        .match_query(Matcher::UrlEncoded("q".into(), "apple google microsoft".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(articles_body(&["never fetched"]))
        .expect(0)
        .create_async()
        .await;

    let headlines = client(&server.url()).headlines().await;

    assert_eq!(headlines, vec!["A", "B", "C", "D", "E", "F", "G"]);

    sports_first.assert_async().await;
    sports_second.assert_async().await;
    tech_first.assert_async().await;
    tech_second.assert_async().await;
    tech_third.assert_async().await;
}

#[tokio::test]
async fn tech_group_runs_even_when_sports_already_filled_the_list() {
    let mut server = mockito::Server::new_async().await;

    let many: Vec<String> = (1..=10).map(|i| format!("T{}", i)).collect();
    let many_refs: Vec<&str> = many.iter().map(|s| s.as_str()).collect();

    let _sports_first = server
        .mock("GET", "/v2/everything")
        .match_query(Matcher::UrlEncoded("q".into(), "portugal football".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(articles_body(&many_refs))
        .create_async()
        .await;

    let tech_first = server
        .mock("GET", "/v2/top-headlines")
        .match_query(Matcher::UrlEncoded("category".into(), "technology".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(articles_body(&["X"]))
        .create_async()
        .await;

    let headlines = client(&server.url()).headlines().await;

    // Ten sports titles already exceed the cap, yet the tech group is still
    // attempted; its results just fall past the truncation point.
    assert_eq!(headlines, (1..=8).map(|i| format!("T{}", i)).collect::<Vec<_>>());
    tech_first.assert_async().await;
}

#[tokio::test]
async fn removed_and_empty_titles_are_filtered_out() {
    let mut server = mockito::Server::new_async().await;

    let _sports_first = server
        .mock("GET", "/v2/everything")
        .match_query(Matcher::UrlEncoded("q".into(), "portugal football".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "status": "ok",
                "articles": [
                    {"title": "Real headline"},
                    {"title": "[Removed]"},
                    {"title": ""},
                    {"title": null},
                    {},
                    {"title": "Another headline"}
                ]
            }"#,
        )
        .create_async()
        .await;

    // Remaining queries are unmocked and fail; the aggregator carries on.
    let headlines = client(&server.url()).headlines().await;

    assert_eq!(headlines, vec!["Real headline", "Another headline"]);
}

#[tokio::test]
async fn provider_error_status_is_skipped_and_iteration_continues() {
    let mut server = mockito::Server::new_async().await;

    let _sports_first = server
        .mock("GET", "/v2/everything")
        .match_query(Matcher::UrlEncoded("q".into(), "portugal football".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status": "error", "articles": []}"#)
        .create_async()
        .await;

    let sports_second = server
        .mock("GET", "/v2/everything")
        .match_query(Matcher::UrlEncoded("q".into(), "portugal soccer".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(articles_body(&["A", "B", "C", "D", "E"]))
        .create_async()
        .await;

    let headlines = client(&server.url()).headlines().await;

    assert_eq!(headlines, vec!["A", "B", "C", "D", "E"]);
    sports_second.assert_async().await;
}

#[tokio::test]
async fn every_call_failing_yields_an_empty_list() {
    let mut server = mockito::Server::new_async().await;

    // Six sports queries plus three tech queries, all rejected.
    let all_down = server
        .mock("GET", Matcher::Any)
        .with_status(500)
        .with_body("{}")
        .expect(9)
        .create_async()
        .await;

    let headlines = client(&server.url()).headlines().await;

    assert!(headlines.is_empty());
    all_down.assert_async().await;
}

#[tokio::test]
async fn unreachable_provider_yields_an_empty_list() {
    let headlines = client("http://127.0.0.1:1").headlines().await;
    assert!(headlines.is_empty());
}
