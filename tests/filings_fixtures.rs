mod common;

use common::{edgar_at, read_fixture};
use edgar_statements::{Cik, EdgarError, FilingOperations, FilingOptions, Submission};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TSLA: Cik = Cik::new(1318605);

async fn submission_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/submissions/CIK0001318605.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(read_fixture("submissions/submission.json"), "application/json"),
        )
        .mount(&server)
        .await;
    server
}

#[test]
fn parse_submission() {
    let content = read_fixture("submissions/submission.json");
    let submission: Submission = serde_json::from_str(&content).unwrap();

    assert_eq!(submission.name, "Tesla, Inc.");
    assert_eq!(submission.cik, "1318605");
    assert_eq!(submission.tickers, vec!["TSLA"]);
    assert_eq!(submission.filings.recent.accession_number.len(), 6);
}

#[tokio::test]
async fn accession_numbers_match_form_exactly() {
    let server = submission_server().await;
    let edgar = edgar_at(&server.uri());

    let accessions = edgar.accession_numbers(TSLA, "10-K").await.unwrap();
    assert_eq!(
        accessions,
        vec![
            "000156459021004599".to_string(),
            "000156459020004475".to_string(),
        ]
    );

    let quarterlies = edgar.accession_numbers(TSLA, "10-Q").await.unwrap();
    assert_eq!(quarterlies.len(), 4);
    // Source (reverse-chronological) order is preserved.
    assert_eq!(quarterlies[0], "000156459020047486");
    assert_eq!(quarterlies[3], "000156459019038256");
}

#[tokio::test]
async fn form_filter_is_case_sensitive() {
    let server = submission_server().await;
    let edgar = edgar_at(&server.uri());

    let accessions = edgar.accession_numbers(TSLA, "10-k").await.unwrap();
    assert!(accessions.is_empty());
}

#[tokio::test]
async fn absent_form_type_yields_empty_not_error() {
    let server = submission_server().await;
    let edgar = edgar_at(&server.uri());

    let accessions = edgar.accession_numbers(TSLA, "S-1").await.unwrap();
    assert!(accessions.is_empty());
}

#[tokio::test]
async fn filings_apply_offset_and_limit() {
    let server = submission_server().await;
    let edgar = edgar_at(&server.uri());

    let all = edgar.filings(TSLA, None).await.unwrap();
    assert_eq!(all.len(), 6);
    assert_eq!(all[0].form, "10-K");
    assert_eq!(all[0].report_date, Some("2020-12-31".to_string()));

    let opts = FilingOptions::new().with_form_type("10-Q").with_limit(2);
    let limited = edgar.filings(TSLA, Some(opts)).await.unwrap();
    assert_eq!(limited.len(), 2);
    assert!(limited.iter().all(|f| f.form == "10-Q"));

    let opts = FilingOptions::new().with_offset(5);
    let tail = edgar.filings(TSLA, Some(opts)).await.unwrap();
    assert_eq!(tail.len(), 1);
    assert_eq!(tail[0].accession_number, "0001564590-19-038256");
}

#[tokio::test]
async fn unknown_cik_propagates_provider_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let edgar = edgar_at(&server.uri());
    match edgar.accession_numbers(Cik::new(999999999), "10-K").await {
        Err(EdgarError::HttpStatus { status, url }) => {
            assert_eq!(status.as_u16(), 404);
            assert!(url.contains("CIK0999999999"));
        }
        other => panic!("expected HttpStatus error, got {:?}", other),
    }
}
