use httpmock::prelude::*;
use issn_tools::{
    extract_country, extract_title, extract_url, search_data, HttpRegistryClient, IssnError,
    IssnLookup, RegistryConfig,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn registry_response() -> serde_json::Value {
    serde_json::json!({
        "@graph": [
            {"@id": "resource/ISSN/2049-3630#ISSN-L", "value": "2049-3630"},
            {"@id": "resource/ISSN/2049-3630#KeyTitle", "value": "Open biology"},
            {"@id": "http://id.loc.gov/vocabulary/countries/enk", "label": "United Kingdom"},
            {
                "@id": "resource/ISSN/2049-3630",
                "mainTitle": "Open biology.",
                "url": ["http://rsob.royalsocietypublishing.org/", "https://www.ncbi.nlm.nih.gov/pmc/journals/2110/"]
            }
        ]
    })
}

#[test]
fn test_end_to_end_lookup_with_config_file() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/resource/ISSN/2049-3630")
            .query_param("format", "json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(registry_response());
    });

    let mut config_file = NamedTempFile::new().unwrap();
    write!(
        config_file,
        r#"
[registry]
url_template = "{}/resource/ISSN/{{issn}}?format=json"
timeout_seconds = 5
"#,
        server.base_url()
    )
    .unwrap();

    let config = RegistryConfig::from_file(config_file.path()).unwrap();
    let lookup = IssnLookup::new(HttpRegistryClient::new(config).unwrap());

    let record = lookup.lookup("2049-3630").unwrap();

    api_mock.assert();
    assert_eq!(record.issn, "2049-3630");
    assert_eq!(record.title.as_deref(), Some("Open biology"));
    assert_eq!(record.country.as_deref(), Some("United Kingdom"));
    assert_eq!(
        record.url.as_deref(),
        Some("http://rsob.royalsocietypublishing.org/")
    );
}

#[test]
fn test_lookup_reports_typed_transport_error() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/resource/ISSN/2049-3630");
        then.status(500);
    });

    let config = RegistryConfig::default().with_url_template(format!(
        "{}/resource/ISSN/{{issn}}?format=json",
        server.base_url()
    ));
    let lookup = IssnLookup::new(HttpRegistryClient::new(config).unwrap());

    assert!(matches!(
        lookup.lookup("2049-3630"),
        Err(IssnError::UnexpectedResponse { status: 500, .. })
    ));
    api_mock.assert();
}

#[test]
fn test_extractors_on_fetched_document() {
    let data = registry_response();

    assert_eq!(extract_title(&data).as_deref(), Some("Open biology"));
    assert_eq!(extract_country(&data).as_deref(), Some("United Kingdom"));
    assert_eq!(
        extract_url(&data).as_deref(),
        Some("http://rsob.royalsocietypublishing.org/")
    );
    assert_eq!(
        search_data(&data, "value", None),
        Some(serde_json::json!("2049-3630"))
    );
}

#[test]
fn test_extractors_on_missing_graph() {
    let data = serde_json::json!({"@context": {}, "results": []});

    assert_eq!(extract_title(&data), None);
    assert_eq!(extract_country(&data), None);
    assert_eq!(extract_url(&data), None);
    assert_eq!(search_data(&data, "mainTitle", None), None);
}
