use camino::Utf8Path;
use orthanc_client::{Body, FindRequest, Job, Orthanc, OrthancError, OrthancSettings, ResourceType};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use rstest::*;
use serde_json::json;

use crate::mock_orthanc::MockOrthanc;

mod mock_orthanc;

const PATIENT_ID: &str = "e34c28ce-981b0e5c-2a481559-cf0d5fbe-053335f8";

#[fixture]
fn server() -> MockOrthanc {
    MockOrthanc::start()
}

#[rstest]
fn test_credentials_sent_with_every_request(server: MockOrthanc) {
    let mut orthanc = Orthanc::new(server.url()).unwrap();
    orthanc.setup_credentials("orthanc", "orthanc");
    orthanc.get_patients(&[]).unwrap();
    orthanc.delete_patient(PATIENT_ID).unwrap();
    orthanc.post_tools_find(json!({})).unwrap();
    orthanc.put_patient_protected(PATIENT_ID, "1").unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 4);
    for request in requests {
        assert_eq!(
            request.authorization.as_deref(),
            Some("Basic b3J0aGFuYzpvcnRoYW5j")
        );
    }
}

#[rstest]
fn test_credentials_from_settings(server: MockOrthanc) {
    let settings = OrthancSettings {
        url: server.url().to_string(),
        username: Some("alice".to_string()),
        password: Some("s3cret".to_string()),
        timeout: Some(std::time::Duration::from_secs(5)),
    };
    let orthanc = Orthanc::from_settings(&settings).unwrap();
    orthanc.get_system(&[]).unwrap();
    assert_eq!(
        server.last_request().authorization.as_deref(),
        Some("Basic YWxpY2U6czNjcmV0")
    );
}

#[rstest]
fn test_params_in_query_string(server: MockOrthanc) {
    let orthanc = Orthanc::new(server.url()).unwrap();
    orthanc
        .get_changes(&[("since", "10"), ("limit", "100")])
        .unwrap();
    let request = server.last_request();
    assert_eq!(request.path, "/changes");
    assert_eq!(request.query.as_deref(), Some("since=10&limit=100"));
}

#[rstest]
fn test_json_body(server: MockOrthanc) {
    let orthanc = Orthanc::new(server.url()).unwrap();
    let body = json!({"Replace": {"PatientName": "Hello^World"}, "Force": true});
    orthanc.post_study_modify("abc", body.clone()).unwrap();
    let request = server.last_request();
    assert_eq!(request.content_type.as_deref(), Some("application/json"));
    assert_eq!(request.json(), body);
}

#[rstest]
fn test_raw_body(server: MockOrthanc) {
    let orthanc = Orthanc::new(server.url()).unwrap();
    orthanc
        .put_metadata_item(ResourceType::Series, "abc", "1024", "hello")
        .unwrap();
    orthanc
        .post_tools_execute_script(Body::from("print(42)".to_string()))
        .unwrap();
    let requests = server.requests();
    assert_eq!(requests[0].body, b"hello");
    assert_eq!(requests[1].body, b"print(42)");
    assert_eq!(requests[1].content_type, None);
}

#[rstest]
fn test_empty_body(server: MockOrthanc) {
    let orthanc = Orthanc::new(server.url()).unwrap();
    orthanc.post_job_cancel("job", Body::Empty).unwrap();
    assert!(server.last_request().body.is_empty());
}

#[rstest]
fn test_upload_dicom_file(server: MockOrthanc) {
    let temp_dir = tempfile::tempdir().unwrap();
    let temp_dir_path = Utf8Path::from_path(temp_dir.path()).unwrap();
    let file = temp_dir_path.join("sample.dcm");
    fs_err::write(&file, b"not really a DICOM file").unwrap();

    let orthanc = Orthanc::new(server.url()).unwrap();
    orthanc.upload_dicom_file(&file).unwrap();
    let request = server.last_request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/instances");
    assert_eq!(request.body, b"not really a DICOM file");
}

#[rstest]
fn test_upload_missing_file(server: MockOrthanc) {
    let orthanc = Orthanc::new(server.url()).unwrap();
    let error = orthanc
        .upload_dicom_file("/definitely/not/a/file.dcm")
        .unwrap_err();
    assert!(matches!(error, OrthancError::IO(_)));
    assert!(server.requests().is_empty());
}

#[rstest]
fn test_not_found(server: MockOrthanc) {
    let route = format!("/patients/{PATIENT_ID}");
    server.reply("GET", &route, 404, r#"{"Message": "Unknown resource"}"#);
    let orthanc = Orthanc::new(server.url()).unwrap();
    let error = orthanc.get_patient(PATIENT_ID, &[]).unwrap_err();
    assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));
    assert!(error.is_refusal());
    match error {
        OrthancError::NotFound { path, .. } => assert_eq!(path, route),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[rstest]
fn test_error_status_keeps_response_text(server: MockOrthanc) {
    server.reply("POST", "/tools/execute-script", 403, "scripting disabled");
    let orthanc = Orthanc::new(server.url()).unwrap();
    let error = orthanc.post_tools_execute_script("print(1)").unwrap_err();
    match error {
        OrthancError::Orthanc {
            status,
            reason,
            text,
            ..
        } => {
            assert_eq!(status, StatusCode::FORBIDDEN);
            assert_eq!(reason, "Forbidden");
            assert_eq!(text.unwrap(), "scripting disabled");
        }
        other => panic!("expected Orthanc error, got {other:?}"),
    }
}

#[test]
fn test_connection_refused_is_not_a_refusal() {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let orthanc = Orthanc::new(format!("http://127.0.0.1:{port}")).unwrap();
    let error = orthanc.get_system(&[]).unwrap_err();
    assert!(matches!(error, OrthancError::Request(_)));
    assert!(!error.is_refusal());
    assert_eq!(error.status(), None);
}

#[rstest]
fn test_find(server: MockOrthanc) {
    server.reply("POST", "/tools/find", 200, r#"["a1", "b2"]"#);
    let orthanc = Orthanc::new(server.url()).unwrap();
    let request = FindRequest {
        limit: Some(1),
        ..FindRequest::new(ResourceType::Series).with("SeriesInstanceUID", "1.2.3")
    };
    let ids = orthanc.find(&request).unwrap();
    assert_eq!(ids, vec!["a1".to_string(), "b2".to_string()]);
    assert_eq!(
        server.last_request().json(),
        json!({"Level": "Series", "Limit": 1, "Query": {"SeriesInstanceUID": "1.2.3"}})
    );
}

#[rstest]
fn test_asynchronous_archive_job(server: MockOrthanc) {
    server.reply(
        "POST",
        "/studies/abc/archive",
        200,
        r#"{"ID": "job-1", "Path": "/jobs/job-1"}"#,
    );
    let orthanc = Orthanc::new(server.url()).unwrap();
    let job: Job = orthanc
        .post_study_archive("abc", json!({"Asynchronous": true}))
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(job.id, "job-1");
    orthanc.get_job_output(&job.id, "archive", &[]).unwrap();
    assert_eq!(server.last_request().path, "/jobs/job-1/archive");
}

#[rstest]
#[case(|o: &Orthanc| o.post_modality_echo("my pacs/1", Body::Empty), "/modalities/my%20pacs%2F1/echo")]
#[case(|o: &Orthanc| o.get_peer("peer?b#c", &[]), "/peers/peer%3Fb%23c")]
#[case(|o: &Orthanc| o.put_metadata_item(ResourceType::Study, PATIENT_ID, "a/b", "1"), "/studies/e34c28ce-981b0e5c-2a481559-cf0d5fbe-053335f8/metadata/a%2Fb")]
#[case(|o: &Orthanc| o.get_attachment(ResourceType::Patient, PATIENT_ID, "my file", &[]), "/patients/e34c28ce-981b0e5c-2a481559-cf0d5fbe-053335f8/attachments/my%20file")]
fn test_names_are_percent_encoded(
    server: MockOrthanc,
    #[case] call: fn(&Orthanc) -> Result<orthanc_client::Response, OrthancError>,
    #[case] expected_path: &str,
) {
    let orthanc = Orthanc::new(server.url()).unwrap();
    call(&orthanc).unwrap();
    let request = server.last_request();
    assert_eq!(request.path, expected_path);
    assert_eq!(request.query, None);
}
