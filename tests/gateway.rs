//! Integration tests for the API gateway and the repository state prober.

use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gitdrop::github::{probe, Gateway, GitHubError, RepoRef};

fn gateway(server: &MockServer) -> Gateway {
    Gateway::with_api_base("test-token", server.uri()).unwrap()
}

fn repo() -> RepoRef {
    RepoRef::parse_url("https://github.com/octo/widgets").unwrap()
}

mod invoke {
    use super::*;
    use reqwest::Method;

    #[tokio::test]
    async fn attaches_auth_and_version_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping"))
            .and(header("Authorization", "Bearer test-token"))
            .and(header("X-GitHub-Api-Version", "2022-11-28"))
            .and(header("Accept", "application/vnd.github+json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
            .expect(1)
            .mount(&server)
            .await;

        let value = gateway(&server)
            .invoke(Method::GET, "/ping", None)
            .await
            .unwrap();
        assert_eq!(value, Some(json!({ "ok": true })));
    }

    #[tokio::test]
    async fn no_content_yields_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/nothing"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let value = gateway(&server)
            .invoke(Method::GET, "/nothing", None)
            .await
            .unwrap();
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn empty_body_yields_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/empty"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let value = gateway(&server)
            .invoke(Method::GET, "/empty", None)
            .await
            .unwrap();
        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn server_message_is_carried_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({ "message": "Not Found" })),
            )
            .mount(&server)
            .await;

        let err = gateway(&server)
            .invoke(Method::GET, "/missing", None)
            .await
            .unwrap_err();
        match err {
            GitHubError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Not Found");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unparseable_error_body_falls_back_to_status_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
            .mount(&server)
            .await;

        let err = gateway(&server)
            .invoke(Method::GET, "/broken", None)
            .await
            .unwrap_err();
        match err {
            GitHubError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unauthorized_maps_to_auth_failed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/secret"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "message": "Bad credentials" })),
            )
            .mount(&server)
            .await;

        let err = gateway(&server)
            .invoke(Method::GET, "/secret", None)
            .await
            .unwrap_err();
        assert!(matches!(err, GitHubError::AuthFailed(_)));
    }

    #[tokio::test]
    async fn too_many_requests_maps_to_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/busy"))
            .respond_with(
                ResponseTemplate::new(429).set_body_json(json!({ "message": "slow down" })),
            )
            .mount(&server)
            .await;

        let err = gateway(&server)
            .invoke(Method::GET, "/busy", None)
            .await
            .unwrap_err();
        assert!(matches!(err, GitHubError::RateLimited));
    }

    #[tokio::test]
    async fn single_attempt_no_retry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/flaky"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({ "message": "boom" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let _ = gateway(&server).invoke(Method::GET, "/flaky", None).await;
        // expect(1) verifies on drop that exactly one request arrived.
    }
}

mod prober {
    use super::*;

    #[tokio::test]
    async fn live_ref_means_not_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/widgets/git/ref/heads/main"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ref": "refs/heads/main",
                "object": { "sha": "abc123", "type": "commit" }
            })))
            .mount(&server)
            .await;

        let empty = probe::is_repo_empty(&gateway(&server), &repo(), "main")
            .await
            .unwrap();
        assert!(!empty);
    }

    #[tokio::test]
    async fn conflict_means_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/widgets/git/ref/heads/main"))
            .respond_with(
                ResponseTemplate::new(409)
                    .set_body_json(json!({ "message": "Git Repository is empty." })),
            )
            .mount(&server)
            .await;

        let empty = probe::is_repo_empty(&gateway(&server), &repo(), "main")
            .await
            .unwrap();
        assert!(empty);
    }

    #[tokio::test]
    async fn missing_ref_means_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/widgets/git/ref/heads/main"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({ "message": "Not Found" })),
            )
            .mount(&server)
            .await;

        let empty = probe::is_repo_empty(&gateway(&server), &repo(), "main")
            .await
            .unwrap();
        assert!(empty);
    }

    #[tokio::test]
    async fn auth_failure_propagates_not_classified() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/widgets/git/ref/heads/main"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "message": "Bad credentials" })),
            )
            .mount(&server)
            .await;

        let err = probe::is_repo_empty(&gateway(&server), &repo(), "main")
            .await
            .unwrap_err();
        assert!(matches!(err, GitHubError::AuthFailed(_)));
    }
}

mod invoke_body {
    use super::*;
    use reqwest::Method;

    #[tokio::test]
    async fn post_sends_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/echo"))
            .and(wiremock::matchers::body_json(json!({ "k": "v" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "ok": true })))
            .expect(1)
            .mount(&server)
            .await;

        let body: Value = json!({ "k": "v" });
        let value = gateway(&server)
            .invoke(Method::POST, "/echo", Some(&body))
            .await
            .unwrap();
        assert_eq!(value, Some(json!({ "ok": true })));
    }
}
