#[cfg(test)]
mod tests {
    use ol_cli::client::ApiClient;
    use opslearn_shared::{endpoints::ArticleQuery, ApiError, NewComment};
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, header, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    fn client(server: &MockServer, token: Option<&str>) -> ApiClient {
        ApiClient::new(&format!("{}/api/", server.uri()), token.map(str::to_string))
            .expect("build client")
    }

    async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn lists_accept_bare_arrays_and_results_envelopes() {
        let server = MockServer::start().await;
        mount_json(&server, "/api/tags/", json!([{"id": 1, "name": "Docker"}])).await;
        mount_json(
            &server,
            "/api/categories/",
            json!({"count": 1, "next": null, "previous": null,
                   "results": [{"id": 4, "name": "CI/CD", "post_count": 3}]}),
        )
        .await;

        let api = client(&server, None);
        let tags = api.tags().await;
        let categories = api.categories(false).await;

        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "Docker");
        assert_eq!(categories[0].post_count, Some(3));
    }

    #[tokio::test]
    async fn failing_collection_endpoints_degrade_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/articles/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/tags/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let api = client(&server, None);
        assert!(api.articles(&ArticleQuery::default()).await.is_empty());
        assert!(api.tags().await.is_empty());

        // nothing listens on port 9 of the loopback address
        let offline = ApiClient::new("http://127.0.0.1:9/api", None).expect("build client");
        assert!(offline.authors().await.is_empty());
        assert_eq!(offline.article("anything").await, None);
    }

    #[tokio::test]
    async fn missing_article_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/articles/ghost/"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let api = client(&server, None);
        assert_eq!(api.article("ghost").await, None);
        assert_eq!(api.article_page("ghost").await, None);
    }

    #[tokio::test]
    async fn article_filters_are_sent_as_query_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/articles/"))
            .and(query_param("search", "helm charts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 3, "title": "Helm charts 101", "published_at": "2024-01-01"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let found = client(&server, None)
            .articles(&ArticleQuery::search("helm charts"))
            .await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Helm charts 101");
    }

    #[tokio::test]
    async fn article_page_joins_all_fetches() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/api/articles/kube-probes/",
            json!({"id": 2, "slug": "kube-probes", "title": "Kubernetes Probes",
                   "content": "# Liveness\n## Readiness\n## Readiness",
                   "published_at": "2024-02-01T09:00:00Z",
                   "category": 77, "tags": [1, 2, 99], "author": 5}),
        )
        .await;
        mount_json(
            &server,
            "/api/articles/",
            json!({"results": [
                {"id": 1, "title": "Pods", "published_at": "2024-01-01", "category": 77},
                {"id": 2, "title": "Kubernetes Probes", "published_at": "2024-02-01T09:00:00Z",
                 "category": 77},
                {"id": 3, "title": "Ingress", "published_at": "2024-03-01", "category": 8}
            ]}),
        )
        .await;
        mount_json(
            &server,
            "/api/tags/",
            json!([{"id": 1, "name": "Docker"}, {"id": 2, "name": "Kubernetes"}]),
        )
        .await;
        mount_json(&server, "/api/categories/", json!([{"id": 8, "name": "Networking"}])).await;
        mount_json(
            &server,
            "/api/authors/",
            json!([{"id": 4, "name": "Bo Builds"}, {"id": 5, "name": "Ana Ops"}]),
        )
        .await;
        // The author is joined from the list, never fetched on its own.
        Mock::given(method("GET"))
            .and(path("/api/authors/5/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 5, "name": "x"})))
            .expect(0)
            .mount(&server)
            .await;

        let page = client(&server, None)
            .article_page("kube-probes")
            .await
            .expect("article page");

        assert_eq!(page.category_name, "General");
        assert_eq!(page.tag_names, vec!["Docker", "Kubernetes"]);
        assert_eq!(page.author.map(|a| a.name).as_deref(), Some("Ana Ops"));
        assert_eq!(page.prev.map(|a| a.id), Some(1));
        assert_eq!(page.next.map(|a| a.id), Some(3));
        assert_eq!(
            page.headings.iter().map(|h| h.id.as_str()).collect::<Vec<_>>(),
            vec!["liveness", "readiness", "readiness-2"]
        );
        assert_eq!(page.same_category.len(), 1);
    }

    #[tokio::test]
    async fn article_page_survives_failing_lists() {
        let server = MockServer::start().await;
        mount_json(
            &server,
            "/api/articles/7/",
            json!({"id": 7, "title": "Alone", "published_at": "2024-01-01", "category": 1}),
        )
        .await;

        let page = client(&server, None)
            .article_page("7")
            .await
            .expect("article page");
        assert_eq!(page.category_name, "General");
        assert!(page.recent.is_empty());
        assert_eq!(page.prev, None);
        assert_eq!(page.next, None);
        assert_eq!(page.author, None);
    }

    #[tokio::test]
    async fn impersonation_sends_session_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/super/impersonate/ana/"))
            .and(header("Authorization", "Token admin-token"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"token": "sub", "author": "ana"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let grant = client(&server, Some("admin-token"))
            .impersonate("ana")
            .await
            .expect("grant");
        assert_eq!(grant.token, "sub");

        let denied = client(&server, None).impersonate("ana").await;
        assert!(matches!(denied, Err(ApiError::NotFound) | Err(ApiError::Status(_))));
    }

    #[tokio::test]
    async fn invalid_comment_is_rejected_before_sending() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/articles/3/comments/"))
            .and(body_json(json!({"name": "Ana", "content": "Clear write-up", "rating": 4})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "name": "Ana", "content": "Clear write-up", "rating": 4,
                "created_at": "2024-05-01T10:00:00Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = client(&server, None);
        let rejected = api
            .post_comment(3, NewComment {
                name: "Ana".to_string(),
                content: "Nice".to_string(),
                rating: Some(9),
            })
            .await;
        assert!(matches!(rejected, Err(ApiError::Validation(_))));

        let created = api
            .post_comment(3, NewComment {
                name: " Ana ".to_string(),
                content: "Clear write-up".to_string(),
                rating: Some(4),
            })
            .await
            .expect("comment created");
        assert_eq!(created.rating, Some(4));
    }
}
