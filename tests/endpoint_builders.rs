use std::collections::HashMap;

use declarest::{ApiModel, Endpoint, Method, Settings};
use serde::Deserialize;

#[derive(Deserialize)]
struct Article {
    id: i64,
    #[allow(dead_code)]
    title: String,
}

impl ApiModel for Article {
    fn id(&self) -> i64 {
        self.id
    }
}

struct ArticleEndpoint {
    article_id: i64,
}

impl Endpoint for ArticleEndpoint {
    type Model = Article;

    fn path_segments(&self) -> Vec<String> {
        vec!["articles".to_string(), self.article_id.to_string()]
    }
}

struct SearchEndpoint {
    terms: Vec<(String, String)>,
}

impl Endpoint for SearchEndpoint {
    type Model = Article;

    fn path_segments(&self) -> Vec<String> {
        vec!["search".to_string()]
    }

    fn query_items(&self) -> Vec<(String, String)> {
        self.terms.clone()
    }
}

fn settings_with_base(base: &str) -> Settings {
    let settings = Settings::new();
    settings.configure(Some(base), None, None);
    settings
}

#[test]
fn build_url_appends_segments_in_order() {
    let settings = settings_with_base("https://api.example.com/v2");
    let url = ArticleEndpoint { article_id: 7 }
        .build_url(&settings)
        .unwrap();
    assert_eq!(url.path(), "/v2/articles/7");
    assert_eq!(url.scheme(), "https");
    assert_eq!(url.host_str(), Some("api.example.com"));
}

#[test]
fn build_url_keeps_port_and_fragment() {
    let settings = settings_with_base("https://api.example.com:8443/v2#section");
    let url = ArticleEndpoint { article_id: 7 }
        .build_url(&settings)
        .unwrap();
    assert_eq!(url.port(), Some(8443));
    assert_eq!(url.fragment(), Some("section"));
    assert_eq!(url.path(), "/v2/articles/7");
}

#[test]
fn build_url_handles_trailing_slash_base() {
    let settings = settings_with_base("https://api.example.com/v2/");
    let url = ArticleEndpoint { article_id: 7 }
        .build_url(&settings)
        .unwrap();
    assert_eq!(url.path(), "/v2/articles/7");
}

#[test]
fn build_url_treats_segments_as_opaque() {
    struct OddEndpoint;
    impl Endpoint for OddEndpoint {
        type Model = Article;
        fn path_segments(&self) -> Vec<String> {
            vec!["reports".to_string(), "2024/02".to_string()]
        }
    }

    let settings = settings_with_base("https://api.example.com");
    let url = OddEndpoint.build_url(&settings).unwrap();
    assert_eq!(url.path(), "/reports/2024%2F02");
}

#[test]
fn build_url_preserves_query_order() {
    let settings = settings_with_base("https://api.example.com");
    let endpoint = SearchEndpoint {
        terms: vec![
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "3".to_string()),
        ],
    };
    let url = endpoint.build_url(&settings).unwrap();
    assert_eq!(url.query(), Some("b=2&a=1&b=3"));
}

#[test]
fn build_url_replaces_base_query() {
    let settings = settings_with_base("https://api.example.com/v2?stale=1");
    let endpoint = SearchEndpoint {
        terms: vec![("page".to_string(), "1".to_string())],
    };
    let url = endpoint.build_url(&settings).unwrap();
    assert_eq!(url.query(), Some("page=1"));
}

#[test]
fn build_url_without_base_is_none() {
    let settings = Settings::new();
    assert!(ArticleEndpoint { article_id: 7 }.build_url(&settings).is_none());
    assert!(ArticleEndpoint { article_id: 7 }
        .build_request(&settings)
        .is_none());
}

#[test]
fn build_request_defaults_to_get() {
    let settings = settings_with_base("https://api.example.com");
    let request = ArticleEndpoint { article_id: 7 }
        .build_request(&settings)
        .unwrap();
    assert_eq!(request.method, Method::Get);
    assert!(request.headers.is_empty());
}

#[test]
fn build_request_sets_lowercase_bearer_scheme() {
    let settings = settings_with_base("https://api.example.com");
    settings.set_bearer_token("sekrit");
    let request = ArticleEndpoint { article_id: 7 }
        .build_request(&settings)
        .unwrap();
    assert_eq!(
        request.headers,
        vec![("Authorization".to_string(), "bearer sekrit".to_string())]
    );
}

#[test]
fn build_request_applies_settings_headers() {
    let settings = settings_with_base("https://api.example.com");
    settings.set_headers(HashMap::from([(
        "X-Client-Version".to_string(),
        "1.4".to_string(),
    )]));
    let request = ArticleEndpoint { article_id: 7 }
        .build_request(&settings)
        .unwrap();
    assert_eq!(
        request.headers,
        vec![("X-Client-Version".to_string(), "1.4".to_string())]
    );
}

#[test]
fn endpoint_headers_override_authorization() {
    struct PreSignedEndpoint;
    impl Endpoint for PreSignedEndpoint {
        type Model = Article;
        fn path_segments(&self) -> Vec<String> {
            vec!["articles".to_string()]
        }
        fn headers(&self, _settings: &Settings) -> Option<HashMap<String, String>> {
            Some(HashMap::from([(
                "authorization".to_string(),
                "bearer pre-signed".to_string(),
            )]))
        }
    }

    let settings = settings_with_base("https://api.example.com");
    settings.set_bearer_token("sekrit");
    let request = PreSignedEndpoint.build_request(&settings).unwrap();
    assert_eq!(request.headers.len(), 1);
    assert_eq!(request.headers[0].1, "bearer pre-signed");
}

#[test]
fn endpoint_can_declare_other_methods() {
    struct DeleteArticle {
        article_id: i64,
    }
    impl Endpoint for DeleteArticle {
        type Model = Article;
        fn path_segments(&self) -> Vec<String> {
            vec!["articles".to_string(), self.article_id.to_string()]
        }
        fn method(&self) -> Method {
            Method::Delete
        }
    }

    let settings = settings_with_base("https://api.example.com");
    let request = DeleteArticle { article_id: 7 }
        .build_request(&settings)
        .unwrap();
    assert_eq!(request.method, Method::Delete);
    assert_eq!(request.method.as_str(), "DELETE");
}
