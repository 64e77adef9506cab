use pathmapper_core::location::{classify, file_url_to_path, is_absolute_local_path, is_data_uri, is_url, Location};

#[test]
fn network_and_pseudo_schemes_are_urls() {
    assert!(is_url("http://localhost:8080/app.js"));
    assert!(is_url("https://example.com/app.js"));
    assert!(is_url("file:///project/app.js"));
    assert!(is_url("webpack:///src/app.js"));
    assert!(is_url("meteor://💻app/main.js"));
    assert!(is_url("eval://123"));
    assert!(!is_url("/project/app.js"));
    assert!(!is_url("c:\\project\\app.js"));
    assert!(!is_url("app.js"));
}

#[test]
fn absolute_local_paths() {
    assert!(is_absolute_local_path("/project/app.js"));
    assert!(is_absolute_local_path("C:\\project\\app.js"));
    assert!(is_absolute_local_path("c:/project/app.js"));
    assert!(!is_absolute_local_path("project/app.js"));
    assert!(!is_absolute_local_path("../app.js"));
    assert!(!is_absolute_local_path("http://localhost/app.js"));
}

#[test]
fn url_parts() {
    let loc = classify("http://localhost:8080/code/script.js");
    assert_eq!(
        loc,
        Location::Url {
            scheme: "http",
            host: "localhost:8080",
            path: Some("/code/script.js"),
        }
    );
    assert_eq!(loc.origin().as_deref(), Some("http://localhost:8080"));
}

#[test]
fn pseudo_url_without_path() {
    let loc = classify("eval://123");
    assert!(loc.is_url());
    assert_eq!(loc.url_path(), None);
    assert_eq!(loc.origin().as_deref(), Some("eval://123"));
}

#[test]
fn local_parts() {
    assert_eq!(
        classify("C:\\project\\app.js"),
        Location::Local {
            drive: Some('C'),
            path: "C:\\project\\app.js",
            absolute: true,
        }
    );
    assert_eq!(
        classify("dist/app.js"),
        Location::Local {
            drive: None,
            path: "dist/app.js",
            absolute: false,
        }
    );
    assert!(classify("/app.js").is_local());
}

#[test]
fn data_uris() {
    assert!(is_data_uri("data:application/json;base64,eyJ2ZXJzaW9uIjozfQ=="));
    assert!(!is_data_uri("app.js.map"));
}

#[test]
fn file_urls_to_paths() {
    assert_eq!(file_url_to_path("file:///project/src").as_deref(), Some("/project/src"));
    assert_eq!(file_url_to_path("file:////project/src").as_deref(), Some("/project/src"));
    assert_eq!(file_url_to_path("file:///C:/project/src").as_deref(), Some("C:/project/src"));
    assert_eq!(file_url_to_path("file:///c:\\project").as_deref(), Some("c:\\project"));
    assert_eq!(file_url_to_path("/project/src"), None);
}
