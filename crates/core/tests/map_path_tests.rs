use pathmapper_core::resolve_map_path;

#[test]
fn absolute_urls_are_kept() {
    assert_eq!(
        resolve_map_path("/project/app.js", "http://localhost/maps/app.js.map"),
        "http://localhost/maps/app.js.map"
    );
    assert_eq!(
        resolve_map_path("http://localhost/app.js", "https://cdn.example.com/app.js.map"),
        "https://cdn.example.com/app.js.map"
    );
    assert_eq!(
        resolve_map_path("http://localhost/app.js", "file:///project/app.js.map"),
        "file:///project/app.js.map"
    );
}

#[test]
fn drive_letter_paths_are_kept() {
    assert_eq!(
        resolve_map_path("http://localhost/app.js", "c:\\project\\app.js.map"),
        "c:\\project\\app.js.map"
    );
}

#[test]
fn data_uris_are_kept() {
    let inline = "data:application/json;base64,eyJ2ZXJzaW9uIjozfQ==";
    assert_eq!(resolve_map_path("http://localhost/app.js", inline), inline);
}

#[test]
fn rooted_field_takes_the_script_origin() {
    assert_eq!(
        resolve_map_path("http://localhost:8080/project/app.js", "/maps/app.js.map"),
        "http://localhost:8080/maps/app.js.map"
    );
}

#[test]
fn backslash_field_for_served_script_uses_url_slashes() {
    assert_eq!(resolve_map_path("http://h/a/b.js", "\\maps\\x.map"), "http://h/maps/x.map");
    assert_eq!(resolve_map_path("http://h/a/b.js", ".\\maps\\x.map"), "http://h/a/maps/x.map");
}

#[test]
fn rooted_field_for_local_script_is_kept() {
    assert_eq!(resolve_map_path("/project/app.js", "/maps/app.js.map"), "/maps/app.js.map");
}

#[test]
fn relative_field_next_to_local_script() {
    assert_eq!(resolve_map_path("/project/app.js", "app.js.map"), "/project/app.js.map");
    assert_eq!(resolve_map_path("/project/app.js", "./app.js.map"), "/project/app.js.map");
    assert_eq!(resolve_map_path("/project/dist/app.js", "../maps/app.js.map"), "/project/maps/app.js.map");
}

#[test]
fn relative_field_next_to_windows_script() {
    assert_eq!(
        resolve_map_path("c:\\project\\app.js", "app.js.map"),
        "c:\\project\\app.js.map"
    );
}

#[test]
fn relative_field_next_to_served_script() {
    assert_eq!(
        resolve_map_path("http://localhost:8080/project/app.js", "app.js.map"),
        "http://localhost:8080/project/app.js.map"
    );
    assert_eq!(
        resolve_map_path("http://localhost:8080/project/app.js", "./app.js.map"),
        "http://localhost:8080/project/app.js.map"
    );
    assert_eq!(
        resolve_map_path("http://localhost:8080/app.js?v=2", "app.js.map"),
        "http://localhost:8080/app.js.map"
    );
}

#[test]
fn relative_field_for_pseudo_url_script() {
    assert_eq!(resolve_map_path("eval://123", "app.js.map"), "eval://123/app.js.map");
}
