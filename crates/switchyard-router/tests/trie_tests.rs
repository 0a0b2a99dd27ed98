//! Registration and lookup behavior of the route trie

use http::{Method, StatusCode};
use switchyard_router::{Error, Match, Resolution, Trie};

fn is_in_matches(route: &str, matches: &[Match<'_, &str>]) -> bool {
    matches.iter().any(|m| *m.route == route)
}

#[test]
fn test_static_round_trip() {
    let patterns = ["/", "/r", "/r/", "/users/list", "/users/lookup", "/a.b"];

    let mut trie = Trie::new();
    for pattern in patterns {
        trie.add_route("GET", pattern, pattern).unwrap();
    }
    trie.compress();

    for pattern in patterns {
        let matches = trie.find_routes("GET", pattern);
        assert_eq!(matches.len(), 1, "{pattern}");
        assert_eq!(*matches[0].route, pattern);
        assert!(matches[0].params.is_empty());
    }
}

#[test]
fn test_find_route() {
    let mut trie = Trie::new();
    trie.add_route("GET", "/", "root").unwrap();
    trie.add_route("GET", "/r/:id", "resource").unwrap();
    trie.add_route("GET", "/r/:id/property", "property").unwrap();
    trie.add_route("GET", "/r/:id/property.*format", "property_format").unwrap();
    trie.add_route("GET", "/user/#username/property", "user_property").unwrap();
    trie.compress();

    let matches = trie.find_routes("GET", "/");
    assert_eq!(matches.len(), 1);
    assert!(is_in_matches("root", &matches));

    assert!(trie.find_routes("GET", "/notfound").is_empty());

    let matches = trie.find_routes("GET", "/r/42");
    assert_eq!(matches.len(), 1);
    assert!(is_in_matches("resource", &matches));
    assert_eq!(matches[0].param("id"), Some("42"));

    let matches = trie.find_routes("GET", "/r/1/property");
    assert_eq!(matches.len(), 1);
    assert!(is_in_matches("property", &matches));
    assert_eq!(matches[0].param("id"), Some("1"));

    let matches = trie.find_routes("GET", "/r/1/property.json");
    assert_eq!(matches.len(), 1);
    assert!(is_in_matches("property_format", &matches));
    assert_eq!(matches[0].param("id"), Some("1"));
    assert_eq!(matches[0].param("format"), Some("json"));

    let matches = trie.find_routes("GET", "/user/antoine.imbert/property");
    assert_eq!(matches.len(), 1);
    assert!(is_in_matches("user_property", &matches));
    assert_eq!(matches[0].param("username"), Some("antoine.imbert"));
}

#[test]
fn test_named_placeholder_stops_at_dot() {
    let mut trie = Trie::new();
    trie.add_route("GET", "/r/:id", "resource").unwrap();
    trie.compress();

    assert!(trie.find_routes("GET", "/r/1.json").is_empty());
}

#[test]
fn test_find_route_multiple_matches() {
    let mut trie = Trie::new();
    trie.add_route("GET", "/r/1", "resource1").unwrap();
    trie.add_route("GET", "/r/2", "resource2").unwrap();
    trie.add_route("GET", "/r/:id", "resource_generic").unwrap();
    trie.add_route("GET", "/s/*rest", "special_all").unwrap();
    trie.add_route("GET", "/s/:param", "special_generic").unwrap();
    trie.add_route("GET", "/s/#param", "special_relaxed").unwrap();
    trie.add_route("GET", "/", "root").unwrap();
    trie.compress();

    let matches = trie.find_routes("GET", "/r/1");
    assert_eq!(matches.len(), 2);
    assert!(is_in_matches("resource_generic", &matches));
    assert!(is_in_matches("resource1", &matches));
    let generic = matches.iter().find(|m| *m.route == "resource_generic").unwrap();
    assert_eq!(generic.param("id"), Some("1"));
    let literal = matches.iter().find(|m| *m.route == "resource1").unwrap();
    assert!(literal.params.is_empty());

    let matches = trie.find_routes("GET", "/r/2");
    assert_eq!(matches.len(), 2);
    assert!(is_in_matches("resource2", &matches));
    assert!(is_in_matches("resource_generic", &matches));

    let matches = trie.find_routes("GET", "/s/1");
    assert_eq!(matches.len(), 3);
    assert!(is_in_matches("special_all", &matches));
    assert!(is_in_matches("special_generic", &matches));
    assert!(is_in_matches("special_relaxed", &matches));
    for m in &matches {
        assert_eq!(m.params.len(), 1);
    }
}

#[test]
fn test_consistent_placeholder_name() {
    let mut trie = Trie::new();

    trie.add_route("GET", "/r/:id", "oneph").unwrap();
    let err = trie.add_route("GET", "/r/:rid/other", "twoph").unwrap_err();
    assert!(matches!(err, Error::InconsistentPlaceholderName { .. }));

    trie.add_route("GET", "/r/#id", "oneph").unwrap();
    let err = trie.add_route("GET", "/r/#rid/other", "twoph").unwrap_err();
    assert!(matches!(err, Error::InconsistentPlaceholderName { .. }));

    trie.add_route("GET", "/r/*id", "oneph").unwrap();
    let err = trie.add_route("GET", "/r/*rid", "twoph").unwrap_err();
    assert!(matches!(err, Error::InconsistentPlaceholderName { .. }));
}

#[test]
fn test_duplicate_name() {
    let mut trie = Trie::new();

    for pattern in ["/r/:id/o/:id", "/r/:id/o/*id", "/r/:id/o/#id"] {
        let err = trie.add_route("GET", pattern, "two").unwrap_err();
        assert!(
            matches!(err, Error::DuplicatePlaceholderName { .. }),
            "{pattern}: {err}"
        );
    }
}

#[test]
fn test_partial_insert_leaves_trie_usable() {
    let mut trie = Trie::new();
    assert!(trie.add_route("GET", "/r/:id/o/:id", "bad").is_err());
    trie.add_route("GET", "/r/:id", "good").unwrap();
    trie.compress();

    // nodes created by the failed insert never match
    assert!(trie.find_routes("GET", "/r/1/o/").is_empty());
    assert_eq!(trie.find_routes("GET", "/r/1").len(), 1);
}

#[test]
fn test_dupe_insert() {
    let mut trie = Trie::new();
    trie.add_route("GET", "/", "1").unwrap();

    let err = trie.add_route("GET", "/", "2").unwrap_err();
    assert!(matches!(err, Error::DuplicateRoute { .. }));

    trie.compress();
    let matches = trie.find_routes("GET", "/");
    assert_eq!(matches.len(), 1);
    assert_eq!(*matches[0].route, "1");
}

#[test]
fn test_path_matched_flag() {
    let mut trie = Trie::new();
    trie.add_route("GET", "/r/1", "get").unwrap();
    trie.compress();

    let (matches, path_matched) = trie.find_routes_and_path_matched("POST", "/r/1");
    assert!(matches.is_empty());
    assert!(path_matched);

    let (matches, path_matched) = trie.find_routes_and_path_matched("POST", "/nowhere");
    assert!(matches.is_empty());
    assert!(!path_matched);

    let (matches, path_matched) = trie.find_routes_and_path_matched(Method::GET, "/r/1");
    assert_eq!(matches.len(), 1);
    assert!(path_matched);

    assert_eq!(trie.resolve("POST", "/r/1").status_code(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(trie.resolve("POST", "/nowhere").status_code(), StatusCode::NOT_FOUND);
}

#[test]
fn test_find_routes_for_path() {
    let mut trie = Trie::new();
    trie.add_route("GET", "/r/:id", "get").unwrap();
    trie.add_route("PUT", "/r/:id", "put").unwrap();
    trie.add_route("GET", "/r/1", "get_one").unwrap();
    trie.compress();

    let matches = trie.find_routes_for_path("/r/1");
    assert_eq!(matches.len(), 3);
    let put = matches.iter().find(|m| m.method == "PUT").unwrap();
    assert_eq!(*put.route, "put");
    assert_eq!(put.param("id"), Some("1"));

    assert_eq!(trie.allowed_methods("/r/1"), vec!["GET", "PUT"]);
    assert!(trie.allowed_methods("/x").is_empty());
}

#[test]
fn test_resolution_lists_allowed_methods() {
    let mut trie = Trie::new();
    trie.add_route("GET", "/files/*path", "read").unwrap();
    trie.add_route("DELETE", "/files/*path", "remove").unwrap();
    trie.compress();

    match trie.resolve("POST", "/files/a/b.txt") {
        Resolution::MethodNotAllowed { allowed } => assert_eq!(allowed, vec!["DELETE", "GET"]),
        other => panic!("unexpected resolution: {other:?}"),
    }
}

#[test]
fn test_empty_placeholder_values() {
    let mut trie = Trie::new();
    trie.add_route("GET", "/n/:id/x", "named").unwrap();
    trie.add_route("GET", "/l/#id/x", "relaxed").unwrap();
    trie.add_route("GET", "/s/*rest", "splat").unwrap();
    trie.compress();

    assert!(trie.find_routes("GET", "/n//x").is_empty());
    assert!(trie.find_routes("GET", "/l//x").is_empty());

    let matches = trie.find_routes("GET", "/s/");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].param("rest"), Some(""));
}

#[test]
fn test_invalid_splat_name() {
    let mut trie: Trie<()> = Trie::new();
    let err = trie.add_route("GET", "/files/*dir/name", ()).unwrap_err();
    assert!(matches!(err, Error::InvalidPlaceholderName { .. }));
    assert!(trie.is_empty());
}

#[test]
fn test_non_ascii_paths() {
    let mut trie = Trie::new();
    trie.add_route("GET", "/café/menü", "menu").unwrap();
    trie.add_route("GET", "/café/:item", "item").unwrap();
    trie.compress();

    assert_eq!(trie.find_routes("GET", "/café/menü").len(), 2);
    let matches = trie.find_routes("GET", "/café/crème.html");
    assert_eq!(matches.len(), 0);
    let matches = trie.find_routes("GET", "/café/crème");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].param("item"), Some("crème"));
}

#[test]
fn test_lookups_before_compression() {
    let mut trie = Trie::new();
    trie.add_route("GET", "/api/users/:id", "user").unwrap();
    trie.add_route("GET", "/api/teams", "teams").unwrap();

    assert_eq!(trie.find_routes("GET", "/api/users/9").len(), 1);
    assert_eq!(trie.find_routes("GET", "/api/teams").len(), 1);

    trie.compress();

    assert_eq!(trie.find_routes("GET", "/api/users/9").len(), 1);
    assert_eq!(trie.find_routes("GET", "/api/teams").len(), 1);
}

#[test]
fn test_concurrent_lookups() {
    let mut trie = Trie::new();
    trie.add_route("GET", "/r/:id", 7_u32).unwrap();
    trie.compress();

    std::thread::scope(|scope| {
        for i in 0..4 {
            let trie = &trie;
            scope.spawn(move || {
                let path = format!("/r/{i}");
                let matches = trie.find_routes("GET", &path);
                assert_eq!(matches.len(), 1);
                assert_eq!(*matches[0].route, 7);
                assert_eq!(matches[0].param("id"), Some(i.to_string().as_str()));
            });
        }
    });
}
