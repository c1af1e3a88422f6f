//! Fallback to packaged resources once both filesystem candidates fail.

use crate::common::{HomeFixture, read_all};
use layered_resources::packaged::{EmbeddedResources, SearchPathResources};
use layered_resources::{ResourceOrigin, ResourceResolver, open_resource};
use std::sync::Arc;

static DEFAULTS: &[(&str, &[u8])] = &[
    ("builtin-default.xml", b"<defaults version=\"1\"/>"),
    ("core.properties", b"tracking.enabled=true\n"),
];

#[test]
fn test_embedded_default_served_when_home_missing() {
    let embedded = EmbeddedResources::from_static(DEFAULTS);

    let stream = open_resource("/nonexistent", "builtin-default.xml", &embedded).unwrap();

    assert_eq!(
        stream.origin(),
        &ResourceOrigin::Packaged("builtin-default.xml".to_string())
    );
    assert_eq!(read_all(stream), b"<defaults version=\"1\"/>");
}

#[test]
fn test_home_file_overrides_embedded_default() {
    let fixture = HomeFixture::new();
    fixture.write("core.properties", "tracking.enabled=false\n");

    let resolver = ResourceResolver::new(fixture.home())
        .with_packaged(EmbeddedResources::from_static(DEFAULTS));

    assert_eq!(
        resolver.read_to_string("core.properties").unwrap(),
        "tracking.enabled=false\n"
    );
}

#[test]
fn test_search_path_roots_searched_in_order() {
    let lib = HomeFixture::new();
    let ext = HomeFixture::new();
    lib.write("schema.xml", "from-lib");
    ext.write("schema.xml", "from-ext");
    ext.write("lang/stopwords.txt", "the\n");

    let search = SearchPathResources::new(vec![lib.path().to_path_buf(), ext.path().to_path_buf()]);
    let resolver = ResourceResolver::new("/nonexistent").with_packaged(search);

    assert_eq!(resolver.read_to_string("schema.xml").unwrap(), "from-lib");
    assert_eq!(
        resolver.read_to_string("lang/stopwords.txt").unwrap(),
        "the\n"
    );
}

#[test]
fn test_search_path_then_embedded_chain() {
    let lib = HomeFixture::new();
    lib.write("builtin-default.xml", "<defaults version=\"2\"/>");

    let packaged = (
        SearchPathResources::new(vec![lib.path().to_path_buf()]),
        EmbeddedResources::from_static(DEFAULTS),
    );
    let resolver = ResourceResolver::new("/nonexistent").with_packaged(packaged);

    assert_eq!(
        resolver.read_to_string("builtin-default.xml").unwrap(),
        "<defaults version=\"2\"/>"
    );
    assert_eq!(
        resolver.read_to_string("core.properties").unwrap(),
        "tracking.enabled=true\n"
    );
    assert!(resolver.open("missing.xml").unwrap_err().is_not_found());
}

#[test]
fn test_packaged_lookup_is_literal() {
    let embedded = EmbeddedResources::new().with_resource("conf/schema.xml", "packaged");
    let resolver = ResourceResolver::new("/nonexistent").with_packaged(embedded);

    assert!(resolver.open("conf/schema.xml").is_ok());
    assert!(resolver.open("schema.xml").unwrap_err().is_not_found());
}

#[test]
fn test_search_path_cannot_escape_root() {
    let parent = HomeFixture::new();
    parent.write("secret.txt", "secret");
    let lib = parent.mkdir("lib");

    let resolver = ResourceResolver::new("/nonexistent")
        .with_packaged(SearchPathResources::new(vec![lib]));

    assert!(resolver.open("../secret.txt").unwrap_err().is_not_found());
}

#[test]
fn test_shared_packaged_resources() {
    let shared = Arc::new(EmbeddedResources::from_static(DEFAULTS));
    let first = ResourceResolver::new("/nonexistent").with_packaged(Arc::clone(&shared));
    let second = ResourceResolver::new("").with_packaged(shared);

    assert_eq!(
        first.read_bytes("builtin-default.xml").unwrap(),
        second.read_bytes("builtin-default.xml").unwrap()
    );
}
