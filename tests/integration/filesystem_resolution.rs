//! Resolution of home-relative and direct candidates on the real filesystem.

use crate::common::{HomeFixture, read_all};
use layered_resources::packaged::EmbeddedResources;
use layered_resources::{ResolveError, ResourceOrigin, ResourceResolver, open_resource};

#[test]
fn test_home_with_trailing_separator_reads_exact_bytes() {
    let fixture = HomeFixture::new();
    let bytes: Vec<u8> = (0u8..=255).collect();
    let expected_path = fixture.write("schema.xml", &bytes);
    let home = format!("{}/", fixture.home());

    let stream = open_resource(&home, "schema.xml", EmbeddedResources::new()).unwrap();

    assert_eq!(stream.origin(), &ResourceOrigin::HomeRelative(expected_path));
    assert_eq!(read_all(stream), bytes);
}

#[test]
fn test_home_without_trailing_separator_joins_identically() {
    let fixture = HomeFixture::new();
    fixture.write("schema.xml", "<schema name=\"core\"/>");

    let with_sep = ResourceResolver::new(format!("{}/", fixture.home()));
    let without_sep = ResourceResolver::new(fixture.home());

    let a = with_sep.open("schema.xml").unwrap();
    let b = without_sep.open("schema.xml").unwrap();
    assert_eq!(a.origin(), b.origin());
    assert_eq!(read_all(a), read_all(b));
}

#[test]
fn test_nested_resource_under_home() {
    let fixture = HomeFixture::new();
    fixture.write("lang/stopwords_en.txt", "a\nan\nthe\n");

    let resolver = ResourceResolver::new(fixture.home());
    assert_eq!(
        resolver.read_to_string("lang/stopwords_en.txt").unwrap(),
        "a\nan\nthe\n"
    );
}

#[test]
fn test_absolute_resource_outside_home() {
    let home = HomeFixture::new();
    let elsewhere = HomeFixture::new();
    let absolute = elsewhere.write("shared/config.xml", "<config/>");

    let resolver = ResourceResolver::new(home.home());
    let stream = resolver.open(&absolute.display().to_string()).unwrap();

    assert_eq!(stream.origin(), &ResourceOrigin::Direct(absolute));
    assert_eq!(read_all(stream), b"<config/>");
}

#[test]
fn test_absolute_resource_when_home_missing() {
    let elsewhere = HomeFixture::new();
    let absolute = elsewhere.write("schema.xml", "direct");

    let resolver = ResourceResolver::new("/nonexistent");
    let content = resolver
        .read_to_string(&absolute.display().to_string())
        .unwrap();
    assert_eq!(content, "direct");
}

#[test]
fn test_directory_named_like_resource_is_not_opened() {
    let fixture = HomeFixture::new();
    fixture.mkdir("schema.xml");

    let resolver = ResourceResolver::new(fixture.home()).with_packaged(
        EmbeddedResources::new().with_resource("schema.xml", "packaged"),
    );
    let stream = resolver.open("schema.xml").unwrap();

    assert!(stream.origin().is_packaged());
    assert_eq!(read_all(stream), b"packaged");
}

#[test]
fn test_missing_everywhere_reports_resource_and_home() {
    let resolver = ResourceResolver::new("/nonexistent");

    let err = resolver.open("totally-missing.xml").unwrap_err();
    assert!(err.is_not_found());

    let message = err.to_string();
    assert!(message.contains("totally-missing.xml"));
    assert!(message.contains("/nonexistent"));
    assert!(message.contains("cwd="));
}

#[test]
fn test_empty_resource_is_invalid() {
    let fixture = HomeFixture::new();
    let resolver = ResourceResolver::new(fixture.home());

    match resolver.open("") {
        Err(ResolveError::InvalidResource { .. }) => {}
        other => panic!("Expected InvalidResource, got {:?}", other),
    }
}
