use skillcheck::frontmatter::{self, FrontmatterError};

// ---------------------------------------------------------------------------
// Extraction failures
// ---------------------------------------------------------------------------

#[test]
fn content_without_delimiter_is_missing() {
    let err = frontmatter::parse("# Just markdown\n").unwrap_err();
    assert!(matches!(err, FrontmatterError::Missing));
}

#[test]
fn empty_content_is_missing() {
    let err = frontmatter::parse("").unwrap_err();
    assert!(matches!(err, FrontmatterError::Missing));
}

#[test]
fn leading_whitespace_before_delimiter_is_missing() {
    // The delimiter must be the very start of the file.
    let err = frontmatter::parse("\n---\nname: x\n---\n").unwrap_err();
    assert!(matches!(err, FrontmatterError::Missing));
}

#[test]
fn unclosed_frontmatter_is_unterminated() {
    let err = frontmatter::parse("---\nname: my-skill\n").unwrap_err();
    assert!(matches!(err, FrontmatterError::Unterminated));
}

#[test]
fn bare_delimiter_only_is_unterminated() {
    let err = frontmatter::parse("---\n").unwrap_err();
    assert!(matches!(err, FrontmatterError::Unterminated));
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

#[test]
fn valid_frontmatter_decodes_fields() {
    let mapping =
        frontmatter::parse("---\nname: my-skill\ndescription: Does things\n---\n# Body\n")
            .unwrap();
    assert_eq!(
        mapping.get("name").and_then(|v| v.as_str()),
        Some("my-skill")
    );
    assert_eq!(
        mapping.get("description").and_then(|v| v.as_str()),
        Some("Does things")
    );
}

#[test]
fn empty_block_decodes_to_empty_mapping() {
    let mapping = frontmatter::parse("---\n---\n# Body\n").unwrap();
    assert!(mapping.is_empty());
}

#[test]
fn whitespace_only_block_decodes_to_empty_mapping() {
    let mapping = frontmatter::parse("---\n   \n\n---\n").unwrap();
    assert!(mapping.is_empty());
}

#[test]
fn invalid_yaml_preserves_library_message() {
    let err = frontmatter::parse("---\nname: [unclosed\n---\n").unwrap_err();
    match err {
        FrontmatterError::InvalidYaml(_) => {
            assert!(err.to_string().starts_with("invalid YAML syntax:"));
        }
        other => panic!("expected InvalidYaml, got {other:?}"),
    }
}

#[test]
fn scalar_block_is_not_a_mapping() {
    let err = frontmatter::parse("---\njust a string\n---\n").unwrap_err();
    assert!(matches!(err, FrontmatterError::NotAMapping));
}

#[test]
fn sequence_block_is_not_a_mapping() {
    let err = frontmatter::parse("---\n- a\n- b\n---\n").unwrap_err();
    assert!(matches!(err, FrontmatterError::NotAMapping));
}

// ---------------------------------------------------------------------------
// Body handling
// ---------------------------------------------------------------------------

#[test]
fn horizontal_rules_in_body_do_not_affect_parsing() {
    // Only the first two delimiters bound the frontmatter; later --- lines
    // belong to the free-form body and are not validated.
    let content = "---\nname: my-skill\n---\n# Section\n\n---\n\nMore text\n---\n";
    let mapping = frontmatter::parse(content).unwrap();
    assert_eq!(
        mapping.get("name").and_then(|v| v.as_str()),
        Some("my-skill")
    );
}

#[test]
fn extra_fields_are_preserved_in_mapping() {
    let mapping =
        frontmatter::parse("---\nname: x\ndescription: y\nlicense: MIT\n---\n").unwrap();
    assert_eq!(
        mapping.get("license").and_then(|v| v.as_str()),
        Some("MIT")
    );
}
