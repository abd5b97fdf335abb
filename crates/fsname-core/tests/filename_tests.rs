/// `FileName` value-object tests: construction, validation, conversions.
use fsname_core::{FileName, RecognitionError};

#[test]
fn from_text_encodes() {
    let name = FileName::from_text("star*pipe|bslash\\.slash/colon:");
    assert_eq!(
        name.as_str(),
        "star(STAR)pipe(PIPE)bslash(BSLASH).slash(SLASH)colon(COLON)"
    );
}

#[test]
fn to_text_decodes() {
    let name = FileName::parse("star(STAR)pipe(PIPE)bslash(BSLASH).slash(SLASH)colon(COLON)")
        .unwrap();
    assert_eq!(name.to_text(), "star*pipe|bslash\\.slash/colon:");
}

#[test]
fn plain_name_is_its_own_text() {
    let name = FileName::parse("simple.String").unwrap();
    assert_eq!(name.as_str(), "simple.String");
    assert_eq!(name.to_text(), "simple.String");
}

#[test]
fn parse_rejects_forbidden_character() {
    let err = FileName::parse("a*b").unwrap_err();
    assert_eq!(err, RecognitionError::ForbiddenCharacter { ch: '*', offset: 1 });
}

#[test]
fn parse_rejects_newline() {
    let err = FileName::parse("line\nbreak").unwrap_err();
    assert_eq!(err, RecognitionError::ForbiddenCharacter { ch: '\n', offset: 4 });
}

#[test]
fn parse_reports_byte_offset() {
    let err = FileName::parse("\u{00e9}/").unwrap_err();
    assert_eq!(err, RecognitionError::ForbiddenCharacter { ch: '/', offset: 2 });
}

#[test]
fn parse_accepts_backslash_newline_token() {
    // The single backslash encodes a newline and is part of the legal alphabet.
    let name = FileName::parse("a\\b").unwrap();
    assert_eq!(name.to_text(), "a\nb");
}

#[test]
fn error_message_names_character_and_offset() {
    let err = FileName::parse("ab:c").unwrap_err();
    assert_eq!(err.to_string(), "forbidden character ':' at byte offset 2");
}

#[test]
fn from_str_and_try_from() {
    let a: FileName = "x(STAR)".parse().unwrap();
    let b = FileName::try_from("x(STAR)").unwrap();
    let c = FileName::try_from(String::from("x(STAR)")).unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert!("x*".parse::<FileName>().is_err());
}

#[test]
fn display_and_into_string() {
    let name = FileName::from_text("a?b");
    assert_eq!(name.to_string(), "a(QUESTION)b");
    assert_eq!(name.as_ref(), "a(QUESTION)b");
    let s: String = name.clone().into();
    assert_eq!(s, name.into_string());
}

#[test]
fn serde_roundtrip() {
    let name = FileName::from_text("report: Q1/Q2");
    let json = serde_json::to_string(&name).unwrap();
    assert_eq!(json, r#""report(COLON) Q1(SLASH)Q2""#);
    let back: FileName = serde_json::from_str(&json).unwrap();
    assert_eq!(back, name);
}

#[test]
fn serde_rejects_illegal_name() {
    let result: Result<FileName, _> = serde_json::from_str(r#""bad|name""#);
    assert!(result.is_err());
}

#[test]
fn encoded_newline_name_parses() {
    let encoded = FileName::from_text("folder\n\\subfolder").into_string();
    assert_eq!(encoded, "folder\\(BSLASH)subfolder");
    let name = FileName::parse(encoded).unwrap();
    assert_eq!(name.to_text(), "folder\n\\subfolder");
}
