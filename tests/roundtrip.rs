//! Build → parse → validate round-trip properties

use jwtsmith::*;
use serde_json::json;

const SECRET: &str = "Hello123$$Abc!!4538";

fn now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

fn full_builder() -> TokenBuilder {
    TokenBuilder::new(AlgorithmId::HS256)
        .secret(SECRET)
        .unwrap()
        .content_type("application/example")
        .header_claim("kid", "key-1")
        .issuer("https://issuer.example.com")
        .subject("user-1234")
        .audience(vec!["https://api.example.com", "https://admin.example.com"])
        .expiration(now() + 3600)
        .unwrap()
        .not_before(now() - 10)
        .issued_at(now())
        .jwt_id("token-1")
        .private_claim("role", "admin")
}

#[test]
fn test_parsed_header_is_custom_claims_plus_alg_and_typ() {
    let builder = full_builder();
    let token = builder.build().unwrap();

    let parsed = ParsedToken::from_string(token.as_str()).unwrap();
    let header = parsed.header();

    assert_eq!(header.algorithm_str(), Some("HS256"));
    assert_eq!(header.token_type(), Some("JWT"));
    assert_eq!(header.content_type(), Some("application/example"));
    assert_eq!(header.get("kid"), Some(&json!("key-1")));
    assert_eq!(header.as_map(), builder.header().as_map());
}

#[test]
fn test_parsed_payload_matches_builder_payload() {
    let builder = full_builder();
    let token = builder.build().unwrap();

    let parsed = ParsedToken::from_string(token.as_str()).unwrap();
    assert_eq!(parsed.claims().as_map(), builder.payload().as_map());

    assert_eq!(parsed.claims().issuer(), Some("https://issuer.example.com"));
    assert_eq!(parsed.claims().subject(), Some("user-1234"));
    assert_eq!(
        parsed.claims().audience().unwrap(),
        Some(Audience::Multiple(vec![
            "https://api.example.com".to_string(),
            "https://admin.example.com".to_string(),
        ]))
    );
    assert_eq!(parsed.claims().jwt_id(), Some("token-1"));
    assert_eq!(parsed.claims().get("role"), Some(&json!("admin")));
}

#[test]
fn test_validated_token_exposes_claims() {
    let token = full_builder().build().unwrap();

    let validated = token.validate().unwrap();
    assert_eq!(validated.claims().subject(), Some("user-1234"));
    assert_eq!(validated.header().token_type(), Some("JWT"));
}

#[test]
fn test_single_audience_roundtrip() {
    let token = TokenBuilder::hs256()
        .secret(SECRET)
        .unwrap()
        .audience("example.com")
        .build()
        .unwrap();

    let parsed = ParsedToken::from_string(token.as_str()).unwrap();
    assert_eq!(
        parsed.claims().audience().unwrap(),
        Some(Audience::Single("example.com".to_string()))
    );
}

#[test]
fn test_build_is_insertion_order_independent() {
    let first = TokenBuilder::hs256()
        .secret(SECRET)
        .unwrap()
        .issuer("issuer")
        .subject("user")
        .private_claim("role", "admin")
        .build()
        .unwrap();

    let second = TokenBuilder::hs256()
        .secret(SECRET)
        .unwrap()
        .private_claim("role", "admin")
        .subject("user")
        .issuer("issuer")
        .build()
        .unwrap();

    assert_eq!(first.as_str(), second.as_str());
}

#[test]
fn test_signature_differs_when_payload_differs() {
    let first = TokenBuilder::hs256()
        .secret(SECRET)
        .unwrap()
        .subject("user-a")
        .build()
        .unwrap();

    let second = TokenBuilder::hs256()
        .secret(SECRET)
        .unwrap()
        .subject("user-b")
        .build()
        .unwrap();

    let first_sig = first.as_str().rsplit('.').next().unwrap();
    let second_sig = second.as_str().rsplit('.').next().unwrap();
    assert_ne!(first_sig, second_sig);
}

#[test]
fn test_signature_differs_when_secret_differs() {
    let first = TokenBuilder::hs256()
        .secret(SECRET)
        .unwrap()
        .subject("user")
        .build()
        .unwrap();

    let second = TokenBuilder::hs256()
        .secret("Other1!Secret99Xx")
        .unwrap()
        .subject("user")
        .build()
        .unwrap();

    let first_sig = first.as_str().rsplit('.').next().unwrap();
    let second_sig = second.as_str().rsplit('.').next().unwrap();
    assert_ne!(first_sig, second_sig);
}

#[test]
fn test_hs384_and_hs512_roundtrip() {
    for algorithm in [AlgorithmId::HS384, AlgorithmId::HS512] {
        let token = TokenBuilder::new(algorithm)
            .secret(SECRET)
            .unwrap()
            .subject("user")
            .expiration(now() + 60)
            .unwrap()
            .build()
            .unwrap();

        let parsed = ParsedToken::from_string(token.as_str()).unwrap();
        assert_eq!(parsed.header().algorithm_str(), Some(algorithm.name()));
        assert_eq!(parsed.algorithm().unwrap(), algorithm);

        assert!(token.validate().is_ok(), "{algorithm} validation failed");
    }
}

#[test]
fn test_reset_then_rebuild() {
    let builder = full_builder().reset();

    let token = builder
        .secret(SECRET)
        .unwrap()
        .subject("fresh")
        .build()
        .unwrap();

    let parsed = ParsedToken::from_string(token.as_str()).unwrap();
    assert_eq!(parsed.claims().subject(), Some("fresh"));
    assert_eq!(parsed.claims().as_map().len(), 1);
    assert_eq!(parsed.header().as_map().len(), 2); // alg and typ only
}
