use super::stub_ledger::{StubLedger, TX_HASH};
use certification::domain::codec::{encode_certification_id, to_hex};
use certification::infrastructure::ledger::LedgerError;
use certification::{CertificateResolver, CertificateRoute, CodecError, ResolveError};

fn live_route(id: &str, tx_hash: &str) -> CertificateRoute {
    CertificateRoute::Live {
        id: id.to_string(),
        tx_hash: tx_hash.to_string(),
    }
}

#[tokio::test]
async fn test_sample_mode_decodes_names_without_ledger() {
    let ledger = StubLedger::new("", "", 0);
    let resolver = CertificateResolver::new(Box::new(ledger.clone()));

    let route = CertificateRoute::Sample {
        bride: "4a6f686e".to_string(),
        groom: "4a616e65".to_string(),
    };
    let record = resolver.resolve(&route).await.unwrap();

    assert_eq!(record.bride_name, "John");
    assert_eq!(record.groom_name, "Jane");
    assert_eq!(record.certificate_id, "0x00000");
    assert!(ledger.calls().is_empty());
}

#[tokio::test]
async fn test_live_mode_resolves_full_record() {
    let ledger = StubLedger::new(&to_hex("John"), &to_hex("Jane"), 1_700_000_000);
    let resolver = CertificateResolver::new(Box::new(ledger.clone()));
    let encoded = encode_certification_id(42);

    let record = resolver.resolve(&live_route(&encoded, TX_HASH)).await.unwrap();

    assert_eq!(record.bride_name, "John");
    assert_eq!(record.groom_name, "Jane");
    assert_eq!(record.certificate_id, encoded);
    assert_eq!(record.transaction_hash, TX_HASH);
    assert_eq!(record.issued_date, "11/14/2023");
}

#[tokio::test]
async fn test_live_mode_calls_are_sequential() {
    let ledger = StubLedger::new(&to_hex("John"), &to_hex("Jane"), 1_700_000_000);
    let resolver = CertificateResolver::new(Box::new(ledger.clone()));

    resolver
        .resolve_live(&encode_certification_id(42), TX_HASH)
        .await
        .unwrap();

    assert_eq!(
        ledger.calls(),
        vec![
            "accounts".to_string(),
            "certification(42, 0x00000000000000000000000000000000000000aa)".to_string(),
            format!("receipt({})", TX_HASH),
            "block(7)".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_certification_failure_stops_pipeline() {
    let ledger = StubLedger::failing("execution reverted");
    let resolver = CertificateResolver::new(Box::new(ledger.clone()));

    let err = resolver
        .resolve_live(&encode_certification_id(42), TX_HASH)
        .await
        .unwrap_err();

    assert!(matches!(err, ResolveError::Ledger(LedgerError::Rpc { .. })));
    assert!(err.to_string().contains("execution reverted"));
    assert_eq!(ledger.calls().len(), 2);
}

#[tokio::test]
async fn test_empty_certification_is_not_found() {
    let ledger = StubLedger::new("", "", 1_700_000_000);
    let resolver = CertificateResolver::new(Box::new(ledger));

    let err = resolver
        .resolve_live(&encode_certification_id(5), TX_HASH)
        .await
        .unwrap_err();

    assert!(matches!(err, ResolveError::CertificationNotFound(5)));
}

#[tokio::test]
async fn test_unknown_transaction_is_not_found() {
    let ledger = StubLedger::new(&to_hex("John"), &to_hex("Jane"), 1_700_000_000);
    let resolver = CertificateResolver::new(Box::new(ledger));

    let err = resolver
        .resolve_live(&encode_certification_id(42), "0xdeadbeef")
        .await
        .unwrap_err();

    assert!(matches!(err, ResolveError::Ledger(LedgerError::NotFound(_))));
}

#[tokio::test]
async fn test_malformed_id_never_reaches_contract() {
    let ledger = StubLedger::new(&to_hex("John"), &to_hex("Jane"), 1_700_000_000);
    let resolver = CertificateResolver::new(Box::new(ledger.clone()));

    let err = resolver.resolve_live("0xzz", TX_HASH).await.unwrap_err();

    assert!(matches!(err, ResolveError::Codec(CodecError::InvalidHex(_))));
    assert_eq!(ledger.calls(), vec!["accounts".to_string()]);
}
