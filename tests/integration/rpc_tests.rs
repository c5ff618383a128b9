use super::helpers::*;
use super::mock_server::{NodeState, ACCOUNT};
use certification::infrastructure::rpc::certifications_calldata;
use certification::{Ledger, LedgerError};

#[tokio::test]
async fn test_accounts() {
    let (_node, ledger) = start_node(NodeState::default()).await;

    let accounts = ledger.accounts().await.unwrap();

    assert_eq!(accounts, vec![ACCOUNT.to_string()]);
}

#[tokio::test]
async fn test_certification_sends_eth_call() {
    let (node, ledger) = start_node(node_with_certificate("John", "Jane")).await;

    let record = ledger.certification(42, Some(ACCOUNT)).await.unwrap();

    assert!(record.bride.ends_with("4a6f686e"));
    assert!(record.groom.ends_with("4a616e65"));

    let requests = node.requests();
    assert_eq!(requests.len(), 1);
    let call = &requests[0];
    assert_eq!(call["jsonrpc"].as_str(), Some("2.0"));
    assert_eq!(call["method"].as_str(), Some("eth_call"));
    assert_eq!(call["params"][0]["to"].as_str(), Some(CONTRACT));
    assert_eq!(call["params"][0]["from"].as_str(), Some(ACCOUNT));
    assert_eq!(call["params"][0]["data"].as_str(), Some(certifications_calldata(42).as_str()));
    assert_eq!(call["params"][1].as_str(), Some("latest"));
}

#[tokio::test]
async fn test_certification_without_sender() {
    let (node, ledger) = start_node(node_with_certificate("John", "Jane")).await;

    ledger.certification(1, None).await.unwrap();

    assert!(node.requests()[0]["params"][0]["from"].is_null());
}

#[tokio::test]
async fn test_rpc_error_is_typed() {
    let state = NodeState {
        call_result: Some(Err("execution reverted".to_string())),
        ..NodeState::default()
    };
    let (_node, ledger) = start_node(state).await;

    let err = ledger.certification(42, None).await.unwrap_err();

    match err {
        LedgerError::Rpc { code, message } => {
            assert_eq!(code, -32000);
            assert_eq!(message, "execution reverted");
        }
        other => panic!("Expected Rpc error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_receipt_and_block() {
    let (node, ledger) = start_node(node_with_certificate("John", "Jane")).await;

    let receipt = ledger.transaction_receipt(TX_HASH).await.unwrap();
    assert_eq!(receipt.block_number, BLOCK_NUMBER);
    assert_eq!(receipt.transaction_hash, TX_HASH);

    let block = ledger.block(receipt.block_number).await.unwrap();
    assert_eq!(block.timestamp, BLOCK_TIMESTAMP);

    let requests = node.requests();
    assert_eq!(requests[1]["params"][0].as_str(), Some("0xc"));
    assert_eq!(requests[1]["params"][1].as_bool(), Some(false));
}

#[tokio::test]
async fn test_missing_receipt_and_block() {
    let (_node, ledger) = start_node(NodeState::default()).await;

    assert!(matches!(
        ledger.transaction_receipt(TX_HASH).await,
        Err(LedgerError::NotFound(_))
    ));
    assert!(matches!(
        ledger.block(99).await,
        Err(LedgerError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_unreachable_node() {
    // Nothing listens on port 9 of localhost in the test environment.
    let ledger = certification::JsonRpcLedger::new("http://127.0.0.1:9", CONTRACT);

    assert!(matches!(
        ledger.accounts().await,
        Err(LedgerError::Transport(_))
    ));
}

#[tokio::test]
async fn test_block_with_unrepresentable_timestamp() {
    let mut state = node_with_certificate("John", "Jane");
    state.blocks.insert(BLOCK_NUMBER, u64::MAX);
    let (_node, ledger) = start_node(state).await;

    let err = ledger.block(BLOCK_NUMBER).await.unwrap_err();

    match err {
        LedgerError::InvalidResponse(message) => assert!(message.contains("out of range")),
        other => panic!("Expected InvalidResponse, got {:?}", other),
    }
}
