use super::*;

#[test]
fn pending_has_no_outcome_yet() {
    assert_eq!(finality_outcome("0x1", TransactionStatus::Pending), None);
}

#[test]
fn committed_resolves_ok() {
    assert_eq!(finality_outcome("0x1", TransactionStatus::Committed { version: Some(9) }), Some(Ok(())));
}

#[test]
fn aborted_resolves_to_error_with_hash() {
    let outcome = finality_outcome("0x1", TransactionStatus::Aborted { vm_status: "OUT_OF_GAS".to_owned() });
    assert_eq!(
        outcome,
        Some(Err(TxError::Aborted { hash: "0x1".to_owned(), vm_status: "OUT_OF_GAS".to_owned() }))
    );
}
