use patternbook_core::{TxnKind, WalletError, WalletFacade};

#[test]
fn credit_then_debit_updates_balance_and_ledger() {
    let mut facade = WalletFacade::new("abc", 1234);

    facade.add_money("abc", 1234, 10).unwrap();
    assert_eq!(facade.balance(), 10);

    facade.deduct_money("abc", 1234, 5).unwrap();
    assert_eq!(facade.balance(), 5);

    let entries = facade.ledger_entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].kind, TxnKind::Credit);
    assert_eq!(entries[0].amount, 10);
    assert_eq!(entries[0].account_id, "abc");
    assert_eq!(entries[1].kind, TxnKind::Debit);
    assert_eq!(entries[1].amount, 5);
    assert_ne!(entries[0].id, entries[1].id);

    assert_eq!(facade.notifications_sent(), (1, 1));
}

#[test]
fn wrong_account_rejects_without_side_effects() {
    let mut facade = WalletFacade::new("abc", 1234);
    facade.add_money("abc", 1234, 10).unwrap();

    let err = facade.add_money("xyz", 1234, 5).unwrap_err();
    assert_eq!(err, WalletError::AccountMismatch);
    assert_eq!(facade.balance(), 10);
    assert_eq!(facade.ledger_entries().len(), 1);
    assert_eq!(facade.notifications_sent(), (1, 0));
}

#[test]
fn wrong_security_code_rejects_without_side_effects() {
    let mut facade = WalletFacade::new("abc", 1234);
    facade.add_money("abc", 1234, 10).unwrap();

    let err = facade.deduct_money("abc", 9999, 5).unwrap_err();
    assert_eq!(err, WalletError::SecurityCodeMismatch);
    assert_eq!(facade.balance(), 10);
    assert_eq!(facade.ledger_entries().len(), 1);
}

#[test]
fn overdraft_leaves_balance_unchanged() {
    let mut facade = WalletFacade::new("abc", 1234);
    facade.add_money("abc", 1234, 10).unwrap();

    let err = facade.deduct_money("abc", 1234, 25).unwrap_err();
    assert_eq!(
        err,
        WalletError::InsufficientBalance {
            balance: 10,
            requested: 25,
        }
    );
    assert_eq!(facade.balance(), 10);
    assert_eq!(facade.ledger_entries().len(), 1);
    assert_eq!(facade.notifications_sent(), (1, 0));

    // Debiting exactly the remaining balance succeeds.
    facade.deduct_money("abc", 1234, 10).unwrap();
    assert_eq!(facade.balance(), 0);
}

#[test]
fn errors_render_human_readable_messages() {
    assert_eq!(
        WalletError::AccountMismatch.to_string(),
        "account name is incorrect"
    );
    assert_eq!(
        WalletError::InsufficientBalance {
            balance: 3,
            requested: 7,
        }
        .to_string(),
        "balance is not sufficient: have 3, requested 7"
    );
}
