use wallet::ids::AccountId;
use wallet::models::{Account, Favorite, Payment, PaymentStatus};
use wallet::Money;

use std::process::{Command, Output};

fn run_walkthrough(args: &[&str]) -> Output {
    // Running the binary directly to prove everything works end to end
    Command::new(env!("CARGO_BIN_EXE_wallet-ledger"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn walkthrough_report() {
    let output = run_walkthrough(&["+992000000001", "1000000", "100000", "auto"]);

    println!("{}", String::from_utf8(output.stderr).unwrap());
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);

    let account: Account = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(account.id, AccountId(1));
    assert_eq!(account.phone, "+992000000001");
    // one payment rejected, the one made from the favorite still stands
    assert_eq!(account.balance, Money(900_000));

    let rejected: Payment = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(rejected.status, PaymentStatus::Failed);
    assert_eq!(rejected.amount, Money(100_000));
    assert_eq!(rejected.category, "auto");

    let from_favorite: Payment = serde_json::from_str(lines[2]).unwrap();
    assert_eq!(from_favorite.status, PaymentStatus::InProgress);
    assert_ne!(from_favorite.id, rejected.id);

    let favorite: Favorite = serde_json::from_str(lines[3]).unwrap();
    assert_eq!(favorite.name, "auto again");
    assert_eq!(favorite.account_id, account.id);
    assert_eq!(favorite.amount, rejected.amount);
}

#[test]
fn walkthrough_without_funds() {
    let output = run_walkthrough(&["+992000000001", "100", "101", "auto"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Couldn't pay"));
    assert!(stderr.contains("Not enough balance on account 1"));
}

#[test]
fn walkthrough_bad_args() {
    let output = run_walkthrough(&["+992000000001"]);

    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("expected 4 arguments, got 1"));
}
