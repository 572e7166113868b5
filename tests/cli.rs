//! End-to-end tests for the banco binary
//!
//! Each test runs against its own data directory via BANCO_CLI_DATA_DIR.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn banco(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("banco").unwrap();
    cmd.env("BANCO_CLI_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn create_and_list() {
    let dir = TempDir::new().unwrap();

    banco(&dir)
        .args(["account", "create", "João Silva", "--balance", "1000.00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Account created"))
        .stdout(predicate::str::contains("R$ 1000.00"));

    banco(&dir)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("João Silva"))
        .stdout(predicate::str::contains("R$ 1000.00"));
}

#[test]
fn list_when_empty() {
    let dir = TempDir::new().unwrap();

    banco(&dir)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No accounts registered."));
}

#[test]
fn create_rejects_zero_balance() {
    let dir = TempDir::new().unwrap();

    banco(&dir)
        .args(["account", "create", "Teste", "--balance", "0.00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid initial balance"));

    banco(&dir)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No accounts registered."));
}

#[test]
fn create_rejects_unparseable_balance() {
    let dir = TempDir::new().unwrap();

    banco(&dir)
        .args(["account", "create", "Teste", "--balance", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid initial balance"));
}

#[test]
fn deposit_and_withdraw() {
    let dir = TempDir::new().unwrap();

    banco(&dir)
        .args(["account", "create", "Maria", "--balance", "100.00"])
        .assert()
        .success();

    banco(&dir)
        .args(["account", "deposit", "1", "50.00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New balance: R$ 150.00"));

    banco(&dir)
        .args(["account", "withdraw", "1", "25.50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New balance: R$ 124.50"));
}

#[test]
fn withdraw_more_than_balance_fails_and_preserves_it() {
    let dir = TempDir::new().unwrap();

    banco(&dir)
        .args(["account", "create", "Maria", "--balance", "100.00"])
        .assert()
        .success();

    banco(&dir)
        .args(["account", "withdraw", "1", "150.00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Insufficient funds"));

    banco(&dir)
        .args(["account", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 100.00"));
}

#[test]
fn drain_account_then_one_cent_fails() {
    let dir = TempDir::new().unwrap();

    banco(&dir)
        .args(["account", "create", "João", "--balance", "1000.00"])
        .assert()
        .success();

    for amount in ["300.00", "300.00", "400.00"] {
        banco(&dir)
            .args(["account", "withdraw", "1", amount])
            .assert()
            .success();
    }

    banco(&dir)
        .args(["account", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 0.00"));

    banco(&dir)
        .args(["account", "withdraw", "1", "0.01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Insufficient funds"));
}

#[test]
fn set_balance_overwrites() {
    let dir = TempDir::new().unwrap();

    banco(&dir)
        .args(["account", "create", "Ana", "--balance", "10.00"])
        .assert()
        .success();

    banco(&dir)
        .args(["account", "set-balance", "1", "200.00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 200.00"));
}

#[test]
fn set_balance_unknown_id() {
    let dir = TempDir::new().unwrap();

    banco(&dir)
        .args(["account", "set-balance", "99", "200.00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Account not found"));
}

#[test]
fn delete_account() {
    let dir = TempDir::new().unwrap();

    banco(&dir)
        .args(["account", "create", "Ana", "--balance", "10.00"])
        .assert()
        .success();

    banco(&dir)
        .args(["account", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted"));

    banco(&dir)
        .args(["account", "show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Account not found"));
}

#[test]
fn delete_unknown_id() {
    let dir = TempDir::new().unwrap();

    banco(&dir)
        .args(["account", "delete", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Account not found"));
}

#[test]
fn menu_reports_domain_failure_and_keeps_running() {
    let dir = TempDir::new().unwrap();

    banco(&dir)
        .args(["account", "create", "Maria", "--balance", "100.00"])
        .assert()
        .success();

    // Withdraw more than the balance, then list, then quit: the failed
    // operation is reported with a warning and the session continues
    banco(&dir)
        .arg("menu")
        .write_stdin("6\n1\n500.00\n1\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("⚠ Insufficient funds"))
        .stdout(predicate::str::contains("Maria"))
        .stdout(predicate::str::contains("R$ 100.00"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn menu_ends_cleanly_when_stdin_closes() {
    let dir = TempDir::new().unwrap();

    banco(&dir)
        .arg("menu")
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No accounts registered."));
}

#[test]
fn state_survives_between_invocations() {
    let dir = TempDir::new().unwrap();

    banco(&dir)
        .args(["account", "create", "A", "--balance", "10.00"])
        .assert()
        .success();
    banco(&dir)
        .args(["account", "create", "B", "--balance", "20.00"])
        .assert()
        .success();

    banco(&dir)
        .args(["account", "show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Account: B"))
        .stdout(predicate::str::contains("R$ 20.00"));
}
