use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_dry_run_prints_endpoint_and_payload() {
    let fields = common::write_field_file(
        r#"{
            "merchant_id": "MERCH-12345",
            "order_id": "ORDER123",
            "amount": "529.73",
            "currency": "THB",
            "description": "Payment for order ORDER123",
            "customer_email": "customer@example.com",
            "cardholder_name": "John Doe"
        }"#,
    );

    let mut cmd = Command::new(cargo_bin!("payform"));
    cmd.args(["pay", "--method", "credit_card", "--dry-run", "--fields"])
        .arg(fields.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("POST /api/credit-card/payment"))
        .stdout(predicate::str::contains("\"merchant_id\": \"MERCH-12345\""))
        .stdout(predicate::str::contains("\"amount\": 529.73"))
        .stdout(predicate::str::contains(
            "\"backend_url\": \"http://localhost:5000/api/webhook\"",
        ))
        .stdout(predicate::str::contains("customer@example.com"));
}

#[test]
fn test_dry_run_omits_empty_optional_fields() {
    let fields = common::write_field_file(
        r#"{
            "merchant_id": "MERCH-12345",
            "order_id": "ORDER123",
            "amount": "100.00",
            "currency": "THB",
            "description": "Payment",
            "customer_email": "   ",
            "redirect_url": ""
        }"#,
    );

    let mut cmd = Command::new(cargo_bin!("payform"));
    cmd.args(["pay", "--method", "qr_payment", "--dry-run", "--fields"])
        .arg(fields.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("POST /api/qr/generate"))
        .stdout(predicate::str::contains("customer_email").not())
        .stdout(predicate::str::contains("redirect_url").not());
}

#[test]
fn test_unknown_method_is_rejected() {
    let fields = common::write_field_file(r#"{"merchant_id": "MERCH-12345"}"#);

    let mut cmd = Command::new(cargo_bin!("payform"));
    cmd.args(["pay", "--method", "crypto", "--dry-run", "--fields"])
        .arg(fields.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported payment method"));
}

#[test]
fn test_invalid_amount_fails_before_submission() {
    let fields = common::write_field_file(
        r#"{
            "merchant_id": "MERCH-12345",
            "order_id": "ORDER123",
            "amount": "not_a_number",
            "currency": "THB",
            "description": "Payment"
        }"#,
    );

    let mut cmd = Command::new(cargo_bin!("payform"));
    cmd.args(["pay", "--method", "credit_card", "--dry-run", "--fields"])
        .arg(fields.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not a valid number"));
}

#[test]
fn test_refund_without_amount_is_rejected() {
    let mut cmd = Command::new(cargo_bin!("payform"));
    cmd.args([
        "refund",
        "--merchant-id",
        "MERCH-12345",
        "--order-id",
        "ORDER123",
        "--refund-type",
        "refund",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Amount is required for refund"));
}
