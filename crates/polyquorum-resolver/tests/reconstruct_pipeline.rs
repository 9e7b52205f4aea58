//! End-to-end pipeline: JSON document -> resolved shares -> secret.

use num_bigint::BigInt;
use polyquorum_core::{reconstruct_secret, ReconstructError};
use polyquorum_resolver::ShareDocument;
use std::io::Write;

/// Scenario from the quadratic P(x) = -70x^2 + 160x + 210 with two
/// corrupted shares, values hidden behind every supported operation.
const QUADRATIC_DOC: &str = r#"{
    "n": 5,
    "k": 3,
    "shares": {
        "1": "sum(100, 200)",
        "2": "multiply(25, 10)",
        "3": "hcf(120, 180)",
        "4": "lcm(6, 10)",
        "5": "multiply(100, 60)"
    }
}"#;

#[test]
fn reconstructs_secret_from_document() {
    let doc = ShareDocument::from_json_str(QUADRATIC_DOC).unwrap();
    let shares = doc.resolve();
    assert_eq!(shares.len(), 5);

    let secret = reconstruct_secret(&shares, doc.k).unwrap();
    assert_eq!(secret, BigInt::from(210));
}

#[test]
fn reconstructs_from_a_file_on_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(QUADRATIC_DOC.as_bytes()).unwrap();

    let doc = ShareDocument::from_file(file.path()).unwrap();
    let secret = reconstruct_secret(&doc.resolve(), doc.k).unwrap();
    assert_eq!(secret, BigInt::from(210));
}

#[test]
fn skipped_records_can_leave_too_few_shares() {
    // Two of three records are unusable; k = 2 needs both survivors
    let doc = ShareDocument::from_json_str(
        r#"{
            "n": 3,
            "k": 2,
            "shares": {
                "1": "sum(25)",
                "2": "power(2, 6)",
                "x": "sum(45)"
            }
        }"#,
    )
    .unwrap();

    let shares = doc.resolve();
    assert_eq!(shares.len(), 1);
    assert_eq!(
        reconstruct_secret(&shares, doc.k),
        Err(ReconstructError::InsufficientShares { needed: 2, have: 1 })
    );
}

#[test]
fn hopelessly_inconsistent_document_is_distinct_from_missing_data() {
    // No two of these points lie on a line with an integer value at x = 0
    let doc = ShareDocument::from_json_str(
        r#"{"n": 3, "k": 2, "shares": {"1": "sum(0)", "3": "sum(1)", "5": "sum(2)"}}"#,
    )
    .unwrap();

    assert_eq!(
        reconstruct_secret(&doc.resolve(), doc.k),
        Err(ReconstructError::NoConsistentSecret)
    );
}
