//! End-to-end tests of the registry workflow: real Ed25519 wallets,
//! real challenge messages, deterministic clock.

use starlog::{
    Ed25519Verifier, FixedClock, RegistryError, Sha256Hash, StarData, StarRegistry, Wallet,
    PROOF_WINDOW_SECS,
};

const T0: i64 = 1_600_000_000;

fn test_registry() -> StarRegistry<Ed25519Verifier, FixedClock> {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    StarRegistry::with_parts(Ed25519Verifier, FixedClock::new(T0))
}

fn star(story: &str) -> StarData {
    StarData {
        ra: "16h 29m 1.0s".to_string(),
        dec: "-26° 29' 24.9\"".to_string(),
        story: story.to_string(),
    }
}

/// Run the full challenge/response flow for one wallet.
fn register(
    registry: &StarRegistry<Ed25519Verifier, FixedClock>,
    wallet: &Wallet,
    story: &str,
) -> Result<starlog::Block, RegistryError> {
    let message = registry.request_proof_message(&wallet.address());
    let signature = wallet.sign(&message);
    registry.submit_entry(&wallet.address(), &message, &signature, star(story))
}

#[test]
fn fresh_registry_has_only_genesis() {
    let registry = test_registry();

    assert_eq!(registry.height(), 0);
    let genesis = registry.find_by_height(0).expect("genesis must exist");
    assert_eq!(genesis.height, 0);
    assert!(genesis.prev_hash.is_none());
    assert!(genesis.validate());
}

#[test]
fn successful_submission_appends_linked_block() {
    let registry = test_registry();
    let wallet = Wallet::from_seed(&[0x42; 32]);

    let block = register(&registry, &wallet, "first").unwrap();

    assert_eq!(block.height, 1);
    assert_eq!(registry.height(), 1);
    let genesis = registry.find_by_height(0).unwrap();
    assert_eq!(block.prev_hash, Some(genesis.hash));
    assert!(registry.audit().is_empty());
}

#[test]
fn sequential_submissions_stay_contiguous() {
    let registry = test_registry();
    let wallet = Wallet::from_seed(&[0x01; 32]);

    for i in 1..=5 {
        let block = register(&registry, &wallet, &format!("star {i}")).unwrap();
        assert_eq!(block.height, i);
    }

    assert_eq!(registry.height(), 5);
    assert!(registry.audit().is_empty());
    assert_eq!(registry.audit(), registry.audit());
}

#[test]
fn proof_window_boundary_is_inclusive() {
    let registry = test_registry();
    let wallet = Wallet::from_seed(&[0x07; 32]);

    let message = registry.request_proof_message(&wallet.address());
    let signature = wallet.sign(&message);

    // Exactly the window: accepted.
    registry.clock().set(T0 + PROOF_WINDOW_SECS);
    registry
        .submit_entry(&wallet.address(), &message, &signature, star("on time"))
        .expect("elapsed == 300 must pass");

    // One second past: rejected, with a valid signature.
    let message = registry.request_proof_message(&wallet.address());
    let signature = wallet.sign(&message);
    registry.clock().advance(PROOF_WINDOW_SECS + 1);

    let result = registry.submit_entry(&wallet.address(), &message, &signature, star("late"));
    assert!(matches!(
        result,
        Err(RegistryError::ProofWindowExpired { elapsed: 301, .. })
    ));
    assert_eq!(registry.height(), 1);
}

#[test]
fn forged_signature_is_rejected_and_chain_unchanged() {
    let registry = test_registry();
    let wallet = Wallet::from_seed(&[0x11; 32]);

    let message = registry.request_proof_message(&wallet.address());
    // Syntactically valid signature that was never produced by the wallet.
    let forged = hex::encode([0x5a; 64]);

    let result = registry.submit_entry(&wallet.address(), &message, &forged, star("forged"));
    assert!(matches!(result, Err(RegistryError::SignatureInvalid(_))));
    assert_eq!(registry.height(), 0);
}

#[test]
fn signature_from_another_wallet_is_rejected() {
    let registry = test_registry();
    let owner = Wallet::from_seed(&[0x21; 32]);
    let intruder = Wallet::from_seed(&[0x22; 32]);

    let message = registry.request_proof_message(&owner.address());
    let signature = intruder.sign(&message);

    let result = registry.submit_entry(&owner.address(), &message, &signature, star("stolen"));
    assert!(matches!(result, Err(RegistryError::SignatureInvalid(_))));
    assert_eq!(registry.height(), 0);
}

#[test]
fn malformed_challenge_is_rejected() {
    let registry = test_registry();
    let wallet = Wallet::from_seed(&[0x31; 32]);

    let result = registry.submit_entry(
        &wallet.address(),
        "message without fields",
        &wallet.sign("message without fields"),
        star("no window"),
    );
    assert!(matches!(result, Err(RegistryError::MalformedChallenge(_))));
    assert_eq!(registry.height(), 0);
}

#[test]
fn owner_query_filters_by_address() {
    let registry = test_registry();
    let alice = Wallet::from_seed(&[0xa1; 32]);
    let bob = Wallet::from_seed(&[0xb2; 32]);

    register(&registry, &alice, "alice's star").unwrap();
    register(&registry, &bob, "bob's star").unwrap();

    let stars = registry.entries_by_owner(&alice.address());
    assert_eq!(stars.len(), 1);
    assert_eq!(stars[0].story, "alice's star");

    assert!(registry.entries_by_owner("unknown-address").is_empty());
}

#[test]
fn owner_query_preserves_height_order() {
    let registry = test_registry();
    let wallet = Wallet::from_seed(&[0xc3; 32]);

    register(&registry, &wallet, "first").unwrap();
    register(&registry, &wallet, "second").unwrap();
    register(&registry, &wallet, "third").unwrap();

    let stories: Vec<String> = registry
        .entries_by_owner(&wallet.address())
        .into_iter()
        .map(|s| s.story)
        .collect();
    assert_eq!(stories, vec!["first", "second", "third"]);
}

#[test]
fn lookups_return_none_for_unknown_targets() {
    let registry = test_registry();
    let wallet = Wallet::from_seed(&[0xd4; 32]);
    register(&registry, &wallet, "only").unwrap();
    register(&registry, &wallet, "two").unwrap();

    assert!(registry.find_by_height(999).is_none());

    let unknown = Sha256Hash::from_hex(
        "deadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef",
    )
    .unwrap();
    assert!(registry.find_by_hash(&unknown).is_none());
}

#[test]
fn find_by_hash_returns_the_matching_block() {
    let registry = test_registry();
    let wallet = Wallet::from_seed(&[0xe5; 32]);

    let block = register(&registry, &wallet, "lookup me").unwrap();
    let found = registry.find_by_hash(&block.hash).unwrap();
    assert_eq!(found.height, block.height);
    assert_eq!(found.hash, block.hash);
}

#[test]
fn submission_timestamp_comes_from_the_clock() {
    let registry = test_registry();
    let wallet = Wallet::from_seed(&[0xf6; 32]);

    let message = registry.request_proof_message(&wallet.address());
    let signature = wallet.sign(&message);
    registry.clock().set(T0 + 120);

    let block = registry
        .submit_entry(&wallet.address(), &message, &signature, star("timed"))
        .unwrap();
    assert_eq!(block.timestamp, T0 + 120);
}
