//! Concurrent registration and cancellation.

use std::sync::Arc;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use veriledger::{Ledger, LedgerError, Registration};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_duplicates_have_one_winner() {
    let ledger = Arc::new(Ledger::in_memory());
    let contenders = 16;

    let handles: Vec<_> = (0..contenders)
        .map(|i| {
            let ledger = Arc::clone(&ledger);
            tokio::spawn(async move {
                ledger
                    .register_bytes(b"contested content", Registration::new(format!("c{}", i)))
                    .await
            })
        })
        .collect();

    let mut winners = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => winners += 1,
            Err(LedgerError::DuplicateFingerprint { existing, .. }) => {
                assert_eq!(existing.get(), 1);
                rejected += 1;
            }
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }

    assert_eq!(winners, 1);
    assert_eq!(rejected, contenders - 1);
    assert_eq!(ledger.list_records(None).unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_distinct_registrations_all_land() {
    let ledger = Ledger::in_memory();

    let handles: Vec<_> = (0..32u32)
        .map(|i| {
            let ledger = ledger.clone();
            tokio::spawn(async move {
                let content = format!("document body {}", i);
                ledger
                    .register_bytes(content.as_bytes(), Registration::new(format!("d{}.txt", i)))
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let audit = ledger.list_records(None).unwrap();
    assert_eq!(audit.len(), 32);
    let ids: Vec<u64> = audit.iter().map(|s| s.record_id.get()).collect();
    assert_eq!(ids, (1..=32).collect::<Vec<u64>>());
    assert!(audit
        .windows(2)
        .all(|w| w[0].registered_at <= w[1].registered_at));
}

#[tokio::test]
async fn cancelled_upload_leaves_no_trace() {
    let ledger = Ledger::in_memory();
    let (mut writer, reader) = tokio::io::duplex(64);

    // Half an upload arrives, then the sender stalls without closing.
    writer.write_all(b"partial upload").await.unwrap();

    let attempt = tokio::time::timeout(
        Duration::from_millis(50),
        ledger.register(reader, Registration::new("slow.bin")),
    )
    .await;
    assert!(attempt.is_err(), "registration should still be waiting on input");

    assert_eq!(ledger.stats().unwrap().records, 0);
    drop(writer);
}

#[tokio::test]
async fn closed_stream_of_full_content_registers() {
    let ledger = Ledger::in_memory();
    let (mut writer, reader) = tokio::io::duplex(8);

    let upload = tokio::spawn(async move {
        writer.write_all(b"complete upload body").await.unwrap();
        writer.shutdown().await.unwrap();
    });

    let registered = ledger
        .register(reader, Registration::new("full.bin"))
        .await
        .unwrap();
    upload.await.unwrap();

    assert_eq!(registered.summary.size_bytes, 20);
    assert!(ledger.verify_bytes(b"complete upload body").await.unwrap().valid);
}
