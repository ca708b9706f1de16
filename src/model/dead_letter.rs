//! Static dead-letter queue sample.

/// A failed pipeline event parked in the dead-letter queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadLetter {
    pub event_id: &'static str,
    pub source: &'static str,
    pub error: &'static str,
    pub attempts: u32,
    pub last_seen: &'static str,
}

/// Example rows shown by the dead-letter view.
pub fn sample_dead_letters() -> Vec<DeadLetter> {
    vec![
        DeadLetter {
            event_id: "evt-0007f3",
            source: "public.transactions",
            error: "BSON size limit exceeded (16MB)",
            attempts: 3,
            last_seen: "09:58:12",
        },
        DeadLetter {
            event_id: "evt-0009a1",
            source: "public.users",
            error: "Duplicate key: users_v2.email",
            attempts: 5,
            last_seen: "09:59:47",
        },
        DeadLetter {
            event_id: "evt-000b22",
            source: "public.inventory_items",
            error: "Schema drift: column 'sku' missing in target",
            attempts: 1,
            last_seen: "10:00:03",
        },
        DeadLetter {
            event_id: "evt-000c90",
            source: "kafka.offsets",
            error: "Commit timeout after 30000ms",
            attempts: 4,
            last_seen: "10:00:21",
        },
        DeadLetter {
            event_id: "evt-000d15",
            source: "s3.bucket-grasya-prod",
            error: "AccessDenied: multipart upload aborted",
            attempts: 2,
            last_seen: "10:01:05",
        },
    ]
}
