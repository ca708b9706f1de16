//! Static pipeline-stage messages.

const MESSAGES: &[&str] = &[
    "Reading WAL segment 00000001...",
    "Transforming JSON BSON...",
    "Upserting document to Mongo collection...",
    "Commit offset to Kafka...",
    "S3 Multipart Upload: Chunk 45/100",
    "Syncing to AWS Region us-east-1...",
    "Autovacuum skipped on pg_toast",
];

/// Messages emitted by the simulator, one per tick.
pub fn default_catalog() -> Vec<String> {
    MESSAGES.iter().map(|m| m.to_string()).collect()
}
