//! Seeded explorer contents.

use super::SchemaNode;

/// Source, target and archive endpoints shown by the object explorer.
pub fn default_schema() -> Vec<SchemaNode> {
    vec![
        SchemaNode::folder(
            "src",
            "SRC_POSTGRES (Primary)",
            true,
            vec![
                SchemaNode::folder(
                    "s1",
                    "public",
                    true,
                    vec![
                        SchemaNode::table("t1", "users"),
                        SchemaNode::table("t2", "transactions"),
                        SchemaNode::table("t3", "inventory_items"),
                    ],
                ),
                SchemaNode::folder(
                    "s2",
                    "catalog",
                    false,
                    vec![SchemaNode::procedure("p1", "refresh_ledger")],
                ),
            ],
        ),
        SchemaNode::folder(
            "tgt",
            "TGT_MONGO (Atlas Cluster)",
            true,
            vec![SchemaNode::folder(
                "c1",
                "grasya_analytics",
                true,
                vec![
                    SchemaNode::view("d1", "users_v2"),
                    SchemaNode::view("d2", "daily_tx_agg"),
                ],
            )],
        ),
        SchemaNode::folder(
            "cld",
            "AWS_S3 (Data Lake)",
            false,
            vec![SchemaNode::folder("b1", "bucket-grasya-prod", false, vec![])],
        ),
    ]
}
