/// List implementations measured by the benchmark, in output order.
///
/// Every aggregation table is seeded with these keys so a missing container
/// type still shows up as an empty sequence.
pub const CONTAINER_TYPES: [&str; 4] = ["arrayList", "indexedLinkedList", "linkedList", "treeList"];
