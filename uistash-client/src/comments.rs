use std::collections::HashMap;

use crate::api::{CommentId, CommentRecord};

/// A comment plus its replies, ready for nested display. Built fresh on
/// every fetch, never persisted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommentNode {
    pub record: CommentRecord,
    pub replies: Vec<CommentNode>,
}

/// Reconstructs the reply forest from the flat collection the backend
/// returns. The input may arrive in any order; a reply whose parent is not
/// part of the collection is dropped, not promoted to root.
pub fn assemble(records: Vec<CommentRecord>) -> Vec<CommentNode> {
    // Index every id before linking anything, since a reply can appear
    // ahead of its parent in the input.
    let index: HashMap<CommentId, usize> = records
        .iter()
        .enumerate()
        .map(|(i, r)| (r.id.clone(), i))
        .collect();

    let mut child_ids: Vec<Vec<usize>> = vec![Vec::new(); records.len()];
    let mut root_ids = Vec::new();
    for (i, r) in records.iter().enumerate() {
        match &r.parent_id {
            None => root_ids.push(i),
            Some(p) => match index.get(p) {
                Some(&parent) => child_ids[parent].push(i),
                None => {
                    tracing::debug!(comment = %r.id, parent = %p, "dropping reply to missing parent");
                }
            },
        }
    }

    let mut slots: Vec<Option<CommentRecord>> = records.into_iter().map(Some).collect();
    root_ids
        .into_iter()
        .map(|i| build(i, &mut slots, &child_ids))
        .collect()
}

fn build(i: usize, slots: &mut [Option<CommentRecord>], child_ids: &[Vec<usize>]) -> CommentNode {
    let record = slots[i].take().expect("comment linked under two parents");
    let replies = child_ids[i]
        .iter()
        .map(|&c| build(c, slots, child_ids))
        .collect();
    CommentNode { record, replies }
}

/// A freshly posted root comment has no pre-existing children, so it goes
/// straight to the front of the forest (most-recent-first) without
/// reassembly. Replies instead trigger a refetch at the call site.
pub fn prepend_root(roots: &mut Vec<CommentNode>, record: CommentRecord) {
    roots.insert(
        0,
        CommentNode {
            record,
            replies: Vec::new(),
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(id: &str, parent: Option<&str>) -> CommentRecord {
        CommentRecord {
            id: CommentId(id.to_string()),
            content: format!("comment {id}"),
            created_at: Utc.with_ymd_and_hms(2026, 1, 5, 10, 0, 0).unwrap(),
            author: None,
            parent_id: parent.map(|p| CommentId(p.to_string())),
        }
    }

    fn count(nodes: &[CommentNode]) -> usize {
        nodes.len() + nodes.iter().map(|n| count(&n.replies)).sum::<usize>()
    }

    #[test]
    fn links_reply_and_drops_orphan() {
        let forest = assemble(vec![
            record("1", None),
            record("2", Some("1")),
            record("3", Some("99")),
        ]);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].record.id.0, "1");
        assert_eq!(forest[0].replies.len(), 1);
        assert_eq!(forest[0].replies[0].record.id.0, "2");
        assert_eq!(count(&forest), 2);
    }

    #[test]
    fn linking_is_order_independent() {
        let forest = assemble(vec![record("2", Some("1")), record("1", None)]);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].record.id.0, "1");
        assert_eq!(forest[0].replies[0].record.id.0, "2");
    }

    #[test]
    fn roots_have_no_parent_and_counts_add_up() {
        let input = vec![
            record("a", None),
            record("b", Some("a")),
            record("c", Some("b")),
            record("d", None),
            record("e", Some("gone")),
            record("f", Some("d")),
        ];
        let n = input.len();
        let forest = assemble(input);
        assert!(forest.iter().all(|r| r.record.parent_id.is_none()));
        let orphans = 1;
        assert_eq!(count(&forest) + orphans, n);
    }

    #[test]
    fn sibling_order_follows_input_order() {
        let forest = assemble(vec![
            record("root", None),
            record("r1", Some("root")),
            record("r2", Some("root")),
            record("r3", Some("root")),
        ]);
        let siblings: Vec<&str> = forest[0]
            .replies
            .iter()
            .map(|n| n.record.id.0.as_str())
            .collect();
        assert_eq!(siblings, ["r1", "r2", "r3"]);
    }

    #[test]
    fn nesting_depth_is_unbounded() {
        let mut input = vec![record("0", None)];
        for i in 1..200 {
            input.push(record(&i.to_string(), Some(&(i - 1).to_string())));
        }
        let forest = assemble(input);
        let mut depth = 0;
        let mut cur = &forest[0];
        while let Some(next) = cur.replies.first() {
            cur = next;
            depth += 1;
        }
        assert_eq!(depth, 199);
    }

    #[test]
    fn reply_chain_under_missing_parent_is_dropped_entirely() {
        let forest = assemble(vec![
            record("a", None),
            record("b", Some("gone")),
            record("c", Some("b")),
        ]);
        assert_eq!(count(&forest), 1);
    }

    #[test]
    fn new_root_comment_is_prepended() {
        let mut forest = assemble(vec![record("old", None)]);
        prepend_root(&mut forest, record("new", None));
        assert_eq!(forest[0].record.id.0, "new");
        assert_eq!(forest[1].record.id.0, "old");
        assert!(forest[0].replies.is_empty());
    }
}
