use std::collections::HashSet;

use parley_api::{Comment, CommentId, Uuid};
use parley_client::{display_order, prelude::*, CommentStore, MemoryStorage};

#[derive(Clone, Debug, bolero::generator::TypeGenerator)]
enum Op {
    Add { name: String, text: String },
    // targets index into every id seen so far, out-of-range means an unknown id
    Edit { target: usize, text: String },
    Delete { target: usize },
    Reply { target: usize, name: String, text: String },
    Reload,
}

fn pick(known: &[CommentId], target: usize) -> CommentId {
    match known.len() {
        0 => CommentId(Uuid::new_v4()),
        n if target % (n + 1) == n => CommentId(Uuid::new_v4()),
        n => known[target % (n + 1)],
    }
}

fn others_unchanged(before: &[Comment], after: &[Comment], id: CommentId) {
    let before = before.iter().filter(|c| c.id != id).collect::<Vec<_>>();
    let after = after.iter().filter(|c| c.id != id).collect::<Vec<_>>();
    assert_eq!(before, after);
}

fn assert_invariants(store: &CommentStore<MemoryStorage>) {
    let comments = store.comments();
    let ids = comments.iter().map(|c| c.id).collect::<HashSet<_>>();
    assert_eq!(ids.len(), comments.len(), "duplicate comment ids");
    for c in comments {
        let reply_ids = c.replies.iter().map(|r| r.id).collect::<HashSet<_>>();
        assert_eq!(reply_ids.len(), c.replies.len(), "duplicate reply ids");
    }
    assert_eq!(store.storage().load().unwrap(), comments);
}

fn run(ops: &[Op]) {
    let mut store = CommentStore::load(MemoryStorage::new()).unwrap();
    let mut known = Vec::new();
    for op in ops {
        let before = store.comments().to_vec();
        match op {
            Op::Add { name, text } => {
                let id = store.add_comment(name.clone(), text.clone()).unwrap();
                assert!(before.iter().all(|c| c.id != id));
                assert_eq!(store.comments().len(), before.len() + 1);
                let c = store.comment(id).unwrap();
                assert_eq!((&c.name, &c.text), (name, text));
                assert!(c.replies.is_empty());
                assert_eq!(&store.comments()[..before.len()], &before[..]);
                known.push(id);
            }
            Op::Edit { target, text } => {
                let id = pick(&known, *target);
                store.edit_comment(id, text.clone()).unwrap();
                match before.iter().find(|c| c.id == id) {
                    None => assert_eq!(store.comments(), before),
                    Some(old) => {
                        let new = store.comment(id).unwrap();
                        assert_eq!(&new.text, text);
                        assert_eq!(
                            (&new.name, new.date, &new.replies),
                            (&old.name, old.date, &old.replies)
                        );
                        assert_eq!(store.comments().len(), before.len());
                        others_unchanged(&before, store.comments(), id);
                    }
                }
            }
            Op::Delete { target } => {
                let id = pick(&known, *target);
                store.delete_comment(id).unwrap();
                assert!(store.comment(id).is_none());
                others_unchanged(&before, store.comments(), id);
                let removed = before.iter().any(|c| c.id == id) as usize;
                assert_eq!(store.comments().len(), before.len() - removed);
                let after_first = store.comments().to_vec();
                store.delete_comment(id).unwrap();
                assert_eq!(store.comments(), after_first);
            }
            Op::Reply { target, name, text } => {
                let id = pick(&known, *target);
                let reply_id = store.add_reply(id, name.clone(), text.clone()).unwrap();
                others_unchanged(&before, store.comments(), id);
                match before.iter().find(|c| c.id == id) {
                    None => {
                        assert_eq!(reply_id, None);
                        assert_eq!(store.comments(), before);
                    }
                    Some(old) => {
                        let reply_id = reply_id.unwrap();
                        let new = store.comment(id).unwrap();
                        assert_eq!(new.replies.len(), old.replies.len() + 1);
                        assert_eq!(&new.replies[..old.replies.len()], &old.replies[..]);
                        assert!(old.reply(reply_id).is_none());
                        let reply = new.replies.last().unwrap();
                        assert_eq!(
                            (reply.id, &reply.name, &reply.text),
                            (reply_id, name, text)
                        );
                    }
                }
            }
            Op::Reload => {
                store = CommentStore::load(store.into_storage()).unwrap();
                assert_eq!(store.comments(), before);
            }
        }
        assert_invariants(&store);
    }

    assert_display_order(store.comments());
}

fn assert_display_order(comments: &[Comment]) {
    let stored_idx = |c: &Comment| comments.iter().position(|s| s.id == c.id).unwrap();
    let sorted = display_order(comments);
    assert_eq!(sorted.len(), comments.len());
    for w in sorted.windows(2) {
        assert!(w[0].date >= w[1].date);
        if w[0].date == w[1].date {
            assert!(stored_idx(w[0]) < stored_idx(w[1]), "tie broke stored order");
        }
    }
}

#[test]
fn random_action_sequences() {
    bolero::check!().with_type::<Vec<Op>>().for_each(|ops| run(ops));
}

#[test]
fn scenario_two_comments_then_reload() {
    run(&[
        Op::Add {
            name: String::from("Ann"),
            text: String::from("Hi"),
        },
        Op::Add {
            name: String::from("Bo"),
            text: String::from("Yo"),
        },
        Op::Reload,
    ]);
}

#[test]
fn scenario_reply_then_delete_parent() {
    let mut store = CommentStore::load(MemoryStorage::new()).unwrap();
    let x = store
        .add_comment(String::from("Ann"), String::from("Hi"))
        .unwrap();
    store
        .add_reply(x, String::from("Bo"), String::from("Nice"))
        .unwrap();
    store.delete_comment(x).unwrap();
    assert!(store.comments().is_empty());
    let store = CommentStore::load(store.into_storage()).unwrap();
    assert!(store.comments().is_empty());
}

#[test]
fn display_order_ties_follow_stored_order() {
    let base = "2024-01-05T10:00:00Z".parse::<parley_api::Time>().unwrap();
    let dates = [0, 60, 0, 60, 0, 30, 60];
    let comments = dates
        .iter()
        .enumerate()
        .map(|(i, offset)| {
            let mut c = Comment::now(format!("author {i}"), String::new());
            c.date = base + chrono::Duration::seconds(*offset);
            c
        })
        .collect::<Vec<_>>();
    let blob = parley_client::storage::encode(&comments).unwrap();
    let store = CommentStore::load(MemoryStorage::with_blob(blob)).unwrap();
    assert_display_order(store.comments());

    let names = display_order(store.comments())
        .iter()
        .map(|c| c.name.clone())
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        ["author 1", "author 3", "author 6", "author 5", "author 0", "author 2", "author 4"]
    );
}
