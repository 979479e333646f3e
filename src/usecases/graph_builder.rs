//! Follows-graph inference from post evidence.
//!
//! An author is taken to follow every user they @-mention. Optionally a reply to
//! another user's post counts the same way, as long as the replied-to user shows up
//! elsewhere in the corpus. Pure and synchronous; no I/O.

use crate::domain::mention::{mentions, parse_handle};
use crate::domain::{FollowsGraph, Post, Username};
use std::collections::BTreeSet;
use tracing::debug;

/// Infer who follows whom from @-mentions only.
///
/// * An author follows each distinct user they mention (case-insensitively).
/// * Every mentioned user is a node, even one who never posts.
/// * An author is a node only if they mentioned someone other than themselves.
pub fn infer_follows_graph(posts: &[Post]) -> FollowsGraph {
    GraphBuilder::new().build(posts)
}

/// Configurable graph inference. Mention evidence is always on.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphBuilder {
    reply_evidence: bool,
}

impl GraphBuilder {
    /// Mentions only.
    pub fn new() -> Self {
        Self {
            reply_evidence: false,
        }
    }

    /// Also treat `Post::in_reply_to` as evidence that the author follows that user.
    ///
    /// Reply targets must be handles (`[A-Za-z0-9_]+`, optional leading `@`) of users
    /// who author a post or are mentioned somewhere in the same corpus; others are ignored.
    pub fn with_reply_evidence(mut self, enabled: bool) -> Self {
        self.reply_evidence = enabled;
        self
    }

    pub fn reply_evidence(&self) -> bool {
        self.reply_evidence
    }

    pub fn build(&self, posts: &[Post]) -> FollowsGraph {
        let observed = if self.reply_evidence {
            observed_users(posts)
        } else {
            BTreeSet::new()
        };
        let mut graph = FollowsGraph::new();

        for post in posts {
            let author = Username::new(&post.author);
            let mut targets: Vec<Username> = mentions(&post.text).map(Username::new).collect();
            if let Some(target) = self.reply_target(post, &observed) {
                targets.push(target);
            }

            let mut has_evidence = false;
            for target in targets {
                // Any evidenced name is a node, self-references included.
                graph.ensure_user(target.clone());
                if target != author {
                    graph.add_follow(author.clone(), target);
                    has_evidence = true;
                }
            }

            if has_evidence {
                debug!(author = %author, "post carries follow evidence");
            }
        }

        debug!(
            posts = posts.len(),
            users = graph.user_count(),
            edges = graph.edge_count(),
            "follows graph inferred"
        );
        graph
    }

    /// Reply target of `post`, if replies count and the target is a well-formed handle
    /// that already appears in the corpus as an author or a mention.
    fn reply_target(&self, post: &Post, observed: &BTreeSet<Username>) -> Option<Username> {
        if !self.reply_evidence {
            return None;
        }
        let raw = post.in_reply_to.as_deref()?;
        let Some(name) = parse_handle(raw) else {
            debug!(author = %post.author, target = raw, "ignoring malformed reply target");
            return None;
        };
        let target = Username::new(name);
        if !observed.contains(&target) {
            debug!(author = %post.author, target = %target, "reply target not seen in corpus");
            return None;
        }
        Some(target)
    }
}

/// Every author and every mentioned user in `posts`, canonicalized.
fn observed_users(posts: &[Post]) -> BTreeSet<Username> {
    let mut users = BTreeSet::new();
    for post in posts {
        users.insert(Username::new(&post.author));
        users.extend(mentions(&post.text).map(Username::new));
    }
    users
}
