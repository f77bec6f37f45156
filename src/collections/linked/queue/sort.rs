use std::cmp::Ordering;

use super::{Link, NodeRef, QueueContents};

impl QueueContents {
    /// Stable merge sort over the chain. Nodes are relinked in place and the tail is recomputed
    /// from the merged chain, the length is unaffected.
    ///
    /// If `compare` panics, every node is still linked into one chain from `head`, in an
    /// unspecified order, and `tail` is recomputed before the panic continues.
    pub fn sort_by<F: FnMut(&str, &str) -> Ordering>(&mut self, compare: &mut F) {
        if self.head == self.tail {
            return;
        }
        let mut relink = RelinkTail(self);
        merge_sort(&mut relink.0.head, compare);
    }
}

/// Points the tail at the last node reachable from the head once sorting finishes or unwinds.
struct RelinkTail<'a>(&'a mut QueueContents);

impl Drop for RelinkTail<'_> {
    fn drop(&mut self) {
        let mut last = self.0.head;
        while let Some(next) = last.next() {
            last = *next;
        }
        self.0.tail = last;
    }
}

/// Sorts the terminated chain starting at `head`, leaving the new first node in `head`.
fn merge_sort<F: FnMut(&str, &str) -> Ordering>(head: &mut NodeRef, compare: &mut F) {
    let first = *head;
    let Some(second) = split(first) else {
        return;
    };

    let mut merge = Merge {
        out: head,
        merged: None,
        last: None,
        left: Some(first),
        right: Some(second),
    };
    if let Some(left) = &mut merge.left {
        merge_sort(left, compare);
    }
    if let Some(right) = &mut merge.right {
        merge_sort(right, compare);
    }
    merge.run(compare);
}

/// Cuts the chain after its middle node using a slow and a fast pointer, returning the head of the
/// second half. Returns [`None`] for a single node. For an odd count the first half is longer.
fn split(head: NodeRef) -> Link {
    let mut slow = head;
    let mut fast = head;

    while let Some(after) = (*fast.next()).and_then(|next| *next.next()) {
        fast = after;
        if let Some(next) = *slow.next() {
            slow = next;
        }
    }

    slow.next_mut().take()
}

/// The state of merging two sorted, terminated chains. Every node is always reachable from one of
/// `merged`, `left` or `right`.
struct Merge<'a> {
    out: &'a mut NodeRef,
    merged: Link,
    last: Link,
    left: Link,
    right: Link,
}

impl Merge<'_> {
    /// Moves nodes onto `merged` while both sides remain. On ties the left node is taken first,
    /// which keeps the sort stable.
    fn run<F: FnMut(&str, &str) -> Ordering>(&mut self, compare: &mut F) {
        while let (Some(l), Some(r)) = (self.left, self.right) {
            let node = if compare(l.value(), r.value()) == Ordering::Greater {
                self.right = *r.next();
                r
            } else {
                self.left = *l.next();
                l
            };
            self.push(node);
        }
    }

    fn push(&mut self, node: NodeRef) {
        match self.last {
            Some(last) => *last.next_mut() = Some(node),
            None => self.merged = Some(node),
        }
        self.last = Some(node);
    }

    /// Appends the whole terminated chain starting at `head`.
    fn push_chain(&mut self, head: NodeRef) {
        self.push(head);
        let mut last = head;
        while let Some(next) = last.next() {
            last = *next;
        }
        self.last = Some(last);
    }
}

impl Drop for Merge<'_> {
    // Also runs on unwind, joining whatever is left into a single chain.
    fn drop(&mut self) {
        if let Some(rest) = self.left.take() {
            self.push_chain(rest);
        }
        if let Some(rest) = self.right.take() {
            self.push_chain(rest);
        }
        if let Some(head) = self.merged {
            *self.out = head;
        }
    }
}
