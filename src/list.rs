use crate::{
    errors::ListError,
    handle::Handle,
    node::{Color, Entry, Node},
    roles::{Role, Roles},
};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// A singly linked list kept in ascending key order by [`insert`](Self::insert),
/// with head/tail/current/highlighted roles tracked for rendering.
///
/// Nodes live in an arena keyed by id; every node in the arena is reachable
/// from head. There are no back-links: predecessor lookup walks from head.
#[derive(Debug, Default)]
pub struct OrderedActorList {
    nodes: HashMap<usize, Node>,
    roles: Roles,
    next_id: usize,
    len: usize,
    traversed_on_insert: usize,
}

/// Iterator over values from head to tail.
pub struct Iter<'a> {
    list: &'a OrderedActorList,
    cur: Option<usize>,
}

/// Iterator over `(Handle, &Entry)` from head to tail.
pub struct IterHandles<'a> {
    list: &'a OrderedActorList,
    cur: Option<usize>,
}

impl OrderedActorList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes in the chain.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Is the list empty?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Same as [`is_empty`](Self::is_empty).
    pub fn empty(&self) -> bool {
        self.is_empty()
    }

    pub fn head(&self) -> Option<Handle> {
        self.roles.get(Role::Head).map(Handle)
    }

    pub fn tail(&self) -> Option<Handle> {
        self.roles.get(Role::Tail).map(Handle)
    }

    pub fn current(&self) -> Option<Handle> {
        self.roles.get(Role::Current).map(Handle)
    }

    pub fn highlighted(&self) -> Option<Handle> {
        self.roles.get(Role::Highlighted).map(Handle)
    }

    /// Total nodes visited by every [`insert`](Self::insert) walk so far.
    pub fn traversed_on_insert(&self) -> usize {
        self.traversed_on_insert
    }

    /// Get a reference by handle (if live).
    pub fn get(&self, h: Handle) -> Option<&Entry> {
        self.nodes.get(&h.0).map(|n| &n.value)
    }

    pub(crate) fn get_mut(&mut self, h: Handle) -> Option<&mut Entry> {
        self.nodes.get_mut(&h.0).map(|n| &mut n.value)
    }

    pub fn color(&self, h: Handle) -> Option<Color> {
        self.nodes.get(&h.0).map(|n| n.color)
    }

    /// Successor of `h`, if `h` is live and not the tail.
    pub fn next(&self, h: Handle) -> Option<Handle> {
        self.nodes.get(&h.0).and_then(|n| n.next).map(Handle)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cur: self.roles.get(Role::Head),
        }
    }

    pub fn iter_handles(&self) -> IterHandles<'_> {
        IterHandles {
            list: self,
            cur: self.roles.get(Role::Head),
        }
    }

    /// Push a value to the front. It becomes the new head.
    pub fn push_front(&mut self, value: impl Into<Entry>) -> Handle {
        let id = self.alloc(value.into());
        match self.roles.get(Role::Head) {
            None => {
                self.assign(Role::Head, Some(id));
                self.assign(Role::Tail, Some(id));
            }
            Some(old_head) => {
                self.node_mut(id).next = Some(old_head);
                self.assign(Role::Head, Some(id));
            }
        }
        self.len += 1;
        debug!(id, len = self.len, "push_front");
        Handle(id)
    }

    /// Push a value to the back. It becomes the new tail.
    pub fn push_back(&mut self, value: impl Into<Entry>) -> Handle {
        let Some(old_tail) = self.roles.get(Role::Tail) else {
            return self.push_front(value);
        };
        let id = self.alloc(value.into());
        self.node_mut(old_tail).next = Some(id);
        self.assign(Role::Tail, Some(id));
        self.len += 1;
        debug!(id, len = self.len, "push_back");
        Handle(id)
    }

    /// Remove the head node, returning its value.
    pub fn pop_front(&mut self) -> Result<Entry, ListError> {
        let head = self.roles.get(Role::Head).ok_or(ListError::EmptyList)?;
        let node = self.unlink(head)?;
        self.assign(Role::Head, node.next);
        self.len -= 1;
        debug!(id = head, len = self.len, "pop_front");
        Ok(node.value)
    }

    /// Remove the tail node, returning its value. O(n): the new tail is found
    /// by walking from head.
    pub fn pop_back(&mut self) -> Result<Entry, ListError> {
        let tail = self.roles.get(Role::Tail).ok_or(ListError::EmptyList)?;
        let prev = self.get_prev(Handle(tail))?;
        let node = self.unlink(tail)?;
        match prev {
            Some(Handle(p)) => {
                self.node_mut(p).next = None;
                self.assign(Role::Tail, Some(p));
            }
            None => self.assign(Role::Head, None),
        }
        self.len -= 1;
        debug!(id = tail, len = self.len, "pop_back");
        Ok(node.value)
    }

    /// Node whose `next` is `h`, or `None` when `h` is the head.
    ///
    /// Fails with [`ListError::NotFound`] if the walk reaches the end without
    /// meeting `h`.
    pub fn get_prev(&self, h: Handle) -> Result<Option<Handle>, ListError> {
        let head = self.roles.get(Role::Head).ok_or(ListError::EmptyList)?;
        if h.0 == head {
            return Ok(None);
        }
        let mut cur = head;
        loop {
            match self.nodes[&cur].next {
                Some(next) if next == h.0 => return Ok(Some(Handle(cur))),
                Some(next) => cur = next,
                None => return Err(ListError::NotFound(h)),
            }
        }
    }

    /// Remove `h` from the chain. Splicing out an inner node makes its
    /// predecessor the current node.
    pub fn remove_node(&mut self, h: Handle) -> Result<bool, ListError> {
        let Some(Handle(prev)) = self.get_prev(h)? else {
            self.pop_front()?;
            return Ok(true);
        };
        if self.roles.holds(Role::Tail, h.0) {
            self.pop_back()?;
            return Ok(true);
        }
        let node = self.unlink(h.0)?;
        self.node_mut(prev).next = node.next;
        self.len -= 1;
        self.assign(Role::Current, Some(prev));
        debug!(id = h.0, len = self.len, "remove_node");
        Ok(true)
    }

    /// Insert a new node with `value` right after `before`.
    pub fn insert_after(
        &mut self,
        before: Handle,
        value: impl Into<Entry>,
    ) -> Result<Handle, ListError> {
        let anchor = self.nodes.get(&before.0).ok_or(ListError::NotFound(before))?;
        if anchor.next.is_none() {
            return Ok(self.push_back(value));
        }
        let id = self.splice_after(before.0, value.into());
        self.assign(Role::Current, Some(id));
        Ok(Handle(id))
    }

    /// Insert a new node with `value` right before `after`.
    pub fn insert_before(
        &mut self,
        after: Handle,
        value: impl Into<Entry>,
    ) -> Result<Handle, ListError> {
        let Some(Handle(prev)) = self.get_prev(after)? else {
            return Ok(self.push_front(value));
        };
        let id = self.splice_after(prev, value.into());
        self.assign(Role::Current, Some(id));
        Ok(Handle(id))
    }

    /// Ordered insertion: the new node goes before the first node whose value
    /// is greater than `value`, or at the tail if there is none.
    pub fn insert(&mut self, value: impl Into<Entry>) -> Handle {
        let value = value.into();
        let mut prev = None;
        let mut cur = self.roles.get(Role::Head);
        while let Some(id) = cur {
            self.traversed_on_insert += 1;
            if value < self.nodes[&id].value {
                return match prev {
                    None => self.push_front(value),
                    Some(p) => {
                        let new = self.splice_after(p, value);
                        self.assign(Role::Current, Some(new));
                        Handle(new)
                    }
                };
            }
            prev = Some(id);
            cur = self.nodes[&id].next;
        }
        self.push_back(value)
    }

    /// Make `h` the current node.
    pub fn set_current(&mut self, h: Handle) -> Result<(), ListError> {
        self.require_live(h)?;
        self.assign(Role::Current, Some(h.0));
        Ok(())
    }

    /// Make `h` the highlighted node. The previously highlighted node falls
    /// back to the color of the roles it still holds.
    pub fn highlight(&mut self, h: Handle) -> Result<(), ListError> {
        self.require_live(h)?;
        self.assign(Role::Highlighted, Some(h.0));
        Ok(())
    }

    /// Moves `role` to `id` and recolors both the old and the new holder.
    fn assign(&mut self, role: Role, id: Option<usize>) {
        let previous = self.roles.set(role, id);
        if let Some(old) = previous.filter(|old| Some(*old) != id) {
            let resting = self.roles.resting_color(old);
            if let Some(node) = self.nodes.get_mut(&old) {
                node.color = resting;
            }
        }
        if let Some(node) = id.and_then(|id| self.nodes.get_mut(&id)) {
            node.color = role.color();
        }
    }

    fn alloc(&mut self, value: Entry) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert(id, Node::new(id, value));
        id
    }

    fn splice_after(&mut self, prev: usize, value: Entry) -> usize {
        let id = self.alloc(value);
        let after = self.node_mut(prev).next.replace(id);
        self.node_mut(id).next = after;
        self.len += 1;
        id
    }

    /// Takes `id` out of the arena and drops every role it held. Links into
    /// it are the caller's to fix.
    fn unlink(&mut self, id: usize) -> Result<Node, ListError> {
        let node = self
            .nodes
            .remove(&id)
            .ok_or(ListError::NotFound(Handle(id)))?;
        self.roles.release(id);
        Ok(node)
    }

    fn require_live(&self, h: Handle) -> Result<(), ListError> {
        if self.nodes.contains_key(&h.0) {
            Ok(())
        } else {
            Err(ListError::NotFound(h))
        }
    }

    fn node_mut(&mut self, id: usize) -> &mut Node {
        self.nodes.get_mut(&id).expect("linked id is live")
    }
}

impl fmt::Display for OrderedActorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{value}\n\n")?;
        }
        Ok(())
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.list.nodes[&self.cur?];
        self.cur = node.next;
        Some(&node.value)
    }
}

impl<'a> Iterator for IterHandles<'a> {
    type Item = (Handle, &'a Entry);

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.list.nodes[&self.cur?];
        self.cur = node.next;
        Some((Handle(node.id), &node.value))
    }
}
