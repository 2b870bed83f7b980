use crate::node::Color;

/// A presentation-only designation held by at most one node at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Head,
    Tail,
    Current,
    Highlighted,
}

impl Role {
    pub fn color(&self) -> Color {
        match self {
            Role::Head => Color::Head,
            Role::Tail => Color::Tail,
            Role::Current => Color::Current,
            Role::Highlighted => Color::Highlight,
        }
    }

    fn slot(&self) -> usize {
        match self {
            Role::Head => 0,
            Role::Tail => 1,
            Role::Current => 2,
            Role::Highlighted => 3,
        }
    }
}

/// Order in which surviving roles are consulted when a node loses one.
const RESTORE_ORDER: [Role; 4] = [Role::Current, Role::Highlighted, Role::Head, Role::Tail];

/// Role → node id mapping owned by the list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Roles {
    slots: [Option<usize>; 4],
}

impl Roles {
    pub(crate) fn get(&self, role: Role) -> Option<usize> {
        self.slots[role.slot()]
    }

    /// Points `role` at `id`, returning the node that held it before.
    pub(crate) fn set(&mut self, role: Role, id: Option<usize>) -> Option<usize> {
        std::mem::replace(&mut self.slots[role.slot()], id)
    }

    pub(crate) fn holds(&self, role: Role, id: usize) -> bool {
        self.get(role) == Some(id)
    }

    /// Color a node should fall back to given the roles it still holds.
    pub(crate) fn resting_color(&self, id: usize) -> Color {
        RESTORE_ORDER
            .iter()
            .find(|role| self.holds(**role, id))
            .map(Role::color)
            .unwrap_or_default()
    }

    /// Drops every role held by `id`.
    pub(crate) fn release(&mut self, id: usize) {
        for slot in self.slots.iter_mut() {
            if *slot == Some(id) {
                *slot = None;
            }
        }
    }
}
