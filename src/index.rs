//! Actor-specific operations over [`OrderedActorList`].
//!
//! Actor and film names use underscores in place of spaces, e.g.
//! `Kevin_Bacon_(I)`. Lookups are exact and case sensitive.

use crate::{
    errors::ListError,
    handle::Handle,
    list::OrderedActorList,
    snapshot::Snapshot,
};
use std::fmt;
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct ActorFilmIndex {
    list: OrderedActorList,
}

impl ActorFilmIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the underlying list.
    pub fn list(&self) -> &OrderedActorList {
        &self.list
    }

    /// Number of actors.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn actor_name(&self, h: Handle) -> Option<&str> {
        self.list.get(h).map(|e| e.key())
    }

    pub fn films(&self, h: Handle) -> Option<&[String]> {
        self.list.get(h).map(|e| e.items())
    }

    /// First node whose actor name equals `name` exactly.
    pub fn find_actor(&self, name: &str) -> Option<Handle> {
        self.list
            .iter_handles()
            .find(|(_, entry)| entry.key() == name)
            .map(|(h, _)| h)
    }

    /// Appends `film_name` to the actor's films, creating the actor in sorted
    /// position first if needed. Both names are trimmed.
    pub fn insert_film(&mut self, actor_name: &str, film_name: &str) -> Handle {
        let actor_name = actor_name.trim();
        let film_name = film_name.trim();
        let h = match self.find_actor(actor_name) {
            Some(h) => h,
            None => {
                debug!(actor = actor_name, "new actor");
                self.list.insert(actor_name)
            }
        };
        if let Some(entry) = self.list.get_mut(h) {
            entry.push_item(film_name);
        }
        h
    }

    /// Removes the actor. `Ok(false)` if no such actor.
    pub fn remove_actor(&mut self, name: &str) -> Result<bool, ListError> {
        match self.find_actor(name) {
            None => Ok(false),
            Some(h) => {
                info!(actor = name, "removing actor");
                self.list.remove_node(h)
            }
        }
    }

    /// Highlights the actor. `Ok(false)` if no such actor.
    pub fn show_actor(&mut self, name: &str) -> Result<bool, ListError> {
        match self.find_actor(name) {
            None => Ok(false),
            Some(h) => {
                self.list.highlight(h)?;
                Ok(true)
            }
        }
    }

    /// Immutable view of the whole chain for a renderer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(&self.list)
    }
}

impl fmt::Display for ActorFilmIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.list, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Color;

    fn bacon_and_ryder() -> ActorFilmIndex {
        let mut idx = ActorFilmIndex::new();
        idx.insert_film("Kevin_Bacon_(I)", "Animal_House_(1978)");
        idx.insert_film("Winona_Ryder", "Being_John_Malkovich_(1999)");
        idx
    }

    #[test]
    fn actor_names_from_head_and_tail() {
        let idx = bacon_and_ryder();
        let list = idx.list();
        assert_eq!(idx.actor_name(list.head().unwrap()), Some("Kevin_Bacon_(I)"));
        assert_eq!(idx.actor_name(list.tail().unwrap()), Some("Winona_Ryder"));
    }

    #[test]
    fn insert_film_appends_to_existing_actor() {
        let mut idx = bacon_and_ryder();
        let head = idx.list().head().unwrap();
        let tail = idx.list().tail().unwrap();
        assert_eq!(
            idx.list().get(tail).unwrap().to_string(),
            "Winona_Ryder\nBeing_John_Malkovich_(1999)"
        );

        let h = idx.insert_film(" Kevin_Bacon_(I)", "Air_Up_There,_The_(1994)\n");
        assert_eq!(h, head);
        assert_eq!(idx.len(), 2);
        assert_eq!(
            idx.list().get(head).unwrap().to_string(),
            "Kevin_Bacon_(I)\nAnimal_House_(1978)\nAir_Up_There,_The_(1994)"
        );
        assert_eq!(
            idx.list().get(head).unwrap().label(),
            "Kevin Bacon (I)<br>Animal House (1978)<br>Air Up There, The (1994)"
        );
    }

    #[test]
    fn find_actor_is_exact() {
        let idx = bacon_and_ryder();
        assert_eq!(idx.find_actor("Kevin_Bacon_(I)"), idx.list().head());
        assert_eq!(idx.find_actor("Kevin_Bacon_(Xiv)"), None);
        assert_eq!(idx.find_actor("kevin_bacon_(i)"), None);
    }

    #[test]
    fn remove_actor_once() {
        let mut idx = ActorFilmIndex::new();
        idx.insert_film("Kevin_Bacon_(I)", "Animal_House_(1978)");
        assert_eq!(idx.remove_actor("Kevin_Bacon_(I)"), Ok(true));
        assert_eq!(idx.list().head(), None);
        assert_eq!(idx.remove_actor("Kevin_Bacon_(I)"), Ok(false));
    }

    #[test]
    fn show_actor_highlights() {
        let mut idx = bacon_and_ryder();
        assert_eq!(idx.show_actor("Nobody"), Ok(false));
        assert_eq!(idx.show_actor("Winona_Ryder"), Ok(true));
        let tail = idx.list().tail().unwrap();
        assert_eq!(idx.list().highlighted(), Some(tail));
        assert_eq!(idx.list().color(tail), Some(Color::Highlight));
    }

    #[test]
    fn shown_actor_stays_highlighted_after_new_head() {
        let mut idx = ActorFilmIndex::new();
        idx.insert_film("Mm", "F1");
        idx.insert_film("Zz", "F2");
        assert_eq!(idx.show_actor("Mm"), Ok(true));
        idx.insert_film("Aa", "F3");

        let mm = idx.find_actor("Mm").unwrap();
        assert_eq!(idx.list().highlighted(), Some(mm));
        let colors: Vec<_> = idx
            .snapshot()
            .nodes
            .into_iter()
            .map(|n| (n.value, n.color))
            .collect();
        assert_eq!(
            colors,
            vec![
                ("Aa\nF3".to_owned(), Color::Head),
                ("Mm\nF1".to_owned(), Color::Highlight),
                ("Zz\nF2".to_owned(), Color::Tail),
            ]
        );
    }

    #[test]
    fn display_lists_every_actor() {
        let idx = bacon_and_ryder();
        assert_eq!(
            idx.to_string(),
            "Kevin_Bacon_(I)\nAnimal_House_(1978)\n\nWinona_Ryder\nBeing_John_Malkovich_(1999)\n\n"
        );
    }
}
