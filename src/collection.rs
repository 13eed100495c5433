//! Collection - the ordered film sequence and the operations handlers run on it.

use serde::{Deserialize, Serialize};

use crate::film::Film;

/// All films in insertion order.
///
/// Ids are expected to be unique, but nothing here enforces it: `next_id`
/// only looks at the last element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    films: Vec<Film>,
}

impl Collection {
    pub fn new(films: Vec<Film>) -> Self {
        Self { films }
    }

    pub fn films(&self) -> &[Film] {
        &self.films
    }

    pub fn into_films(self) -> Vec<Film> {
        self.films
    }

    pub fn len(&self) -> usize {
        self.films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Film> {
        self.films.get(index)
    }

    /// Position of the first film with this id.
    pub fn find_index_by_id(&self, id: u64) -> Option<usize> {
        self.films.iter().position(|film| film.id == id)
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Film> {
        self.films.iter().find(|film| film.id == id)
    }

    /// First film whose title matches exactly (case-sensitive).
    pub fn find_by_title(&self, title: &str) -> Option<&Film> {
        self.films.iter().find(|film| film.title == title)
    }

    /// Id for the next created film: the last element's id plus one, or 1
    /// when empty. `None` when the last id is `u64::MAX`.
    ///
    /// This is positional, not the maximum id. A collection whose last
    /// element is not the highest id gets a duplicate or lower id back.
    pub fn next_id(&self) -> Option<u64> {
        self.films.last().map(|film| film.id).unwrap_or(0).checked_add(1)
    }

    pub fn append(&mut self, film: Film) {
        self.films.push(film);
    }

    /// Replace the film at `index`, returning the old one.
    pub fn replace_at(&mut self, index: usize, film: Film) -> Option<Film> {
        let slot = self.films.get_mut(index)?;
        Some(std::mem::replace(slot, film))
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Film> {
        if index < self.films.len() {
            Some(self.films.remove(index))
        } else {
            None
        }
    }

    /// Films lasting at least `minutes`, in collection order.
    pub fn with_minimum_duration(&self, minutes: f64) -> Vec<Film> {
        self.films
            .iter()
            .filter(|film| film.duration_minutes() >= minutes)
            .cloned()
            .collect()
    }
}

impl From<Vec<Film>> for Collection {
    fn from(films: Vec<Film>) -> Self {
        Self::new(films)
    }
}
