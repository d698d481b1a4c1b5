//! Room search by name, alias or room number

use crate::graph::{Room, RoomCatalog};
use super::types::SearchResult;

/// Case-insensitive substring search over the room catalog
#[derive(Debug, Clone, Default)]
pub struct RoomSearch {
    /// Raw query text as the user typed it
    pub query: String,
    /// Maximum number of results
    pub limit: Option<usize>,
}

impl RoomSearch {
    /// Create a new search for the given text
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: None,
        }
    }

    /// Limit number of results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Execute the search against a catalog
    ///
    /// An empty (or all-whitespace) query matches nothing. Results keep
    /// catalog order.
    pub fn execute(&self, catalog: &RoomCatalog) -> SearchResult {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return SearchResult::empty(needle);
        }

        let matches = catalog.rooms.iter().filter(|room| Self::matches(room, &needle));
        let results: Vec<Room> = match self.limit {
            Some(limit) => matches.take(limit).cloned().collect(),
            None => matches.cloned().collect(),
        };

        SearchResult::from_rooms(needle, results)
    }

    fn matches(room: &Room, needle: &str) -> bool {
        room.label.to_lowercase().contains(needle)
            || room
                .aliases
                .iter()
                .any(|alias| alias.to_lowercase().contains(needle))
            || room.room_id.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> RoomCatalog {
        RoomCatalog::new(vec![
            Room::new("101", "Computer Lab", 1, "node_101").with_alias("IT room"),
            Room::new("102", "Chemistry", 1, "node_102").with_alias("lab 2"),
            Room::new("201", "Library", 2, "node_201").with_alias("Бібліотека"),
            Room::new("210", "Director's office", 2, "node_210"),
        ])
    }

    fn room_ids(result: &SearchResult) -> Vec<&str> {
        result.results.iter().map(|r| r.room_id.as_str()).collect()
    }

    #[test]
    fn test_search_by_label_case_insensitive() {
        let result = RoomSearch::new("LIBRARY").execute(&catalog());
        assert_eq!(room_ids(&result), vec!["201"]);
        assert_eq!(result.count, 1);
        assert_eq!(result.query, "library");
    }

    #[test]
    fn test_search_by_alias() {
        let result = RoomSearch::new("it room").execute(&catalog());
        assert_eq!(room_ids(&result), vec!["101"]);
    }

    #[test]
    fn test_search_by_non_ascii_alias() {
        let result = RoomSearch::new("бібліо").execute(&catalog());
        assert_eq!(room_ids(&result), vec!["201"]);
    }

    #[test]
    fn test_search_matches_label_and_alias_in_catalog_order() {
        // "lab" hits a label (Computer Lab) and an alias (lab 2)
        let result = RoomSearch::new("lab").execute(&catalog());
        assert_eq!(room_ids(&result), vec!["101", "102"]);
    }

    #[test]
    fn test_search_by_room_id() {
        let result = RoomSearch::new("21").execute(&catalog());
        assert_eq!(room_ids(&result), vec!["210"]);
    }

    #[test]
    fn test_search_empty_query() {
        let result = RoomSearch::new("   ").execute(&catalog());
        assert!(result.results.is_empty());
        assert_eq!(result.count, 0);
        assert_eq!(result.query, "");
    }

    #[test]
    fn test_search_with_limit() {
        let result = RoomSearch::new("1").limit(2).execute(&catalog());
        assert_eq!(result.count, 2);
        assert_eq!(room_ids(&result), vec!["101", "102"]);
    }

    #[test]
    fn test_search_no_match() {
        let result = RoomSearch::new("gym").execute(&catalog());
        assert_eq!(result.count, 0);
    }
}
