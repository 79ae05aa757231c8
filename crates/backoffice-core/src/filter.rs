// Pure filter engine
//
// Every screen derives its visible list with `visible(all, query)`: a
// recompute-from-scratch pass over the mirrored collection. Collections are
// tens to low hundreds of items, so there is no incremental update.
//
// Predicate rules:
// - the free-text search matches case-insensitively as a substring, OR-ed
//   across the item's designated text fields,
// - scalar and range filters are AND-combined with the search and with each
//   other,
// - a predicate is active iff its value is non-empty; inactive predicates
//   impose no constraint, so an empty query is the identity.

use backoffice_contracts::{Category, Event, Guest, User};

/// Case-insensitive free-text search across one or more text fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSearch(String);

impl TextSearch {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.0 = text.into();
    }

    /// Whitespace-only input imposes no constraint.
    pub fn is_active(&self) -> bool {
        !self.0.trim().is_empty()
    }

    /// True if any field contains the search text (or the search is
    /// inactive).
    pub fn matches_any<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        if !self.is_active() {
            return true;
        }
        let needle = self.0.trim().to_lowercase();
        fields
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Inclusive numeric range with independently optional bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumericRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumericRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn at_most(max: f64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Build a range from raw form input. Non-numeric input is treated as an
    /// absent bound, never as an error.
    pub fn from_input(min: &str, max: &str) -> Self {
        Self {
            min: min.trim().parse().ok(),
            max: max.trim().parse().ok(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    /// Both bounds are inclusive.
    pub fn contains(&self, value: f64) -> bool {
        if let Some(min) = self.min {
            if value < min {
                return false;
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return false;
            }
        }
        true
    }
}

/// A predicate over one resource type. Implementations AND their active
/// parts together.
pub trait Filter<T> {
    fn matches(&self, item: &T) -> bool;
}

/// Narrow `all` to the visible subset. Order-preserving; no implicit sort.
pub fn visible<T: Clone, F: Filter<T>>(all: &[T], filter: &F) -> Vec<T> {
    all.iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect()
}

/// Filter state for the categories screen.
#[derive(Debug, Clone, Default)]
pub struct CategoryQuery {
    pub search: TextSearch,
}

impl Filter<Category> for CategoryQuery {
    fn matches(&self, category: &Category) -> bool {
        self.search.matches_any([category.name.as_str()])
    }
}

/// Filter state for the events screen. Search covers title and location.
#[derive(Debug, Clone, Default)]
pub struct EventQuery {
    pub search: TextSearch,
    /// Exact match on the event's category.
    pub category_id: Option<i64>,
    /// Case-insensitive substring match on the location field.
    pub location: String,
    pub price: NumericRange,
    pub min_capacity: NumericRange,
}

impl Filter<Event> for EventQuery {
    fn matches(&self, event: &Event) -> bool {
        if !self
            .search
            .matches_any([event.title.as_str(), event.location.as_str()])
        {
            return false;
        }
        if let Some(category_id) = self.category_id {
            if event.category_id != category_id {
                return false;
            }
        }
        if !self.location.trim().is_empty()
            && !event
                .location
                .to_lowercase()
                .contains(&self.location.trim().to_lowercase())
        {
            return false;
        }
        self.price.contains(event.price) && self.min_capacity.contains(f64::from(event.min_capacity))
    }
}

/// Filter state for the users screen. Search covers email and name.
#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    pub search: TextSearch,
    pub balance: NumericRange,
}

impl Filter<User> for UserQuery {
    fn matches(&self, user: &User) -> bool {
        self.search.matches_any([user.email.as_str(), user.name.as_str()])
            && self.balance.contains(user.balance)
    }
}

/// Filter state for the guests screen. Search covers email and name.
#[derive(Debug, Clone, Default)]
pub struct GuestQuery {
    pub search: TextSearch,
}

impl Filter<Guest> for GuestQuery {
    fn matches(&self, guest: &Guest) -> bool {
        self.search.matches_any([guest.email.as_str(), guest.name.as_str()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<Category> {
        vec![
            Category {
                category_id: 1,
                name: "Web".into(),
            },
            Category {
                category_id: 2,
                name: "Art".into(),
            },
        ]
    }

    fn event(event_id: i64, title: &str, price: f64, min_capacity: u32) -> Event {
        Event {
            event_id,
            title: title.into(),
            start_date: "2030-01-01".parse().unwrap(),
            end_date: "2030-01-02".parse().unwrap(),
            location: "Lisbon".into(),
            category_id: 1,
            image: String::new(),
            price,
            min_capacity,
            max_capacity: min_capacity * 2,
            user_ids: vec![],
        }
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let all = categories();
        let query = CategoryQuery {
            search: TextSearch::new("we"),
        };
        let result = visible(&all, &query);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Web");
    }

    #[test]
    fn empty_query_is_identity_and_order_preserving() {
        let all = categories();
        let query = CategoryQuery::default();
        assert_eq!(visible(&all, &query), all);
    }

    #[test]
    fn empty_collection_yields_empty_visible_set() {
        let query = CategoryQuery {
            search: TextSearch::new("anything"),
        };
        assert!(visible(&[], &query).is_empty());
    }

    #[test]
    fn filter_is_idempotent() {
        let all = categories();
        let query = CategoryQuery {
            search: TextSearch::new("a"),
        };
        let once = visible(&all, &query);
        let twice = visible(&once, &query);
        assert_eq!(once, twice);
    }

    #[test]
    fn adding_a_predicate_never_grows_the_visible_set() {
        let all = vec![
            event(1, "Tech Conference", 10.0, 10),
            event(2, "Tech Meetup", 50.0, 50),
            event(3, "Art Fair", 100.0, 100),
        ];
        let base = EventQuery {
            search: TextSearch::new("tech"),
            ..EventQuery::default()
        };
        let narrowed = EventQuery {
            price: NumericRange::at_least(20.0),
            ..base.clone()
        };
        let wide = visible(&all, &base);
        let narrow = visible(&all, &narrowed);
        assert!(narrow.iter().all(|e| wide.contains(e)));
        assert!(narrow.len() <= wide.len());
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let range = NumericRange::new(Some(10.0), Some(100.0));
        assert!(range.contains(10.0));
        assert!(range.contains(100.0));
        assert!(!range.contains(9.99));
        assert!(!range.contains(100.01));
    }

    #[test]
    fn min_capacity_filter_scenario() {
        let all = vec![
            event(1, "A", 0.0, 10),
            event(2, "B", 0.0, 50),
            event(3, "C", 0.0, 100),
        ];
        let query = EventQuery {
            min_capacity: NumericRange::at_least(20.0),
            ..EventQuery::default()
        };
        let result = visible(&all, &query);
        let caps: Vec<u32> = result.iter().map(|e| e.min_capacity).collect();
        assert_eq!(caps, vec![50, 100]);
    }

    #[test]
    fn non_numeric_range_input_is_treated_as_absent() {
        let range = NumericRange::from_input("abc", "");
        assert!(!range.is_active());
        assert!(range.contains(-1000.0));

        let range = NumericRange::from_input(" 20 ", "oops");
        assert_eq!(range.min, Some(20.0));
        assert_eq!(range.max, None);
    }

    #[test]
    fn whitespace_search_imposes_no_constraint() {
        let all = categories();
        let query = CategoryQuery {
            search: TextSearch::new("   "),
        };
        assert_eq!(visible(&all, &query), all);
    }

    #[test]
    fn user_search_covers_email_and_name() {
        let users = vec![
            User {
                user_id: 1,
                email: "john.doe@example.com".into(),
                name: "John Doe".into(),
                password: String::new(),
                balance: 5.0,
                event_ids: vec![],
            },
            User {
                user_id: 2,
                email: "jane@example.com".into(),
                name: "Jane Smith".into(),
                password: String::new(),
                balance: 50.0,
                event_ids: vec![],
            },
        ];
        let query = UserQuery {
            search: TextSearch::new("smith"),
            ..UserQuery::default()
        };
        let result = visible(&users, &query);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].user_id, 2);

        let query = UserQuery {
            search: TextSearch::new("example.com"),
            balance: NumericRange::at_least(10.0),
        };
        let result = visible(&users, &query);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].user_id, 2);
    }
}
