//! Fixed storage keys, one logical record per key

/// Roster of people (`Vec<Person>`)
pub const PEOPLE: &str = "coffee_people_v1";

/// Saved favorites (`Vec<PersonOrder>`)
pub const FAVORITES: &str = "favorites.v1";

/// Day-bucketed history, newest first (`Vec<CoffeeRunDay>`)
pub const HISTORY: &str = "history.v1";

/// Every key the stores write
pub const ALL: [&str; 3] = [PEOPLE, FAVORITES, HISTORY];
