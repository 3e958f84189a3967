//! Location search and suggestion logic over the full event collection.
//!
//! The store only supports equality on raw stored values, so every query
//! here starts from a full scan and compares in normalized form on our side.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::dto::event::{EventLocations, SimilarLocations};
use crate::error::Result;
use crate::models::{Event, NormalizedLocation, normalize};
use crate::repository::event::EventRepository;
use crate::store::DocumentStore;

/// How suggestion candidates are put in random order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShuffleMode {
    /// Sort with a comparator that flips a fair coin on every comparison.
    /// Cheap, but the resulting permutation is not uniform.
    #[default]
    Comparator,
    /// Fisher-Yates, every permutation equally likely.
    Uniform,
}

impl FromStr for ShuffleMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "comparator" => Ok(Self::Comparator),
            "uniform" => Ok(Self::Uniform),
            other => Err(format!(
                "unknown shuffle mode '{}', expected 'comparator' or 'uniform'",
                other
            )),
        }
    }
}

impl fmt::Display for ShuffleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comparator => write!(f, "comparator"),
            Self::Uniform => write!(f, "uniform"),
        }
    }
}

/// Events whose normalized city and area both equal the normalized query.
/// Input order is preserved.
pub fn find_nearby(events: Vec<Event>, city: &str, area: &str) -> Vec<Event> {
    let location = NormalizedLocation::new(city, area);

    events
        .into_iter()
        .filter(|event| location.matches(&event.city, &event.area))
        .collect()
}

/// Distinct non-empty city and area values, in first-seen order.
pub fn distinct_locations(events: &[Event]) -> EventLocations {
    EventLocations {
        cities: distinct(events.iter().map(|e| e.city.as_str())),
        areas: distinct(events.iter().map(|e| e.area.as_str())),
    }
}

/// Cities and areas that contain the query or are contained by it.
///
/// The containment test runs both ways on lower-cased values, so a short
/// query like "york" pulls in "New York" and a long one like
/// "new york city" pulls in "York".
pub fn similar_locations(events: &[Event], city: &str, area: &str) -> SimilarLocations {
    let EventLocations { cities, areas } = distinct_locations(events);

    SimilarLocations {
        similar_cities: contained_either_way(&cities, city),
        similar_areas: contained_either_way(&areas, area),
        all_cities: cities,
        all_areas: areas,
    }
}

/// Up to `count` complete events in random order.
pub fn sample_events<R>(events: Vec<Event>, count: usize, mode: ShuffleMode, rng: &mut R) -> Vec<Event>
where
    R: Rng + ?Sized,
{
    let mut candidates: Vec<Event> = events.into_iter().filter(Event::is_complete).collect();

    match mode {
        ShuffleMode::Comparator => comparator_shuffle(&mut candidates, rng),
        ShuffleMode::Uniform => candidates.shuffle(rng),
    }

    candidates.truncate(count);
    candidates
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| !v.is_empty())
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

fn contained_either_way(candidates: &[String], query: &str) -> Vec<String> {
    let query = normalize(query);

    candidates
        .iter()
        .filter(|candidate| {
            let candidate = candidate.to_lowercase();
            candidate.contains(&query) || query.contains(&candidate)
        })
        .cloned()
        .collect()
}

/// Binary insertion sort driven by a random comparator: each comparison
/// draws a fresh uniform value in [0, 1) and orders the pair by its sign
/// against 0.5. Std's sort is not used because it may panic when the
/// comparator is not a total order.
fn comparator_shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in 1..items.len() {
        let (mut lo, mut hi) = (0, i);
        while lo < hi {
            let mid = (lo + hi) / 2;
            if 0.5 - rng.r#gen::<f64>() < 0.0 {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        items[lo..=i].rotate_right(1);
    }
}

/// Events in the given city and area. Store errors propagate.
pub async fn events_nearby(store: &dyn DocumentStore, city: &str, area: &str) -> Result<Vec<Event>> {
    let events = EventRepository::new(store).list().await?;
    let total = events.len();

    let nearby = find_nearby(events, city, area);
    tracing::debug!(city, area, total, matched = nearby.len(), "location search");

    Ok(nearby)
}

pub async fn event_locations(store: &dyn DocumentStore) -> Result<EventLocations> {
    let events = EventRepository::new(store).list().await?;
    Ok(distinct_locations(&events))
}

/// "Did you mean" suggestions. A failing store yields empty lists.
pub async fn find_similar_locations(
    store: &dyn DocumentStore,
    city: &str,
    area: &str,
) -> SimilarLocations {
    match EventRepository::new(store).list().await {
        Ok(events) => similar_locations(&events, city, area),
        Err(e) => {
            tracing::error!(error = %e, "failed to load events for location suggestions");
            SimilarLocations::default()
        }
    }
}

/// Random homepage suggestions. A failing store yields no suggestions.
pub async fn random_suggestions(
    store: &dyn DocumentStore,
    count: usize,
    mode: ShuffleMode,
) -> Vec<Event> {
    match EventRepository::new(store).list().await {
        Ok(events) => sample_events(events, count, mode, &mut rand::thread_rng()),
        Err(e) => {
            tracing::error!(error = %e, "failed to load events for suggestions");
            Vec::new()
        }
    }
}
