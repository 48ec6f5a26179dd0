use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::path::Path;

/// A named place on campus with its map coordinates and walkable neighbors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub neighbors: Vec<String>,
}

impl Place {
    fn new(name: &str, lat: f64, lon: f64, neighbors: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            lat,
            lon,
            neighbors: neighbors.iter().map(|n| n.to_string()).collect(),
        }
    }
}

/// On-disk layout of a campus definition
#[derive(Debug, Deserialize)]
struct CampusFile {
    places: Vec<Place>,
}

/// Immutable campus graph
///
/// Places keep their declaration order. Breadth-first search visits
/// neighbors in the order they are listed, so the shortest path returned
/// for a pair is always the same one.
#[derive(Debug, Clone)]
pub struct Campus {
    places: Vec<Place>,
    index: HashMap<String, usize>,
    adjacency: Vec<Vec<usize>>,
}

impl Campus {
    /// The built-in campus
    pub fn default_campus() -> Self {
        let places = vec![
            Place::new("gate 1", 30.2730, 78.9990, &["cafeteria", "gate 2"]),
            Place::new("gate 2", 30.2748, 78.9994, &["gate 1", "cse block", "boys hostel"]),
            Place::new("cafeteria", 30.2734, 78.9993, &["gate 1", "btech block"]),
            Place::new(
                "btech block",
                30.2737,
                78.9996,
                &["cafeteria", "santosh library", "ravi canteen"],
            ),
            Place::new("santosh library", 30.2739, 78.9999, &["btech block"]),
            Place::new("ravi canteen", 30.2741, 78.9997, &["btech block", "boys hostel"]),
            Place::new("boys hostel", 30.2745, 79.0000, &["ravi canteen", "cse block"]),
            Place::new("cse block", 30.2750, 78.9997, &["gate 2", "boys hostel"]),
        ];

        // The built-in table is known to be consistent.
        match Self::from_places(places) {
            Ok(campus) => campus,
            Err(err) => unreachable!("built-in campus is invalid: {err}"),
        }
    }

    /// Build a campus from a list of places
    ///
    /// Names are normalized (trimmed, lower-cased). Fails when the list is
    /// empty, a name repeats, or a neighbor names an unknown place.
    pub fn from_places(places: Vec<Place>) -> Result<Self> {
        if places.is_empty() {
            bail!("campus must contain at least one place");
        }

        let places: Vec<Place> = places
            .into_iter()
            .map(|place| Place {
                name: Self::normalize(&place.name),
                neighbors: place.neighbors.iter().map(|n| Self::normalize(n)).collect(),
                ..place
            })
            .collect();

        let mut index = HashMap::with_capacity(places.len());
        for (i, place) in places.iter().enumerate() {
            if place.name.is_empty() {
                bail!("place #{} has an empty name", i + 1);
            }
            if index.insert(place.name.clone(), i).is_some() {
                bail!("duplicate place name: '{}'", place.name);
            }
        }

        let mut adjacency = Vec::with_capacity(places.len());
        for place in &places {
            let mut edges = Vec::with_capacity(place.neighbors.len());
            for neighbor in &place.neighbors {
                match index.get(neighbor) {
                    Some(&j) => edges.push(j),
                    None => bail!(
                        "place '{}' lists unknown neighbor '{}'",
                        place.name,
                        neighbor
                    ),
                }
            }
            adjacency.push(edges);
        }

        Ok(Self {
            places,
            index,
            adjacency,
        })
    }

    /// Load a campus from a JSON file of the form `{ "places": [...] }`
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read campus file {}", path.display()))?;
        let file: CampusFile = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse campus file {}", path.display()))?;
        let campus = Self::from_places(file.places)
            .with_context(|| format!("Invalid campus file {}", path.display()))?;

        tracing::debug!("Loaded {} places from {}", campus.len(), path.display());
        Ok(campus)
    }

    /// Canonical form of a user-supplied place name
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn place(&self, name: &str) -> Option<&Place> {
        self.index.get(name).map(|&i| &self.places[i])
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Place names in declaration order
    pub fn locations(&self) -> Vec<String> {
        self.places.iter().map(|p| p.name.clone()).collect()
    }

    /// Shortest path from `start` to `end` by number of hops
    ///
    /// Both names must already be normalized. Returns `None` when either
    /// name is unknown or `end` is unreachable.
    pub fn find_path(&self, start: &str, end: &str) -> Option<Vec<String>> {
        let &from = self.index.get(start)?;
        let &to = self.index.get(end)?;

        let mut previous: Vec<Option<usize>> = vec![None; self.places.len()];
        let mut seen = vec![false; self.places.len()];
        let mut queue = VecDeque::from([from]);
        seen[from] = true;

        while let Some(node) = queue.pop_front() {
            if node == to {
                let mut path = vec![node];
                let mut cursor = node;
                while let Some(prev) = previous[cursor] {
                    path.push(prev);
                    cursor = prev;
                }
                path.reverse();
                return Some(path.into_iter().map(|i| self.places[i].name.clone()).collect());
            }

            for &next in &self.adjacency[node] {
                if !seen[next] {
                    seen[next] = true;
                    previous[next] = Some(node);
                    queue.push_back(next);
                }
            }
        }

        None
    }
}

impl Default for Campus {
    fn default() -> Self {
        Self::default_campus()
    }
}
