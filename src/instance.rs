//! Instance data structures and the text reader.

use crate::error::{GeneratorError, Result};
use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A location on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// The map origin, where the depot always sits.
    pub fn origin() -> Self {
        Point::new(0.0, 0.0)
    }

    /// Calculate the Euclidean distance between two points.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A customer of a generated instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub location: Point,
    /// Whether a drone may serve this customer
    pub dronable: bool,
    pub demand: f64,
}

impl Customer {
    /// Create a new customer.
    pub fn new(location: Point, dronable: bool, demand: f64) -> Self {
        Customer {
            location,
            dronable,
            demand,
        }
    }
}

/// One generated problem input: fleet size, depot and customers.
///
/// Customers are kept in generation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub num_trucks: usize,
    pub num_drones: usize,
    pub depot: Point,
    pub customers: Vec<Customer>,
}

impl Instance {
    /// Get the number of customers.
    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    /// Distance of every customer from the depot, in customer order.
    pub fn depot_distances(&self) -> Vec<f64> {
        self.customers
            .iter()
            .map(|c| c.location.distance(&self.depot))
            .collect()
    }

    /// Summarise the instance. Near customers are counted by their true
    /// distance to the depot, whichever sampling branch produced them.
    pub fn statistics(&self, drone_radius: f64, light_max_demand: f64) -> InstanceStatistics {
        let distances = self.depot_distances();
        let demands: Vec<f64> = self.customers.iter().map(|c| c.demand).collect();

        InstanceStatistics {
            total_customers: self.customers.len(),
            near_count: distances.iter().filter(|&&d| d <= drone_radius).count(),
            light_count: demands.iter().filter(|&&d| d < light_max_demand).count(),
            drone_radius,
            light_max_demand,
            demand: Summary::of(&demands),
            distance: Summary::of(&distances),
        }
    }

    /// Load an instance from a file in the text format written by
    /// [`crate::utils::save_instance`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| GeneratorError::io_at("reading", path, e))?;
        Self::parse(&content)
    }

    /// Parse an instance from its text form. Fields are split on whitespace,
    /// so column alignment does not matter.
    pub fn parse(content: &str) -> Result<Self> {
        let mut lines = content.lines().filter(|l| !l.trim().is_empty());

        let num_trucks = parse_header_count(lines.next(), "trucks_count")?;
        let num_drones = parse_header_count(lines.next(), "drones_count")?;
        let declared = parse_header_count(lines.next(), "customers")?;

        let depot_line = lines
            .next()
            .ok_or_else(|| GeneratorError::Parse("missing depot line".to_string()))?;
        let parts: Vec<&str> = depot_line.split_whitespace().collect();
        if parts.len() != 3 || parts[0] != "depot" {
            return Err(GeneratorError::Parse(format!(
                "malformed depot line: {:?}",
                depot_line
            )));
        }
        let depot = Point::new(parse_f64(parts[1])?, parse_f64(parts[2])?);

        // Column header
        lines
            .next()
            .ok_or_else(|| GeneratorError::Parse("missing customer header".to_string()))?;

        let mut customers = Vec::new();
        for line in lines {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() != 4 {
                return Err(GeneratorError::Parse(format!(
                    "expected 4 customer fields, got {}: {:?}",
                    parts.len(),
                    line
                )));
            }
            let dronable = match parts[2] {
                "1" => true,
                "0" => false,
                other => {
                    return Err(GeneratorError::Parse(format!(
                        "dronable flag must be 0 or 1, got {:?}",
                        other
                    )))
                }
            };
            customers.push(Customer::new(
                Point::new(parse_f64(parts[0])?, parse_f64(parts[1])?),
                dronable,
                parse_f64(parts[3])?,
            ));
        }

        if customers.len() != declared {
            return Err(GeneratorError::Parse(format!(
                "header declares {} customers but {} were found",
                declared,
                customers.len()
            )));
        }

        Ok(Instance {
            num_trucks,
            num_drones,
            depot,
            customers,
        })
    }
}

fn parse_header_count(line: Option<&str>, key: &str) -> Result<usize> {
    let line = line.ok_or_else(|| GeneratorError::Parse(format!("missing {} line", key)))?;
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [k, v] if *k == key => v
            .parse::<usize>()
            .map_err(|e| GeneratorError::Parse(format!("invalid {} {:?}: {}", key, v, e))),
        _ => Err(GeneratorError::Parse(format!(
            "expected `{} <int>`, got {:?}",
            key, line
        ))),
    }
}

fn parse_f64(s: &str) -> Result<f64> {
    s.parse::<f64>()
        .map_err(|e| GeneratorError::Parse(format!("invalid number {:?}: {}", s, e)))
}

/// Minimum, maximum and mean of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

impl Summary {
    /// Summarise a series; `None` when it is empty.
    pub fn of(values: &[f64]) -> Option<Self> {
        let (min, max) = match values.iter().copied().minmax() {
            MinMaxResult::NoElements => return None,
            MinMaxResult::OneElement(v) => (v, v),
            MinMaxResult::MinMax(lo, hi) => (lo, hi),
        };
        let avg = values.iter().sum::<f64>() / values.len() as f64;
        Some(Summary { min, max, avg })
    }
}

/// Statistics reported after an instance is generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceStatistics {
    pub total_customers: usize,
    /// Customers with distance to depot at most the drone radius
    pub near_count: usize,
    /// Customers with demand strictly below the light threshold
    pub light_count: usize,
    pub drone_radius: f64,
    pub light_max_demand: f64,
    pub demand: Option<Summary>,
    pub distance: Option<Summary>,
}

impl InstanceStatistics {
    /// Fraction of customers inside the drone radius.
    pub fn near_fraction(&self) -> f64 {
        fraction(self.near_count, self.total_customers)
    }

    /// Fraction of customers with light demand.
    pub fn light_fraction(&self) -> f64 {
        fraction(self.light_count, self.total_customers)
    }
}

fn fraction(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}
