//! Configuration parameters for instance generation.

use crate::error::{ConfigError, GeneratorError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration settings for the instance generator.
///
/// Distances are in meters, times in seconds, speeds in meters per second
/// and demands in kilograms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of customers per instance
    pub num_customers: usize,
    /// Number of trucks written to the instance header
    pub num_trucks: usize,
    /// Number of drones written to the instance header
    pub num_drones: usize,
    /// Side length of the square map; coordinates lie in `[-map_size/2, map_size/2]`
    pub map_size: f64,
    /// Maximum drone flight time for a round trip
    pub drone_endurance: f64,
    /// Drone cruise speed
    pub drone_speed: f64,
    /// Truck speed
    pub truck_speed: f64,
    /// Probability that a customer is sampled from the near region
    pub p_near: f64,
    /// Probability of a light demand for customers inside the drone radius
    pub p_light_near: f64,
    /// Probability of a light demand for customers outside the drone radius
    pub p_light_far: f64,
    /// Smallest possible demand
    pub min_demand: f64,
    /// Threshold between light and heavy demand
    pub light_max_demand: f64,
    /// Largest possible demand
    pub heavy_max_demand: f64,
    /// Cap on rejected near-region draws per customer; `None` never gives up
    pub max_rejection_attempts: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            num_customers: 20,
            num_trucks: 1,
            num_drones: 0,
            map_size: 35000.0,
            drone_endurance: 700.0,
            drone_speed: 31.2928,
            truck_speed: 15.6464,
            p_near: 0.5,
            p_light_near: 0.80,
            p_light_far: 0.50,
            min_demand: 0.1,
            light_max_demand: 1.25,
            heavy_max_demand: 49.0,
            max_rejection_attempts: Some(1_000_000),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Load a configuration from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, GeneratorError> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| GeneratorError::io_at("reading", path, e))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Maximum one-way distance a drone can fly and still return to the depot.
    pub fn drone_radius(&self) -> f64 {
        (self.drone_endurance / 2.0) * self.drone_speed
    }

    /// Half the side length of the map.
    pub fn half_size(&self) -> f64 {
        self.map_size / 2.0
    }

    /// Check every parameter invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("map_size", self.map_size),
            ("drone_endurance", self.drone_endurance),
            ("drone_speed", self.drone_speed),
            ("truck_speed", self.truck_speed),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        let radius = self.drone_radius();
        if !radius.is_finite() {
            return Err(ConfigError::NonPositive {
                name: "drone_radius",
                value: radius,
            });
        }

        for (name, value) in [
            ("p_near", self.p_near),
            ("p_light_near", self.p_light_near),
            ("p_light_far", self.p_light_far),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { name, value });
            }
        }

        let ordered = self.min_demand.is_finite()
            && self.heavy_max_demand.is_finite()
            && self.min_demand < self.light_max_demand
            && self.light_max_demand < self.heavy_max_demand
            && (self.light_max_demand - self.min_demand).is_finite()
            && (self.heavy_max_demand - self.light_max_demand).is_finite();
        if !ordered {
            return Err(ConfigError::DemandBoundsOrder {
                min_demand: self.min_demand,
                light_max_demand: self.light_max_demand,
                heavy_max_demand: self.heavy_max_demand,
            });
        }

        if self.max_rejection_attempts == Some(0) {
            return Err(ConfigError::ZeroRejectionAttempts);
        }

        Ok(())
    }

    /// Set the number of customers.
    pub fn with_num_customers(mut self, n: usize) -> Self {
        self.num_customers = n;
        self
    }

    /// Set the number of trucks.
    pub fn with_num_trucks(mut self, n: usize) -> Self {
        self.num_trucks = n;
        self
    }

    /// Set the number of drones.
    pub fn with_num_drones(mut self, n: usize) -> Self {
        self.num_drones = n;
        self
    }

    /// Set the map side length.
    pub fn with_map_size(mut self, size: f64) -> Self {
        self.map_size = size;
        self
    }

    /// Set the drone endurance.
    pub fn with_drone_endurance(mut self, seconds: f64) -> Self {
        self.drone_endurance = seconds;
        self
    }

    /// Set the drone speed.
    pub fn with_drone_speed(mut self, speed: f64) -> Self {
        self.drone_speed = speed;
        self
    }

    /// Set the truck speed.
    pub fn with_truck_speed(mut self, speed: f64) -> Self {
        self.truck_speed = speed;
        self
    }

    /// Set the near-region selection probability.
    pub fn with_p_near(mut self, p: f64) -> Self {
        self.p_near = p;
        self
    }

    /// Set the light-demand probabilities for near and far customers.
    pub fn with_light_probabilities(mut self, near: f64, far: f64) -> Self {
        self.p_light_near = near;
        self.p_light_far = far;
        self
    }

    /// Set the demand bounds.
    pub fn with_demand_bounds(mut self, min: f64, light_max: f64, heavy_max: f64) -> Self {
        self.min_demand = min;
        self.light_max_demand = light_max;
        self.heavy_max_demand = heavy_max;
        self
    }

    /// Set the rejection cap; `None` lets the near-region loop run forever.
    pub fn with_max_rejection_attempts(mut self, attempts: Option<u64>) -> Self {
        self.max_rejection_attempts = attempts;
        self
    }
}
