//! The stochastic instance sampler.
//!
//! Each customer is produced in three independent steps: pick the sampling
//! region, draw a location from that region's support, then draw a demand
//! conditioned on the realised distance to the depot. The demand step never
//! sees which region was picked, so a far-region draw that lands inside the
//! drone radius gets near-region demand statistics.

use crate::config::Config;
use crate::error::{GeneratorError, Result};
use crate::instance::{Customer, Instance, Point};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f64::consts::PI;

/// Sampling support used for a customer location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Disk of radius equal to the drone radius, centred on the depot
    Near,
    /// The whole map square
    Far,
}

/// Generates instances from a fixed configuration and a private random source.
pub struct InstanceSampler {
    config: Config,
    drone_radius: f64,
    depot: Point,
    seed: u64,
    rng: ChaCha8Rng,
}

impl InstanceSampler {
    /// Create a sampler. Without a seed a fresh one is drawn from the thread
    /// RNG; it can be read back with [`InstanceSampler::seed`] to replay the run.
    pub fn new(config: Config, seed: Option<u64>) -> Result<Self> {
        config.validate()?;

        let seed = seed.unwrap_or_else(rand::random);
        let drone_radius = config.drone_radius();

        Ok(InstanceSampler {
            config,
            drone_radius,
            depot: Point::origin(),
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn drone_radius(&self) -> f64 {
        self.drone_radius
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate one instance.
    pub fn generate(&mut self) -> Result<Instance> {
        let mut customers = Vec::with_capacity(self.config.num_customers);

        for _ in 0..self.config.num_customers {
            let region = self.choose_region();
            let location = self.sample_location(region)?;
            let demand = self.sample_demand(location.distance(&self.depot));
            customers.push(Customer::new(location, true, demand));
        }

        Ok(Instance {
            num_trucks: self.config.num_trucks,
            num_drones: self.config.num_drones,
            depot: self.depot,
            customers,
        })
    }

    /// Pick the sampling region of the next customer.
    pub fn choose_region(&mut self) -> Region {
        if self.rng.gen::<f64>() < self.config.p_near {
            Region::Near
        } else {
            Region::Far
        }
    }

    /// Draw a location from the support of `region`.
    pub fn sample_location(&mut self, region: Region) -> Result<Point> {
        match region {
            Region::Near => self.sample_near_location(),
            Region::Far => Ok(self.sample_far_location()),
        }
    }

    /// Uniform point in the drone disk, resampled until it lies on the map.
    ///
    /// The square root on the radial draw gives uniform density per unit
    /// area rather than per unit radius.
    pub fn sample_near_location(&mut self) -> Result<Point> {
        let half = self.config.half_size();
        let mut attempts: u64 = 0;

        loop {
            let rho = self.drone_radius * self.rng.gen::<f64>().sqrt();
            let theta = 2.0 * PI * self.rng.gen::<f64>();

            let x = self.depot.x + rho * theta.cos();
            let y = self.depot.y + rho * theta.sin();

            if (-half..=half).contains(&x) && (-half..=half).contains(&y) {
                return Ok(Point::new(x, y));
            }

            attempts += 1;
            if let Some(cap) = self.config.max_rejection_attempts {
                if attempts >= cap {
                    return Err(GeneratorError::SamplingExhausted { attempts });
                }
            }
        }
    }

    /// Uniform point on the whole map square.
    pub fn sample_far_location(&mut self) -> Point {
        let half = self.config.half_size();
        let x = self.rng.gen_range(-half..=half);
        let y = self.rng.gen_range(-half..=half);
        Point::new(x, y)
    }

    /// Draw a demand for a customer at `distance` from the depot.
    ///
    /// Light demands fall in `[min_demand, light_max_demand)`, heavy ones in
    /// `[light_max_demand, heavy_max_demand)`.
    pub fn sample_demand(&mut self, distance: f64) -> f64 {
        let p_light = if distance <= self.drone_radius {
            self.config.p_light_near
        } else {
            self.config.p_light_far
        };

        if self.rng.gen::<f64>() < p_light {
            self.rng
                .gen_range(self.config.min_demand..self.config.light_max_demand)
        } else {
            self.rng
                .gen_range(self.config.light_max_demand..self.config.heavy_max_demand)
        }
    }
}

/// Generate a single instance from `config`, optionally seeded.
pub fn sample_instance(config: Config, seed: Option<u64>) -> Result<Instance> {
    InstanceSampler::new(config, seed)?.generate()
}

