//! # VRPD instance generator
//!
//! Generates synthetic benchmark instances for vehicle routing with drones:
//! a depot at the origin and customers with coordinates and package demands.
//!
//! Customers are drawn either from the *near* region, the disk a drone can
//! reach and return from given its endurance and speed, or uniformly from the
//! whole square map. Demand is light or heavy with a probability that depends
//! on whether the customer ended up inside the drone radius.
//!
//! ```no_run
//! use vrpd_gen::{sample_instance, Config};
//!
//! let config = Config::new().with_num_customers(50).with_p_near(0.7);
//! let instance = sample_instance(config, Some(42)).unwrap();
//! vrpd_gen::utils::save_instance(&instance, "instance.txt").unwrap();
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod instance;
pub mod manage;
pub mod sampler;
pub mod utils;

pub use crate::batch::{BatchConfig, BatchGenerator};
pub use crate::config::Config;
pub use crate::error::{ConfigError, GeneratorError};
pub use crate::instance::{Customer, Instance, InstanceStatistics, Point};
pub use crate::sampler::{sample_instance, InstanceSampler, Region};
