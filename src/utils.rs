//! Utility functions for writing and reporting instances.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use crate::config::Config;
use crate::error::{GeneratorError, Result};
use crate::instance::{Instance, InstanceStatistics, Summary};

/// Format a duration as hours, minutes, and seconds.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}h {:02}m {:02}s", hours, minutes, seconds)
}

/// Write an instance in the line-oriented text format.
///
/// Floats use their shortest round-trip representation, so reading the file
/// back with [`Instance::parse`] restores the exact values.
pub fn write_instance<W: Write>(instance: &Instance, mut out: W) -> std::io::Result<()> {
    writeln!(out, "trucks_count {}", instance.num_trucks)?;
    writeln!(out, "drones_count {}", instance.num_drones)?;
    writeln!(out, "customers {}", instance.customers.len())?;
    writeln!(out, "depot {:?} {:?}", instance.depot.x, instance.depot.y)?;
    writeln!(
        out,
        "{:<20} {:<20} Dronable Demand",
        "Coordinate X", "Coordinate Y"
    )?;

    for customer in &instance.customers {
        writeln!(
            out,
            "{:<20?} {:<20?} {:<9} {:?}",
            customer.location.x,
            customer.location.y,
            u8::from(customer.dronable),
            customer.demand
        )?;
    }

    Ok(())
}

/// Save an instance to a file.
pub fn save_instance<P: AsRef<Path>>(instance: &Instance, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| GeneratorError::io_at("creating", path, e))?;
    let mut writer = BufWriter::new(file);

    write_instance(instance, &mut writer)
        .and_then(|_| writer.flush())
        .map_err(|e| GeneratorError::io_at("writing", path, e))
}

/// Describe a configuration, one parameter per line.
pub fn format_config(config: &Config) -> String {
    let half = config.half_size();
    format!(
        "Instance Generator Config:
- Customers: {}
- Trucks: {}, Drones: {}
- Map size: {} m (range: [-{}, +{}])
- Drone endurance: {} s
- Drone speed: {} m/s, Truck speed: {} m/s
- Drone radius: {:.2} m
- Near region probability: {:.1}%
- Light demand (near) probability: {:.1}%
- Light demand (far) probability: {:.1}%
- Demand range: [{}, {}] (light), [{}, {}] (heavy)",
        config.num_customers,
        config.num_trucks,
        config.num_drones,
        config.map_size,
        half,
        half,
        config.drone_endurance,
        config.drone_speed,
        config.truck_speed,
        config.drone_radius(),
        config.p_near * 100.0,
        config.p_light_near * 100.0,
        config.p_light_far * 100.0,
        config.min_demand,
        config.light_max_demand,
        config.light_max_demand,
        config.heavy_max_demand
    )
}

impl InstanceStatistics {
    /// Format the statistics as a string.
    pub fn format(&self) -> String {
        let total = self.total_customers;
        format!(
            "Instance Statistics:
- Total customers: {}
- Near region (<={:.2} m): {}/{} ({:.1}%)
- Light demand (<{} kg): {}/{} ({:.1}%)
- Demand: {}
- Distance: {}",
            total,
            self.drone_radius,
            self.near_count,
            total,
            self.near_fraction() * 100.0,
            self.light_max_demand,
            self.light_count,
            total,
            self.light_fraction() * 100.0,
            format_summary(self.demand.as_ref(), "kg"),
            format_summary(self.distance.as_ref(), "m")
        )
    }
}

fn format_summary(summary: Option<&Summary>, unit: &str) -> String {
    match summary {
        Some(s) => format!(
            "min={:.2}, max={:.2}, avg={:.2} {}",
            s.min, s.max, s.avg, unit
        ),
        None => "n/a".to_string(),
    }
}
