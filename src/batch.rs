//! Batch generation of numbered instance files.

use crate::error::{GeneratorError, Result};
use crate::sampler::InstanceSampler;
use crate::utils::{format_duration, save_instance};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Where and under which names a batch is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Directory receiving the instance files; created if missing
    pub output_dir: PathBuf,
    /// File name prefix, e.g. `20.17` gives `20.17.<index>.txt`
    pub prefix: String,
    /// Index of the first file
    pub start: u64,
    /// Number of files to write
    pub count: u64,
}

impl BatchConfig {
    /// Create a new batch configuration.
    pub fn new<P: AsRef<Path>>(output_dir: P, prefix: &str, start: u64, count: u64) -> Self {
        BatchConfig {
            output_dir: output_dir.as_ref().to_path_buf(),
            prefix: prefix.to_string(),
            start,
            count,
        }
    }

    /// File name of the instance with the given index.
    pub fn file_name(&self, index: u64) -> String {
        format!("{}.{}.txt", self.prefix, index)
    }

    /// Indices covered by the batch.
    pub fn indices(&self) -> Result<std::ops::Range<u64>> {
        match self.start.checked_add(self.count) {
            Some(end) => Ok(self.start..end),
            None => Err(GeneratorError::IndexOverflow {
                start: self.start,
                count: self.count,
            }),
        }
    }
}

/// Writes one instance file per index, drawing every instance from the same
/// sampler so a seeded batch is reproducible as a whole.
pub struct BatchGenerator {
    sampler: InstanceSampler,
    batch: BatchConfig,
}

impl BatchGenerator {
    /// Create a new batch generator.
    pub fn new(sampler: InstanceSampler, batch: BatchConfig) -> Self {
        BatchGenerator { sampler, batch }
    }

    pub fn sampler(&self) -> &InstanceSampler {
        &self.sampler
    }

    /// Generate and save every instance of the batch, returning the written paths.
    pub fn run(&mut self) -> Result<Vec<PathBuf>> {
        let start_time = Instant::now();
        let indices = self.batch.indices()?;
        let dir = &self.batch.output_dir;
        fs::create_dir_all(dir).map_err(|e| GeneratorError::io_at("creating", dir, e))?;

        info!(
            "Generating {} instances into {} ({} to {})",
            self.batch.count,
            dir.display(),
            self.batch.file_name(indices.start),
            self.batch.file_name(indices.end.saturating_sub(1))
        );

        let config = self.sampler.config();
        let (radius, light_max) = (config.drone_radius(), config.light_max_demand);

        let mut written = Vec::new();
        for (k, index) in indices.enumerate() {
            let file_name = self.batch.file_name(index);
            let path = dir.join(&file_name);

            info!("[{}/{}] Generating {}", k + 1, self.batch.count, file_name);
            let instance = self.sampler.generate()?;
            save_instance(&instance, &path)?;
            debug!("{}", instance.statistics(radius, light_max).format());

            written.push(path);
        }

        info!(
            "Generated {} instances in {} ({})",
            written.len(),
            dir.display(),
            format_duration(start_time.elapsed())
        );

        Ok(written)
    }
}
