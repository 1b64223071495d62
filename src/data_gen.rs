use crate::Value;
use crate::error::{Error, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution as _, Normal, Uniform};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Distribution {
    #[default]
    Uniform,
    /// Centered on the middle of the range, clamped to its bounds.
    Normal,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenConfig {
    pub count: usize,
    pub distribution: Distribution,
    pub min: Value,
    pub max: Value,
    pub seed: Option<u64>,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            count: 15,
            distribution: Distribution::Uniform,
            min: -99,
            max: 99,
            seed: None,
        }
    }
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn generate(config: &GenConfig) -> Result<Vec<Value>> {
    if config.min > config.max {
        return Err(Error::InvalidRange {
            min: config.min,
            max: config.max,
        });
    }

    log::info!(
        "generating {} {:?} values in [{}, {}]",
        config.count,
        config.distribution,
        config.min,
        config.max
    );

    let mut rng = rng_for(config.seed);
    match config.distribution {
        Distribution::Uniform => Ok(generate_uniform_i32(
            &mut rng,
            config.count,
            config.min,
            config.max,
        )),
        Distribution::Normal => {
            let (min, max) = (config.min as f64, config.max as f64);
            generate_normal_i32(&mut rng, config.count, (min + max) / 2.0, (max - min) / 6.0)
                .map(|values| {
                    values
                        .into_iter()
                        .map(|v| v.clamp(config.min, config.max))
                        .collect()
                })
        }
    }
}

pub fn generate_uniform_i32(rng: &mut StdRng, count: usize, min: Value, max: Value) -> Vec<Value> {
    let uniform = Uniform::new_inclusive(min, max);

    uniform.sample_iter(rng).take(count).collect()
}

pub fn generate_normal_i32(
    rng: &mut StdRng,
    count: usize,
    mean: f64,
    std_dev: f64,
) -> Result<Vec<Value>> {
    let normal =
        Normal::new(mean, std_dev).map_err(|e| Error::InvalidDistribution(e.to_string()))?;

    Ok(normal
        .sample_iter(rng)
        .take(count)
        .map(|sample: f64| sample.round().max(Value::MIN as f64).min(Value::MAX as f64) as Value)
        .collect())
}
