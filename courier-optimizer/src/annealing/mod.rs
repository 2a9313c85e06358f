//! `AnnealingOptimizer` implementation.
//!
//! Each iteration proposes a full random reshuffle of the current tour. A
//! cheaper proposal is always accepted; a dearer one is accepted with
//! probability `exp((current - candidate) / T)`. The cheapest tour seen is
//! kept as the champion and written back when the temperature falls to the
//! floor.

use courier_core::{
    Coordinate, DeliveryRequest, DistanceMetric, GreatCircle, OptimizationReport, OrderOptimizer,
    tour_cost,
};
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

/// Configuration for [`AnnealingOptimizer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnealingConfig {
    /// Starting temperature.
    pub initial_temperature: f64,
    /// Fraction of the temperature shed after every iteration, in `(0, 1)`.
    pub cooling_rate: f64,
    /// The run stops once the temperature is no longer above this floor.
    pub min_temperature: f64,
    /// Optional hard cap on iterations.
    pub max_iterations: Option<usize>,
    /// Seed for the optimiser's random number generator.
    pub seed: u64,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1_000_000.0,
            cooling_rate: 0.003,
            min_temperature: 1.0,
            max_iterations: None,
            seed: 0,
        }
    }
}

impl AnnealingConfig {
    /// Check that the schedule terminates.
    ///
    /// # Errors
    /// Returns [`AnnealingConfigError`] when the cooling rate lies outside
    /// `(0, 1)`, or either temperature is not finite, or the floor is not
    /// positive.
    pub fn validate(&self) -> Result<(), AnnealingConfigError> {
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(AnnealingConfigError::CoolingRate {
                value: self.cooling_rate,
            });
        }
        if !self.initial_temperature.is_finite() {
            return Err(AnnealingConfigError::InitialTemperature {
                value: self.initial_temperature,
            });
        }
        if !(self.min_temperature.is_finite() && self.min_temperature > 0.0) {
            return Err(AnnealingConfigError::MinTemperature {
                value: self.min_temperature,
            });
        }
        Ok(())
    }
}

/// Rejected annealing schedules.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AnnealingConfigError {
    /// The cooling rate does not lie strictly between zero and one.
    #[error("cooling rate must lie strictly between 0 and 1, got {value}")]
    CoolingRate {
        /// The rejected rate.
        value: f64,
    },
    /// The initial temperature is infinite or NaN.
    #[error("initial temperature must be finite, got {value}")]
    InitialTemperature {
        /// The rejected temperature.
        value: f64,
    },
    /// The temperature floor is not a positive finite number.
    #[error("minimum temperature must be positive and finite, got {value}")]
    MinTemperature {
        /// The rejected temperature.
        value: f64,
    },
}

/// Simulated-annealing optimiser for delivery order.
///
/// Costs are straight-line tour lengths under the metric `M`, from the depot
/// through every delivery and back.
///
/// # Examples
/// ```
/// use courier_core::test_support::{coord, delivery};
/// use courier_core::OrderOptimizer;
/// use courier_optimizer::{AnnealingConfig, AnnealingOptimizer};
///
/// let mut optimizer = AnnealingOptimizer::with_config(AnnealingConfig {
///     seed: 7,
///     ..AnnealingConfig::default()
/// })?;
/// let depot = coord("34.0600", "-118.4400");
/// let mut tour = vec![
///     delivery("34.0700", "-118.4400", "sandwich"),
///     delivery("34.0650", "-118.4400", "coffee"),
/// ];
/// let report = optimizer.optimize(&depot, &mut tour);
/// assert!(report.optimized_cost <= report.original_cost);
/// # Ok::<(), courier_optimizer::AnnealingConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AnnealingOptimizer<M = GreatCircle>
where
    M: DistanceMetric,
{
    metric: M,
    config: AnnealingConfig,
    rng: ChaCha8Rng,
}

impl AnnealingOptimizer {
    /// Construct an optimiser with the default schedule and great-circle
    /// costs.
    #[must_use]
    pub fn new() -> Self {
        let config = AnnealingConfig::default();
        Self {
            metric: GreatCircle,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
        }
    }

    /// Construct an optimiser with an explicit schedule and great-circle
    /// costs.
    ///
    /// # Errors
    /// Returns [`AnnealingConfigError`] when the schedule is invalid.
    pub fn with_config(config: AnnealingConfig) -> Result<Self, AnnealingConfigError> {
        Self::with_metric(GreatCircle, config)
    }
}

impl Default for AnnealingOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> AnnealingOptimizer<M>
where
    M: DistanceMetric,
{
    /// Construct an optimiser with an explicit metric and schedule.
    ///
    /// # Errors
    /// Returns [`AnnealingConfigError`] when the schedule is invalid.
    pub fn with_metric(metric: M, config: AnnealingConfig) -> Result<Self, AnnealingConfigError> {
        config.validate()?;
        Ok(Self {
            metric,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
        })
    }

    /// The active schedule.
    #[must_use]
    pub const fn config(&self) -> AnnealingConfig {
        self.config
    }

    /// Whether a dearer candidate should still be taken at `temperature`.
    #[expect(
        clippy::float_arithmetic,
        reason = "Metropolis acceptance compares cost deltas"
    )]
    fn accept_worse(&mut self, current: f64, candidate: f64, temperature: f64) -> bool {
        let threshold: f64 = self.rng.gen_range(0.0..1.0);
        ((current - candidate) / temperature).exp() > threshold
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "annealing cools the temperature geometrically"
    )]
    fn anneal(
        &mut self,
        depot: &Coordinate,
        tour: &[DeliveryRequest],
    ) -> (Vec<DeliveryRequest>, f64, usize) {
        let mut current = tour.to_vec();
        let mut current_cost = tour_cost(&self.metric, depot, &current);
        let mut champion = current.clone();
        let mut champion_cost = current_cost;
        let mut temperature = self.config.initial_temperature;
        let mut iterations = 0_usize;

        while temperature > self.config.min_temperature
            && self
                .config
                .max_iterations
                .is_none_or(|limit| iterations < limit)
        {
            let mut candidate = current.clone();
            candidate.shuffle(&mut self.rng);
            let candidate_cost = tour_cost(&self.metric, depot, &candidate);

            if candidate_cost < current_cost
                || self.accept_worse(current_cost, candidate_cost, temperature)
            {
                current = candidate;
                current_cost = candidate_cost;
            }
            if current_cost < champion_cost {
                champion.clone_from(&current);
                champion_cost = current_cost;
                debug!("iteration {iterations}: new best tour cost {champion_cost:.4}");
            }

            temperature *= 1.0 - self.config.cooling_rate;
            iterations += 1;
        }

        (champion, champion_cost, iterations)
    }
}

impl<M> OrderOptimizer for AnnealingOptimizer<M>
where
    M: DistanceMetric,
{
    fn optimize(
        &mut self,
        depot: &Coordinate,
        deliveries: &mut [DeliveryRequest],
    ) -> OptimizationReport {
        if deliveries.is_empty() {
            return OptimizationReport::default();
        }

        let original_cost = tour_cost(&self.metric, depot, deliveries);
        let (champion, optimized_cost, iterations) = self.anneal(depot, deliveries);
        deliveries.clone_from_slice(&champion);

        info!(
            "optimised {} deliveries in {iterations} iterations: {original_cost:.4} -> {optimized_cost:.4}",
            deliveries.len()
        );
        OptimizationReport {
            original_cost,
            optimized_cost,
            iterations,
        }
    }
}
