//! Delivery-order optimisation for Courier.
//!
//! This crate provides [`AnnealingOptimizer`], the default implementation of
//! the [`OrderOptimizer`](courier_core::OrderOptimizer) trait. It reorders a
//! tour of deliveries by simulated annealing over straight-line tour costs,
//! returning the cheapest order it visited. The result is a heuristic
//! improvement, never worse than the input order, and not guaranteed optimal.
//!
//! Runs are reproducible: each optimiser owns a `ChaCha8Rng` seeded once from
//! [`AnnealingConfig::seed`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod annealing;

pub use annealing::{AnnealingConfig, AnnealingConfigError, AnnealingOptimizer};
