//! Fitness-proportionate (roulette wheel) selection.
//!
//! Fitness is `1 / cost^p`, so cheaper tours get sharply larger slices of
//! the wheel as the exponent `p` grows. Fitness values are normalized and
//! accumulated once per generation; each spin is then a binary search.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;

use crate::graph::Cost;

/// Fitness of a tour costing `cost` under exponent `exponent`.
///
/// Zero-cost tours are scored as cost 1.
pub fn fitness(cost: Cost, exponent: f64) -> f64 {
    1.0 / (cost.max(1) as f64).powf(exponent)
}

/// A cumulative selection distribution over a population.
#[derive(Debug, Clone)]
pub struct RouletteWheel {
    /// Non-decreasing, ends at 1.0. Empty means uniform selection.
    cumulative: Vec<f64>,
    len: usize,
}

impl RouletteWheel {
    /// Builds the wheel for a population with the given tour costs.
    ///
    /// If the fitness values do not sum to a positive finite number the
    /// wheel degrades to uniform selection.
    ///
    /// # Panics
    ///
    /// Panics if `costs` is empty.
    pub fn new(costs: &[Cost], exponent: f64) -> Self {
        assert!(!costs.is_empty(), "cannot select from empty population");

        let fitnesses: Vec<f64> = costs.iter().map(|&c| fitness(c, exponent)).collect();
        let total: f64 = fitnesses.iter().sum();
        if !(total > 0.0 && total.is_finite()) {
            return Self {
                cumulative: Vec::new(),
                len: costs.len(),
            };
        }

        let mut acc = 0.0;
        let mut cumulative: Vec<f64> = fitnesses
            .iter()
            .map(|f| {
                acc += f / total;
                acc
            })
            .collect();
        if let Some(last) = cumulative.last_mut() {
            *last = 1.0;
        }
        Self {
            cumulative,
            len: costs.len(),
        }
    }

    /// Spins the wheel and returns a population index.
    pub fn select<R: Rng>(&self, rng: &mut R) -> usize {
        if self.cumulative.is_empty() {
            return rng.random_range(0..self.len);
        }
        let spin: f64 = rng.random();
        self.cumulative
            .partition_point(|&c| c <= spin)
            .min(self.len - 1)
    }

    /// Probability of selecting index `i`.
    pub fn probability(&self, i: usize) -> f64 {
        if self.cumulative.is_empty() {
            return 1.0 / self.len as f64;
        }
        let below = if i == 0 { 0.0 } else { self.cumulative[i - 1] };
        self.cumulative[i] - below
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_fitness_decreases_with_cost() {
        assert!(fitness(10, 4.0) > fitness(11, 4.0));
        assert!((fitness(0, 4.0) - 1.0).abs() < 1e-12);
        assert!((fitness(2, 1.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let wheel = RouletteWheel::new(&[100, 50, 10, 80], 4.0);
        let total: f64 = (0..4).map(|i| wheel.probability(i)).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!(wheel.probability(2) > wheel.probability(1));
        assert!(wheel.probability(1) > wheel.probability(3));
    }

    #[test]
    fn test_cheapest_dominates() {
        let wheel = RouletteWheel::new(&[100, 50, 10, 80], 4.0);
        let mut rng = create_rng(42);
        let mut counts = [0u32; 4];
        for _ in 0..10_000 {
            counts[wheel.select(&mut rng)] += 1;
        }
        // (1/10)^4 dwarfs the rest: about 99.8% of the wheel.
        assert!(counts[2] > 9_500, "counts: {counts:?}");
    }

    #[test]
    fn test_equal_costs_are_uniform() {
        let wheel = RouletteWheel::new(&[5, 5, 5, 5], 4.0);
        let mut rng = create_rng(42);
        let mut counts = [0u32; 4];
        for _ in 0..10_000 {
            counts[wheel.select(&mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 2_000, "expected uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_underflow_falls_back_to_uniform() {
        let wheel = RouletteWheel::new(&[Cost::MAX, Cost::MAX], 100.0);
        assert!((wheel.probability(0) - 0.5).abs() < 1e-12);
        let mut rng = create_rng(1);
        for _ in 0..100 {
            assert!(wheel.select(&mut rng) < 2);
        }
    }

    #[test]
    fn test_single_individual() {
        let wheel = RouletteWheel::new(&[7], 4.0);
        let mut rng = create_rng(42);
        assert_eq!(wheel.select(&mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        RouletteWheel::new(&[], 4.0);
    }
}
