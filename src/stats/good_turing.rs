//! Simple Good-Turing frequency smoothing
//!
//! Gale & Sampson's estimator: reserve probability mass for unseen types
//! based on the low-frequency tail of the observed distribution, and
//! smooth the observed counts through a log–log fit of the
//! frequencies-of-frequencies.
//!
//! The smoothed count for frequency `r` uses the Turing estimate
//! `(r+1)·N[r+1]/N[r]` while it differs significantly from the
//! linear-Good-Turing estimate `r·(1+1/r)^(b+1)`, then switches to the
//! fitted estimate for all larger `r`. The held-out mass for unseen types
//! is `N[1]/N`; observed probabilities are renormalized so everything sums
//! to one.

use std::collections::{BTreeMap, HashMap};
use tracing::warn;

/// z-score for the 95% confidence band of the Turing/LGT switch rule
const SWITCH_CONFIDENCE: f64 = 1.96;

/// A fitted Simple Good-Turing distribution over observed counts.
#[derive(Debug)]
pub struct SimpleGoodTuring {
    prob_by_count: BTreeMap<u64, f64>,
    unseen: f64,
}

impl SimpleGoodTuring {
    /// Fit the estimator to a raw frequency distribution (type → count).
    pub fn fit(freqs: &HashMap<String, u64>) -> Self {
        // frequencies of frequencies: r → N[r]
        let mut freq_of_freq: BTreeMap<u64, u64> = BTreeMap::new();
        for &count in freqs.values() {
            if count > 0 {
                *freq_of_freq.entry(count).or_insert(0) += 1;
            }
        }

        let total: u64 = freq_of_freq.iter().map(|(r, n)| r * n).sum();
        if total == 0 {
            return Self {
                prob_by_count: BTreeMap::new(),
                unseen: 0.0,
            };
        }

        let singletons = freq_of_freq.get(&1).copied().unwrap_or(0);
        let unseen = singletons as f64 / total as f64;

        let slope = fit_log_slope(&freq_of_freq);

        // smoothed counts r*, Turing first then the fitted estimate
        let rs: Vec<u64> = freq_of_freq.keys().copied().collect();
        let mut smoothed: BTreeMap<u64, f64> = BTreeMap::new();
        let mut use_fit = false;
        for &r in &rs {
            let n_r = freq_of_freq[&r] as f64;
            let lgt = r as f64 * (1.0 + 1.0 / r as f64).powf(slope + 1.0);

            let turing = freq_of_freq
                .get(&(r + 1))
                .map(|&n_next| (r as f64 + 1.0) * n_next as f64 / n_r);

            let estimate = match turing {
                Some(turing) if !use_fit => {
                    let n_next = freq_of_freq[&(r + 1)] as f64;
                    let variance =
                        (r as f64 + 1.0).powi(2) * (n_next / (n_r * n_r)) * (1.0 + n_next / n_r);
                    if (turing - lgt).abs() > SWITCH_CONFIDENCE * variance.sqrt() {
                        turing
                    } else {
                        use_fit = true;
                        lgt
                    }
                }
                _ => {
                    use_fit = true;
                    lgt
                }
            };
            smoothed.insert(r, estimate);
        }

        let smoothed_total: f64 = freq_of_freq
            .iter()
            .map(|(r, n)| *n as f64 * smoothed[r])
            .sum();

        let observed_mass = 1.0 - unseen;
        let prob_by_count = smoothed
            .into_iter()
            .map(|(r, r_star)| (r, observed_mass * r_star / smoothed_total))
            .collect();

        Self {
            prob_by_count,
            unseen,
        }
    }

    /// Smoothed probability of a single type observed `count` times.
    ///
    /// A count never seen in the fitted distribution (including zero)
    /// contributes no observed mass.
    pub fn prob_for_count(&self, count: u64) -> f64 {
        self.prob_by_count.get(&count).copied().unwrap_or(0.0)
    }

    /// Total probability mass held out for unseen types (`N[1]/N`).
    pub fn unseen_mass(&self) -> f64 {
        self.unseen
    }
}

/// Slope of the least-squares line through `(ln r, ln Z[r])`.
///
/// `Z[r]` spreads each `N[r]` over the gap to its nonzero neighbors, which
/// de-noises the sparse high-frequency tail before fitting. A distribution
/// with fewer than two distinct frequencies cannot be fitted, and a fitted
/// slope above −1 is outside the estimator's validity range; both cases
/// pin the slope to −1, which reduces the smoothed counts to the raw
/// counts.
fn fit_log_slope(freq_of_freq: &BTreeMap<u64, u64>) -> f64 {
    let rs: Vec<u64> = freq_of_freq.keys().copied().collect();
    if rs.len() < 2 {
        warn!("too few distinct frequencies for a Good-Turing fit; using raw counts");
        return -1.0;
    }

    let mut points = Vec::with_capacity(rs.len());
    for (j, &r) in rs.iter().enumerate() {
        let prev = if j > 0 { rs[j - 1] } else { 0 };
        let next = if j + 1 < rs.len() {
            rs[j + 1]
        } else {
            2 * r - prev
        };
        let z = freq_of_freq[&r] as f64 / (0.5 * (next - prev) as f64);
        points.push(((r as f64).ln(), z.ln()));
    }

    let n = points.len() as f64;
    let mean_x: f64 = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y: f64 = points.iter().map(|(_, y)| y).sum::<f64>() / n;
    let covariance: f64 = points
        .iter()
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();
    let variance: f64 = points.iter().map(|(x, _)| (x - mean_x).powi(2)).sum();

    let slope = covariance / variance;
    if slope > -1.0 {
        warn!(slope, "Good-Turing log-log slope above -1; using raw counts");
        return -1.0;
    }
    slope
}
