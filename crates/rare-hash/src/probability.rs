//! Tail probabilities for the letter count of a random hash.
//!
//! With 40 independent draws from 16 symbols of which 6 are letters, the
//! letter count is `X ~ Binomial(40, 6/16)`. The table holds `P(X >= n)` for
//! `n` in `0..=40`, plus a trailing `0` at index 41 for "more letters than a
//! hash can hold". The number-side tail follows by symmetry:
//! `P(numbers >= m) = P(X <= 40 - m) = 1 - P(X >= 41 - m)`.

use crate::HASH_LEN;

/// `TAIL_AT_LEAST[n] = P(X >= n)`.
pub const TAIL_AT_LEAST: [f64; HASH_LEN + 2] = [
    1.0,
    0.9999999931577225,
    0.9999998289430587,
    0.9999979076314924,
    0.9999833056635884,
    0.999902264741721,
    0.9995521679592538,
    0.9983268292206189,
    0.9947558420394541,
    0.9859176487660712,
    0.9670628364495212,
    0.931992885540738,
    0.8746056931445474,
    0.7913942641700711,
    0.6838594944184401,
    0.5594264037058385,
    0.4300159893647329,
    0.3086937259199464,
    0.20592663217848023,
    0.12713852697668945,
    0.07240152757334008,
    0.037917217949229975,
    0.018211898164024208,
    0.008000959729872126,
    0.0032062582042702795,
    0.0011685100558894946,
    0.00038601476691127326,
    0.00011515101303419666,
    3.088228960577282e-05,
    7.407430936426176e-06,
    1.5791901633470091e-06,
    2.9697719326959257e-07,
    4.880694099654422e-08,
    6.928210925467301e-09,
    8.367592787652037e-10,
    8.428584005494473e-11,
    6.888572073318082e-12,
    4.3879974151586167e-13,
    2.0436130804366296e-14,
    6.18907139084941e-16,
    9.14641092243755e-18,
    0.0,
];

/// Lookup into the precomputed binomial tail table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProbabilityModel;

impl ProbabilityModel {
    /// `P(X >= n)` for the letter count. Zero for `n > 40`.
    pub fn tail_at_least_letters(n: usize) -> f64 {
        TAIL_AT_LEAST.get(n).copied().unwrap_or(0.0)
    }

    /// `P(numbers >= m)`. One for `m == 0`; zero for `m > 40`.
    pub fn tail_at_least_numbers(m: usize) -> f64 {
        if m > HASH_LEN {
            return 0.0;
        }
        1.0 - Self::tail_at_least_letters(HASH_LEN + 1 - m)
    }

    /// The "1 in N" odds for a probability. Infinite when `p` is zero.
    pub fn odds(p: f64) -> f64 {
        1.0 / p
    }
}
