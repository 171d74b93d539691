//! Factor a point count into a near-square `(a, b)` pattern.

/// Exact integer square root, if `n` is a positive perfect square.
fn perfect_sqrt(n: u32) -> Option<u32> {
    if n == 0 {
        return None;
    }
    let root = f64::from(n).sqrt().round() as u64;
    (root * root == u64::from(n)).then_some(root as u32)
}

/// Divisors of `n` strictly between 1 and `n`.
fn proper_divisors(n: u32) -> Vec<u32> {
    (2..n).filter(|d| n % d == 0).collect()
}

/// Split `n` points into an `a x b` pattern minimizing `a + b`.
///
/// Perfect squares split evenly. Otherwise every ordered pair of proper
/// divisors is scanned (outer ascending, inner ascending) and the first
/// pair reaching the smallest sum wins, so `12` yields `(3, 4)` rather than
/// `(4, 3)`. Numbers without proper divisors (primes, zero) fall back to
/// `(1, n)`.
pub fn generate_pattern(n: u32) -> (u32, u32) {
    if let Some(root) = perfect_sqrt(n) {
        return (root, root);
    }

    let divisors = proper_divisors(n);
    let mut best: Option<(u32, u32)> = None;
    for &a in &divisors {
        for &b in &divisors {
            if u64::from(a) * u64::from(b) != u64::from(n) {
                continue;
            }
            match best {
                Some((ba, bb)) if ba + bb <= a + b => {}
                _ => best = Some((a, b)),
            }
        }
    }
    best.unwrap_or((1, n))
}
