/// `n` evenly spaced values over `[0, 1]`, first 0 and last 1.
///
/// With `n == 1` the single value is 0.
pub fn linspace_unit(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let step = 1.0 / (n - 1) as f64;
            // Pin the last value so it is exactly 1 regardless of rounding.
            (0..n)
                .map(|i| if i == n - 1 { 1.0 } else { i as f64 * step })
                .collect()
        }
    }
}
