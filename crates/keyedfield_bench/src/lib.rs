//! Benchmark utilities.

use keyedfield_core::Value;

/// Generate `count` flattened attribute paths of the given depth.
pub fn generate_keys(count: usize, depth: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            (0..depth)
                .map(|level| format!("attr{}_{}", level, i % (level + 7)))
                .collect::<Vec<_>>()
                .join(".")
        })
        .collect()
}

/// Generate a mix of text, integer, float and boolean values.
pub fn generate_values(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| match i % 4 {
            0 => Value::from(format!("value-{}", i)),
            1 => Value::from(i as i64 * 7919),
            2 => Value::from(i as f64 / 3.0),
            _ => Value::from(i % 2 == 0),
        })
        .collect()
}
