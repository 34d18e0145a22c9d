//! Default value functions for serde deserialization.

pub fn resolution() -> f32 {
    1.0
}

pub fn clearance_radius() -> f32 {
    1.0
}

pub fn heuristic_weight() -> f32 {
    1.0
}

pub fn query_count() -> usize {
    2000
}

pub fn output() -> String {
    "path_data.csv".to_string()
}

pub fn arena_width() -> i32 {
    120
}

pub fn arena_height() -> i32 {
    60
}

pub fn max_sample_attempts() -> usize {
    10_000
}
