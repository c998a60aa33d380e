/// Convert km/h to m/s
#[inline]
pub fn kmh_to_ms(kmh: f64) -> f64 {
    kmh / super::KMH_PER_MS
}

/// Convert m/s to km/h
#[inline]
pub fn ms_to_kmh(ms: f64) -> f64 {
    ms * super::KMH_PER_MS
}

/// Exponential-decay approximation of air density at an altitude.
pub fn air_density(altitude: f64, sea_level_density: f64, scale_height: f64) -> f64 {
    sea_level_density * (-altitude.max(0.0) / scale_height).exp()
}

/// Dynamic pressure, q = 1/2 rho v^2
#[inline]
pub fn dynamic_pressure(density: f64, speed: f64) -> f64 {
    0.5 * density * speed * speed
}

/// Whether `value` lies within optional inclusive bounds.
pub fn within_bounds(value: f64, min: Option<f64>, max: Option<f64>) -> bool {
    min.map_or(true, |lo| value >= lo) && max.map_or(true, |hi| value <= hi)
}
