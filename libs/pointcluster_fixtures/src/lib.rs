//! Shared point sets for tests and benchmarks.
//! Coordinates are WGS84 `(longitude, latitude)` pairs.

/// Cluster size, in pixels, the scenario sets were recorded with.
pub const SCENARIO_SIZE: f64 = 44.0;
/// Web Mercator metres per pixel the scenario sets were recorded with.
pub const SCENARIO_RESOLUTION: f64 = 9595.0;

/// Nine points over three distant regions. Under the scenario parameters in
/// Web Mercator they form four groups: Omsk alone, the Urals, the Far-East
/// (Okhotsk coast) and the Black Sea coast.
pub const SIBERIA: [(f64, f64); 9] = [
    (73.355357, 54.878128),
    (59.822013, 53.521495),
    (60.520713, 54.827998),
    (61.579522, 55.061807),
    (60.74531, 56.082793),
    (150.839039, 59.549667),
    (150.809511, 59.570643),
    (150.797609, 59.56511),
    (39.79428, 43.548443),
];

/// A point co-located with the Far-East group of [`SIBERIA`].
pub const FAR_EAST_EXTRA: (f64, f64) = (150.834439, 59.544667);

/// Index of the Far-East group when groups are ordered by their first member.
pub const FAR_EAST_GROUP: usize = 2;

/// Deterministic pseudo-random points in `[0, extent)²`, for property tests
/// and benchmarks. Uses a 64-bit LCG so the sequence is stable everywhere.
pub fn scattered(count: usize, extent: f64, seed: u64) -> Vec<(f64, f64)> {
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 11) as f64 / (1u64 << 53) as f64
    };

    (0..count)
        .map(|_| (next() * extent, next() * extent))
        .collect()
}
