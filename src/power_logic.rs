/// Clamp a requested backlight level into `[0.0, 1.0]`; NaN means off.
pub fn clamp_level(level: f32) -> f32 {
    if level.is_nan() {
        0.0
    } else {
        level.clamp(0.0, 1.0)
    }
}

/// Levels a linear fade passes through, one per step. The last one is
/// exactly `to`, so repeated fades never drift.
pub fn fade_levels(from: f32, to: f32, steps: u32) -> impl Iterator<Item = f32> {
    let steps = steps.max(1);
    let delta = (to - from) / steps as f32;
    (1..=steps).map(move |i| {
        if i == steps {
            to
        } else {
            clamp_level(from + delta * i as f32)
        }
    })
}
