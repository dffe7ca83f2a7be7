pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// Behaviour of [`interpolate`] outside the input range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Extrapolate {
    /// Continue the line past both ends.
    #[default]
    Extend,
    /// Hold the output at the nearest endpoint.
    Clamp,
}

/// Map `x` from `input` to `output` linearly.
///
/// A degenerate input range (`input.0 == input.1`) yields `output.1` for `x >= input.1` and
/// `output.0` otherwise.
pub fn interpolate<T: Lerp>(
    x: f64,
    input: (f64, f64),
    output: (T, T),
    extrapolate: Extrapolate,
) -> T {
    let (x0, x1) = input;
    let span = x1 - x0;
    let mut t = if span == 0.0 {
        if x >= x1 { 1.0 } else { 0.0 }
    } else {
        (x - x0) / span
    };
    if extrapolate == Extrapolate::Clamp {
        t = t.clamp(0.0, 1.0);
    }
    T::lerp(&output.0, &output.1, t)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
