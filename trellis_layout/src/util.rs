// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Pass `value` through if it is finite, otherwise resolve it to `0.0`.
///
/// A non-finite layout value is a bug in the declarations that produced it, so
/// debug builds panic here. Release builds log a warning and carry on with a
/// zero so the rest of the tree still lays out.
///
/// `what` names the quantity in the panic and log message.
#[must_use]
#[track_caller]
pub fn finite_or_zero(value: f64, what: &'static str) -> f64 {
    if value.is_finite() {
        return value;
    }
    debug_assert!(value.is_finite(), "non-finite {what}: {value}");
    tracing::warn!(what, value, "non-finite layout value resolved to zero");
    0.0
}

#[cfg(test)]
mod tests {
    use super::finite_or_zero;

    #[test]
    fn finite_values_pass_through() {
        assert_eq!(finite_or_zero(-3.5, "test"), -3.5);
        assert_eq!(finite_or_zero(0.0, "test"), 0.0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "non-finite test")]
    fn nan_panics_in_debug() {
        let _ = finite_or_zero(f64::NAN, "test");
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn nan_becomes_zero_in_release() {
        assert_eq!(finite_or_zero(f64::NAN, "test"), 0.0);
        assert_eq!(finite_or_zero(f64::INFINITY, "test"), 0.0);
    }
}
