use std::fmt;

/// Significant digits written for every real, enough for any `f64` to round-trip.
const PRECISION: i32 = 17;

/// Displays an `f64` the way C's `%.17g` does under the "C" locale.
///
/// Uses fixed notation when the decimal exponent lies in `[-4, 17)` and scientific
/// notation otherwise, with trailing zeros removed and a two digit minimum exponent.
/// Non-finite values are written as `nan`, `inf` and `-inf`.
#[derive(Debug, Clone, Copy)]
pub struct Real(pub f64);

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;

        if v.is_nan() {
            return f.write_str(if v.is_sign_negative() { "-nan" } else { "nan" });
        }

        if v.is_infinite() {
            return f.write_str(if v > 0. { "inf" } else { "-inf" });
        }

        if v == 0. {
            return f.write_str(if v.is_sign_negative() { "-0" } else { "0" });
        }

        // The exponent after rounding to PRECISION digits decides the notation.
        let sci = format!("{:.*e}", (PRECISION - 1) as usize, v);
        let (mantissa, exp) = match sci.split_once('e') {
            Some((mantissa, exp)) => (mantissa, exp.parse::<i32>().map_err(|_| fmt::Error)?),
            None => return f.write_str(&sci),
        };

        if exp < -4 || exp >= PRECISION {
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "{}e{sign}{:02}", strip_zeros(mantissa), exp.abs())
        } else {
            let decimals = (PRECISION - 1 - exp) as usize;
            f.write_str(strip_zeros(&format!("{v:.decimals$}")))
        }
    }
}

fn strip_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
