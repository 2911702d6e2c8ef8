pub mod math;
pub mod random;

/// Java's `String.hashCode`: `s[0]*31^(n-1) + ... + s[n-1]` over UTF-16 code units,
/// wrapping at 32 bits.
pub fn java_string_hash(value: &str) -> i32 {
    value
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

#[macro_export]
macro_rules! assert_eq_delta {
    ($x:expr, $y:expr, $d:expr) => {{
        let (x, y, d): (f64, f64, f64) = ($x, $y, $d);
        if 2.0 * (x - y).abs() > d * (x.abs() + y.abs()) {
            panic!("{} vs {} ({} vs {})", x, y, (x - y).abs(), d);
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::java_string_hash;

    #[test]
    fn string_hash() {
        let values: [(&str, i32); 5] = [
            ("", 0),
            ("a", 97),
            ("hello", 99162322),
            ("Minecraft", -1595926131),
            ("glacier", 108181935),
        ];

        for (text, hash) in values {
            assert_eq!(java_string_hash(text), hash);
        }
    }

    #[test]
    fn delta_accepts_float_literals() {
        crate::assert_eq_delta!(0.0, 0.0, 1e-12);
        crate::assert_eq_delta!(0.5, 0.5 + 1e-15, 1e-12);
        let x = 0.25;
        crate::assert_eq_delta!(x, 0.25, 1e-12);
    }

    #[test]
    #[should_panic]
    fn delta_rejects_distant_values() {
        crate::assert_eq_delta!(0.5, 0.6, 1e-12);
    }

    #[test]
    fn string_hash_uses_utf16_units() {
        // U+1F600 is a surrogate pair in UTF-16
        let expected = 0xD83Di32.wrapping_mul(31).wrapping_add(0xDE00);
        assert_eq!(java_string_hash("\u{1F600}"), expected);
    }
}
