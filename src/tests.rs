#[cfg(test)]
mod tests {
    use crate::ffi::additional_native_add2;

    #[test]
    fn test_add2_examples() {
        assert_eq!(additional_native_add2(2, 3), 5);
        assert_eq!(additional_native_add2(2147483647, 1), -2147483648);
        assert_eq!(additional_native_add2(0, 0), 0);
        assert_eq!(additional_native_add2(-5, 3), -2);
    }

    #[test]
    fn test_add2_matches_wrapping_add() {
        let samples = [
            i32::MIN,
            i32::MIN + 1,
            -65536,
            -1,
            0,
            1,
            65535,
            i32::MAX - 1,
            i32::MAX,
        ];

        for &a in &samples {
            for &b in &samples {
                assert_eq!(additional_native_add2(a, b), a.wrapping_add(b));
            }
        }
    }
}
