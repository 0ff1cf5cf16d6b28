/// Adds two integers when their signs agree.
///
/// Both positive gives `a + b`, both negative gives `-(a + b)` (the sum of
/// magnitudes), anything else, zero included, gives `0`. Arithmetic wraps on
/// overflow.
pub fn foo(a: i32, b: i32) -> i32 {
    if a > 0 && b > 0 {
        return a.wrapping_add(b);
    }
    if a < 0 && b < 0 {
        return a.wrapping_neg().wrapping_sub(b);
    }
    0
}
