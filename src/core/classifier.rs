/// Maps 0, 1 and 2 to themselves and everything else to `-1`.
pub fn bar(a: i32) -> i32 {
    match a {
        0 => 0,
        1 => 1,
        2 => 2,
        _ => -1,
    }
}
