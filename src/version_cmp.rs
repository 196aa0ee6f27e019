//! Internal module for performing version comparisons.

pub fn lt<T: PartialOrd>(a: (T, T), b: (T, T)) -> bool { a.0 < b.0 || (a.0 == b.0 && a.1 < b.1) }
pub fn ge<T: PartialOrd>(a: (T, T), b: (T, T)) -> bool { a.0 > b.0 || (a.0 == b.0 && a.1 >= b.1) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compares_major_then_minor() {
        assert!(lt((1, 5), (2, 0)));
        assert!(!lt((2, 0), (2, 0)));
        assert!(ge((3, 2), (3, 0)));
        assert!(ge((4, 0), (3, 9)));
        assert!(!ge((2, 1), (3, 0)));
    }
}
