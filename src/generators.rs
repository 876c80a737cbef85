use rand::Rng;

/// Generates a random integer from min to max, inclusive
///
/// # Examples
///
/// let x = generate_integer(&mut rng, 2, 10);
///
pub fn generate_integer<R: Rng>(rng: &mut R, min: u32, max: u32) -> u32 {
    rng.gen_range(min..=max)
}

/// Generates a total for `count` units, each unit drawing a single value
/// from min to max. The draw is made once and multiplied, so the result is
/// always divisible by `count`.
///
/// # Examples
///
/// let sales = generate_product(&mut rng, companies, 20000, 30000);
///
pub fn generate_product<R: Rng>(rng: &mut R, count: u32, min: u32, max: u32) -> u32 {
    count * generate_integer(rng, min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn integer_bounds_are_inclusive() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen_min = false;
        let mut seen_max = false;

        for _ in 0..2000 {
            let x = generate_integer(&mut rng, 1, 10);
            assert!(x >= 1 && x <= 10, "{} out of range", x);
            seen_min |= x == 1;
            seen_max |= x == 10;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn degenerate_range() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate_integer(&mut rng, 5, 5), 5);
    }

    #[test]
    fn product_is_multiple_of_count() {
        let mut rng = StdRng::seed_from_u64(42);

        for count in 2..=10 {
            let total = generate_product(&mut rng, count, 20000, 30000);
            assert_eq!(total % count, 0);
            let per_unit = total / count;
            assert!(per_unit >= 20000 && per_unit <= 30000);
        }
    }
}
