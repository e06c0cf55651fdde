/// Median of the samples, `0.0` when there are none.
///
/// Even counts average the two central values.
pub fn median_of(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        0.5 * (sorted[n / 2 - 1] + sorted[n / 2])
    }
}

#[cfg(test)]
mod test {
    use super::median_of;

    #[test]
    fn empty() {
        assert_eq!(median_of(&[]), 0.0);
    }

    #[test]
    fn odd_picks_middle() {
        assert_eq!(median_of(&[300.0, 100.0, 200.0]), 200.0);
        assert_eq!(median_of(&[7.5]), 7.5);
        assert_eq!(median_of(&[5.0, 1.0, 1000.0, 3.0, 4.0]), 4.0);
    }

    #[test]
    fn even_averages_central_pair() {
        assert_eq!(median_of(&[20.0, 10.0]), 15.0);
        assert_eq!(median_of(&[4.0, 1.0, 3.0, 2.0]), 2.5);
    }

    #[test]
    fn ignores_input_order() {
        let a = [9.0, 2.0, 7.0, 4.0, 4.0, 1.0];
        let mut b = a;
        b.reverse();
        assert_eq!(median_of(&a), median_of(&b));
        assert_eq!(median_of(&a), 4.0);
    }

    #[test]
    fn does_not_reorder_caller_slice() {
        let samples = vec![3.0, 1.0, 2.0];
        median_of(&samples);
        assert_eq!(samples, vec![3.0, 1.0, 2.0]);
    }
}
