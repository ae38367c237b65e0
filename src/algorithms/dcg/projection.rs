//! Per-agent simplex renormalization.

use crate::algorithms::PlanningError;

/// Rescales `agent`'s block of `v` so it sums to 1.
///
/// With `zero_others`, every coordinate outside the block is set to 0;
/// otherwise they are copied from `v` unchanged. Entries are divided by the
/// block sum without clipping, so callers pass non-negative blocks.
///
/// # Errors
///
/// [`PlanningError::DegenerateSubvector`] if the block sums to zero.
pub fn project(
    v: &[f64],
    agent: usize,
    n_actions: usize,
    zero_others: bool,
) -> Result<Vec<f64>, PlanningError> {
    let block = agent * n_actions..(agent + 1) * n_actions;
    let total: f64 = v[block.clone()].iter().sum();
    if total == 0.0 {
        return Err(PlanningError::DegenerateSubvector { agent });
    }

    let mut out = if zero_others {
        vec![0.0; v.len()]
    } else {
        v.to_vec()
    };
    for k in block {
        out[k] = v[k] / total;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_sums_to_one_and_rest_untouched() {
        let v = [0.3, 0.3, 2.0, 6.0, 0.7, 0.1];
        let p = project(&v, 1, 2, false).unwrap();
        assert!((p[2] + p[3] - 1.0).abs() < 1e-12);
        assert!((p[2] - 0.25).abs() < 1e-12);
        assert_eq!(&p[..2], &v[..2]);
        assert_eq!(&p[4..], &v[4..]);
    }

    #[test]
    fn zero_others_clears_foreign_blocks() {
        let v = [0.3, 0.3, 1.0, 3.0, 0.7, 0.1];
        let p = project(&v, 1, 2, true).unwrap();
        assert_eq!(p[0], 0.0);
        assert_eq!(p[1], 0.0);
        assert_eq!(p[4], 0.0);
        assert_eq!(p[5], 0.0);
        assert!((p[2] + p[3] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_block_is_rejected() {
        let v = [0.5, 0.5, 0.0, 0.0];
        assert_eq!(
            project(&v, 1, 2, true),
            Err(PlanningError::DegenerateSubvector { agent: 1 })
        );
    }

    #[test]
    fn already_normalized_block_is_fixed_point() {
        let v = [0.2, 0.8];
        assert_eq!(project(&v, 0, 2, false).unwrap(), vec![0.2, 0.8]);
    }
}
