//! Regional aggregation and self-trade elimination.

use crate::ModelError;
use mrio_core::math::sanitize;
use mrio_core::types::RegionMap;
use nalgebra::DMatrix;

/// Aggregate an N×R sector flow into an R×R region flow.
///
/// Row r of the result is the sum of the rows belonging to region r's
/// sector block, located through the region map rather than a fixed stride.
/// Non-finite entries contribute zero to the sums, matching the treatment of
/// missing statistical entries everywhere else in the pipeline.
///
/// # Errors
///
/// [`ModelError::MatrixShape`] when `flow` does not have N rows and R
/// columns.
pub fn aggregate_regions(flow: &DMatrix<f64>, map: &RegionMap) -> Result<DMatrix<f64>, ModelError> {
    check_sector_flow(flow, map)?;

    let r = map.regions();
    let mut aggregated = DMatrix::zeros(r, r);
    for (region, range) in map.iter() {
        for s in 0..r {
            let mut total = 0.0;
            for i in range.clone() {
                total += sanitize(flow[(i, s)]);
            }
            aggregated[(region, s)] = total;
        }
    }
    Ok(aggregated)
}

/// Zero each region's own-demand block of the sector flow.
///
/// For every region r, the rows of region r's sector block in column r are
/// set to zero, removing the embodied flow that region r's final demand
/// draws from its own production. Aggregating the result yields the
/// self-trade-free region flow, whose diagonal is exactly zero.
///
/// # Errors
///
/// [`ModelError::MatrixShape`] when `flow` does not have N rows and R
/// columns.
pub fn eliminate_self_trade(
    flow: &DMatrix<f64>,
    map: &RegionMap,
) -> Result<DMatrix<f64>, ModelError> {
    check_sector_flow(flow, map)?;

    let mut trimmed = flow.clone();
    for (region, range) in map.iter() {
        for i in range {
            trimmed[(i, region)] = 0.0;
        }
    }
    Ok(trimmed)
}

fn check_sector_flow(flow: &DMatrix<f64>, map: &RegionMap) -> Result<(), ModelError> {
    let n = map.total_sectors();
    let r = map.regions();
    if flow.nrows() != n || flow.ncols() != r {
        return Err(ModelError::MatrixShape {
            array: "sector_flow",
            expected_rows: n,
            expected_cols: r,
            rows: flow.nrows(),
            cols: flow.ncols(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_aggregate_sums_region_blocks() {
        let map = RegionMap::uniform(2, 2).unwrap();
        // 4 sectors x 2 regions.
        let flow = DMatrix::from_row_slice(
            4,
            2,
            &[
                1.0, 2.0, //
                3.0, 4.0, //
                5.0, 6.0, //
                7.0, 8.0,
            ],
        );
        let aggregated = aggregate_regions(&flow, &map).unwrap();

        let expected = DMatrix::from_row_slice(2, 2, &[4.0, 6.0, 12.0, 14.0]);
        assert_relative_eq!(aggregated, expected);
    }

    #[test]
    fn test_aggregate_ragged_partition() {
        let map = RegionMap::from_sizes(&[1, 2]).unwrap();
        let flow = DMatrix::from_row_slice(3, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let aggregated = aggregate_regions(&flow, &map).unwrap();

        let expected = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 8.0, 10.0]);
        assert_relative_eq!(aggregated, expected);
    }

    #[test]
    fn test_aggregate_treats_non_finite_as_zero() {
        let map = RegionMap::uniform(1, 2).unwrap();
        let flow = DMatrix::from_row_slice(2, 1, &[f64::NAN, 3.0]);
        let aggregated = aggregate_regions(&flow, &map).unwrap();
        assert_eq!(aggregated[(0, 0)], 3.0);
    }

    #[test]
    fn test_aggregate_rejects_wrong_shape() {
        let map = RegionMap::uniform(2, 2).unwrap();
        let flow = DMatrix::zeros(4, 3);
        assert!(matches!(
            aggregate_regions(&flow, &map),
            Err(ModelError::MatrixShape { .. })
        ));
    }

    #[test]
    fn test_eliminate_zeroes_own_region_blocks() {
        let map = RegionMap::uniform(2, 2).unwrap();
        let flow = DMatrix::from_element(4, 2, 1.0);
        let trimmed = eliminate_self_trade(&flow, &map).unwrap();

        // Region 0 owns rows 0..2, region 1 owns rows 2..4.
        assert_eq!(trimmed[(0, 0)], 0.0);
        assert_eq!(trimmed[(1, 0)], 0.0);
        assert_eq!(trimmed[(2, 0)], 1.0);
        assert_eq!(trimmed[(3, 0)], 1.0);
        assert_eq!(trimmed[(0, 1)], 1.0);
        assert_eq!(trimmed[(1, 1)], 1.0);
        assert_eq!(trimmed[(2, 1)], 0.0);
        assert_eq!(trimmed[(3, 1)], 0.0);
    }

    #[test]
    fn test_eliminate_leaves_input_untouched() {
        let map = RegionMap::uniform(2, 1).unwrap();
        let flow = DMatrix::from_element(2, 2, 1.0);
        let _ = eliminate_self_trade(&flow, &map).unwrap();
        assert!(flow.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_self_trade_free_diagonal_is_zero() {
        let map = RegionMap::from_sizes(&[2, 1, 3]).unwrap();
        let flow = DMatrix::from_fn(6, 3, |i, j| (i + 2 * j + 1) as f64);
        let trimmed = eliminate_self_trade(&flow, &map).unwrap();
        let aggregated = aggregate_regions(&trimmed, &map).unwrap();

        for r in 0..map.regions() {
            assert_eq!(aggregated[(r, r)], 0.0);
        }
    }
}
