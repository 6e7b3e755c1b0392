//! Bilateral net flows from the self-trade-free region matrix.

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

/// Export, import, and net transfer totals with the bilateral net matrix.
///
/// Derived from the self-trade-free R×R flow, so "export" and "import" only
/// count trade with other regions. `net[r] = exports[r] − imports[r]` holds
/// exactly by construction, and the bilateral matrix `F − Fᵀ` is
/// antisymmetric with a zero diagonal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetFlows {
    /// Embodied export per region: row sums of the self-trade-free flow.
    pub exports: DVector<f64>,
    /// Embodied import per region: column sums of the self-trade-free flow.
    pub imports: DVector<f64>,
    /// `exports − imports` per region.
    pub net: DVector<f64>,
    /// Bilateral net-flow matrix `F − Fᵀ`.
    pub bilateral: DMatrix<f64>,
}

/// Derive net flows from a self-trade-free R×R region flow.
///
/// Imports follow the transpose convention: column sums of the matrix after
/// self-trade removal, so the export and import totals refer to the same
/// matrix and their difference is the net transfer identity. Pure
/// arithmetic; the input has already been validated upstream.
pub fn net_flows(self_trade_free: &DMatrix<f64>) -> NetFlows {
    let r = self_trade_free.nrows();

    let exports = DVector::from_fn(r, |row, _| self_trade_free.row(row).sum());
    let imports = DVector::from_fn(r, |col, _| self_trade_free.column(col).sum());
    let net = &exports - &imports;
    let bilateral = self_trade_free - self_trade_free.transpose();

    NetFlows {
        exports,
        imports,
        net,
        bilateral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_export_import_totals() {
        let flow = DMatrix::from_row_slice(2, 2, &[0.0, 3.0, 1.0, 0.0]);
        let flows = net_flows(&flow);

        assert_relative_eq!(flows.exports[0], 3.0);
        assert_relative_eq!(flows.exports[1], 1.0);
        assert_relative_eq!(flows.imports[0], 1.0);
        assert_relative_eq!(flows.imports[1], 3.0);
        assert_relative_eq!(flows.net[0], 2.0);
        assert_relative_eq!(flows.net[1], -2.0);
    }

    #[test]
    fn test_bilateral_matrix() {
        let flow = DMatrix::from_row_slice(2, 2, &[0.0, 3.0, 1.0, 0.0]);
        let flows = net_flows(&flow);

        assert_relative_eq!(flows.bilateral[(0, 1)], 2.0);
        assert_relative_eq!(flows.bilateral[(1, 0)], -2.0);
        assert_eq!(flows.bilateral[(0, 0)], 0.0);
        assert_eq!(flows.bilateral[(1, 1)], 0.0);
    }

    #[test]
    fn test_balanced_trade_nets_to_zero() {
        let flow = DMatrix::from_row_slice(2, 2, &[0.0, 1.0 / 3.0, 1.0 / 3.0, 0.0]);
        let flows = net_flows(&flow);

        assert_relative_eq!(flows.net[0], 0.0);
        assert_relative_eq!(flows.net[1], 0.0);
        assert_relative_eq!(flows.bilateral, DMatrix::zeros(2, 2));
    }

    proptest! {
        #[test]
        fn prop_net_identity_is_exact(values in proptest::collection::vec(-1e6_f64..1e6, 9)) {
            let flow = DMatrix::from_row_slice(3, 3, &values);
            let flows = net_flows(&flow);
            for r in 0..3 {
                // Exact identity, not approximation: net is computed as the
                // difference of the same two floats it is compared against.
                prop_assert_eq!(flows.net[r], flows.exports[r] - flows.imports[r]);
            }
        }

        #[test]
        fn prop_bilateral_is_antisymmetric(values in proptest::collection::vec(-1e6_f64..1e6, 9)) {
            let flow = DMatrix::from_row_slice(3, 3, &values);
            let flows = net_flows(&flow);
            for r in 0..3 {
                prop_assert_eq!(flows.bilateral[(r, r)], 0.0);
                for s in 0..3 {
                    prop_assert_eq!(flows.bilateral[(r, s)], -flows.bilateral[(s, r)]);
                }
            }
        }
    }
}
