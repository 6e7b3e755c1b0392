//! Embodied sector-by-region flow computation.

use nalgebra::{DMatrix, DVector};

/// Compute `EmbodiedSectorFlow = IntensityDiag × L × FinalDemand`.
///
/// `total_requirements` is the already-solved product `L × FinalDemand`
/// (N×R): total output required from each sector per region of final
/// demand, direct and indirect. Left-multiplying by the diagonal intensity
/// matrix scales row i by `intensity[i]`, so the multiplication is applied
/// as a row scaling instead of materialising the N×N diagonal.
///
/// Entry `[i, s]` is the factor quantity embodied in sector i's output that
/// is induced by region s's final demand.
pub fn embodied_sector_flow(
    intensity: &DVector<f64>,
    total_requirements: &DMatrix<f64>,
) -> DMatrix<f64> {
    let mut flow = total_requirements.clone();
    for (i, mut row) in flow.row_iter_mut().enumerate() {
        row *= intensity[i];
    }
    flow
}
