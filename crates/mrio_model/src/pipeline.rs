//! Pipeline orchestration: one run over a bundle, two factor branches.

use crate::coefficients::technical_coefficients;
use crate::embodied::embodied_sector_flow;
use crate::intensity::{intensity_vector, FlowBranch};
use crate::leontief::{LeontiefConfig, LeontiefSystem};
use crate::netflow::{net_flows, NetFlows};
use crate::regions_flow::{aggregate_regions, eliminate_self_trade};
use crate::{InputBundle, ModelError};
use mrio_core::types::RegionMap;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Results of one embodied-flow branch (employment or value added).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchFlows {
    /// Which factor this branch carries.
    pub branch: FlowBranch,
    /// N×R embodied flow at sector granularity.
    pub sector_flow: DMatrix<f64>,
    /// R×R embodied flow aggregated over region blocks, self-trade included.
    pub region_flow: DMatrix<f64>,
    /// R×R embodied flow with each region's self-trade removed.
    pub self_trade_free: DMatrix<f64>,
    /// Export, import, net, and bilateral net flows over `self_trade_free`.
    pub flows: NetFlows,
}

/// Full result set of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MrioResults {
    /// Employment branch.
    pub employment: BranchFlows,
    /// Value-added branch.
    pub value_added: BranchFlows,
    /// Condition estimate of the Leontief system that produced both
    /// branches.
    pub condition_estimate: f64,
}

/// The embodied-flow pipeline for a fixed region partition.
///
/// A pipeline is a pure function from an [`InputBundle`] to
/// [`MrioResults`]: it holds only the region partition and the numerical
/// configuration, shares nothing mutable between runs, and produces
/// identical results for identical inputs.
///
/// # Example
///
/// ```
/// use mrio_core::types::RegionMap;
/// use mrio_model::{InputBundle, MrioPipeline};
/// use nalgebra::{DMatrix, DVector};
///
/// // Two regions of one sector each, trading with one another.
/// let map = RegionMap::uniform(2, 1).unwrap();
/// let bundle = InputBundle {
///     intermediate_use: DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 0.0]),
///     final_demand: DMatrix::identity(2, 2),
///     total_input: DVector::from_element(2, 2.0),
///     total_output: DVector::from_element(2, 2.0),
///     employment: DVector::from_element(2, 1.0),
///     value_added: DVector::from_element(2, 1.0),
/// };
///
/// let results = MrioPipeline::new(map).run(&bundle).unwrap();
/// assert!(results.employment.flows.net[0].abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct MrioPipeline {
    map: RegionMap,
    config: LeontiefConfig,
}

impl MrioPipeline {
    /// Create a pipeline over `map` with the default Leontief
    /// configuration.
    pub fn new(map: RegionMap) -> Self {
        Self {
            map,
            config: LeontiefConfig::default(),
        }
    }

    /// Create a pipeline with an explicit Leontief configuration.
    pub fn with_config(map: RegionMap, config: LeontiefConfig) -> Self {
        Self { map, config }
    }

    /// The region partition the pipeline operates over.
    pub fn region_map(&self) -> &RegionMap {
        &self.map
    }

    /// Execute one analysis run over `bundle`.
    ///
    /// Validates the bundle shapes, builds and factorises the Leontief
    /// system once, then runs the embodied-flow stages for the employment
    /// and value-added branches against the shared factorisation.
    ///
    /// # Errors
    ///
    /// Shape errors from validation, or [`ModelError::Singular`] /
    /// [`ModelError::IllConditioned`] from the Leontief factorisation. No
    /// partial results are produced on error.
    pub fn run(&self, bundle: &InputBundle) -> Result<MrioResults, ModelError> {
        bundle.validate(&self.map)?;

        let coefficients = technical_coefficients(&bundle.intermediate_use, &bundle.total_input);
        debug!(
            n = self.map.total_sectors(),
            regions = self.map.regions(),
            "technical coefficients built"
        );

        let system = LeontiefSystem::factorize(&coefficients, &self.config)?;
        debug!(
            condition_estimate = system.condition_estimate(),
            "Leontief system factorised"
        );

        // L × FinalDemand through the factorisation, shared by both
        // branches.
        let total_requirements = system.solve(&bundle.final_demand)?;

        let employment = self.run_branch(
            FlowBranch::Employment,
            &bundle.employment,
            &bundle.total_output,
            &total_requirements,
        )?;
        let value_added = self.run_branch(
            FlowBranch::ValueAdded,
            &bundle.value_added,
            &bundle.total_output,
            &total_requirements,
        )?;

        Ok(MrioResults {
            employment,
            value_added,
            condition_estimate: system.condition_estimate(),
        })
    }

    fn run_branch(
        &self,
        branch: FlowBranch,
        numerator: &DVector<f64>,
        total_output: &DVector<f64>,
        total_requirements: &DMatrix<f64>,
    ) -> Result<BranchFlows, ModelError> {
        let intensity = intensity_vector(numerator, total_output);
        let sector_flow = embodied_sector_flow(&intensity, total_requirements);

        let region_flow = aggregate_regions(&sector_flow, &self.map)?;
        let trimmed = eliminate_self_trade(&sector_flow, &self.map)?;
        let self_trade_free = aggregate_regions(&trimmed, &self.map)?;
        let flows = net_flows(&self_trade_free);

        debug!(branch = branch.name(), "embodied-flow branch complete");
        Ok(BranchFlows {
            branch,
            sector_flow,
            region_flow,
            self_trade_free,
            flows,
        })
    }
}
