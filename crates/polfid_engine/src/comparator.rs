//! Theory versus experiment comparison
//!
//! Gantree: L5_Engine → StateComparator
//!
//! Prepares the target state from waveplate angles, reconstructs the
//! measured state from photon counts and computes fidelity, trace distance
//! and the eigenvalues of the target. The comparator holds only its
//! configuration; every call is independent.

use crate::config::{EigenOrder, PolfidConfig};
use crate::result::{ComparisonResult, FormattedResult};
use polfid_core::{tolerance, DensityMatrix, PolfidResult};
use polfid_metrics::{eigen_decomposition, error, real_fidelity, real_trace_distance};
use polfid_optics::PreparationSetup;
use polfid_tomo::{experimental_density_matrix, PauliExpectations, PhotonCounts, PhysicalityReport};

/// Stateless comparison engine
/// Gantree: StateComparator // 비교기
#[derive(Debug, Clone, Default)]
pub struct StateComparator {
    config: PolfidConfig,
}

impl StateComparator {
    /// Create a comparator, validating the configuration
    pub fn new(config: PolfidConfig) -> PolfidResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &PolfidConfig {
        &self.config
    }

    // ========================================================================
    // Entry Points
    // ========================================================================

    /// Full comparison from raw angles (degrees) and power readings
    /// Gantree: compute(θ,φ,T,D,A,R,L,H,V) -> Result<FormattedResult> // 메인
    #[allow(clippy::too_many_arguments)]
    pub fn compute(
        &self,
        theta_deg: f64,
        phi_deg: f64,
        total_power: f64,
        d: f64,
        a: f64,
        r: f64,
        l: f64,
        h: f64,
        v: f64,
    ) -> PolfidResult<FormattedResult> {
        let setup = PreparationSetup::from_degrees(theta_deg, phi_deg)?;
        let counts = PhotonCounts::new(total_power, d, a, r, l, h, v)?;
        let result = self.compare_counts(&setup, &counts)?;
        Ok(self.format(&result))
    }

    /// Compare a preparation against validated counts
    /// Gantree: compare_counts(setup,counts) -> Result<ComparisonResult>
    pub fn compare_counts(
        &self,
        setup: &PreparationSetup,
        counts: &PhotonCounts,
    ) -> PolfidResult<ComparisonResult> {
        log::debug!("{}", counts);
        if !counts.is_balanced(tolerance::NORMALIZATION_DRIFT) {
            log::debug!(
                "basis pairs deviate from total power by up to {:.4}",
                counts.max_normalization_drift()
            );
        }

        let experimental = experimental_density_matrix(counts);
        self.compare_density(setup, &experimental)
    }

    /// Compare a preparation against an already reconstructed density matrix
    /// Gantree: compare_density(setup,ρ_exp) -> Result<ComparisonResult>
    pub fn compare_density(
        &self,
        setup: &PreparationSetup,
        experimental: &DensityMatrix,
    ) -> PolfidResult<ComparisonResult> {
        let state = setup.state();
        let theoretical = setup.density_matrix();
        log::debug!("{} prepares {}", setup, state);
        log::debug!("{}", theoretical);
        log::debug!("{}", experimental);

        let physicality = PhysicalityReport::inspect(experimental, self.config.hermitian_tolerance);
        if !physicality.is_physical() && self.config.warn_unphysical {
            log::warn!("experimental density matrix is {}", physicality);
        }

        let tol = self.config.imaginary_tolerance;
        let fidelity = real_fidelity(&state, experimental, tol)?;
        let trace_distance = real_trace_distance(experimental, &theoretical, tol)?;

        let decomposition = eigen_decomposition(&theoretical);
        let decomposition = match self.config.eigen_order {
            EigenOrder::Descending => decomposition.sorted_descending(),
            EigenOrder::AsComputed => decomposition,
        };

        let [x, y, z] = experimental.bloch_vector();
        let result = ComparisonResult {
            setup: *setup,
            fidelity,
            error: error(fidelity),
            trace_distance,
            eigenvalues: decomposition.eigenvalues(),
            theoretical_purity: theoretical.purity(),
            experimental_purity: experimental.purity(),
            expectations: PauliExpectations::new(x, y, z),
            physicality,
        };
        log::debug!("{}", result);

        Ok(result)
    }

    /// Format a result with the configured precision
    pub fn format(&self, result: &ComparisonResult) -> FormattedResult {
        result.format(self.config.decimals)
    }
}

/// [`StateComparator::compute`] with the standard configuration
/// Gantree: compute(...) -> Result<FormattedResult> // 기본 설정
#[allow(clippy::too_many_arguments)]
pub fn compute(
    theta_deg: f64,
    phi_deg: f64,
    total_power: f64,
    d: f64,
    a: f64,
    r: f64,
    l: f64,
    h: f64,
    v: f64,
) -> PolfidResult<FormattedResult> {
    StateComparator::default().compute(theta_deg, phi_deg, total_power, d, a, r, l, h, v)
}
