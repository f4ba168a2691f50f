//! Fertilizer-product apportionment.
//!
//! Abstract N/P/K requirements are covered by three synthetic products
//! plus raw compost. Phosphorus demand is settled first with DAP; the
//! nitrogen DAP brings along is credited against the nitrogen requirement
//! before urea is sized. The order is load-bearing: settling nitrogen
//! first would change the urea figure whenever phosphorus demand is
//! nonzero.

use krishi_schemas::fertilizer::{FertilizerPlan, NutrientGuide};

/// P₂O₅-equivalent fraction of diammonium phosphate.
pub const DAP_P2O5_FRACTION: f64 = 0.46;
/// Nitrogen fraction of diammonium phosphate.
pub const DAP_N_FRACTION: f64 = 0.18;
/// Nitrogen fraction of urea.
pub const UREA_N_FRACTION: f64 = 0.46;
/// K₂O-equivalent fraction of muriate of potash.
pub const MOP_K2O_FRACTION: f64 = 0.60;

/// Official cadastral area of one ropani, the local land unit the plot
/// magnitude is expressed in.
pub const SQ_M_PER_ROPANI: f64 = 508.74;
const SQ_M_PER_HECTARE: f64 = 10_000.0;

/// Product masses below this are reported as exactly 0.
const REPORT_FLOOR: f64 = 0.1;

/// Computes product masses covering `guide` (per-hectare requirements)
/// on a plot of `land_ropani`. Compost is reported at whole mass units,
/// the three products at one decimal place.
pub fn plan(guide: &NutrientGuide, land_ropani: f64) -> FertilizerPlan {
    let hectares = land_ropani * SQ_M_PER_ROPANI / SQ_M_PER_HECTARE;

    let dap_per_ha = guide.phosphorus / DAP_P2O5_FRACTION;
    let nitrogen_from_dap = dap_per_ha * DAP_N_FRACTION;
    let nitrogen_remaining = (guide.nitrogen - nitrogen_from_dap).max(0.0);
    let urea_per_ha = nitrogen_remaining / UREA_N_FRACTION;
    let mop_per_ha = guide.potassium / MOP_K2O_FRACTION;

    FertilizerPlan {
        urea: report(urea_per_ha * hectares, 1),
        dap: report(dap_per_ha * hectares, 1),
        mop: report(mop_per_ha * hectares, 1),
        compost: report(guide.compost * hectares, 0),
    }
}

fn report(mass: f64, decimals: i32) -> f64 {
    if mass < REPORT_FLOOR {
        return 0.0;
    }
    let scale = 10f64.powi(decimals);
    (mass * scale).round() / scale
}
