//! Mapping of decoded rows into typed records, one function per source.
//!
//! The column names below are the input contract with the external data
//! files. Coercion is deliberately lenient: numeric cells that fail to
//! parse become 0.0 and are never surfaced as errors, required text cells
//! default to `""`, and optional text cells (sowing windows and season
//! times) default to `None` so they stay out of predicate matches. Rows
//! whose key cell is blank are dropped.

use crate::decode::{self, Row};
use krishi_schemas::{
    crop::CropProfile, growing::GrowingInfoRecord, ph::PhRecord, requirement::RequirementRecord,
};

/// Field delimiter shared by all four source tables. The format has no
/// quoting, and sowing windows carry commas ("Baisakh, Jestha"), so the
/// tables are tab-separated.
pub const DELIMITER: u8 = b'\t';

mod col {
    pub const SERIAL: &str = "S.N.";
    pub const CROP: &str = "Crop";
    pub const VARIETY: &str = "Variety";
    pub const HIGH_HILL_SOWING: &str = "High_Hill_Sowing";
    pub const MID_HILL_SOWING: &str = "Mid_Hill_Sowing";
    pub const TERAI_BENSI_SOWING: &str = "Terai_Bensi_Sowing";
    pub const COMPOST: &str = "Compost";
    pub const NITROGEN: &str = "Nitrogen";
    pub const PHOSPHORUS: &str = "Phosphorus";
    pub const POTASSIUM: &str = "Potassium";
    pub const PLANT_SPACING: &str = "Plant_Spacing";
    pub const ROW_SPACING: &str = "Row_Spacing";
    pub const SEED_RATE: &str = "Seed_Rate";
    pub const MATURITY_DAYS: &str = "Maturity_Days";
    pub const YIELD: &str = "Yield";
    pub const REMARKS: &str = "Remarks";
    pub const SOWING_TIME: &str = "Sowing_Time";
    pub const HARVEST_TIME: &str = "Harvest_Time";
    pub const VEGETABLE: &str = "Vegetable";
    pub const OPTIMAL_PH: &str = "Optimal_pH";
    pub const CATEGORY: &str = "Category";
}

pub fn crop_profiles(text: &str) -> Vec<CropProfile> {
    decode::rows(text, DELIMITER)
        .iter()
        .filter_map(|row| {
            let crop = required(row, col::CROP);
            if crop.is_empty() {
                return None;
            }
            Some(CropProfile {
                serial: row.field(col::SERIAL).trim().parse().ok(),
                crop,
                variety: required(row, col::VARIETY),
                sowing_high_hill: sowing(row, col::HIGH_HILL_SOWING),
                sowing_mid_hill: sowing(row, col::MID_HILL_SOWING),
                sowing_terai: sowing(row, col::TERAI_BENSI_SOWING),
                compost: number(row, col::COMPOST),
                nitrogen: number(row, col::NITROGEN),
                phosphorus: number(row, col::PHOSPHORUS),
                potassium: number(row, col::POTASSIUM),
                plant_spacing_cm: number(row, col::PLANT_SPACING),
                row_spacing_cm: number(row, col::ROW_SPACING),
                seed_rate: required(row, col::SEED_RATE),
                maturity_days: required(row, col::MATURITY_DAYS),
                yield_range: required(row, col::YIELD),
                remarks: required(row, col::REMARKS),
            })
        })
        .collect()
}

pub fn requirements(text: &str) -> Vec<RequirementRecord> {
    decode::rows(text, DELIMITER)
        .iter()
        .filter_map(|row| {
            let crop = required(row, col::CROP);
            if crop.is_empty() {
                return None;
            }
            Some(RequirementRecord {
                crop,
                variety: required(row, col::VARIETY),
                compost: number(row, col::COMPOST),
                nitrogen: number(row, col::NITROGEN),
                phosphorus: number(row, col::PHOSPHORUS),
                potassium: number(row, col::POTASSIUM),
                seed_rate: required(row, col::SEED_RATE),
            })
        })
        .collect()
}

pub fn growing_info(text: &str) -> Vec<GrowingInfoRecord> {
    decode::rows(text, DELIMITER)
        .iter()
        .filter_map(|row| {
            let crop = required(row, col::CROP);
            if crop.is_empty() {
                return None;
            }
            Some(GrowingInfoRecord {
                crop,
                variety: required(row, col::VARIETY),
                sowing_time: optional(row, col::SOWING_TIME),
                harvest_time: optional(row, col::HARVEST_TIME),
                maturity_days: required(row, col::MATURITY_DAYS),
                yield_range: required(row, col::YIELD),
            })
        })
        .collect()
}

pub fn ph_records(text: &str) -> Vec<PhRecord> {
    decode::rows(text, DELIMITER)
        .iter()
        .filter_map(|row| {
            let vegetable = required(row, col::VEGETABLE);
            if vegetable.is_empty() {
                return None;
            }
            Some(PhRecord {
                vegetable,
                optimal_ph: required(row, col::OPTIMAL_PH),
                category: required(row, col::CATEGORY),
            })
        })
        .collect()
}

/// Lenient decimal parse: absent, unparsable, or non-finite cells all
/// normalize to 0.0.
fn number(row: &Row, column: &str) -> f64 {
    match row.field(column).trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

fn required(row: &Row, column: &str) -> String {
    row.field(column).trim().to_string()
}

fn optional(row: &Row, column: &str) -> Option<String> {
    let value = row.field(column).trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Sowing cells additionally treat the source's "not recommended" markers
/// as absence, so those crops never match a month query for the region.
fn sowing(row: &Row, column: &str) -> Option<String> {
    let value = optional(row, column)?;
    let lowered = value.to_lowercase();
    if lowered.contains("not recommend") || matches!(lowered.as_str(), "n/a" | "na" | "none") {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparsable_numerics_default_to_zero() {
        let text = "Crop\tVariety\tCompost\tNitrogen\tPhosphorus\tPotassium\n\
                    Tomato\tSrijana\t20\tabc\t\tNaN\n";
        let profiles = crop_profiles(text);
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].compost, 20.0);
        assert_eq!(profiles[0].nitrogen, 0.0);
        assert_eq!(profiles[0].phosphorus, 0.0);
        assert_eq!(profiles[0].potassium, 0.0);
    }

    #[test]
    fn blank_sowing_windows_are_absent_but_remarks_default_to_empty() {
        let text = "Crop\tVariety\tHigh_Hill_Sowing\tMid_Hill_Sowing\tRemarks\n\
                    Tomato\tSrijana\t\tBaisakh, Jestha\t\n";
        let profiles = crop_profiles(text);
        assert_eq!(profiles[0].sowing_high_hill, None);
        assert_eq!(profiles[0].sowing_mid_hill.as_deref(), Some("Baisakh, Jestha"));
        assert_eq!(profiles[0].remarks, "");
    }

    #[test]
    fn not_recommended_markers_become_absent_windows() {
        let text = "Crop\tVariety\tHigh_Hill_Sowing\tTerai_Bensi_Sowing\n\
                    Okra\tLocal\tNot recommended\tN/A\n";
        let profiles = crop_profiles(text);
        assert_eq!(profiles[0].sowing_high_hill, None);
        assert_eq!(profiles[0].sowing_terai, None);
    }

    #[test]
    fn rows_with_blank_crop_are_dropped() {
        let text = "Crop\tVariety\n\torphan variety\nTomato\tSrijana\n";
        let profiles = crop_profiles(text);
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].crop, "Tomato");
    }

    #[test]
    fn serial_numbers_parse_when_present() {
        let text = "S.N.\tCrop\tVariety\n3\tTomato\tSrijana\nx\tPotato\t\n";
        let profiles = crop_profiles(text);
        assert_eq!(profiles[0].serial, Some(3));
        assert_eq!(profiles[1].serial, None);
    }

    #[test]
    fn ph_rows_key_on_vegetable_name() {
        let text = "Vegetable\tOptimal_pH\tCategory\nTomato\t6.0-6.8\tacidic\n\t5.5\tacidic\n";
        let records = ph_records(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].optimal_ph, "6.0-6.8");
        assert_eq!(records[0].category, "acidic");
    }

    #[test]
    fn growing_rows_keep_optional_times_absent_when_blank() {
        let text = "Crop\tVariety\tSowing_Time\tHarvest_Time\tMaturity_Days\tYield\n\
                    Cauliflower\tKathmandu Local\tAshwin\t\t90-110\t15-20\n";
        let records = growing_info(text);
        assert_eq!(records[0].sowing_time.as_deref(), Some("Ashwin"));
        assert_eq!(records[0].harvest_time, None);
        assert_eq!(records[0].maturity_days, "90-110");
    }
}
