//! Calculator registry and factory.

use crate::{BatchCalculator, Calculator, LineCalculator, ReferenceCalculator};
use mandelbatch_core::{CalcError, CalculatorConfig, GridModel};

type CreateFn = fn(GridModel, &CalculatorConfig) -> Result<Box<dyn Calculator>, CalcError>;

pub struct CalculatorInfo {
    pub id: &'static str,
    pub display_name: &'static str,
    create: CreateFn,
}

pub static CALCULATORS: &[CalculatorInfo] = &[
    CalculatorInfo {
        id: LineCalculator::NAME,
        display_name: "Line (row lock-step)",
        create: create_line,
    },
    CalculatorInfo {
        id: BatchCalculator::NAME,
        display_name: "Batch (tiled lock-step)",
        create: create_batch,
    },
    CalculatorInfo {
        id: ReferenceCalculator::NAME,
        display_name: "Reference (scalar)",
        create: create_reference,
    },
];

fn create_line(grid: GridModel, _: &CalculatorConfig) -> Result<Box<dyn Calculator>, CalcError> {
    Ok(Box::new(LineCalculator::from_grid(grid)?))
}

fn create_batch(
    grid: GridModel,
    config: &CalculatorConfig,
) -> Result<Box<dyn Calculator>, CalcError> {
    Ok(Box::new(BatchCalculator::from_grid(grid, config.tile_size)?))
}

fn create_reference(
    grid: GridModel,
    _: &CalculatorConfig,
) -> Result<Box<dyn Calculator>, CalcError> {
    Ok(Box::new(ReferenceCalculator::from_grid(grid)))
}

pub fn get_calculator_info(id: &str) -> Option<&'static CalculatorInfo> {
    CALCULATORS.iter().find(|c| c.id == id)
}

/// Create the calculator a configuration describes.
pub fn create_calculator(config: &CalculatorConfig) -> Result<Box<dyn Calculator>, CalcError> {
    let info = get_calculator_info(config.kind.id())
        .ok_or_else(|| CalcError::UnknownCalculator(config.kind.id().to_string()))?;
    (info.create)(config.grid()?, config)
}

/// Create a calculator by registry id over the default viewport.
pub fn create_calculator_by_id(
    id: &str,
    grid_size: u32,
    limit: u32,
) -> Result<Box<dyn Calculator>, CalcError> {
    let info = get_calculator_info(id).ok_or_else(|| CalcError::UnknownCalculator(id.to_string()))?;
    let config = CalculatorConfig {
        grid_size,
        limit,
        ..CalculatorConfig::default()
    };
    (info.create)(GridModel::new(grid_size, limit)?, &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mandelbatch_core::CalculatorKind;

    #[test]
    fn every_kind_is_registered() {
        for kind in [
            CalculatorKind::Line,
            CalculatorKind::Batch,
            CalculatorKind::Reference,
        ] {
            assert!(get_calculator_info(kind.id()).is_some(), "{kind:?}");
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        let err = create_calculator_by_id("simd", 64, 10).err().unwrap();
        assert_eq!(err, CalcError::UnknownCalculator("simd".to_string()));
    }

    #[test]
    fn created_calculator_reports_its_name() {
        for info in CALCULATORS {
            let calc = create_calculator_by_id(info.id, 64, 10).unwrap();
            assert_eq!(calc.name(), info.id);
            assert_eq!(calc.grid().limit(), 10);
        }
    }

    #[test]
    fn config_tile_size_reaches_batch_calculator() {
        let config = CalculatorConfig::new(CalculatorKind::Batch, 24, 10).with_tile_size(8);
        assert!(create_calculator(&config).is_ok());

        let config = config.with_tile_size(7);
        assert_eq!(
            create_calculator(&config).err(),
            Some(CalcError::TileMismatch {
                grid_size: 24,
                tile_size: 7
            })
        );
    }
}
