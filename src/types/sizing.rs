// Copyright (c) 2018-2022  Ministerio de Fomento
//                          Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

// Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>,
//            Daniel Jiménez González <dani@ietcc.csic.es>,
//            Marta Sorribes Gil <msorribes@ietcc.csic.es>

/*!
Dimensionado
============

Building sizing data used to derive the overall heat loss coefficient K.

K is obtained either from the number of installed heat pump units (unit count method) or
from the floor area and the specific heat loss index of the building (area method).
*/

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScopError};

/// Datos de dimensionado tal como los aporta el usuario
///
/// Sizing data as supplied by the caller. Exactly one of the two methods must be fully defined:
/// - `n_units` (and, optionally, `t_out_design`)
/// - `area` and `q_h`
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SizingInputs {
    /// Number of installed heat pump units
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_units: Option<u32>,
    /// Heated floor area [m2]
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    /// Building heat loss index [W/m2]
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q_h: Option<f64>,
    /// Water supply temperature at the design condition [ºC]
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t_out_design: Option<f64>,
}

impl SizingInputs {
    /// Unit count method, default design supply temperature
    pub fn units(n_units: u32) -> Self {
        Self {
            n_units: Some(n_units),
            ..Default::default()
        }
    }

    /// Unit count method with a given design supply temperature [ºC]
    pub fn units_at(n_units: u32, t_out_design: f64) -> Self {
        Self {
            n_units: Some(n_units),
            t_out_design: Some(t_out_design),
            ..Default::default()
        }
    }

    /// Area method
    pub fn area(area: f64, q_h: f64) -> Self {
        Self {
            area: Some(area),
            q_h: Some(q_h),
            ..Default::default()
        }
    }

    /// Convierte los datos de entrada en un método de dimensionado único
    ///
    /// Resolve the supplied data into a single sizing method.
    ///
    /// `t_out_design_default` is used by the unit count method when no design supply
    /// temperature was given.
    ///
    /// # Errors
    ///
    /// * `Configuration` when no method or more than one method is given, or the area method is incomplete
    /// * `Validation` when the values of the selected method are out of range
    pub fn resolve(&self, t_out_design_default: f64) -> Result<Sizing> {
        let area_given = self.area.is_some() || self.q_h.is_some();
        let sizing = match (self.n_units, area_given) {
            (Some(_), true) => {
                return Err(ScopError::Configuration(format!(
                    "both the unit count ({:?}) and the area method (area: {:?}, q_H: {:?}) were given, only one is allowed",
                    self.n_units, self.area, self.q_h
                )))
            }
            (None, false) => {
                return Err(ScopError::Configuration(
                    "no sizing data, either the unit count or the area and heat loss index are required".into(),
                ))
            }
            (Some(n_units), false) => Sizing::UnitCount {
                n_units,
                t_out_design: self.t_out_design.unwrap_or(t_out_design_default),
            },
            (None, true) => match (self.area, self.q_h) {
                (Some(area), Some(q_h)) => Sizing::AreaIndex { area, q_h },
                _ => {
                    return Err(ScopError::Configuration(format!(
                        "the area method needs both area and heat loss index (area: {:?}, q_H: {:?})",
                        self.area, self.q_h
                    )))
                }
            },
        };
        sizing.validate()?;
        Ok(sizing)
    }
}

/// Método de dimensionado ya resuelto
///
/// Resolved sizing method.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum Sizing {
    /// Number of units and design supply temperature [ºC]
    UnitCount {
        /// Number of installed heat pump units
        n_units: u32,
        /// Water supply temperature at the design condition [ºC]
        t_out_design: f64,
    },
    /// Floor area [m2] and heat loss index [W/m2]
    AreaIndex {
        /// Heated floor area [m2]
        area: f64,
        /// Building heat loss index [W/m2]
        q_h: f64,
    },
}

impl Sizing {
    /// Sizing method tag
    pub fn method(&self) -> SizingMethod {
        match self {
            Sizing::UnitCount { .. } => SizingMethod::UNITS,
            Sizing::AreaIndex { .. } => SizingMethod::AREA,
        }
    }

    fn validate(&self) -> Result<()> {
        match *self {
            Sizing::UnitCount {
                n_units,
                t_out_design,
            } => {
                if n_units == 0 {
                    return Err(ScopError::Validation(
                        "the number of units must be positive".into(),
                    ));
                }
                if !t_out_design.is_finite() {
                    return Err(ScopError::Validation(format!(
                        "the design supply temperature must be a finite number and {} was found",
                        t_out_design
                    )));
                }
            }
            Sizing::AreaIndex { area, q_h } => {
                if !(area.is_finite() && area > 0.0) {
                    return Err(ScopError::Validation(format!(
                        "the floor area must be positive and {} was found",
                        area
                    )));
                }
                if !(q_h.is_finite() && q_h > 0.0) {
                    return Err(ScopError::Validation(format!(
                        "the heat loss index must be positive and {} was found",
                        q_h
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Método usado para obtener K
///
/// Method used to derive the heat loss coefficient.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizingMethod {
    /// Number of installed units
    UNITS,
    /// Floor area and heat loss index
    AREA,
}

impl fmt::Display for SizingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizingMethod::UNITS => write!(f, "unit count method"),
            SizingMethod::AREA => write!(f, "area method"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolve_unit_count() {
        assert_eq!(
            SizingInputs::units(10).resolve(45.0).unwrap(),
            Sizing::UnitCount {
                n_units: 10,
                t_out_design: 45.0
            }
        );
        assert_eq!(
            SizingInputs::units_at(4, 50.0).resolve(45.0).unwrap(),
            Sizing::UnitCount {
                n_units: 4,
                t_out_design: 50.0
            }
        );
    }

    #[test]
    fn resolve_area() {
        let sizing = SizingInputs::area(1000.0, 25.0).resolve(45.0).unwrap();
        assert_eq!(
            sizing,
            Sizing::AreaIndex {
                area: 1000.0,
                q_h: 25.0
            }
        );
        assert_eq!(sizing.method(), SizingMethod::AREA);
    }

    #[test]
    fn resolve_ambiguous_or_missing() {
        let both = SizingInputs {
            n_units: Some(10),
            area: Some(1000.0),
            q_h: Some(25.0),
            t_out_design: None,
        };
        assert!(both.resolve(45.0).unwrap_err().is_configuration());

        let units_and_area = SizingInputs {
            area: Some(1000.0),
            ..SizingInputs::units(2)
        };
        assert!(units_and_area.resolve(45.0).unwrap_err().is_configuration());

        assert!(SizingInputs::default()
            .resolve(45.0)
            .unwrap_err()
            .is_configuration());

        let only_area = SizingInputs {
            area: Some(1000.0),
            ..Default::default()
        };
        assert!(only_area.resolve(45.0).unwrap_err().is_configuration());
    }

    #[test]
    fn resolve_out_of_range() {
        assert!(SizingInputs::units(0)
            .resolve(45.0)
            .unwrap_err()
            .is_validation());
        assert!(SizingInputs::area(0.0, 25.0)
            .resolve(45.0)
            .unwrap_err()
            .is_validation());
        assert!(SizingInputs::area(1000.0, -1.0)
            .resolve(45.0)
            .unwrap_err()
            .is_validation());
        assert!(SizingInputs::area(f64::NAN, 25.0)
            .resolve(45.0)
            .unwrap_err()
            .is_validation());
        assert!(SizingInputs::units_at(3, f64::INFINITY)
            .resolve(45.0)
            .unwrap_err()
            .is_validation());
    }
}
