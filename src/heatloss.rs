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
Coeficiente global de pérdidas del edificio
===========================================

Derivation of the building heat loss coefficient K [kW/ºC] from the sizing data.

- Unit count method: the installed units cover the load at the design condition,
  `K = n · Phmax(t_design, t_out_design) / (t_room - t_design)`
- Area method: the design load is the floor area times the heat loss index,
  `K = S · q_H / 1000 / (t_room - t_design)`
*/

use log::{info, warn};

use crate::{
    design::{DesignConditions, KW_PER_W},
    error::{Result, ScopError},
    models::HeatPumpModel,
    types::{OperatingPoint, Sizing, SizingInputs, SizingMethod},
};

/// Calcula el coeficiente global de pérdidas K [kW/ºC]
///
/// Compute the building heat loss coefficient for a resolved sizing method.
///
/// # Errors
///
/// * `Validation` when the design capacity of the unit is not positive
pub fn k_from_sizing(
    sizing: &Sizing,
    model: &HeatPumpModel,
    design: &DesignConditions,
) -> Result<f64> {
    let design_load = match *sizing {
        Sizing::UnitCount {
            n_units,
            t_out_design,
        } => {
            let phmax_design = model.capacity(OperatingPoint::new(design.t_design, t_out_design));
            if !(phmax_design.is_finite() && phmax_design > 0.0) {
                return Err(ScopError::Validation(format!(
                    "the unit capacity at the design condition ({}) must be positive and {} kW was found",
                    OperatingPoint::new(design.t_design, t_out_design),
                    phmax_design
                )));
            }
            f64::from(n_units) * phmax_design
        }
        Sizing::AreaIndex { area, q_h } => area * q_h * KW_PER_W,
    };
    Ok(design_load / design.delta_t_max())
}

/// Resuelve el método de dimensionado y calcula K [kW/ºC]
///
/// Resolve the sizing inputs and compute the heat loss coefficient.
pub fn heat_loss_coefficient(
    inputs: &SizingInputs,
    model: &HeatPumpModel,
    design: &DesignConditions,
) -> Result<(SizingMethod, f64)> {
    let sizing = inputs.resolve(design.t_out_design)?;
    if let (Sizing::AreaIndex { .. }, Some(t_out_design)) = (&sizing, inputs.t_out_design) {
        warn!(
            "Design supply temperature ({} ºC) is not used by the area method",
            t_out_design
        );
    }
    let k = k_from_sizing(&sizing, model, design)?;
    info!("K = {:.6} kW/ºC ({})", k, sizing.method());
    Ok((sizing.method(), k))
}
