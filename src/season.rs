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
Balance estacional
==================

Seasonal totals and seasonal coefficient of performance:

`SCOP = Σ Qm / Σ Pm`

SCOP is the heat weighted average of the monthly COPs and is undefined when no electricity
is used during the season (i.e. all months without heat demand).
*/

use log::info;

use crate::{
    design::{DesignConditions, DESIGN_DEFAULT},
    error::{ComputationError, Result},
    heatloss::heat_loss_coefficient,
    models::{HeatPumpModel, HEAT_PUMP_DEFAULT},
    monthly::monthly_records,
    types::{MonthlyRecord, Season, SeasonResult, SizingInputs, SizingMethod},
};

/// Agrega los resultados mensuales de la temporada
///
/// Aggregate monthly results into the season result.
///
/// # Errors
///
/// * `Computation` when the total season electricity is zero
pub fn season_totals(
    monthly: Vec<MonthlyRecord>,
    method: SizingMethod,
    k: f64,
) -> Result<SeasonResult> {
    let (heat_total_kwh, elec_total_kwh) = monthly
        .iter()
        .fold((0.0_f64, 0.0_f64), |(heat, elec), rec| {
            (heat + rec.heat_kwh, elec + rec.elec_kwh)
        });

    if elec_total_kwh == 0.0 {
        return Err(ComputationError::ZeroSeasonElectricity {
            q_total: heat_total_kwh,
        }
        .into());
    }
    let scop = heat_total_kwh / elec_total_kwh;
    info!(
        "Q_total = {:.1} kWh, P_total = {:.1} kWh, SCOP = {:.4}",
        heat_total_kwh, elec_total_kwh, scop
    );

    Ok(SeasonResult {
        method,
        k,
        heat_total_kwh,
        elec_total_kwh,
        scop,
        monthly,
    })
}

/// Calcula la eficiencia estacional de la instalación
///
/// Compute the seasonal performance of the installation.
///
/// * `season` - monthly climate and supply temperature data
/// * `sizing` - sizing data used to derive the heat loss coefficient
/// * `model` - heat pump unit regressions
/// * `design` - design conditions
///
/// # Errors
///
/// * `Configuration` for inconsistent monthly series or sizing data. Series are checked first
/// * `Validation` for sizing or monthly values out of range
/// * `Computation` for non positive COPs in months with demand or a season without electricity use
pub fn season_performance(
    season: &Season,
    sizing: &SizingInputs,
    model: &HeatPumpModel,
    design: &DesignConditions,
) -> Result<SeasonResult> {
    season.check()?;
    let (method, k) = heat_loss_coefficient(sizing, model, design)?;
    let monthly = monthly_records(season, k, model, design)?;
    season_totals(monthly, method, k)
}

/// Calcula el SCOP con el modelo y las condiciones de diseño por defecto
///
/// Compute the seasonal performance with the default heat pump model and design conditions,
/// for a season starting in November.
///
/// * `env_temps` - monthly average outdoor temperatures [ºC]
/// * `out_temps` - monthly average water supply temperatures [ºC]
/// * `days` - heated days per month [d]
/// * `sizing` - unit count or area and heat loss index
pub fn calculate_scop(
    env_temps: &[f64],
    out_temps: &[f64],
    days: &[f64],
    sizing: &SizingInputs,
) -> Result<SeasonResult> {
    let season = Season::new(env_temps, out_temps, days);
    season_performance(&season, sizing, &HEAT_PUMP_DEFAULT, &DESIGN_DEFAULT)
}
