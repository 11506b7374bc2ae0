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
Balance mensual
===============

Monthly heat delivered, electricity use and COP of the installation.

For each month:

1. outdoor temperatures below the design temperature are clamped to it (the regressions are
   not validated below that value) and the month is flagged as clamped
2. months with an outdoor temperature at or above the indoor temperature have no heat demand
3. otherwise `Qm = K · (t_room - Tenv) · days · 24` [kWh]
4. `COPm = COP(Tenv, Tout)` and `Pm = Qm / COPm` [kWh]
*/

use itertools::izip;
use log::{debug, info, warn};

use crate::{
    design::{DesignConditions, HOURS_PER_DAY},
    error::{ComputationError, Result, ScopError},
    models::HeatPumpModel,
    types::{Month, MonthlyRecord, OperatingPoint, Season},
};

/// Calcula los resultados de un mes
///
/// Compute the results of a single month.
///
/// * `month` - month label
/// * `t_env` - average outdoor temperature [ºC]
/// * `t_out` - average water supply temperature [ºC]
/// * `days` - heated days [d]
/// * `k` - building heat loss coefficient [kW/ºC]
///
/// # Errors
///
/// * `Validation` for non finite temperatures or a negative or non finite number of days
/// * `Computation` when the COP is not positive in a month with heat demand
pub fn monthly_record(
    month: Month,
    t_env: f64,
    t_out: f64,
    days: f64,
    k: f64,
    model: &HeatPumpModel,
    design: &DesignConditions,
) -> Result<MonthlyRecord> {
    if !(t_env.is_finite() && t_out.is_finite()) {
        return Err(ScopError::Validation(format!(
            "temperatures of month {} must be finite numbers (Tenv = {}, Tout = {})",
            month, t_env, t_out
        )));
    }
    if !(days.is_finite() && days >= 0.0) {
        return Err(ScopError::Validation(format!(
            "heated days of month {} can't be negative and {} was found",
            month, days
        )));
    }

    let (t_env_eff, clamped) = design.clamp(t_env);
    if clamped {
        warn!(
            "{}: outdoor temperature {} ºC below the design temperature, using {} ºC",
            month, t_env, t_env_eff
        );
    }

    let hours = days * HOURS_PER_DAY;
    let cop = model.cop(OperatingPoint::new(t_env_eff, t_out));
    let delta_t = design.t_room - t_env_eff;

    let (heat_kwh, elec_kwh) = if delta_t <= 0.0 {
        info!(
            "{}: outdoor temperature {} ºC not below the indoor temperature, no heat demand",
            month, t_env_eff
        );
        (0.0, 0.0)
    } else {
        let heat_kwh = k * delta_t * hours;
        if heat_kwh > 0.0 && !(cop.is_finite() && cop > 0.0) {
            return Err(ComputationError::NonPositiveCop {
                month,
                t_env: t_env_eff,
                t_out,
                cop,
            }
            .into());
        }
        // Zero days leave heat_kwh at 0 whatever the COP
        let elec_kwh = if heat_kwh > 0.0 { heat_kwh / cop } else { 0.0 };
        (heat_kwh, elec_kwh)
    };

    let record = MonthlyRecord {
        month,
        t_env,
        t_out,
        days,
        t_env_eff,
        clamped,
        hours,
        cop,
        heat_kwh,
        elec_kwh,
    };
    debug!("{}", record);
    Ok(record)
}

/// Calcula los resultados mensuales de la temporada, en el orden de entrada
///
/// Compute monthly results for all the months of a season, keeping the input order.
pub fn monthly_records(
    season: &Season,
    k: f64,
    model: &HeatPumpModel,
    design: &DesignConditions,
) -> Result<Vec<MonthlyRecord>> {
    season.check()?;
    izip!(season.months(), &season.env_temps, &season.out_temps, &season.days)
        .map(|(month, &t_env, &t_out, &days)| {
            monthly_record(month, t_env, t_out, days, k, model, design)
        })
        .collect()
}
