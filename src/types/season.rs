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
Temporada de calefacción
========================

Monthly input data of a heating season and the computed monthly and seasonal results.
*/

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Month, SizingMethod, SEASON_START_DEFAULT};
use crate::error::{Result, ScopError};

/// Datos climáticos y de funcionamiento de la temporada de calefacción
///
/// Monthly averages of the heating season, in month order starting at `start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    /// First month of the season
    #[serde(default)]
    pub start: Month,
    /// Monthly average outdoor temperature [ºC]
    pub env_temps: Vec<f64>,
    /// Monthly average water supply temperature [ºC]
    pub out_temps: Vec<f64>,
    /// Heated days per month [d]
    pub days: Vec<f64>,
}

impl Season {
    /// Season starting in the default month (November)
    pub fn new(env_temps: &[f64], out_temps: &[f64], days: &[f64]) -> Self {
        Self {
            start: SEASON_START_DEFAULT,
            env_temps: env_temps.to_vec(),
            out_temps: out_temps.to_vec(),
            days: days.to_vec(),
        }
    }

    /// Change the first month of the season
    pub fn starting(mut self, start: Month) -> Self {
        self.start = start;
        self
    }

    /// Number of months of the season
    pub fn len(&self) -> usize {
        self.env_temps.len()
    }

    /// Season without months?
    pub fn is_empty(&self) -> bool {
        self.env_temps.is_empty()
    }

    /// Month labels, in season order
    pub fn months(&self) -> impl Iterator<Item = Month> {
        self.start.sequence(self.len())
    }

    /// Comprueba la coherencia de las series mensuales
    ///
    /// Check that the monthly series are consistent, before any numeric computation.
    ///
    /// # Errors
    ///
    /// `Configuration` when the series lengths differ, the season is empty or longer than a year.
    pub fn check(&self) -> Result<()> {
        let (n_env, n_out, n_days) = (self.env_temps.len(), self.out_temps.len(), self.days.len());
        if n_env != n_out || n_env != n_days {
            return Err(ScopError::Configuration(format!(
                "monthly series of different length (outdoor temperatures: {}, supply temperatures: {}, days: {})",
                n_env, n_out, n_days
            )));
        }
        if n_env == 0 {
            return Err(ScopError::Configuration(
                "the heating season has no months".into(),
            ));
        }
        if n_env > 12 {
            return Err(ScopError::Configuration(format!(
                "a heating season can't span more than 12 months and {} were found",
                n_env
            )));
        }
        Ok(())
    }
}

/// Resultados de un mes de la temporada
///
/// Monthly results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// Month label
    pub month: Month,
    /// Average outdoor temperature, as supplied [ºC]
    pub t_env: f64,
    /// Average water supply temperature [ºC]
    pub t_out: f64,
    /// Heated days [d]
    pub days: f64,
    /// Outdoor temperature used for demand and COP evaluation [ºC]
    pub t_env_eff: f64,
    /// Was the outdoor temperature clamped to the design temperature?
    pub clamped: bool,
    /// Operating hours [h]
    pub hours: f64,
    /// Monthly average COP [-]
    pub cop: f64,
    /// Heat delivered [kWh]
    pub heat_kwh: f64,
    /// Electricity used [kWh]
    pub elec_kwh: f64,
}

impl fmt::Display for MonthlyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Tenv = {:.1} ºC{}, Tout = {:.1} ºC, {} d, COP = {:.3}, Q = {:.1} kWh, P = {:.1} kWh",
            self.month,
            self.t_env,
            if self.clamped { " (clamped)" } else { "" },
            self.t_out,
            self.days,
            self.cop,
            self.heat_kwh,
            self.elec_kwh
        )
    }
}

/// Resultados de la temporada de calefacción
///
/// Seasonal results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonResult {
    /// Method used to obtain K
    pub method: SizingMethod,
    /// Building heat loss coefficient [kW/ºC]
    pub k: f64,
    /// Total heat delivered [kWh]
    pub heat_total_kwh: f64,
    /// Total electricity used [kWh]
    pub elec_total_kwh: f64,
    /// Seasonal coefficient of performance [-]
    pub scop: f64,
    /// Monthly results, in season order
    pub monthly: Vec<MonthlyRecord>,
}
