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
Tipos básicos
=============

Operating points of the heat pump and month labels of the heating season.
*/

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Punto de funcionamiento de la bomba de calor
///
/// Heat pump operating point.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OperatingPoint {
    /// Outdoor (source) air temperature [ºC]
    pub t_env: f64,
    /// Water supply temperature [ºC]
    pub t_out: f64,
}

impl OperatingPoint {
    /// Constructor
    pub fn new(t_env: f64, t_out: f64) -> Self {
        Self { t_env, t_out }
    }
}

impl From<(f64, f64)> for OperatingPoint {
    fn from((t_env, t_out): (f64, f64)) -> Self {
        Self { t_env, t_out }
    }
}

impl fmt::Display for OperatingPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A{:.1}/W{:.1}", self.t_env, self.t_out)
    }
}

/// Mes del año
///
/// Month of the year. Used to label the monthly records of a heating season.
#[allow(clippy::upper_case_acronyms)]
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
pub enum Month {
    /// January
    ENE,
    /// February
    FEB,
    /// March
    MAR,
    /// April
    ABR,
    /// May
    MAY,
    /// June
    JUN,
    /// July
    JUL,
    /// August
    AGO,
    /// September
    SEP,
    /// October
    OCT,
    /// November
    NOV,
    /// December
    DIC,
}

/// Months in calendar order
pub const MONTHS: [Month; 12] = [
    Month::ENE,
    Month::FEB,
    Month::MAR,
    Month::ABR,
    Month::MAY,
    Month::JUN,
    Month::JUL,
    Month::AGO,
    Month::SEP,
    Month::OCT,
    Month::NOV,
    Month::DIC,
];

/// First month of a heating season, by default
pub const SEASON_START_DEFAULT: Month = Month::NOV;

impl Month {
    /// Mes siguiente (DIC -> ENE)
    pub fn succ(self) -> Month {
        MONTHS[(self as usize + 1) % 12]
    }

    /// Labels of `len` consecutive months starting at `self`, wrapping around the year
    pub fn sequence(self, len: usize) -> impl Iterator<Item = Month> {
        std::iter::successors(Some(self), |m| Some(m.succ())).take(len)
    }
}

impl Default for Month {
    fn default() -> Month {
        SEASON_START_DEFAULT
    }
}
