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
Errores
=======

Tipos de error del cálculo de eficiencia estacional.

Error taxonomy for the seasonal performance computation:

- configuration errors: missing or ambiguous sizing data, mismatched monthly sequences
- validation errors: numeric inputs out of their domain
- computation errors: degenerate physical results (non positive COP, no electricity use)
*/

use failure::Fail;

use crate::types::Month;

/// Errores del cálculo de SCOP
///
/// SCOP computation errors
#[derive(Debug, Clone, PartialEq, Fail)]
pub enum ScopError {
    /// Missing, ambiguous or inconsistent input combination
    #[fail(display = "Configuration error: {}", _0)]
    Configuration(String),
    /// Numeric input outside its valid domain
    #[fail(display = "Validation error: {}", _0)]
    Validation(String),
    /// Degenerate result of the physical model
    #[fail(display = "Computation error: {}", _0)]
    Computation(#[cause] ComputationError),
}

/// Degenerate results of the heat pump or building model
#[derive(Debug, Clone, PartialEq, Fail)]
pub enum ComputationError {
    /// COP is zero, negative or not finite for a month with heat demand
    #[fail(
        display = "non positive COP ({}) in month {} (Tenv = {} ºC, Tout = {} ºC)",
        cop, month, t_env, t_out
    )]
    NonPositiveCop {
        /// Month label
        month: Month,
        /// Outdoor temperature used in the COP evaluation [ºC]
        t_env: f64,
        /// Water supply temperature [ºC]
        t_out: f64,
        /// Evaluated COP [-]
        cop: f64,
    },
    /// No electricity used during the whole season, SCOP is undefined
    #[fail(
        display = "total season electricity is zero (heat delivered: {} kWh), SCOP is undefined",
        q_total
    )]
    ZeroSeasonElectricity {
        /// Total season heat delivered [kWh]
        q_total: f64,
    },
}

impl ScopError {
    /// Is this a configuration error?
    pub fn is_configuration(&self) -> bool {
        matches!(self, ScopError::Configuration(_))
    }

    /// Is this a validation error?
    pub fn is_validation(&self) -> bool {
        matches!(self, ScopError::Validation(_))
    }

    /// Is this a computation error?
    pub fn is_computation(&self) -> bool {
        matches!(self, ScopError::Computation(_))
    }
}

impl From<ComputationError> for ScopError {
    fn from(err: ComputationError) -> Self {
        ScopError::Computation(err)
    }
}

/// Resultado con error de cálculo
pub type Result<T> = std::result::Result<T, ScopError>;
