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
Modelos de la bomba de calor
============================

Empirical regression models of the heat pump unit:

- full load heating capacity: `Phmax = a1·Tenv² + a2·Tenv + a3·Tout² + a4·Tout + a5`
- coefficient of performance: `COP = b1·Tenv² + b2·Tenv + b3·Tout + b4`

where `Tenv` is the outdoor air temperature and `Tout` the water supply temperature, both in ºC.

The models are only validated for outdoor temperatures at or above the design temperature
but don't clamp or check their inputs. See `monthly` for the clamping policy.
*/

use serde::{Deserialize, Serialize};

use crate::types::OperatingPoint;

/// Factor de conversión de la regresión de potencia a kW
///
/// The capacity fit yields kW directly (≈241 kW per unit at A-7.2/W45).
pub const CAPACITY_TO_KW: f64 = 1.0;

/// Coeficientes de la regresión de potencia máxima
///
/// Full load capacity regression coefficients.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityCoefs {
    /// Tenv² term
    pub a1: f64,
    /// Tenv term
    pub a2: f64,
    /// Tout² term
    pub a3: f64,
    /// Tout term
    pub a4: f64,
    /// Intercept
    pub a5: f64,
}

/// Coeficientes de potencia por defecto
pub const CAPACITY_COEFS_DEFAULT: CapacityCoefs = CapacityCoefs {
    a1: 0.009111,
    a2: 5.736667,
    a3: -0.073627,
    a4: 4.822,
    a5: 214.022667,
};

impl CapacityCoefs {
    /// Full load heating capacity [kW]
    pub fn eval(&self, op: OperatingPoint) -> f64 {
        let OperatingPoint { t_env, t_out } = op;
        let phmax = self.a1 * t_env * t_env
            + self.a2 * t_env
            + self.a3 * t_out * t_out
            + self.a4 * t_out
            + self.a5;
        phmax * CAPACITY_TO_KW
    }
}

/// Coeficientes de la regresión del COP
///
/// COP regression coefficients.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopCoefs {
    /// Tenv² term
    pub b1: f64,
    /// Tenv term
    pub b2: f64,
    /// Tout term
    pub b3: f64,
    /// Intercept
    pub b4: f64,
}

/// Coeficientes de COP por defecto
pub const COP_COEFS_DEFAULT: CopCoefs = CopCoefs {
    b1: 0.00035510,
    b2: 0.0578,
    b3: -0.0637,
    b4: 6.0284,
};

impl CopCoefs {
    /// Coefficient of performance [-]
    pub fn eval(&self, op: OperatingPoint) -> f64 {
        let OperatingPoint { t_env, t_out } = op;
        self.b1 * t_env * t_env + self.b2 * t_env + self.b3 * t_out + self.b4
    }
}

/// Modelo de la unidad de bomba de calor
///
/// Heat pump unit model.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatPumpModel {
    /// Capacity regression
    pub capacity_coefs: CapacityCoefs,
    /// COP regression
    pub cop_coefs: CopCoefs,
}

/// Modelo por defecto
pub const HEAT_PUMP_DEFAULT: HeatPumpModel = HeatPumpModel {
    capacity_coefs: CAPACITY_COEFS_DEFAULT,
    cop_coefs: COP_COEFS_DEFAULT,
};

impl Default for HeatPumpModel {
    fn default() -> Self {
        HEAT_PUMP_DEFAULT
    }
}

impl HeatPumpModel {
    /// Full load heating capacity of one unit [kW]
    pub fn capacity(&self, op: OperatingPoint) -> f64 {
        self.capacity_coefs.eval(op)
    }

    /// Coefficient of performance [-]
    pub fn cop(&self, op: OperatingPoint) -> f64 {
        self.cop_coefs.eval(op)
    }
}

/// Potencia máxima de una unidad con el modelo por defecto [kW]
pub fn capacity(t_env: f64, t_out: f64) -> f64 {
    HEAT_PUMP_DEFAULT.capacity(OperatingPoint::new(t_env, t_out))
}

/// COP con el modelo por defecto [-]
pub fn cop(t_env: f64, t_out: f64) -> f64 {
    HEAT_PUMP_DEFAULT.cop(OperatingPoint::new(t_env, t_out))
}
