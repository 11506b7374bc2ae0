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
Condiciones de diseño
=====================

Design conditions of the installation and unit conversion constants.

Default values correspond to the winter design condition used to size the installation:
-7.2ºC outdoor, 20ºC indoor and 45ºC water supply temperature.
*/

use serde::{Deserialize, Serialize};

/// Horas de funcionamiento por día de calefacción [h/d]
///
/// Converts heated days to operating hours, so that K [kW/ºC] · ΔT [ºC] · h gives kWh.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Conversión de W a kW
pub const KW_PER_W: f64 = 1.0e-3;

/// Condiciones de diseño
///
/// Design conditions.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignConditions {
    /// Outdoor design temperature [ºC]. Lower bound of the validated range of the models
    pub t_design: f64,
    /// Indoor design temperature [ºC]
    pub t_room: f64,
    /// Default water supply temperature at the design condition [ºC]
    pub t_out_design: f64,
}

/// Condiciones de diseño por defecto
pub const DESIGN_DEFAULT: DesignConditions = DesignConditions {
    t_design: -7.2,
    t_room: 20.0,
    t_out_design: 45.0,
};

impl Default for DesignConditions {
    fn default() -> Self {
        DESIGN_DEFAULT
    }
}

impl DesignConditions {
    /// Maximum indoor - outdoor temperature difference [ºC]
    pub fn delta_t_max(&self) -> f64 {
        self.t_room - self.t_design
    }

    /// Limita la temperatura exterior al rango validado de los modelos
    ///
    /// Clamp an outdoor temperature to the design temperature.
    /// Returns the effective temperature and whether clamping took place.
    pub fn clamp(&self, t_env: f64) -> (f64, bool) {
        if t_env < self.t_design {
            (self.t_design, true)
        } else {
            (t_env, false)
        }
    }
}
