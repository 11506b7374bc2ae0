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
HPSCOP
======

This crate provides a library that computes the **Seasonal Coefficient of Performance (SCOP)**
and the seasonal energy use of an air-source heat pump heating installation from monthly
average outdoor temperatures, monthly average water supply temperatures and heated days.

The computation:

- evaluates the full load capacity and COP of the heat pump units with empirical regressions
- derives the building heat loss coefficient K from the number of installed units (sized at the
  design condition) or from the floor area and heat loss index of the building
- computes monthly heat delivered and electricity used, and aggregates them for the season

It also holds the following assumptions:

- design condition of -7.2ºC outdoor and 20ºC indoor temperature, 45ºC supply temperature by default
- outdoor temperatures below the design temperature are clamped to it (out of the validated range of the regressions)
- no heat demand for months at or above the indoor temperature
- continuous operation (24 h) during the heated days

Este *crate* proporciona una biblioteca para el cálculo del **rendimiento estacional (SCOP)**
y del consumo de energía de instalaciones de calefacción con bomba de calor aire-agua, a partir
de las temperaturas exteriores medias mensuales, las temperaturas medias de impulsión y los días
de calefacción de cada mes.

# Ejemplo

```rust
use hpscop::*;

// Temperaturas medias mensuales (noviembre a abril)
let env_temps = [-0.5, -1.2, -2.8, -1.5, 1.0, 5.5];
let out_temps = [42.0, 42.5, 43.0, 42.0, 41.0, 40.0];
let days = [30.0, 31.0, 31.0, 28.0, 31.0, 30.0];

// Dimensionado por número de unidades (10 unidades, impulsión de diseño 45ºC)
let res = calculate_scop(&env_temps, &out_temps, &days, &SizingInputs::units(10)).unwrap();
assert!(res.scop > 3.3 && res.scop < 3.4);

// Dimensionado por superficie y demanda específica (1000 m2, 25 W/m2)
let res = calculate_scop(&env_temps, &out_temps, &days, &SizingInputs::area(1000.0, 25.0)).unwrap();
assert_eq!(res.monthly.len(), 6);
```

*/

#![deny(missing_docs)]

mod design;
mod heatloss;
mod monthly;
mod season;

pub mod error;
pub mod models;
pub mod types;

pub use design::*;
pub use error::{ComputationError, Result, ScopError};
pub use heatloss::*;
pub use models::{HeatPumpModel, HEAT_PUMP_DEFAULT};
pub use monthly::*;
pub use season::*;
pub use types::*;

/// Número de versión de la librería
///
/// Version number
pub static VERSION: &str = env!("CARGO_PKG_VERSION");
