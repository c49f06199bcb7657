//! Este modulo define los tres tipos de registro que componen las muestras.
//! Cada uno sabe generarse a partir de su indice y de una fuente de
//! aleatoriedad, sin depender de los demas.

pub mod cliente;
pub mod tarea;
pub mod trabajador;
