//! Este modulo define aliases a los distintos tipos de datos
//! para hacer sencillo el pase de uno al otro y dar mayor
//! claridad al codigo

pub type Semilla = u64;
pub type IndiceRegistro = u16;
pub type Prioridad = u8;
pub type CargaMaxima = u8;
pub type Calificacion = u8;
pub type Duracion = u8;
pub type Concurrencia = u8;
pub type Franja = u8;
pub type Fase = u8;

/// Vocabulario fijo de valores categoricos
pub type Vocabulario = &'static [&'static str];

/// Rango inclusivo de la cantidad de elementos de un campo multivaluado
pub type RangoCantidad = (usize, usize);
