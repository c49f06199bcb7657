//! Este modulo define las opciones de linea de comandos con las que se
//! ejecuta la generacion de muestras

use std::path::PathBuf;

use clap::Parser;

use crate::aliases::{IndiceRegistro, Semilla};
use crate::{CANTIDAD_MAXIMA, CANTIDAD_MINIMA, CANTIDAD_REGISTROS, DIRECTORIO_MUESTRAS};

/// Genera archivos csv de clientes, trabajadores y tareas con datos
/// aleatorios, incluyendo filas malformadas a proposito
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(author, version, about, long_about = None)]
pub struct Opciones {
    /// Directorio donde se escriben clients.csv, workers.csv y tasks.csv
    #[arg(short, long, default_value = DIRECTORIO_MUESTRAS)]
    pub directorio: PathBuf,

    /// Semilla para repetir una corrida. Sin ella se sortea una nueva
    #[arg(short, long)]
    pub semilla: Option<Semilla>,

    /// Cantidad de registros por coleccion, sin contar los casos borde
    #[arg(
        short,
        long,
        default_value_t = CANTIDAD_REGISTROS,
        value_parser = clap::value_parser!(u16)
            .range(i64::from(CANTIDAD_MINIMA)..=i64::from(CANTIDAD_MAXIMA))
    )]
    pub cantidad: IndiceRegistro,

    /// Crea el directorio de salida si no existe
    #[arg(long, default_value_t = false)]
    pub crear_directorio: bool,
}

impl Default for Opciones {
    fn default() -> Self {
        Self {
            directorio: PathBuf::from(DIRECTORIO_MUESTRAS),
            semilla: None,
            cantidad: CANTIDAD_REGISTROS,
            crear_directorio: false,
        }
    }
}
