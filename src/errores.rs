//! Este modulo define los tipos de errores que pueden darse
//! durante la generacion de las muestras

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::aliases::IndiceRegistro;
use crate::{CANTIDAD_MAXIMA, CANTIDAD_MINIMA};

/// Enumerativo que engloba a todos los errores posibles al generar
/// los archivos de muestra
#[derive(Debug)]
pub enum ErrorGeneracion {
    CantidadInvalida(IndiceRegistro),
    DirectorioInexistente(PathBuf),
    EscrituraArchivo(io::Error),
    SerializacionCsv(csv::Error),
    SerializacionJson(serde_json::Error),
}

impl From<io::Error> for ErrorGeneracion {
    fn from(err: io::Error) -> Self {
        ErrorGeneracion::EscrituraArchivo(err)
    }
}

impl From<csv::Error> for ErrorGeneracion {
    fn from(err: csv::Error) -> Self {
        ErrorGeneracion::SerializacionCsv(err)
    }
}

impl From<serde_json::Error> for ErrorGeneracion {
    fn from(err: serde_json::Error) -> Self {
        ErrorGeneracion::SerializacionJson(err)
    }
}

impl fmt::Display for ErrorGeneracion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorGeneracion::CantidadInvalida(cantidad) => write!(
                f,
                "la cantidad de registros {} no esta entre {} y {}",
                cantidad, CANTIDAD_MINIMA, CANTIDAD_MAXIMA
            ),
            ErrorGeneracion::DirectorioInexistente(dir) => write!(
                f,
                "el directorio de salida {} no existe (usar --crear-directorio para crearlo)",
                dir.display()
            ),
            ErrorGeneracion::EscrituraArchivo(err) => write!(f, "no se pudo escribir: {}", err),
            ErrorGeneracion::SerializacionCsv(err) => write!(f, "error generando csv: {}", err),
            ErrorGeneracion::SerializacionJson(err) => {
                write!(f, "error serializando atributos: {}", err)
            }
        }
    }
}

impl std::error::Error for ErrorGeneracion {}
