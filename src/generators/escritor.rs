//! Este modulo escribe una coleccion de registros en un archivo csv. La
//! primera linea siempre es el encabezado del tipo de registro, aun sin
//! registros, y los valores con comas o comillas se escriben entre comillas.

use std::{
    fmt,
    fs::File,
    path::{Path, PathBuf},
};

use colored::Colorize;
use serde::Serialize;

use crate::errores::ErrorGeneracion;

/// Resultado de escribir una coleccion: el archivo y cuantas filas de
/// datos tiene, sin contar el encabezado
#[derive(Debug, Clone, PartialEq)]
pub struct ArchivoEscrito {
    pub ruta: PathBuf,
    pub filas: usize,
}

/// Crea (o pisa) el archivo en la ruta dada, escribe el encabezado y
/// luego los registros. Los campos de cada registro deben estar declarados
/// en el mismo orden que el encabezado.
pub fn escribir_csv<T: Serialize>(
    ruta: &Path,
    encabezado: &[&str],
    registros: &[T],
) -> Result<ArchivoEscrito, ErrorGeneracion> {
    let archivo = File::create(ruta)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(archivo);
    writer.write_record(encabezado)?;
    for registro in registros {
        writer.serialize(registro)?;
    }
    writer.flush()?;

    Ok(ArchivoEscrito {
        ruta: ruta.to_path_buf(),
        filas: registros.len(),
    })
}

impl fmt::Display for ArchivoEscrito {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} con {} filas",
            self.ruta.display().to_string().green(),
            self.filas.to_string().blue()
        )
    }
}
