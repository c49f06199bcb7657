//! Este modulo arma las tres colecciones de muestras en memoria, les agrega
//! los casos borde y las escribe en el directorio de salida. Los archivos se
//! escriben de a uno: si falla alguno, los anteriores quedan escritos.

use std::{
    fs,
    path::{Path, PathBuf},
};

use colored::Colorize;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::aliases::{IndiceRegistro, Semilla};
use crate::errores::ErrorGeneracion;
use crate::generators::casos_borde::agregar_casos_borde;
use crate::generators::escritor::{escribir_csv, ArchivoEscrito};
use crate::generators::opciones::Opciones;
use crate::registros::cliente::{self, Cliente};
use crate::registros::tarea::{self, Tarea};
use crate::registros::trabajador::{self, Trabajador};
use crate::{
    ARCHIVO_CLIENTES, ARCHIVO_TAREAS, ARCHIVO_TRABAJADORES, CANTIDAD_MAXIMA, CANTIDAD_MINIMA,
};

/// Las tres colecciones de una corrida
#[derive(Debug, Clone, PartialEq)]
pub struct Muestras {
    pub clientes: Vec<Cliente>,
    pub trabajadores: Vec<Trabajador>,
    pub tareas: Vec<Tarea>,
}

/// Lo que deja una corrida: la semilla usada y los archivos escritos
#[derive(Debug, Clone, PartialEq)]
pub struct Resumen {
    pub semilla: Semilla,
    pub archivos: Vec<ArchivoEscrito>,
}

impl Muestras {
    /// Genera `cantidad` registros de cada tipo y agrega los casos borde
    /// a los clientes
    pub fn generar<R: Rng>(
        cantidad: IndiceRegistro,
        rng: &mut R,
    ) -> Result<Self, ErrorGeneracion> {
        let mut clientes = (1..=cantidad)
            .map(|i| Cliente::generar(i, cantidad, rng))
            .collect::<Result<Vec<Cliente>, _>>()?;
        let trabajadores = (1..=cantidad)
            .map(|i| Trabajador::generar(i, rng))
            .collect();
        let tareas = (1..=cantidad).map(|i| Tarea::generar(i, rng)).collect();

        agregar_casos_borde(&mut clientes);

        Ok(Self {
            clientes,
            trabajadores,
            tareas,
        })
    }

    /// Escribe cada coleccion en su archivo dentro del directorio dado
    pub fn escribir(&self, directorio: &Path) -> Result<Vec<ArchivoEscrito>, ErrorGeneracion> {
        Ok(vec![
            escribir_csv(
                &directorio.join(ARCHIVO_CLIENTES),
                &cliente::ENCABEZADO,
                &self.clientes,
            )?,
            escribir_csv(
                &directorio.join(ARCHIVO_TRABAJADORES),
                &trabajador::ENCABEZADO,
                &self.trabajadores,
            )?,
            escribir_csv(
                &directorio.join(ARCHIVO_TAREAS),
                &tarea::ENCABEZADO,
                &self.tareas,
            )?,
        ])
    }
}

/// Verifica que exista el directorio de salida, creandolo solo si se pidio
fn preparar_directorio(directorio: &Path, crear: bool) -> Result<PathBuf, ErrorGeneracion> {
    if directorio.is_dir() {
        return Ok(directorio.to_path_buf());
    }
    if !crear {
        return Err(ErrorGeneracion::DirectorioInexistente(
            directorio.to_path_buf(),
        ));
    }
    fs::create_dir_all(directorio)?;
    println!("Se creo el directorio {}", directorio.display().to_string().green());
    Ok(directorio.to_path_buf())
}

/// Genera las muestras con las opciones dadas y escribe los tres archivos,
/// pisando los que ya existan con el mismo nombre
pub fn generar_muestras(opciones: &Opciones) -> Result<Resumen, ErrorGeneracion> {
    if !(CANTIDAD_MINIMA..=CANTIDAD_MAXIMA).contains(&opciones.cantidad) {
        return Err(ErrorGeneracion::CantidadInvalida(opciones.cantidad));
    }
    let directorio = preparar_directorio(&opciones.directorio, opciones.crear_directorio)?;
    let semilla = opciones.semilla.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(semilla);

    let muestras = Muestras::generar(opciones.cantidad, &mut rng)?;
    for cliente in muestras.clientes.iter().skip(opciones.cantidad as usize) {
        println!("Caso borde agregado: {}", cliente);
    }

    let archivos = muestras.escribir(&directorio)?;
    Ok(Resumen { semilla, archivos })
}
