//! Genera los archivos de muestra `clients.csv`, `workers.csv` y `tasks.csv`,
//! por defecto en la carpeta `samples`, que debe existir de antemano.

use clap::Parser;
use colored::Colorize;
use std::process;

use muestrario::generators::{muestras::generar_muestras, opciones::Opciones};

fn main() {
    let opciones = Opciones::parse();

    let resumen = match generar_muestras(&opciones) {
        Ok(resumen) => resumen,
        Err(error) => {
            eprintln!("No se pudieron generar las muestras: {}", error);
            process::exit(1);
        }
    };

    println!(
        "Semilla utilizada: {}",
        resumen.semilla.to_string().yellow()
    );
    for archivo in resumen.archivos {
        println!("Escrito {}", archivo);
    }
}
