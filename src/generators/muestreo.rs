//! Este modulo contiene las funciones de sorteo que comparten los
//! generadores de registros. Todas reciben la fuente de aleatoriedad,
//! de forma que una misma semilla produzca siempre los mismos valores.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::aliases::{RangoCantidad, Vocabulario};
use crate::SEPARADOR;

/// Elige de forma uniforme un valor del vocabulario dado
pub fn elegir<R: Rng>(rng: &mut R, vocabulario: Vocabulario) -> String {
    vocabulario
        .choose(rng)
        .map(|valor| valor.to_string())
        .unwrap_or_default()
}

/// Sortea una cantidad dentro del rango dado y toma esa cantidad de elementos
/// del universo sin reposicion, uniendolos con el separador. Si el universo
/// tiene menos elementos que los sorteados, se toman todos.
pub fn muestra_unida<R, T>(rng: &mut R, universo: &[T], rango: RangoCantidad) -> String
where
    R: Rng,
    T: ToString,
{
    let cantidad = rng.gen_range(rango.0..=rango.1).min(universo.len());
    universo
        .choose_multiple(rng, cantidad)
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join(SEPARADOR)
}

/// Pasa a mayuscula la primera letra de la palabra y a minuscula el resto
pub fn capitalizar(palabra: &str) -> String {
    let mut letras = palabra.chars();
    match letras.next() {
        Some(primera) => primera
            .to_uppercase()
            .chain(letras.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
