//! Este modulo define la estructura de tareas y su generacion aleatoria

use fake::faker::lorem::en::Word;
use fake::Fake;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::aliases::{Concurrencia, Duracion, Fase, IndiceRegistro, RangoCantidad, Vocabulario};
use crate::generators::muestreo::{capitalizar, elegir, muestra_unida};
use crate::identificador;

pub const CATEGORIAS: Vocabulario = &["Development", "Testing", "Deployment"];
pub const HABILIDADES: Vocabulario = &["Java", "Python", "SQL", "AI"];
pub const FASES: [Fase; 4] = [1, 2, 3, 4];
pub const RANGO_HABILIDADES: RangoCantidad = (1, 3);
pub const RANGO_FASES: RangoCantidad = (1, 3);
pub const RANGO_DURACION: (Duracion, Duracion) = (1, 5);
pub const RANGO_CONCURRENCIA: (Concurrencia, Concurrencia) = (1, 3);

/// Prefijo fijo del nombre de cada tarea
pub const PREFIJO_NOMBRE: &str = "Task ";

pub const ENCABEZADO: [&str; 7] = [
    "TaskID",
    "TaskName",
    "Category",
    "Duration",
    "RequiredSkills",
    "PreferredPhases",
    "MaxConcurrent",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tarea {
    #[serde(rename = "TaskID")]
    pub id: String,
    #[serde(rename = "TaskName")]
    pub nombre: String,
    #[serde(rename = "Category")]
    pub categoria: String,
    #[serde(rename = "Duration")]
    pub duracion: Duracion,
    #[serde(rename = "RequiredSkills")]
    pub habilidades: String,
    #[serde(rename = "PreferredPhases")]
    pub fases: String,
    #[serde(rename = "MaxConcurrent")]
    pub concurrencia_maxima: Concurrencia,
}

impl Tarea {
    /// Genera la tarea de indice dado
    pub fn generar<R: Rng>(indice: IndiceRegistro, rng: &mut R) -> Self {
        let palabra: String = Word().fake_with_rng(rng);
        Self {
            id: identificador('T', indice),
            nombre: format!("{}{}", PREFIJO_NOMBRE, capitalizar(&palabra)),
            categoria: elegir(rng, CATEGORIAS),
            duracion: rng.gen_range(RANGO_DURACION.0..=RANGO_DURACION.1),
            habilidades: muestra_unida(rng, HABILIDADES, RANGO_HABILIDADES),
            fases: muestra_unida(rng, &FASES, RANGO_FASES),
            concurrencia_maxima: rng.gen_range(RANGO_CONCURRENCIA.0..=RANGO_CONCURRENCIA.1),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::SEPARADOR;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn genera_tareas_dentro_de_los_rangos() {
        let mut rng = StdRng::seed_from_u64(23);
        for indice in 1..=200 {
            let tarea = Tarea::generar(indice, &mut rng);

            assert_eq!(tarea.id, identificador('T', indice));
            assert!(tarea.nombre.starts_with(PREFIJO_NOMBRE));
            assert!(tarea.nombre.len() > PREFIJO_NOMBRE.len());
            assert!(CATEGORIAS.contains(&tarea.categoria.as_str()));
            assert!((1..=5).contains(&tarea.duracion));
            assert!((1..=3).contains(&tarea.concurrencia_maxima));

            let habilidades: Vec<&str> = tarea.habilidades.split(SEPARADOR).collect();
            let unicas: HashSet<&&str> = habilidades.iter().collect();
            assert!((1..=3).contains(&habilidades.len()));
            assert_eq!(unicas.len(), habilidades.len());
            assert!(habilidades.iter().all(|h| HABILIDADES.contains(h)));

            let fases: Vec<Fase> = tarea
                .fases
                .split(SEPARADOR)
                .map(|f| f.parse().unwrap())
                .collect();
            let unicas: HashSet<&Fase> = fases.iter().collect();
            assert!((1..=3).contains(&fases.len()));
            assert_eq!(unicas.len(), fases.len());
            assert!(fases.iter().all(|f| FASES.contains(f)));
        }
    }

    #[test]
    fn nombre_capitalizado() {
        let tarea = Tarea::generar(1, &mut StdRng::seed_from_u64(2));
        let palabra = tarea.nombre.trim_start_matches(PREFIJO_NOMBRE);
        assert!(palabra.chars().next().unwrap().is_uppercase());
    }
}
