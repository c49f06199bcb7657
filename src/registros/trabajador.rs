//! Este modulo define la estructura de trabajadores y su generacion aleatoria

use fake::faker::name::en::Name;
use fake::Fake;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::aliases::{Calificacion, CargaMaxima, Franja, IndiceRegistro, RangoCantidad, Vocabulario};
use crate::generators::muestreo::{elegir, muestra_unida};
use crate::identificador;

pub const HABILIDADES: Vocabulario = &["Java", "Python", "SQL", "AI", "DevOps"];
pub const GRUPOS: Vocabulario = &["Tech", "Sales", "Support"];
pub const FRANJAS: [Franja; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
pub const RANGO_HABILIDADES: RangoCantidad = (2, 4);
pub const RANGO_FRANJAS: RangoCantidad = (2, 5);
pub const RANGO_CARGA: (CargaMaxima, CargaMaxima) = (2, 5);
pub const RANGO_CALIFICACION: (Calificacion, Calificacion) = (1, 3);

pub const ENCABEZADO: [&str; 7] = [
    "WorkerID",
    "WorkerName",
    "Skills",
    "AvailableSlots",
    "MaxLoadPerPhase",
    "WorkerGroup",
    "QualificationLevel",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trabajador {
    #[serde(rename = "WorkerID")]
    pub id: String,
    #[serde(rename = "WorkerName")]
    pub nombre: String,
    #[serde(rename = "Skills")]
    pub habilidades: String,
    #[serde(rename = "AvailableSlots")]
    pub franjas: String,
    #[serde(rename = "MaxLoadPerPhase")]
    pub carga_maxima: CargaMaxima,
    #[serde(rename = "WorkerGroup")]
    pub grupo: String,
    #[serde(rename = "QualificationLevel")]
    pub calificacion: Calificacion,
}

impl Trabajador {
    /// Genera el trabajador de indice dado
    pub fn generar<R: Rng>(indice: IndiceRegistro, rng: &mut R) -> Self {
        Self {
            id: identificador('W', indice),
            nombre: Name().fake_with_rng(rng),
            habilidades: muestra_unida(rng, HABILIDADES, RANGO_HABILIDADES),
            franjas: muestra_unida(rng, &FRANJAS, RANGO_FRANJAS),
            carga_maxima: rng.gen_range(RANGO_CARGA.0..=RANGO_CARGA.1),
            grupo: elegir(rng, GRUPOS),
            calificacion: rng.gen_range(RANGO_CALIFICACION.0..=RANGO_CALIFICACION.1),
        }
    }
}
