//! Este modulo define la estructura de clientes y su generacion aleatoria

use std::fmt;

use colored::Colorize;
use fake::faker::company::en::CompanyName;
use fake::Fake;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::aliases::{IndiceRegistro, Prioridad, RangoCantidad, Vocabulario};
use crate::generators::muestreo::{elegir, muestra_unida};
use crate::identificador;

pub const GRUPOS: Vocabulario = &["Premium", "Standard", "Basic"];
pub const REGIONES: Vocabulario = &["North", "South", "East", "West"];
pub const RANGO_PRIORIDAD: (Prioridad, Prioridad) = (1, 5);
pub const RANGO_TAREAS_PEDIDAS: RangoCantidad = (1, 3);

/// Encabezado del archivo de clientes, en el orden en que se escriben los campos
pub const ENCABEZADO: [&str; 6] = [
    "ClientID",
    "ClientName",
    "PriorityLevel",
    "RequestedTaskIDs",
    "GroupTag",
    "AttributesJSON",
];

/// Un cliente tiene un identificador, una prioridad, las tareas que pide
/// y un json de atributos guardado como texto
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cliente {
    #[serde(rename = "ClientID")]
    pub id: String,
    #[serde(rename = "ClientName")]
    pub nombre: String,
    #[serde(rename = "PriorityLevel")]
    pub prioridad: Prioridad,
    #[serde(rename = "RequestedTaskIDs")]
    pub tareas_pedidas: String,
    #[serde(rename = "GroupTag")]
    pub grupo: String,
    #[serde(rename = "AttributesJSON")]
    pub atributos: String,
}

/// Contenido del campo de atributos de un cliente
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atributos {
    pub region: String,
}

impl Cliente {
    /// Genera el cliente de indice dado. Las tareas pedidas se sortean entre
    /// los identificadores de tarea `T001..=T{cantidad_tareas}`.
    pub fn generar<R: Rng>(
        indice: IndiceRegistro,
        cantidad_tareas: IndiceRegistro,
        rng: &mut R,
    ) -> serde_json::Result<Self> {
        let ids_tareas: Vec<String> = (1..=cantidad_tareas)
            .map(|i| identificador('T', i))
            .collect();
        let atributos = Atributos {
            region: elegir(rng, REGIONES),
        };

        Ok(Self {
            id: identificador('C', indice),
            nombre: CompanyName().fake_with_rng(rng),
            prioridad: rng.gen_range(RANGO_PRIORIDAD.0..=RANGO_PRIORIDAD.1),
            tareas_pedidas: muestra_unida(rng, &ids_tareas, RANGO_TAREAS_PEDIDAS),
            grupo: elegir(rng, GRUPOS),
            atributos: serde_json::to_string(&atributos)?,
        })
    }
}

impl fmt::Display for Cliente {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "cliente {} ({}) ", self.id.blue(), self.nombre)?;
        write!(f, "con atributos {}", self.atributos.yellow())
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
    fn genera_clientes_dentro_de_los_rangos() {
        let mut rng = StdRng::seed_from_u64(42);
        for indice in 1..=200 {
            let cliente = Cliente::generar(indice, 20, &mut rng).unwrap();

            assert_eq!(cliente.id, identificador('C', indice));
            assert!(!cliente.nombre.is_empty());
            assert!((1..=5).contains(&cliente.prioridad));
            assert!(GRUPOS.contains(&cliente.grupo.as_str()));

            let tareas: Vec<&str> = cliente.tareas_pedidas.split(SEPARADOR).collect();
            let unicas: HashSet<&str> = tareas.iter().copied().collect();
            assert!((1..=3).contains(&tareas.len()));
            assert_eq!(unicas.len(), tareas.len());
            for tarea in tareas {
                let numero: u16 = tarea.trim_start_matches('T').parse().unwrap();
                assert!(tarea.starts_with('T') && tarea.len() == 4);
                assert!((1..=20).contains(&numero));
            }
        }
    }

    #[test]
    fn atributos_son_json_con_una_region() {
        let mut rng = StdRng::seed_from_u64(5);
        for indice in 1..=50 {
            let cliente = Cliente::generar(indice, 20, &mut rng).unwrap();
            let valor: serde_json::Value = serde_json::from_str(&cliente.atributos).unwrap();
            let objeto = valor.as_object().unwrap();
            assert_eq!(objeto.len(), 1);
            let region = objeto["region"].as_str().unwrap();
            assert!(REGIONES.contains(&region));
        }
    }

    #[test]
    fn misma_semilla_mismo_cliente() {
        let a = Cliente::generar(3, 20, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = Cliente::generar(3, 20, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }
}
