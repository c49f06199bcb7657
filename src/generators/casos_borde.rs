//! Este modulo agrega a los clientes las filas malformadas que sirven para
//! probar el manejo de errores de quien consuma las muestras. Los valores
//! se escriben tal cual, sin validarse ni corregirse.

use crate::registros::cliente::Cliente;

pub const NOMBRE_DUPLICADO: &str = "Duplicate Client";
pub const ATRIBUTOS_INVALIDOS: &str = "{invalid: json}";

/// Cliente fijo cuyo campo de atributos no es json valido
pub fn cliente_json_invalido() -> Cliente {
    Cliente {
        id: "C999".to_string(),
        nombre: "Invalid JSON Client".to_string(),
        prioridad: 3,
        tareas_pedidas: "T001,T002".to_string(),
        grupo: "Test".to_string(),
        atributos: ATRIBUTOS_INVALIDOS.to_string(),
    }
}

/// Agrega al final de los clientes una copia del primero con otro nombre,
/// que repite su identificador, y el cliente con json invalido.
/// Devuelve la cantidad de filas agregadas.
pub fn agregar_casos_borde(clientes: &mut Vec<Cliente>) -> usize {
    let cantidad_original = clientes.len();
    if let Some(primero) = clientes.first().cloned() {
        clientes.push(Cliente {
            nombre: NOMBRE_DUPLICADO.to_string(),
            ..primero
        });
    }
    clientes.push(cliente_json_invalido());
    clientes.len() - cantidad_original
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn clientes(cantidad: u16) -> Vec<Cliente> {
        let mut rng = StdRng::seed_from_u64(17);
        (1..=cantidad)
            .map(|i| Cliente::generar(i, 20, &mut rng).unwrap())
            .collect()
    }

    #[test]
    fn agrega_duplicado_y_json_invalido() {
        let mut clientes = clientes(20);
        let primero = clientes[0].clone();

        assert_eq!(agregar_casos_borde(&mut clientes), 2);
        assert_eq!(clientes.len(), 22);

        let duplicado = &clientes[20];
        assert_eq!(duplicado.id, primero.id);
        assert_eq!(duplicado.nombre, NOMBRE_DUPLICADO);
        assert_eq!(duplicado.prioridad, primero.prioridad);
        assert_eq!(duplicado.tareas_pedidas, primero.tareas_pedidas);
        assert_eq!(duplicado.atributos, primero.atributos);

        assert_eq!(clientes[21], cliente_json_invalido());
    }

    #[test]
    fn atributos_invalidos_no_son_json() {
        let cliente = cliente_json_invalido();
        assert!(serde_json::from_str::<serde_json::Value>(&cliente.atributos).is_err());
    }

    #[test]
    fn sin_clientes_solo_agrega_el_invalido() {
        let mut clientes = Vec::new();
        assert_eq!(agregar_casos_borde(&mut clientes), 1);
        assert_eq!(clientes[0].id, "C999");
    }
}
