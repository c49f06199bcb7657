use aliases::IndiceRegistro;

pub mod aliases;
pub mod errores;
pub mod generators;
pub mod registros;

/// Cantidad de registros generados por coleccion, sin contar los casos borde
pub const CANTIDAD_REGISTROS: IndiceRegistro = 20;

/// Cotas de la cantidad de registros por coleccion. Con menos de tres no
/// se pueden sortear las tareas pedidas por cada cliente, y con mas de 998
/// los identificadores generados chocan con el cliente fijo `C999`
pub const CANTIDAD_MINIMA: IndiceRegistro = 3;
pub const CANTIDAD_MAXIMA: IndiceRegistro = 998;

/// Directorio donde se escriben las muestras si no se indica otro
pub const DIRECTORIO_MUESTRAS: &str = "samples";

/// Separador de los campos multivaluados dentro de una misma celda
pub const SEPARADOR: &str = ",";

pub const ARCHIVO_CLIENTES: &str = "clients.csv";
pub const ARCHIVO_TRABAJADORES: &str = "workers.csv";
pub const ARCHIVO_TAREAS: &str = "tasks.csv";

/// Arma el identificador de un registro a partir de su prefijo y su indice,
/// completando con ceros hasta tres digitos
pub fn identificador(prefijo: char, indice: IndiceRegistro) -> String {
    format!("{}{:03}", prefijo, indice)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn identificadores_con_tres_digitos() {
        assert_eq!(identificador('C', 1), "C001");
        assert_eq!(identificador('T', 20), "T020");
        assert_eq!(identificador('W', CANTIDAD_MAXIMA), "W998");
    }
}
