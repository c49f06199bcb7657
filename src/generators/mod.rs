pub mod casos_borde;
pub mod escritor;
pub mod muestras;
pub mod muestreo;
pub mod opciones;
